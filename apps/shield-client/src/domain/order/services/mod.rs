//! Order domain services.

mod status_state_machine;

pub use status_state_machine::StatusStateMachine;
