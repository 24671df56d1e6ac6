//! Order Bounded Context
//!
//! The durable record of placed orders and their status lifecycle.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: owns its food-box snapshot; the order number
//!   never changes once assigned.
//! - **Status mirror**: the remote authority advances the status; the
//!   client only pulls it in via refresh, or jumps to `Cancelled` on an
//!   acknowledged cancellation.

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregate::CateringCompanyOrder;
pub use errors::OrderError;
pub use services::StatusStateMachine;
pub use value_objects::OrderStatus;
