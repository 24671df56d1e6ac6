//! Shared Value Objects
//!
//! Identity types used across bounded contexts.

mod chi;
mod postcode;

pub use chi::{Chi, InvalidChi};
pub use postcode::{InvalidPostcode, Postcode};
