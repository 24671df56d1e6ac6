//! Shared kernel for the domain layer.

pub mod value_objects;

pub use value_objects::{Chi, InvalidChi, InvalidPostcode, Postcode};
