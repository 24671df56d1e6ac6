//! Infrastructure Layer
//!
//! Adapters for the external collaborators the core treats as opaque.

pub mod authority;
