//! Food Box Bounded Context
//!
//! The candidate/order food box model and its quantity invariants.
//!
//! # Key Concepts
//!
//! - **Two-tier quantity ceiling**: a candidate box may be edited up to the
//!   catalog maximum; an ordered box can only hold or decrease quantities.
//! - **No complete zero-out**: an edit that would leave every item at
//!   quantity zero is rejected at the box level.
//! - **Copy semantics**: catalog instances are immutable; candidates and
//!   order snapshots are independent deep copies.

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::{FoodBox, FoodBoxItem, FoodBoxItemPayload, FoodBoxPayload};
pub use errors::FoodBoxError;
pub use value_objects::DietaryPreference;
