//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`food_box`]: Candidate/order food boxes and quantity invariants
//! - [`order`]: Placed orders and the status lifecycle

pub mod food_box;
pub mod order;
pub mod shared;
