// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Shield Client - Rust Core Library
//!
//! Client-side domain layer for the shielding individual food-box service.
//! The remote authority (the government server) is the single source of
//! truth for registration, catalog contents, distances, and order state;
//! this crate maintains the individual's local mirror of that state and
//! enforces the mutation invariants around it.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, services)
//!   - `food_box`: Candidate/order food boxes, quantity invariants
//!   - `order`: Placed orders, status lifecycle state machine
//!   - `shared`: Identity value objects (`Chi`, `Postcode`)
//!
//! - **Application**: Orchestration for one individual's session
//!   - `ports`: Interfaces for the remote collaborators (`CatalogPort`,
//!     `DistanceOracle`, `OrderingPort`)
//!   - `services`: `ShieldingIndividualSession`, `CatalogCache`,
//!     `NearestCompanyResolver`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `authority`: Government server HTTP adapter
//!
//! # Concurrency model
//!
//! Single-threaded and synchronous: every remote operation blocks until a
//! response or transport failure. A session is owned by exactly one
//! logical caller; wrap it externally if you need shared access.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Session services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Logging bootstrap.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::food_box::{
    DietaryPreference, FoodBox, FoodBoxError, FoodBoxItem, FoodBoxItemPayload, FoodBoxPayload,
};
pub use domain::order::{CateringCompanyOrder, OrderError, OrderStatus, StatusStateMachine};
pub use domain::shared::{Chi, InvalidChi, InvalidPostcode, Postcode};

// Application re-exports
pub use application::ports::{
    CatalogPort, CateringCompany, DistanceOracle, IndividualDetails, OrderingPort, RemoteError,
};
pub use application::services::{
    CatalogCache, NearestCompanyResolver, SessionError, ShieldingIndividualSession,
};

// Infrastructure re-exports
pub use crate::config::{ClientConfig, ConfigError, load_config};
pub use infrastructure::authority::{AuthorityClient, AuthorityConfig, AuthorityError};
