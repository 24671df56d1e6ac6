//! Government server adapter.
//!
//! The only place that knows the server's endpoint paths, query-string
//! shapes, acknowledgment strings, and wire encodings.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::AuthorityClient;
pub use api_types::{FoodBoxDto, FoodBoxItemDto};
pub use config::AuthorityConfig;
pub use error::AuthorityError;
pub use http_client::AuthorityHttpClient;
