//! Ports (Driven)
//!
//! Interfaces for the remote authority collaborators. The core treats
//! these as opaque: given a request, each returns success-with-payload or
//! a [`RemoteError`]. Wire encodings live entirely in the adapters.
//!
//! All ports are synchronous: every operation blocks the caller until a
//! response or a transport failure is observed.

mod catalog_port;
mod distance_port;
mod ordering_port;

pub use catalog_port::CatalogPort;
pub use distance_port::DistanceOracle;
pub use ordering_port::{CateringCompany, IndividualDetails, OrderingPort};

#[cfg(test)]
pub use catalog_port::MockCatalogPort;
#[cfg(test)]
pub use distance_port::MockDistanceOracle;
#[cfg(test)]
pub use ordering_port::MockOrderingPort;

/// Failure surfaced by any remote collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a usable response.
    #[error("transport failure: {message}")]
    Transport {
        /// Error details.
        message: String,
    },

    /// The response arrived but could not be interpreted.
    #[error("malformed remote response: {detail}")]
    Malformed {
        /// What was wrong with the response.
        detail: String,
    },

    /// The remote authority explicitly refused the request.
    #[error("request rejected by the remote authority: {reason}")]
    Rejected {
        /// The remote's stated reason.
        reason: String,
    },
}
