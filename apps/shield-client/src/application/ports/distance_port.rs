//! Distance Oracle (Driven Port)
//!
//! External source of truth for the distance between two locations.

use super::RemoteError;
use crate::domain::shared::Postcode;

/// Oracle for inter-location distances.
#[cfg_attr(test, mockall::automock)]
pub trait DistanceOracle {
    /// Distance between two postcodes.
    ///
    /// A negative value is the oracle's "unusable" sentinel; callers skip
    /// such candidates rather than treating the call as failed.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or an uninterpretable
    /// response.
    fn distance(&self, from: &Postcode, to: &Postcode) -> Result<f32, RemoteError>;
}
