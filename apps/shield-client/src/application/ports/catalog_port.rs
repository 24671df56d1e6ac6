//! Catalog Port (Driven Port)
//!
//! Read access to the food-box catalog held by the remote authority.

use super::RemoteError;
use crate::domain::food_box::FoodBox;

/// Source of the full food-box catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogPort {
    /// Fetch every food box the remote authority currently offers.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or an uninterpretable
    /// response.
    fn fetch_all_food_boxes(&self) -> Result<Vec<FoodBox>, RemoteError>;
}
