//! Food box errors.

use std::fmt;

/// Errors that can occur when mutating a food box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodBoxError {
    /// No item with the given id exists in the box.
    ItemNotFound {
        /// The item id that was looked up.
        item_id: u32,
    },

    /// The requested quantity exceeds the item's current ceiling.
    QuantityAboveCeiling {
        /// The item being edited.
        item_id: u32,
        /// The quantity that was requested.
        requested: u32,
        /// The highest quantity currently permitted.
        ceiling: u32,
    },

    /// Applying the edit would leave every item in the box at quantity zero.
    WouldEmptyBox {
        /// The item whose edit was rejected.
        item_id: u32,
    },
}

impl fmt::Display for FoodBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemNotFound { item_id } => {
                write!(f, "no item with id {item_id} in this food box")
            }
            Self::QuantityAboveCeiling {
                item_id,
                requested,
                ceiling,
            } => {
                write!(
                    f,
                    "quantity {requested} for item {item_id} exceeds the ceiling of {ceiling}"
                )
            }
            Self::WouldEmptyBox { item_id } => {
                write!(
                    f,
                    "setting item {item_id} to this quantity would zero out the whole box"
                )
            }
        }
    }
}

impl std::error::Error for FoodBoxError {}
