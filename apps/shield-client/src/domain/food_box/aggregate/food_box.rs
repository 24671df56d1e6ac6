//! Food Box Aggregate Root
//!
//! A food box is an immutable catalog identity plus a mutable list of line
//! items. Catalog instances are never mutated; candidate and order
//! instances are independent deep copies obtained with [`Clone`].

use serde::Serialize;

use super::item::FoodBoxItem;
use crate::domain::food_box::errors::FoodBoxError;
use crate::domain::food_box::value_objects::DietaryPreference;

/// Food Box Aggregate Root.
///
/// Owns its items exclusively; cloning produces a fully independent copy,
/// so edits to a candidate or an order snapshot can never reach the
/// catalog instance they were copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodBox {
    id: String,
    name: String,
    diet: DietaryPreference,
    items: Vec<FoodBoxItem>,
}

impl FoodBox {
    /// Create a food box from its catalog identity and items.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diet: DietaryPreference,
        items: Vec<FoodBoxItem>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            diet,
            items,
        }
    }

    /// The box's catalog id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The box's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The box's dietary tag.
    #[must_use]
    pub const fn diet(&self) -> DietaryPreference {
        self.diet
    }

    /// The box's items, in catalog order.
    #[must_use]
    pub fn items(&self) -> &[FoodBoxItem] {
        &self.items
    }

    /// The ids of all items, in catalog order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<u32> {
        self.items.iter().map(FoodBoxItem::id).collect()
    }

    /// The current quantity of the item with `item_id`, if present.
    #[must_use]
    pub fn item_quantity(&self, item_id: u32) -> Option<u32> {
        self.find_item(item_id).map(FoodBoxItem::current_quantity)
    }

    /// The name of the item with `item_id`, if present.
    #[must_use]
    pub fn item_name(&self, item_id: u32) -> Option<&str> {
        self.find_item(item_id).map(FoodBoxItem::name)
    }

    /// Set the quantity of one item, enforcing the box-level invariant
    /// that the edit may not zero out the entire box.
    ///
    /// # Errors
    ///
    /// Returns [`FoodBoxError::ItemNotFound`] for an unknown item id,
    /// [`FoodBoxError::WouldEmptyBox`] if the edit would leave every item
    /// at quantity zero, or the item-level ceiling error. On any error no
    /// state changes.
    pub fn set_quantity_for_item(
        &mut self,
        item_id: u32,
        quantity: u32,
        ordered: bool,
    ) -> Result<(), FoodBoxError> {
        if self.find_item(item_id).is_none() {
            return Err(FoodBoxError::ItemNotFound { item_id });
        }
        let total: u32 = self
            .items
            .iter()
            .map(|item| {
                if item.id() == item_id {
                    quantity
                } else {
                    item.current_quantity()
                }
            })
            .sum();
        if total == 0 {
            return Err(FoodBoxError::WouldEmptyBox { item_id });
        }
        match self.items.iter_mut().find(|item| item.id() == item_id) {
            Some(item) => item.set_quantity(quantity, ordered),
            None => Err(FoodBoxError::ItemNotFound { item_id }),
        }
    }

    /// Project this box into the wire form used both to place and to edit
    /// an order: id, name, and the *current* quantity of each item.
    #[must_use]
    pub fn payload(&self) -> FoodBoxPayload {
        FoodBoxPayload {
            id: self.id.clone(),
            contents: self
                .items
                .iter()
                .map(|item| FoodBoxItemPayload {
                    id: item.id(),
                    name: item.name().to_owned(),
                    quantity: item.current_quantity(),
                })
                .collect(),
        }
    }

    fn find_item(&self, item_id: u32) -> Option<&FoodBoxItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }
}

/// Wire projection of a food box submitted when placing or editing an
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodBoxPayload {
    /// The box's catalog id.
    pub id: String,
    /// One entry per line item, carrying the currently selected quantity.
    pub contents: Vec<FoodBoxItemPayload>,
}

/// One line item inside a [`FoodBoxPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodBoxItemPayload {
    /// The item id.
    pub id: u32,
    /// The item name.
    pub name: String,
    /// The currently selected quantity.
    pub quantity: u32,
}
