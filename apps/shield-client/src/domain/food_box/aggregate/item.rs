//! A single line item within a food box.

use crate::domain::food_box::errors::FoodBoxError;

/// A line item in a food box.
///
/// The legal quantity range depends on whether the containing box belongs
/// to a placed order: a free-standing candidate may be edited anywhere up
/// to the catalog maximum, while an ordered box can only hold or decrease
/// its last-known quantity — the ceiling ratchets downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodBoxItem {
    id: u32,
    name: String,
    max_quantity: u32,
    current_quantity: u32,
}

impl FoodBoxItem {
    /// Create an item with its quantity initialized to the catalog maximum.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, max_quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            max_quantity,
            current_quantity: max_quantity,
        }
    }

    /// The item's id, unique within its box.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The item's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The catalog maximum for this item.
    #[must_use]
    pub const fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// The quantity currently selected for this item.
    #[must_use]
    pub const fn current_quantity(&self) -> u32 {
        self.current_quantity
    }

    /// The highest quantity this item may currently be set to.
    #[must_use]
    pub const fn ceiling(&self, ordered: bool) -> u32 {
        if ordered {
            self.current_quantity
        } else {
            self.max_quantity
        }
    }

    /// Set the quantity, subject to the context-dependent ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`FoodBoxError::QuantityAboveCeiling`] and leaves the item
    /// unchanged if `requested` exceeds [`Self::ceiling`].
    pub fn set_quantity(&mut self, requested: u32, ordered: bool) -> Result<(), FoodBoxError> {
        let ceiling = self.ceiling(ordered);
        if requested > ceiling {
            return Err(FoodBoxError::QuantityAboveCeiling {
                item_id: self.id,
                requested,
                ceiling,
            });
        }
        self.current_quantity = requested;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quantity_starts_at_catalog_maximum() {
        let item = FoodBoxItem::new(1, "cucumbers", 3);
        assert_eq!(item.current_quantity(), 3);
        assert_eq!(item.max_quantity(), 3);
    }

    #[test]
    fn candidate_item_can_go_back_up_to_maximum() {
        let mut item = FoodBoxItem::new(1, "tomatoes", 4);
        item.set_quantity(0, false).unwrap();
        item.set_quantity(4, false).unwrap();
        assert_eq!(item.current_quantity(), 4);
    }

    #[test]
    fn candidate_item_rejects_quantity_above_maximum() {
        let mut item = FoodBoxItem::new(1, "tomatoes", 4);
        let err = item.set_quantity(5, false).unwrap_err();
        assert_eq!(
            err,
            FoodBoxError::QuantityAboveCeiling {
                item_id: 1,
                requested: 5,
                ceiling: 4
            }
        );
        assert_eq!(item.current_quantity(), 4);
    }

    #[test]
    fn ordered_item_ceiling_ratchets_downward() {
        let mut item = FoodBoxItem::new(2, "bread", 5);
        item.set_quantity(3, true).unwrap();
        // The old level is no longer reachable once ordered.
        assert!(item.set_quantity(4, true).is_err());
        item.set_quantity(3, true).unwrap();
        item.set_quantity(1, true).unwrap();
        assert!(item.set_quantity(2, true).is_err());
        assert_eq!(item.current_quantity(), 1);
    }

    #[test]
    fn holding_the_current_quantity_always_succeeds() {
        let mut item = FoodBoxItem::new(3, "milk", 2);
        item.set_quantity(2, true).unwrap();
        item.set_quantity(2, false).unwrap();
        assert_eq!(item.current_quantity(), 2);
    }

    proptest! {
        #[test]
        fn quantity_never_leaves_legal_range(
            max in 0_u32..50,
            edits in proptest::collection::vec((0_u32..60, proptest::bool::ANY), 0..20),
        ) {
            let mut item = FoodBoxItem::new(9, "anything", max);
            for (requested, ordered) in edits {
                let ceiling = item.ceiling(ordered);
                let result = item.set_quantity(requested, ordered);
                prop_assert_eq!(result.is_ok(), requested <= ceiling);
                prop_assert!(item.current_quantity() <= item.max_quantity());
            }
        }
    }
}
