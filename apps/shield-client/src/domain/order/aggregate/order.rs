//! Catering Company Order Aggregate Root
//!
//! The durable record of a placed order: an owned food-box snapshot, the
//! order number assigned by the remote authority, a locally mirrored
//! status, and the placement time.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::food_box::FoodBox;
use crate::domain::order::errors::OrderError;
use crate::domain::order::services::StatusStateMachine;
use crate::domain::order::value_objects::OrderStatus;

/// An order placed with a catering company.
///
/// The food box inside is an order-owned snapshot; once placed, item
/// quantities can only ratchet downward and only while the mirrored status
/// is still [`OrderStatus::Placed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CateringCompanyOrder {
    number: u32,
    food_box: FoodBox,
    status: OrderStatus,
    time_ordered: DateTime<Utc>,
}

impl CateringCompanyOrder {
    /// Create the record of a freshly placed order.
    #[must_use]
    pub const fn new(number: u32, food_box: FoodBox, time_ordered: DateTime<Utc>) -> Self {
        Self {
            number,
            food_box,
            status: OrderStatus::Placed,
            time_ordered,
        }
    }

    /// The order number assigned by the remote authority. Never changes.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The locally mirrored status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the order was placed.
    #[must_use]
    pub const fn time_ordered(&self) -> DateTime<Utc> {
        self.time_ordered
    }

    /// The order-owned food box snapshot.
    #[must_use]
    pub const fn food_box(&self) -> &FoodBox {
        &self.food_box
    }

    /// Ids of the items in the order's food box.
    #[must_use]
    pub fn item_ids(&self) -> Vec<u32> {
        self.food_box.item_ids()
    }

    /// Current quantity of an item, if present.
    #[must_use]
    pub fn item_quantity(&self, item_id: u32) -> Option<u32> {
        self.food_box.item_quantity(item_id)
    }

    /// Name of an item, if present.
    #[must_use]
    pub fn item_name(&self, item_id: u32) -> Option<&str> {
        self.food_box.item_name(item_id)
    }

    /// Edit one item's quantity in the order snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EditsNotPermitted`] unless the mirrored status
    /// is [`OrderStatus::Placed`], or the food-box level error if the edit
    /// violates the ordered-quantity invariant. On any error no state
    /// changes.
    pub fn set_item_quantity(&mut self, item_id: u32, quantity: u32) -> Result<(), OrderError> {
        if !self.status.permits_item_edits() {
            return Err(OrderError::EditsNotPermitted {
                status: self.status,
            });
        }
        self.food_box
            .set_quantity_for_item(item_id, quantity, true)?;
        Ok(())
    }

    /// Overwrite the mirrored status with one reported by the remote
    /// authority, validating it against the lifecycle state machine.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidStatusTransition`] if the reported
    /// status would move the order backwards or out of a terminal state.
    pub fn sync_status(&mut self, status: OrderStatus) -> Result<(), OrderError> {
        StatusStateMachine::validate_transition(self.status, status)?;
        self.status = status;
        Ok(())
    }

    /// Record a cancellation acknowledged by the remote authority.
    ///
    /// The remote is authoritative for whether cancellation was still
    /// legal, so no local pre-check is applied.
    pub const fn mark_cancelled(&mut self) {
        self.status = OrderStatus::Cancelled;
    }

    /// Move the placement time backward by `days`.
    ///
    /// Test hook for simulating cooldown expiry; the placement time can
    /// never move forward.
    pub fn rewind_time_ordered(&mut self, days: u32) {
        self.time_ordered -= TimeDelta::days(i64::from(days));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_box::{DietaryPreference, FoodBoxError, FoodBoxItem};

    fn placed_order() -> CateringCompanyOrder {
        let food_box = FoodBox::new(
            "1",
            "box a",
            DietaryPreference::None,
            vec![
                FoodBoxItem::new(1, "cucumbers", 1),
                FoodBoxItem::new(2, "tomatoes", 2),
                FoodBoxItem::new(6, "pork", 1),
            ],
        );
        CateringCompanyOrder::new(17, food_box, Utc::now())
    }

    #[test]
    fn new_orders_start_placed() {
        let order = placed_order();
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.number(), 17);
        assert_eq!(order.item_ids(), vec![1, 2, 6]);
    }

    #[test]
    fn placed_order_accepts_decreases() {
        let mut order = placed_order();
        order.set_item_quantity(2, 1).unwrap();
        assert_eq!(order.item_quantity(2), Some(1));
    }

    #[test]
    fn ordered_quantities_cannot_increase() {
        let mut order = placed_order();
        order.set_item_quantity(2, 1).unwrap();
        let err = order.set_item_quantity(2, 2).unwrap_err();
        assert_eq!(
            err,
            OrderError::FoodBox(FoodBoxError::QuantityAboveCeiling {
                item_id: 2,
                requested: 2,
                ceiling: 1,
            })
        );
    }

    #[test]
    fn edits_rejected_once_packed() {
        let mut order = placed_order();
        order.sync_status(OrderStatus::Packed).unwrap();
        let err = order.set_item_quantity(2, 1).unwrap_err();
        assert_eq!(
            err,
            OrderError::EditsNotPermitted {
                status: OrderStatus::Packed
            }
        );
        assert_eq!(order.item_quantity(2), Some(2));
    }

    #[test]
    fn sync_status_rejects_regression() {
        let mut order = placed_order();
        order.sync_status(OrderStatus::Dispatched).unwrap();
        assert!(order.sync_status(OrderStatus::Packed).is_err());
        assert_eq!(order.status(), OrderStatus::Dispatched);
    }

    #[test]
    fn sync_status_same_state_is_a_no_op() {
        let mut order = placed_order();
        order.sync_status(OrderStatus::Placed).unwrap();
        assert_eq!(order.status(), OrderStatus::Placed);
    }

    #[test]
    fn mark_cancelled_does_not_consult_local_state() {
        let mut order = placed_order();
        order.sync_status(OrderStatus::Dispatched).unwrap();
        order.mark_cancelled();
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn rewind_moves_placement_time_backward() {
        let mut order = placed_order();
        let before = order.time_ordered();
        order.rewind_time_ordered(7);
        assert_eq!(before - order.time_ordered(), TimeDelta::days(7));
    }
}
