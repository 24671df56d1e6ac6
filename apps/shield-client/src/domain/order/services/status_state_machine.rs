//! Order Status State Machine Service
//!
//! Validates status transitions mirrored from the remote authority.

use crate::domain::order::errors::OrderError;
use crate::domain::order::value_objects::OrderStatus;

/// State machine for the order status lifecycle.
///
/// The delivery pipeline is linear and monotonic
/// (`Placed → Packed → Dispatched → Delivered`); a refresh may skip
/// intermediate stages the client never observed. `Cancelled` is reachable
/// only before dispatch and is terminal. Self-transitions are accepted so
/// that a refresh reporting the current status is a no-op rather than an
/// error.
pub struct StatusStateMachine;

impl StatusStateMachine {
    /// Check if a status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        if from == to {
            return true;
        }
        matches!(
            (from, to),
            // Forward along the delivery pipeline
            (OrderStatus::Placed, OrderStatus::Packed)
                | (OrderStatus::Placed, OrderStatus::Dispatched)
                | (OrderStatus::Placed, OrderStatus::Delivered)
                | (OrderStatus::Packed, OrderStatus::Dispatched)
                | (OrderStatus::Packed, OrderStatus::Delivered)
                | (OrderStatus::Dispatched, OrderStatus::Delivered)
                // Cancellation, only before dispatch
                | (OrderStatus::Placed, OrderStatus::Cancelled)
                | (OrderStatus::Packed, OrderStatus::Cancelled)
        )
    }

    /// Validate a status transition.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidStatusTransition`] if the transition is
    /// invalid.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidStatusTransition { from, to })
        }
    }
}
