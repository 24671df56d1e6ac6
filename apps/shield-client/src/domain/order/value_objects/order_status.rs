//! Order status in the lifecycle.

use std::fmt;

/// Status of a placed order, mirrored locally from the remote authority.
///
/// Remote status codes:
/// - `0` = Placed
/// - `1` = Packed
/// - `2` = Dispatched
/// - `3` = Delivered
/// - `4` = Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order accepted by the remote authority.
    Placed,
    /// Order packed by the catering company.
    Packed,
    /// Order handed over for delivery.
    Dispatched,
    /// Order delivered to the individual.
    Delivered,
    /// Order cancelled before dispatch.
    Cancelled,
}

impl OrderStatus {
    /// The canonical wire string for this status.
    #[must_use]
    pub const fn as_wire_str(&self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Packed => "packed",
            Self::Dispatched => "dispatched",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a wire string; unknown strings are a parse failure.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "placed" => Some(Self::Placed),
            "packed" => Some(Self::Packed),
            "dispatched" => Some(Self::Dispatched),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Map a remote status-query response code to a status; unmapped codes
    /// are a parse failure.
    #[must_use]
    pub fn from_remote_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Placed),
            "1" => Some(Self::Packed),
            "2" => Some(Self::Dispatched),
            "3" => Some(Self::Delivered),
            "4" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Returns true if item quantities may still be edited locally.
    #[must_use]
    pub const fn permits_item_edits(&self) -> bool {
        matches!(self, Self::Placed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
