//! Status badge colours.

use serde::Serialize;

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Yellow,
    Orange,
    Purple,
    Green,
    StrongGreen,
    Red,
    Gray,
    Indigo,
    Teal,
}

impl Tone {
    /// Badge CSS classes.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Yellow => "bg-yellow-100 text-yellow-800",
            Self::Orange => "bg-orange-100 text-orange-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::StrongGreen => "bg-green-200 text-green-900",
            Self::Red => "bg-red-100 text-red-800",
            Self::Gray => "bg-gray-100 text-gray-800",
            Self::Indigo => "bg-indigo-100 text-indigo-800",
            Self::Teal => "bg-teal-100 text-teal-800",
        }
    }
}

/// Tone for any status wire string. Unknown statuses are gray.
///
/// Statuses shared between entities (`pending`, `delivered`, `cancelled`,
/// `received`) have the same tone everywhere.
#[must_use]
pub fn status_tone(status: &str) -> Tone {
    match status {
        "confirmed" | "booked" | "quoted" => Tone::Blue,
        "in_production" | "pending" => Tone::Yellow,
        "ready_to_ship" | "partial" => Tone::Orange,
        "shipped" | "in_transit" => Tone::Purple,
        "delivered" | "received" | "active" | "converted" => Tone::Green,
        "completed" => Tone::StrongGreen,
        "cancelled" | "overdue" | "blocked" | "lost" => Tone::Red,
        "loaded" => Tone::Indigo,
        "arrived" => Tone::Teal,
        _ => Tone::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerStatus, OrderStatus, PaymentStatus, ShipmentStatus};

    #[test]
    fn test_order_tones() {
        assert_eq!(status_tone(OrderStatus::Confirmed.as_str()), Tone::Blue);
        assert_eq!(status_tone(OrderStatus::Completed.as_str()), Tone::StrongGreen);
        assert_eq!(status_tone(OrderStatus::Cancelled.as_str()), Tone::Red);
    }

    #[test]
    fn test_shared_tones() {
        assert_eq!(status_tone(PaymentStatus::WriteOff.as_str()), Tone::Gray);
        assert_eq!(status_tone(ShipmentStatus::Loaded.as_str()), Tone::Indigo);
        assert_eq!(status_tone(ShipmentStatus::Arrived.as_str()), Tone::Teal);
        assert_eq!(status_tone(CustomerStatus::Inactive.as_str()), Tone::Gray);
    }

    #[test]
    fn test_unknown_is_gray() {
        assert_eq!(status_tone("archived"), Tone::Gray);
        assert_eq!(Tone::Gray.badge_class(), "bg-gray-100 text-gray-800");
    }
}
