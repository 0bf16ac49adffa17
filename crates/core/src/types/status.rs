//! Status enums for the tracked records.
//!
//! Every status is a closed set of wire strings. In `PostgreSQL` each one is a
//! native enum type in the `tracker` schema (see the admin migrations).

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseStatusError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Implements `as_str`, `label`, `ALL`, `Display` and `FromStr` for a status enum.
macro_rules! status_strings {
    ($name:ident, $kind:literal, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation (database and JSON).
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Human-readable label for tables and selects.
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(ParseStatusError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Customer account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.customer_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Blocked,
}

status_strings!(CustomerStatus, "customer status", {
    Active => ("active", "Active"),
    Inactive => ("inactive", "Inactive"),
    Blocked => ("blocked", "Blocked"),
});

/// Inquiry pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.inquiry_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Quoted,
    Converted,
    Lost,
    Cancelled,
}

status_strings!(InquiryStatus, "inquiry status", {
    Pending => ("pending", "Pending"),
    Quoted => ("quoted", "Quoted"),
    Converted => ("converted", "Converted"),
    Lost => ("lost", "Lost"),
    Cancelled => ("cancelled", "Cancelled"),
});

/// Quotation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.quotation_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
    Revised,
}

status_strings!(QuotationStatus, "quotation status", {
    Draft => ("draft", "Draft"),
    Sent => ("sent", "Sent"),
    Accepted => ("accepted", "Accepted"),
    Rejected => ("rejected", "Rejected"),
    Expired => ("expired", "Expired"),
    Revised => ("revised", "Revised"),
});

/// Export order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.order_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    InProduction,
    ReadyToShip,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

status_strings!(OrderStatus, "order status", {
    Confirmed => ("confirmed", "Confirmed"),
    InProduction => ("in_production", "In Production"),
    ReadyToShip => ("ready_to_ship", "Ready to Ship"),
    Shipped => ("shipped", "Shipped"),
    Delivered => ("delivered", "Delivered"),
    Completed => ("completed", "Completed"),
    Cancelled => ("cancelled", "Cancelled"),
});

/// Claim status shared by RoDTEP and duty drawback incentives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.incentive_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveStatus {
    #[default]
    Pending,
    Applied,
    Received,
    Rejected,
}

status_strings!(IncentiveStatus, "incentive status", {
    Pending => ("pending", "Pending"),
    Applied => ("applied", "Applied"),
    Received => ("received", "Received"),
    Rejected => ("rejected", "Rejected"),
});

/// Shipment tracking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.shipment_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Booked,
    Loaded,
    InTransit,
    Arrived,
    Delivered,
    Cancelled,
}

status_strings!(ShipmentStatus, "shipment status", {
    Booked => ("booked", "Booked"),
    Loaded => ("loaded", "Loaded"),
    InTransit => ("in_transit", "In Transit"),
    Arrived => ("arrived", "Arrived"),
    Delivered => ("delivered", "Delivered"),
    Cancelled => ("cancelled", "Cancelled"),
});

impl ShipmentStatus {
    /// Whether the cargo is currently on the water (loaded or sailing).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::InTransit | Self::Loaded)
    }
}

/// Receivable status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "tracker.payment_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Received,
    Overdue,
    WriteOff,
}

status_strings!(PaymentStatus, "payment status", {
    Pending => ("pending", "Pending"),
    Partial => ("partial", "Partial"),
    Received => ("received", "Received"),
    Overdue => ("overdue", "Overdue"),
    WriteOff => ("write_off", "Write Off"),
});

impl PaymentStatus {
    /// Whether money is still expected for this invoice.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Partial | Self::Overdue)
    }
}

/// How an invoice is settled.
///
/// Wire strings keep the trade abbreviations in upper case (`LC`, `TT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(type_name = "tracker.payment_mode"))]
pub enum PaymentMode {
    /// Letter of credit.
    #[serde(rename = "LC")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "LC"))]
    Lc,
    /// Telegraphic transfer.
    #[default]
    #[serde(rename = "TT")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "TT"))]
    Tt,
    /// Documents against payment.
    #[serde(rename = "DP")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "DP"))]
    Dp,
    /// Documents against acceptance.
    #[serde(rename = "DA")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "DA"))]
    Da,
    #[serde(rename = "advance")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "advance"))]
    Advance,
    #[serde(rename = "open_credit")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "open_credit"))]
    OpenCredit,
}

status_strings!(PaymentMode, "payment mode", {
    Lc => ("LC", "Letter of Credit"),
    Tt => ("TT", "Telegraphic Transfer"),
    Dp => ("DP", "Documents against Payment"),
    Da => ("DA", "Documents against Acceptance"),
    Advance => ("advance", "Advance"),
    OpenCredit => ("open_credit", "Open Credit"),
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_strings() {
        assert_eq!(OrderStatus::InProduction.as_str(), "in_production");
        assert_eq!(
            "ready_to_ship".parse::<OrderStatus>().unwrap(),
            OrderStatus::ReadyToShip
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReadyToShip).unwrap(),
            "\"ready_to_ship\""
        );
    }

    #[test]
    fn test_payment_mode_keeps_upper_case_abbreviations() {
        assert_eq!(serde_json::to_string(&PaymentMode::Lc).unwrap(), "\"LC\"");
        assert_eq!(
            serde_json::from_str::<PaymentMode>("\"open_credit\"").unwrap(),
            PaymentMode::OpenCredit
        );
        assert_eq!("DA".parse::<PaymentMode>().unwrap(), PaymentMode::Da);
        assert!("lc".parse::<PaymentMode>().is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "archived".parse::<CustomerStatus>().unwrap_err();
        assert_eq!(err.to_string(), "invalid customer status: archived");
    }

    #[test]
    fn test_display_matches_wire() {
        for status in PaymentStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_open_payment_statuses() {
        assert!(PaymentStatus::Pending.is_open());
        assert!(PaymentStatus::Overdue.is_open());
        assert!(!PaymentStatus::Received.is_open());
        assert!(!PaymentStatus::WriteOff.is_open());
    }

    #[test]
    fn test_active_shipments() {
        assert!(ShipmentStatus::Loaded.is_active());
        assert!(ShipmentStatus::InTransit.is_active());
        assert!(!ShipmentStatus::Arrived.is_active());
    }
}
