//! Physical shipments against an order.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{CustomerId, OrderId, ShipmentId, ShipmentStatus, ValidationError};

use super::{CustomerRef, OrderRef, non_blank};

/// Container size used when none is given.
pub const DEFAULT_CONTAINER_SIZE: &str = "20FT";

/// A stored shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub shipment_number: String,
    pub order_id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub shipment_date: Option<NaiveDate>,
    pub etd: Option<NaiveDate>,
    pub eta: Option<NaiveDate>,
    pub vessel_name: Option<String>,
    pub voyage_number: Option<String>,
    pub bl_number: Option<String>,
    pub bl_date: Option<NaiveDate>,
    pub container_number: Option<String>,
    pub container_size: String,
    pub shipping_line: Option<String>,
    pub freight_amount: Decimal,
    pub freight_currency: String,
    pub insurance_amount: Decimal,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    /// Customs house agent.
    pub cha_name: Option<String>,
    pub cha_reference: Option<String>,
    pub customs_clearance_date: Option<NaiveDate>,
    pub let_export_date: Option<NaiveDate>,
    pub remarks: Option<String>,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
}

/// Fields accepted when creating or updating a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentInput {
    pub shipment_number: String,
    pub order_id: Option<OrderId>,
    pub customer_id: Option<CustomerId>,
    pub shipment_date: Option<NaiveDate>,
    pub etd: Option<NaiveDate>,
    pub eta: Option<NaiveDate>,
    pub vessel_name: Option<String>,
    pub voyage_number: Option<String>,
    pub bl_number: Option<String>,
    pub bl_date: Option<NaiveDate>,
    pub container_number: Option<String>,
    pub container_size: String,
    pub shipping_line: Option<String>,
    pub freight_amount: Decimal,
    pub freight_currency: String,
    pub insurance_amount: Decimal,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub cha_name: Option<String>,
    pub cha_reference: Option<String>,
    pub customs_clearance_date: Option<NaiveDate>,
    pub let_export_date: Option<NaiveDate>,
    pub remarks: Option<String>,
    pub status: ShipmentStatus,
}

impl Default for ShipmentInput {
    fn default() -> Self {
        Self {
            shipment_number: String::new(),
            order_id: None,
            customer_id: None,
            shipment_date: None,
            etd: None,
            eta: None,
            vessel_name: None,
            voyage_number: None,
            bl_number: None,
            bl_date: None,
            container_number: None,
            container_size: DEFAULT_CONTAINER_SIZE.to_string(),
            shipping_line: None,
            freight_amount: Decimal::ZERO,
            freight_currency: "USD".to_string(),
            insurance_amount: Decimal::ZERO,
            origin_port: None,
            destination_port: None,
            cha_name: None,
            cha_reference: None,
            customs_clearance_date: None,
            let_export_date: None,
            remarks: None,
            status: ShipmentStatus::Booked,
        }
    }
}

impl ShipmentInput {
    /// Check required fields and normalize optional text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the shipment number or order is
    /// missing, a charge is negative, or the ETA precedes the ETD.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("shipment_number", &self.shipment_number)?;
        if self.order_id.is_none() {
            return Err(ValidationError::required("order_id"));
        }
        if self.freight_amount.is_sign_negative() {
            return Err(ValidationError::new("freight_amount", "cannot be negative"));
        }
        if self.insurance_amount.is_sign_negative() {
            return Err(ValidationError::new("insurance_amount", "cannot be negative"));
        }
        Numeric::AMOUNT.check("freight_amount", self.freight_amount)?;
        Numeric::AMOUNT.check("insurance_amount", self.insurance_amount)?;
        if let (Some(etd), Some(eta)) = (self.etd, self.eta)
            && eta < etd
        {
            return Err(ValidationError::new("eta", "cannot be before the ETD"));
        }

        self.shipment_number = self.shipment_number.trim().to_string();
        if self.container_size.trim().is_empty() {
            self.container_size = DEFAULT_CONTAINER_SIZE.to_string();
        }
        self.vessel_name = non_blank(self.vessel_name);
        self.voyage_number = non_blank(self.voyage_number);
        self.bl_number = non_blank(self.bl_number);
        self.container_number = non_blank(self.container_number);
        self.shipping_line = non_blank(self.shipping_line);
        self.origin_port = non_blank(self.origin_port);
        self.destination_port = non_blank(self.destination_port);
        self.cha_name = non_blank(self.cha_name);
        self.cha_reference = non_blank(self.cha_reference);
        self.remarks = non_blank(self.remarks);
        Ok(self)
    }
}

impl Shipment {
    /// Build a stored shipment from validated input.
    ///
    /// Returns `None` when the input carries no order.
    #[must_use]
    pub fn from_input(id: ShipmentId, input: ShipmentInput, now: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            id,
            shipment_number: input.shipment_number,
            order_id: input.order_id?,
            customer_id: input.customer_id,
            shipment_date: input.shipment_date,
            etd: input.etd,
            eta: input.eta,
            vessel_name: input.vessel_name,
            voyage_number: input.voyage_number,
            bl_number: input.bl_number,
            bl_date: input.bl_date,
            container_number: input.container_number,
            container_size: input.container_size,
            shipping_line: input.shipping_line,
            freight_amount: input.freight_amount,
            freight_currency: input.freight_currency,
            insurance_amount: input.insurance_amount,
            origin_port: input.origin_port,
            destination_port: input.destination_port,
            cha_name: input.cha_name,
            cha_reference: input.cha_reference,
            customs_clearance_date: input.customs_clearance_date,
            let_export_date: input.let_export_date,
            remarks: input.remarks,
            status: input.status,
            created_at: now,
            updated_at: now,
            order: None,
            customer: None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> ShipmentInput {
        ShipmentInput {
            shipment_number: "SHP-001".to_string(),
            order_id: Some(OrderId::generate()),
            ..ShipmentInput::default()
        }
    }

    #[test]
    fn test_validate_requires_number() {
        let err = ShipmentInput {
            shipment_number: " ".to_string(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "shipment_number");
    }

    #[test]
    fn test_blank_container_size_defaults() {
        let valid = ShipmentInput {
            container_size: String::new(),
            vessel_name: Some("  MSC Aurora ".to_string()),
            ..input()
        }
        .validate()
        .unwrap();
        assert_eq!(valid.container_size, "20FT");
        assert_eq!(valid.vessel_name.as_deref(), Some("MSC Aurora"));
    }

    #[test]
    fn test_eta_after_etd() {
        let err = ShipmentInput {
            etd: NaiveDate::from_ymd_opt(2026, 4, 10),
            eta: NaiveDate::from_ymd_opt(2026, 4, 1),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "eta");
    }
}
