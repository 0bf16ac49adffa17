//! Export orders.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{
    CustomerId, IncentiveStatus, OrderId, OrderStatus, QuotationId, ValidationError,
};

use super::{CustomerRef, non_blank};

/// Default port of loading (Mundra).
pub const DEFAULT_ORIGIN_PORT: &str = "INMUN";
/// Default exchange rate pre-filled on new orders (INR per unit of currency).
pub const DEFAULT_EXCHANGE_RATE: Decimal = Decimal::from_parts(8400, 0, 0, false, 2);

/// A stored export order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub quotation_id: Option<QuotationId>,
    pub customer_id: Option<CustomerId>,
    pub order_date: NaiveDate,
    pub product_description: String,
    pub hsn_code: Option<String>,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub inr_value: Option<Decimal>,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub lc_number: Option<String>,
    pub lc_date: Option<NaiveDate>,
    pub lc_expiry_date: Option<NaiveDate>,
    pub lc_amount: Option<Decimal>,
    pub lc_bank: Option<String>,
    pub destination_port: Option<String>,
    pub origin_port: String,
    pub shipping_bill_number: Option<String>,
    pub shipping_bill_date: Option<NaiveDate>,
    pub gst_invoice_number: Option<String>,
    pub gst_invoice_date: Option<NaiveDate>,
    pub gst_amount: Decimal,
    pub igst_amount: Decimal,
    pub rodtep_claim: Decimal,
    pub rodtep_status: IncentiveStatus,
    pub drawback_amount: Decimal,
    pub drawback_status: IncentiveStatus,
    pub remarks: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
}

/// Fields accepted when creating or updating an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub order_number: String,
    pub quotation_id: Option<QuotationId>,
    pub customer_id: Option<CustomerId>,
    pub order_date: NaiveDate,
    pub product_description: String,
    pub hsn_code: Option<String>,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub inr_value: Option<Decimal>,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub lc_number: Option<String>,
    pub lc_date: Option<NaiveDate>,
    pub lc_expiry_date: Option<NaiveDate>,
    pub lc_amount: Option<Decimal>,
    pub lc_bank: Option<String>,
    pub destination_port: Option<String>,
    pub origin_port: String,
    pub shipping_bill_number: Option<String>,
    pub shipping_bill_date: Option<NaiveDate>,
    pub gst_invoice_number: Option<String>,
    pub gst_invoice_date: Option<NaiveDate>,
    pub gst_amount: Decimal,
    pub igst_amount: Decimal,
    pub rodtep_claim: Decimal,
    pub rodtep_status: IncentiveStatus,
    pub drawback_amount: Decimal,
    pub drawback_status: IncentiveStatus,
    pub remarks: Option<String>,
    pub status: OrderStatus,
}

impl Default for OrderInput {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            quotation_id: None,
            customer_id: None,
            order_date: Utc::now().date_naive(),
            product_description: String::new(),
            hsn_code: None,
            quantity: Decimal::ZERO,
            unit: "KG".to_string(),
            unit_price: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            currency: "USD".to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            inr_value: None,
            delivery_terms: "FOB".to_string(),
            payment_terms: "30 days LC".to_string(),
            lc_number: None,
            lc_date: None,
            lc_expiry_date: None,
            lc_amount: None,
            lc_bank: None,
            destination_port: None,
            origin_port: DEFAULT_ORIGIN_PORT.to_string(),
            shipping_bill_number: None,
            shipping_bill_date: None,
            gst_invoice_number: None,
            gst_invoice_date: None,
            gst_amount: Decimal::ZERO,
            igst_amount: Decimal::ZERO,
            rodtep_claim: Decimal::ZERO,
            rodtep_status: IncentiveStatus::Pending,
            drawback_amount: Decimal::ZERO,
            drawback_status: IncentiveStatus::Pending,
            remarks: None,
            status: OrderStatus::Confirmed,
        }
    }
}

/// `a × b` rounded to cents, saturating instead of overflowing.
fn product(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).map_or_else(
        || {
            if a.is_sign_negative() == b.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        },
        |p| p.round_dp(2),
    )
}

impl OrderInput {
    /// Derive `total_amount` (quantity × unit price) and `inr_value`
    /// (total × exchange rate), both rounded to two decimals.
    ///
    /// A product that overflows `Decimal` saturates, which [`Self::validate`]
    /// then rejects as out of range.
    #[must_use]
    pub fn with_computed_totals(mut self) -> Self {
        let total = product(self.quantity, self.unit_price);
        self.total_amount = total;
        self.inr_value = Some(product(total, self.exchange_rate));
        self
    }

    /// Check required fields and normalize optional text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first missing or out-of-range field.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("order_number", &self.order_number)?;
        if self.customer_id.is_none() {
            return Err(ValidationError::required("customer_id"));
        }
        require_text("product_description", &self.product_description)?;
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::new("quantity", "must be greater than zero"));
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(ValidationError::new("unit_price", "must be greater than zero"));
        }
        if self.exchange_rate.is_sign_negative() {
            return Err(ValidationError::new("exchange_rate", "cannot be negative"));
        }
        for (field, amount) in [
            ("gst_amount", self.gst_amount),
            ("igst_amount", self.igst_amount),
            ("rodtep_claim", self.rodtep_claim),
            ("drawback_amount", self.drawback_amount),
        ] {
            if amount.is_sign_negative() {
                return Err(ValidationError::new(field, "cannot be negative"));
            }
            Numeric::AMOUNT.check(field, amount)?;
        }
        Numeric::QUANTITY.check("quantity", self.quantity)?;
        Numeric::PRICE.check("unit_price", self.unit_price)?;
        Numeric::AMOUNT.check("total_amount", self.total_amount)?;
        Numeric::RATE.check("exchange_rate", self.exchange_rate)?;
        Numeric::INR.check_opt("inr_value", self.inr_value)?;
        Numeric::AMOUNT.check_opt("lc_amount", self.lc_amount)?;
        if let (Some(opened), Some(expiry)) = (self.lc_date, self.lc_expiry_date)
            && expiry < opened
        {
            return Err(ValidationError::new(
                "lc_expiry_date",
                "cannot be before the LC date",
            ));
        }

        self.order_number = self.order_number.trim().to_string();
        self.product_description = self.product_description.trim().to_string();
        self.currency = self.currency.trim().to_uppercase();
        self.hsn_code = non_blank(self.hsn_code);
        self.lc_number = non_blank(self.lc_number);
        self.lc_bank = non_blank(self.lc_bank);
        self.destination_port = non_blank(self.destination_port);
        self.shipping_bill_number = non_blank(self.shipping_bill_number);
        self.gst_invoice_number = non_blank(self.gst_invoice_number);
        self.remarks = non_blank(self.remarks);
        Ok(self)
    }
}

impl Order {
    /// Build a stored order from validated input.
    #[must_use]
    pub fn from_input(id: OrderId, input: OrderInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            order_number: input.order_number,
            quotation_id: input.quotation_id,
            customer_id: input.customer_id,
            order_date: input.order_date,
            product_description: input.product_description,
            hsn_code: input.hsn_code,
            quantity: input.quantity,
            unit: input.unit,
            unit_price: input.unit_price,
            total_amount: input.total_amount,
            currency: input.currency,
            exchange_rate: input.exchange_rate,
            inr_value: input.inr_value,
            delivery_terms: input.delivery_terms,
            payment_terms: input.payment_terms,
            lc_number: input.lc_number,
            lc_date: input.lc_date,
            lc_expiry_date: input.lc_expiry_date,
            lc_amount: input.lc_amount,
            lc_bank: input.lc_bank,
            destination_port: input.destination_port,
            origin_port: input.origin_port,
            shipping_bill_number: input.shipping_bill_number,
            shipping_bill_date: input.shipping_bill_date,
            gst_invoice_number: input.gst_invoice_number,
            gst_invoice_date: input.gst_invoice_date,
            gst_amount: input.gst_amount,
            igst_amount: input.igst_amount,
            rodtep_claim: input.rodtep_claim,
            rodtep_status: input.rodtep_status,
            drawback_amount: input.drawback_amount,
            drawback_status: input.drawback_status,
            remarks: input.remarks,
            status: input.status,
            created_at: now,
            updated_at: now,
            customer: None,
        }
    }

    /// Replace every editable field with `input`, keeping identity and creation time.
    pub fn apply(&mut self, input: OrderInput, now: DateTime<Utc>) {
        let created_at = self.created_at;
        *self = Self::from_input(self.id, input, now);
        self.created_at = created_at;
    }

    /// Convert back into an editable input (used to pre-fill edit forms).
    #[must_use]
    pub fn to_input(&self) -> OrderInput {
        OrderInput {
            order_number: self.order_number.clone(),
            quotation_id: self.quotation_id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            product_description: self.product_description.clone(),
            hsn_code: self.hsn_code.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            unit_price: self.unit_price,
            total_amount: self.total_amount,
            currency: self.currency.clone(),
            exchange_rate: self.exchange_rate,
            inr_value: self.inr_value,
            delivery_terms: self.delivery_terms.clone(),
            payment_terms: self.payment_terms.clone(),
            lc_number: self.lc_number.clone(),
            lc_date: self.lc_date,
            lc_expiry_date: self.lc_expiry_date,
            lc_amount: self.lc_amount,
            lc_bank: self.lc_bank.clone(),
            destination_port: self.destination_port.clone(),
            origin_port: self.origin_port.clone(),
            shipping_bill_number: self.shipping_bill_number.clone(),
            shipping_bill_date: self.shipping_bill_date,
            gst_invoice_number: self.gst_invoice_number.clone(),
            gst_invoice_date: self.gst_invoice_date,
            gst_amount: self.gst_amount,
            igst_amount: self.igst_amount,
            rodtep_claim: self.rodtep_claim,
            rodtep_status: self.rodtep_status,
            drawback_amount: self.drawback_amount,
            drawback_status: self.drawback_status,
            remarks: self.remarks.clone(),
            status: self.status,
        }
    }

    /// Sum of the RoDTEP claim and the duty drawback.
    #[must_use]
    pub fn total_incentives(&self) -> Decimal {
        self.rodtep_claim.saturating_add(self.drawback_amount)
    }

    /// Whether any export incentive is recorded on this order.
    #[must_use]
    pub fn has_incentives(&self) -> bool {
        self.rodtep_claim > Decimal::ZERO || self.drawback_amount > Decimal::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn input() -> OrderInput {
        OrderInput {
            order_number: "EXP-2026-010".to_string(),
            customer_id: Some(CustomerId::generate()),
            product_description: "Turmeric powder".to_string(),
            quantity: dec("12500"),
            unit_price: dec("1.85"),
            ..OrderInput::default()
        }
    }

    #[test]
    fn test_defaults_match_new_order_form() {
        let input = OrderInput::default();
        assert_eq!(input.unit, "KG");
        assert_eq!(input.currency, "USD");
        assert_eq!(input.exchange_rate, dec("84.00"));
        assert_eq!(input.delivery_terms, "FOB");
        assert_eq!(input.payment_terms, "30 days LC");
        assert_eq!(input.origin_port, "INMUN");
        assert_eq!(input.status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_computed_totals() {
        let input = input().with_computed_totals();
        assert_eq!(input.total_amount, dec("23125.00"));
        assert_eq!(input.inr_value, Some(dec("1942500.00")));
    }

    #[test]
    fn test_computed_totals_round_to_cents() {
        let input = OrderInput {
            quantity: dec("3"),
            unit_price: dec("0.333"),
            exchange_rate: dec("83.333"),
            ..input()
        }
        .with_computed_totals();
        assert_eq!(input.total_amount, dec("1.00"));
        assert_eq!(input.inr_value, Some(dec("83.33")));
    }

    #[test]
    fn test_validate_required_fields() {
        let err = OrderInput {
            customer_id: None,
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "customer_id");

        let err = OrderInput {
            quantity: Decimal::ZERO,
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "quantity");

        let err = OrderInput {
            order_number: "  ".to_string(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "order_number");
    }

    #[test]
    fn test_validate_lc_dates() {
        let err = OrderInput {
            lc_date: NaiveDate::from_ymd_opt(2026, 5, 1),
            lc_expiry_date: NaiveDate::from_ymd_opt(2026, 4, 1),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "lc_expiry_date");
    }

    #[test]
    fn test_validate_normalizes_currency() {
        let valid = OrderInput {
            currency: " eur ".to_string(),
            lc_number: Some(String::new()),
            ..input()
        }
        .validate()
        .unwrap();
        assert_eq!(valid.currency, "EUR");
        assert_eq!(valid.lc_number, None);
    }

    #[test]
    fn test_incentives() {
        let now = Utc::now();
        let mut order = Order::from_input(OrderId::generate(), input(), now);
        assert!(!order.has_incentives());
        order.rodtep_claim = dec("150.50");
        order.drawback_amount = dec("49.50");
        assert!(order.has_incentives());
        assert_eq!(order.total_incentives(), dec("200.00"));
    }

    #[test]
    fn test_to_input_round_trip() {
        let now = Utc::now();
        let source = input().with_computed_totals();
        let order = Order::from_input(OrderId::generate(), source.clone(), now);
        assert_eq!(order.to_input(), source);
    }

    #[test]
    fn test_overflowing_quantity_is_rejected_not_panicking() {
        let err = OrderInput {
            quantity: Decimal::MAX,
            unit_price: dec("2"),
            ..input()
        }
        .with_computed_totals()
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "quantity: is out of range");
    }

    #[test]
    fn test_total_beyond_column_is_rejected() {
        let err = OrderInput {
            quantity: dec("10000000000"),
            unit_price: dec("1000"),
            ..input()
        }
        .with_computed_totals()
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "total_amount");

        let err = OrderInput {
            total_amount: dec("50000000000000000000000000000"),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "total_amount");
    }
}
