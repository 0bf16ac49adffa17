//! Price quotations sent in answer to inquiries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{CustomerId, InquiryId, QuotationId, QuotationStatus, ValidationError};

use super::{CustomerRef, InquiryRef, non_blank};

/// A stored quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: QuotationId,
    pub quotation_number: String,
    pub inquiry_id: Option<InquiryId>,
    pub customer_id: Option<CustomerId>,
    pub quotation_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub product_description: String,
    pub hsn_code: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_amount: Option<Decimal>,
    pub currency: String,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub destination_port: Option<String>,
    pub remarks: Option<String>,
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry: Option<InquiryRef>,
}

/// Fields accepted when creating a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotationInput {
    pub quotation_number: String,
    pub inquiry_id: Option<InquiryId>,
    pub customer_id: Option<CustomerId>,
    pub quotation_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub product_description: String,
    pub hsn_code: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_amount: Option<Decimal>,
    pub currency: String,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub destination_port: Option<String>,
    pub remarks: Option<String>,
    pub status: QuotationStatus,
}

impl Default for QuotationInput {
    fn default() -> Self {
        Self {
            quotation_number: String::new(),
            inquiry_id: None,
            customer_id: None,
            quotation_date: Utc::now().date_naive(),
            valid_until: None,
            product_description: String::new(),
            hsn_code: None,
            quantity: None,
            unit: "KG".to_string(),
            unit_price: Decimal::ZERO,
            total_amount: None,
            currency: "USD".to_string(),
            delivery_terms: "FOB".to_string(),
            payment_terms: "30 days LC".to_string(),
            destination_port: None,
            remarks: None,
            status: QuotationStatus::Draft,
        }
    }
}

impl QuotationInput {
    /// Check required fields, normalize text and fill in a missing total.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the quotation number or product is
    /// blank, the unit price is negative, or an amount does not fit its column.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("quotation_number", &self.quotation_number)?;
        require_text("product_description", &self.product_description)?;
        if self.unit_price.is_sign_negative() {
            return Err(ValidationError::new("unit_price", "cannot be negative"));
        }
        Numeric::QUANTITY.check_opt("quantity", self.quantity)?;
        Numeric::PRICE.check("unit_price", self.unit_price)?;
        Numeric::AMOUNT.check_opt("total_amount", self.total_amount)?;
        if self
            .valid_until
            .is_some_and(|valid_until| valid_until < self.quotation_date)
        {
            return Err(ValidationError::new(
                "valid_until",
                "cannot be before the quotation date",
            ));
        }

        if self.total_amount.is_none()
            && let Some(quantity) = self.quantity
        {
            let total = (quantity * self.unit_price).round_dp(2);
            Numeric::AMOUNT.check("total_amount", total)?;
            self.total_amount = Some(total);
        }

        self.quotation_number = self.quotation_number.trim().to_string();
        self.product_description = self.product_description.trim().to_string();
        self.hsn_code = non_blank(self.hsn_code);
        self.destination_port = non_blank(self.destination_port);
        self.remarks = non_blank(self.remarks);
        Ok(self)
    }
}

impl Quotation {
    /// Build a stored quotation from validated input.
    #[must_use]
    pub fn from_input(id: QuotationId, input: QuotationInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            quotation_number: input.quotation_number,
            inquiry_id: input.inquiry_id,
            customer_id: input.customer_id,
            quotation_date: input.quotation_date,
            valid_until: input.valid_until,
            product_description: input.product_description,
            hsn_code: input.hsn_code,
            quantity: input.quantity,
            unit: input.unit,
            unit_price: input.unit_price,
            total_amount: input.total_amount,
            currency: input.currency,
            delivery_terms: input.delivery_terms,
            payment_terms: input.payment_terms,
            destination_port: input.destination_port,
            remarks: input.remarks,
            status: input.status,
            created_at: now,
            updated_at: now,
            customer: None,
            inquiry: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> QuotationInput {
        QuotationInput {
            quotation_number: "QT-2026-001".to_string(),
            product_description: "Basmati rice".to_string(),
            unit_price: "0.95".parse().unwrap(),
            ..QuotationInput::default()
        }
    }

    #[test]
    fn test_total_computed_when_absent() {
        let valid = QuotationInput {
            quantity: Some("2000".parse().unwrap()),
            ..input()
        }
        .validate()
        .unwrap();
        assert_eq!(valid.total_amount, Some("1900.00".parse().unwrap()));
    }

    #[test]
    fn test_explicit_total_is_kept() {
        let valid = QuotationInput {
            quantity: Some("2000".parse().unwrap()),
            total_amount: Some("1850".parse().unwrap()),
            ..input()
        }
        .validate()
        .unwrap();
        assert_eq!(valid.total_amount, Some("1850".parse().unwrap()));
    }

    #[test]
    fn test_no_quantity_no_total() {
        let valid = input().validate().unwrap();
        assert_eq!(valid.total_amount, None);
    }

    #[test]
    fn test_validity_window() {
        let err = QuotationInput {
            quotation_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "valid_until");
    }

    #[test]
    fn test_huge_quantity_is_out_of_range() {
        let err = QuotationInput {
            quantity: Some(Decimal::MAX),
            unit_price: "2".parse().unwrap(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "quantity");
    }

    #[test]
    fn test_computed_total_must_fit_column() {
        let err = QuotationInput {
            quantity: Some("10000000000".parse().unwrap()),
            unit_price: "500".parse().unwrap(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "total_amount: is out of range");
    }
}
