//! Buyer inquiries (the top of the sales pipeline).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{CustomerId, InquiryId, InquiryStatus, ValidationError};

use super::{CustomerRef, non_blank};

/// A stored inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub inquiry_number: String,
    pub customer_id: Option<CustomerId>,
    pub inquiry_date: NaiveDate,
    pub product_description: String,
    pub quantity: Option<Decimal>,
    pub unit: String,
    pub target_price: Option<Decimal>,
    pub currency: String,
    pub delivery_terms: String,
    pub destination_port: Option<String>,
    pub remarks: Option<String>,
    pub status: InquiryStatus,
    pub follow_up_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
}

/// Fields accepted when creating an inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryInput {
    pub inquiry_number: String,
    pub customer_id: Option<CustomerId>,
    pub inquiry_date: NaiveDate,
    pub product_description: String,
    pub quantity: Option<Decimal>,
    pub unit: String,
    pub target_price: Option<Decimal>,
    pub currency: String,
    pub delivery_terms: String,
    pub destination_port: Option<String>,
    pub remarks: Option<String>,
    pub status: InquiryStatus,
    pub follow_up_date: Option<NaiveDate>,
}

impl Default for InquiryInput {
    fn default() -> Self {
        Self {
            inquiry_number: String::new(),
            customer_id: None,
            inquiry_date: Utc::now().date_naive(),
            product_description: String::new(),
            quantity: None,
            unit: "KG".to_string(),
            target_price: None,
            currency: "USD".to_string(),
            delivery_terms: "FOB".to_string(),
            destination_port: None,
            remarks: None,
            status: InquiryStatus::Pending,
            follow_up_date: None,
        }
    }
}

impl InquiryInput {
    /// Check required fields and normalize optional text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the inquiry number or product is blank.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("inquiry_number", &self.inquiry_number)?;
        require_text("product_description", &self.product_description)?;
        if self.quantity.is_some_and(|q| q.is_sign_negative()) {
            return Err(ValidationError::new("quantity", "cannot be negative"));
        }
        Numeric::QUANTITY.check_opt("quantity", self.quantity)?;
        Numeric::PRICE.check_opt("target_price", self.target_price)?;

        self.inquiry_number = self.inquiry_number.trim().to_string();
        self.product_description = self.product_description.trim().to_string();
        self.destination_port = non_blank(self.destination_port);
        self.remarks = non_blank(self.remarks);
        Ok(self)
    }
}

impl Inquiry {
    /// Build a stored inquiry from validated input.
    #[must_use]
    pub fn from_input(id: InquiryId, input: InquiryInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            inquiry_number: input.inquiry_number,
            customer_id: input.customer_id,
            inquiry_date: input.inquiry_date,
            product_description: input.product_description,
            quantity: input.quantity,
            unit: input.unit,
            target_price: input.target_price,
            currency: input.currency,
            delivery_terms: input.delivery_terms,
            destination_port: input.destination_port,
            remarks: input.remarks,
            status: input.status,
            follow_up_date: input.follow_up_date,
            created_at: now,
            updated_at: now,
            customer: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_number_and_product() {
        let err = InquiryInput::default().validate().unwrap_err();
        assert_eq!(err.field, "inquiry_number");

        let err = InquiryInput {
            inquiry_number: "INQ-001".to_string(),
            ..InquiryInput::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "product_description");
    }

    #[test]
    fn test_defaults() {
        let input = InquiryInput::default();
        assert_eq!(input.unit, "KG");
        assert_eq!(input.currency, "USD");
        assert_eq!(input.delivery_terms, "FOB");
        assert_eq!(input.status, InquiryStatus::Pending);
    }

    #[test]
    fn test_from_input_has_no_join() {
        let input = InquiryInput {
            inquiry_number: " INQ-002 ".to_string(),
            product_description: "Cumin seeds".to_string(),
            remarks: Some(" ".to_string()),
            ..InquiryInput::default()
        }
        .validate()
        .unwrap();
        let inquiry = Inquiry::from_input(InquiryId::generate(), input, Utc::now());
        assert_eq!(inquiry.inquiry_number, "INQ-002");
        assert_eq!(inquiry.remarks, None);
        assert!(inquiry.customer.is_none());
    }
}
