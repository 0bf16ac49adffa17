//! Customers (importers buying from us).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{CustomerId, CustomerStatus, ValidationError};

use super::non_blank;

/// Default payment terms offered to a new customer.
pub const DEFAULT_PAYMENT_TERMS: &str = "30 days";

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub company_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    /// Importer-Exporter Code.
    pub iec_code: Option<String>,
    pub payment_terms: String,
    pub credit_limit: Decimal,
    pub notes: Option<String>,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    pub company_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub iec_code: Option<String>,
    pub payment_terms: String,
    pub credit_limit: Decimal,
    pub notes: Option<String>,
    pub status: CustomerStatus,
}

impl Default for CustomerInput {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_person: None,
            email: None,
            phone: None,
            country: String::new(),
            city: None,
            address: None,
            gst_number: None,
            pan_number: None,
            iec_code: None,
            payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
            credit_limit: Decimal::ZERO,
            notes: None,
            status: CustomerStatus::Active,
        }
    }
}

impl CustomerInput {
    /// Check required fields and normalize optional text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the company name or country is
    /// blank, the email has no `@`, or the credit limit is negative.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("company_name", &self.company_name)?;
        require_text("country", &self.country)?;
        if self.credit_limit.is_sign_negative() {
            return Err(ValidationError::new("credit_limit", "cannot be negative"));
        }
        Numeric::AMOUNT.check("credit_limit", self.credit_limit)?;

        self.email = non_blank(self.email);
        if let Some(email) = &self.email
            && (!email.contains('@') || email.starts_with('@') || email.ends_with('@'))
        {
            return Err(ValidationError::new("email", "is not a valid email address"));
        }

        self.company_name = self.company_name.trim().to_string();
        self.country = self.country.trim().to_string();
        if self.payment_terms.trim().is_empty() {
            self.payment_terms = DEFAULT_PAYMENT_TERMS.to_string();
        }
        self.contact_person = non_blank(self.contact_person);
        self.phone = non_blank(self.phone);
        self.city = non_blank(self.city);
        self.address = non_blank(self.address);
        self.gst_number = non_blank(self.gst_number);
        self.pan_number = non_blank(self.pan_number);
        self.iec_code = non_blank(self.iec_code);
        self.notes = non_blank(self.notes);
        Ok(self)
    }
}

impl Customer {
    /// Build a stored customer from validated input.
    #[must_use]
    pub fn from_input(id: CustomerId, input: CustomerInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            company_name: input.company_name,
            contact_person: input.contact_person,
            email: input.email,
            phone: input.phone,
            country: input.country,
            city: input.city,
            address: input.address,
            gst_number: input.gst_number,
            pan_number: input.pan_number,
            iec_code: input.iec_code,
            payment_terms: input.payment_terms,
            credit_limit: input.credit_limit,
            notes: input.notes,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field with `input`, keeping identity and creation time.
    pub fn apply(&mut self, input: CustomerInput, now: DateTime<Utc>) {
        let created_at = self.created_at;
        *self = Self::from_input(self.id, input, now);
        self.created_at = created_at;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> CustomerInput {
        CustomerInput {
            company_name: " Gulf Spices LLC ".to_string(),
            country: "UAE".to_string(),
            email: Some("buyer@gulfspices.ae".to_string()),
            city: Some(String::new()),
            ..CustomerInput::default()
        }
    }

    #[test]
    fn test_defaults() {
        let input = CustomerInput::default();
        assert_eq!(input.payment_terms, "30 days");
        assert_eq!(input.credit_limit, Decimal::ZERO);
        assert_eq!(input.status, CustomerStatus::Active);
    }

    #[test]
    fn test_validate_trims_and_clears_blank_fields() {
        let valid = input().validate().unwrap();
        assert_eq!(valid.company_name, "Gulf Spices LLC");
        assert_eq!(valid.city, None);
    }

    #[test]
    fn test_validate_requires_company_and_country() {
        let err = CustomerInput {
            company_name: String::new(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "company_name");

        let err = CustomerInput {
            country: " ".to_string(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "country");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let err = CustomerInput {
            email: Some("no-at-sign".to_string()),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input: CustomerInput =
            serde_json::from_str(r#"{"company_name":"Acme","country":"Kenya"}"#).unwrap();
        assert_eq!(input.payment_terms, DEFAULT_PAYMENT_TERMS);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let created = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let later = DateTime::<Utc>::from_timestamp(1_800_000_000, 0).unwrap();
        let id = CustomerId::generate();
        let mut customer = Customer::from_input(id, input().validate().unwrap(), created);

        let mut changed = input().validate().unwrap();
        changed.status = CustomerStatus::Blocked;
        customer.apply(changed, later);

        assert_eq!(customer.id, id);
        assert_eq!(customer.created_at, created);
        assert_eq!(customer.updated_at, later);
        assert_eq!(customer.status, CustomerStatus::Blocked);
    }
}
