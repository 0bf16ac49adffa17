//! Invoices and the money received against them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::validation::{Numeric, require_text};
use crate::types::{CustomerId, OrderId, PaymentId, PaymentMode, PaymentStatus, ValidationError};

use super::{CustomerRef, OrderRef, non_blank};

/// A stored payment (one invoice and its realization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub payment_reference: String,
    pub order_id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_amount: Decimal,
    pub invoice_currency: String,
    pub payment_due_date: NaiveDate,
    pub payment_received_date: Option<NaiveDate>,
    pub amount_received: Decimal,
    pub received_currency: String,
    pub exchange_rate_at_receipt: Option<Decimal>,
    pub inr_realized: Decimal,
    pub bank_charges: Decimal,
    /// Foreign Inward Remittance Certificate number.
    pub firc_number: Option<String>,
    pub firc_date: Option<NaiveDate>,
    pub firc_bank: Option<String>,
    pub payment_mode: PaymentMode,
    pub bank_ref_number: Option<String>,
    pub remarks: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
}

/// Fields accepted when creating or updating a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInput {
    pub payment_reference: String,
    pub order_id: Option<OrderId>,
    pub customer_id: Option<CustomerId>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_amount: Decimal,
    pub invoice_currency: String,
    pub payment_due_date: NaiveDate,
    pub payment_received_date: Option<NaiveDate>,
    pub amount_received: Decimal,
    pub received_currency: String,
    pub exchange_rate_at_receipt: Option<Decimal>,
    pub inr_realized: Decimal,
    pub bank_charges: Decimal,
    pub firc_number: Option<String>,
    pub firc_date: Option<NaiveDate>,
    pub firc_bank: Option<String>,
    pub payment_mode: PaymentMode,
    pub bank_ref_number: Option<String>,
    pub remarks: Option<String>,
    pub status: PaymentStatus,
}

impl Default for PaymentInput {
    fn default() -> Self {
        Self {
            payment_reference: String::new(),
            order_id: None,
            customer_id: None,
            invoice_number: None,
            invoice_date: None,
            invoice_amount: Decimal::ZERO,
            invoice_currency: "USD".to_string(),
            payment_due_date: Utc::now().date_naive(),
            payment_received_date: None,
            amount_received: Decimal::ZERO,
            received_currency: "USD".to_string(),
            exchange_rate_at_receipt: None,
            inr_realized: Decimal::ZERO,
            bank_charges: Decimal::ZERO,
            firc_number: None,
            firc_date: None,
            firc_bank: None,
            payment_mode: PaymentMode::Tt,
            bank_ref_number: None,
            remarks: None,
            status: PaymentStatus::Pending,
        }
    }
}

impl PaymentInput {
    /// Check required fields and normalize optional text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the reference or order is missing,
    /// or an amount is negative or does not fit its column.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        require_text("payment_reference", &self.payment_reference)?;
        if self.order_id.is_none() {
            return Err(ValidationError::required("order_id"));
        }
        for (field, amount) in [
            ("invoice_amount", self.invoice_amount),
            ("amount_received", self.amount_received),
            ("inr_realized", self.inr_realized),
            ("bank_charges", self.bank_charges),
        ] {
            if amount.is_sign_negative() {
                return Err(ValidationError::new(field, "cannot be negative"));
            }
        }
        Numeric::AMOUNT.check("invoice_amount", self.invoice_amount)?;
        Numeric::AMOUNT.check("amount_received", self.amount_received)?;
        Numeric::INR.check("inr_realized", self.inr_realized)?;
        Numeric::AMOUNT.check("bank_charges", self.bank_charges)?;
        Numeric::RATE.check_opt("exchange_rate_at_receipt", self.exchange_rate_at_receipt)?;

        self.payment_reference = self.payment_reference.trim().to_string();
        self.invoice_number = non_blank(self.invoice_number);
        self.firc_number = non_blank(self.firc_number);
        self.firc_bank = non_blank(self.firc_bank);
        self.bank_ref_number = non_blank(self.bank_ref_number);
        self.remarks = non_blank(self.remarks);
        Ok(self)
    }
}

impl Payment {
    /// Build a stored payment from validated input.
    ///
    /// Returns `None` when the input carries no order, which [`PaymentInput::validate`] rejects.
    #[must_use]
    pub fn from_input(id: PaymentId, input: PaymentInput, now: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            id,
            payment_reference: input.payment_reference,
            order_id: input.order_id?,
            customer_id: input.customer_id,
            invoice_number: input.invoice_number,
            invoice_date: input.invoice_date,
            invoice_amount: input.invoice_amount,
            invoice_currency: input.invoice_currency,
            payment_due_date: input.payment_due_date,
            payment_received_date: input.payment_received_date,
            amount_received: input.amount_received,
            received_currency: input.received_currency,
            exchange_rate_at_receipt: input.exchange_rate_at_receipt,
            inr_realized: input.inr_realized,
            bank_charges: input.bank_charges,
            firc_number: input.firc_number,
            firc_date: input.firc_date,
            firc_bank: input.firc_bank,
            payment_mode: input.payment_mode,
            bank_ref_number: input.bank_ref_number,
            remarks: input.remarks,
            status: input.status,
            created_at: now,
            updated_at: now,
            order: None,
            customer: None,
        })
    }

    /// Invoice amount not yet received.
    #[must_use]
    pub fn outstanding(&self) -> Decimal {
        self.invoice_amount.saturating_sub(self.amount_received)
    }

    /// INR realized after bank charges.
    #[must_use]
    pub fn net_inr(&self) -> Decimal {
        self.inr_realized.saturating_sub(self.bank_charges)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> PaymentInput {
        PaymentInput {
            payment_reference: "PAY-001".to_string(),
            order_id: Some(OrderId::generate()),
            invoice_amount: "25000".parse().unwrap(),
            amount_received: "10000".parse().unwrap(),
            ..PaymentInput::default()
        }
    }

    #[test]
    fn test_validate_requires_reference_and_order() {
        let err = PaymentInput {
            payment_reference: String::new(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "payment_reference");

        let err = PaymentInput {
            order_id: None,
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "order_id");
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let err = PaymentInput {
            amount_received: "-1".parse().unwrap(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "amount_received");
    }

    #[test]
    fn test_outstanding_and_net_inr() {
        let mut payment =
            Payment::from_input(PaymentId::generate(), input().validate().unwrap(), Utc::now())
                .unwrap();
        assert_eq!(payment.outstanding(), "15000".parse().unwrap());

        payment.inr_realized = "840000".parse().unwrap();
        payment.bank_charges = "1250.50".parse().unwrap();
        assert_eq!(payment.net_inr(), "838749.50".parse().unwrap());
    }

    #[test]
    fn test_from_input_without_order() {
        let input = PaymentInput {
            order_id: None,
            ..input()
        };
        assert!(Payment::from_input(PaymentId::generate(), input, Utc::now()).is_none());
    }

    #[test]
    fn test_amounts_must_fit_their_columns() {
        let err = PaymentInput {
            invoice_amount: "1000000000000".parse().unwrap(),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "invoice_amount");

        let err = PaymentInput {
            exchange_rate_at_receipt: Some("2500000".parse().unwrap()),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "exchange_rate_at_receipt");
    }
}
