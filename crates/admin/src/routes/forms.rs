//! HTML form payloads.
//!
//! Browsers submit every field as text (blank for untouched inputs), so the
//! forms here keep raw strings. That lets a rejected submission be rendered
//! back exactly as typed, and parsing failures surface as a
//! [`ValidationError`] naming the field instead of a generic 400.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use export_tracker_core::models::{CustomerInput, OrderInput, non_blank};
use export_tracker_core::{CustomerId, QuotationId, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Field parsing
// =============================================================================

fn text(value: &str) -> Option<String> {
    non_blank(Some(value.to_string()))
}

/// Blank input reads as zero.
fn decimal(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    Ok(opt_decimal(field, value)?.unwrap_or(Decimal::ZERO))
}

fn opt_decimal(field: &'static str, value: &str) -> Result<Option<Decimal>, ValidationError> {
    let value = value.trim().replace(',', "");
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::new(field, "must be a number"))
}

fn date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    opt_date(field, value)?.ok_or_else(|| ValidationError::required(field))
}

fn opt_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::new(field, "must be a date (YYYY-MM-DD)"))
}

/// A select value; blank falls back to the type's default.
fn choice<T: FromStr + Default>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse()
        .map_err(|_| ValidationError::new(field, "is not a valid option"))
}

fn opt_uuid(field: &'static str, value: &str) -> Result<Option<Uuid>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(value)
        .map(Some)
        .map_err(|_| ValidationError::new(field, "is not a valid selection"))
}

fn show_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn show_decimal(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn show_text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

// =============================================================================
// Order form
// =============================================================================

/// Order create/edit form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub order_number: String,
    pub quotation_id: String,
    pub customer_id: String,
    pub order_date: String,
    pub product_description: String,
    pub hsn_code: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub currency: String,
    pub exchange_rate: String,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub lc_number: String,
    pub lc_date: String,
    pub lc_expiry_date: String,
    pub lc_amount: String,
    pub lc_bank: String,
    pub destination_port: String,
    pub origin_port: String,
    pub shipping_bill_number: String,
    pub shipping_bill_date: String,
    pub gst_invoice_number: String,
    pub gst_invoice_date: String,
    pub gst_amount: String,
    pub igst_amount: String,
    pub rodtep_claim: String,
    pub rodtep_status: String,
    pub drawback_amount: String,
    pub drawback_status: String,
    pub remarks: String,
    pub status: String,
}

impl From<&OrderInput> for OrderForm {
    fn from(input: &OrderInput) -> Self {
        Self {
            order_number: input.order_number.clone(),
            quotation_id: input
                .quotation_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            customer_id: input
                .customer_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            order_date: show_date(Some(input.order_date)),
            product_description: input.product_description.clone(),
            hsn_code: show_text(input.hsn_code.as_ref()),
            quantity: show_decimal(Some(input.quantity)),
            unit: input.unit.clone(),
            unit_price: show_decimal(Some(input.unit_price)),
            currency: input.currency.clone(),
            exchange_rate: show_decimal(Some(input.exchange_rate)),
            delivery_terms: input.delivery_terms.clone(),
            payment_terms: input.payment_terms.clone(),
            lc_number: show_text(input.lc_number.as_ref()),
            lc_date: show_date(input.lc_date),
            lc_expiry_date: show_date(input.lc_expiry_date),
            lc_amount: show_decimal(input.lc_amount),
            lc_bank: show_text(input.lc_bank.as_ref()),
            destination_port: show_text(input.destination_port.as_ref()),
            origin_port: input.origin_port.clone(),
            shipping_bill_number: show_text(input.shipping_bill_number.as_ref()),
            shipping_bill_date: show_date(input.shipping_bill_date),
            gst_invoice_number: show_text(input.gst_invoice_number.as_ref()),
            gst_invoice_date: show_date(input.gst_invoice_date),
            gst_amount: show_decimal(Some(input.gst_amount)),
            igst_amount: show_decimal(Some(input.igst_amount)),
            rodtep_claim: show_decimal(Some(input.rodtep_claim)),
            rodtep_status: input.rodtep_status.as_str().to_string(),
            drawback_amount: show_decimal(Some(input.drawback_amount)),
            drawback_status: input.drawback_status.as_str().to_string(),
            remarks: show_text(input.remarks.as_ref()),
            status: input.status.as_str().to_string(),
        }
    }
}

impl OrderForm {
    /// Parse and validate the submission, computing totals from quantity,
    /// unit price and exchange rate.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn parse(&self) -> Result<OrderInput, ValidationError> {
        let defaults = OrderInput::default();
        let or_default = |value: &str, default: String| text(value).unwrap_or(default);

        let input = OrderInput {
            order_number: self.order_number.clone(),
            quotation_id: opt_uuid("quotation_id", &self.quotation_id)?.map(QuotationId::new),
            customer_id: opt_uuid("customer_id", &self.customer_id)?.map(CustomerId::new),
            order_date: date("order_date", &self.order_date)?,
            product_description: self.product_description.clone(),
            hsn_code: text(&self.hsn_code),
            quantity: decimal("quantity", &self.quantity)?,
            unit: or_default(&self.unit, defaults.unit),
            unit_price: decimal("unit_price", &self.unit_price)?,
            total_amount: Decimal::ZERO,
            currency: or_default(&self.currency, defaults.currency),
            exchange_rate: opt_decimal("exchange_rate", &self.exchange_rate)?
                .unwrap_or(defaults.exchange_rate),
            inr_value: None,
            delivery_terms: or_default(&self.delivery_terms, defaults.delivery_terms),
            payment_terms: or_default(&self.payment_terms, defaults.payment_terms),
            lc_number: text(&self.lc_number),
            lc_date: opt_date("lc_date", &self.lc_date)?,
            lc_expiry_date: opt_date("lc_expiry_date", &self.lc_expiry_date)?,
            lc_amount: opt_decimal("lc_amount", &self.lc_amount)?,
            lc_bank: text(&self.lc_bank),
            destination_port: text(&self.destination_port),
            origin_port: or_default(&self.origin_port, defaults.origin_port),
            shipping_bill_number: text(&self.shipping_bill_number),
            shipping_bill_date: opt_date("shipping_bill_date", &self.shipping_bill_date)?,
            gst_invoice_number: text(&self.gst_invoice_number),
            gst_invoice_date: opt_date("gst_invoice_date", &self.gst_invoice_date)?,
            gst_amount: decimal("gst_amount", &self.gst_amount)?,
            igst_amount: decimal("igst_amount", &self.igst_amount)?,
            rodtep_claim: decimal("rodtep_claim", &self.rodtep_claim)?,
            rodtep_status: choice("rodtep_status", &self.rodtep_status)?,
            drawback_amount: decimal("drawback_amount", &self.drawback_amount)?,
            drawback_status: choice("drawback_status", &self.drawback_status)?,
            remarks: text(&self.remarks),
            status: choice("status", &self.status)?,
        };
        input.with_computed_totals().validate()
    }
}

// =============================================================================
// Customer form
// =============================================================================

/// Customer create form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub gst_number: String,
    pub pan_number: String,
    pub iec_code: String,
    pub payment_terms: String,
    pub credit_limit: String,
    pub notes: String,
    pub status: String,
}

impl CustomerForm {
    /// Parse and validate the submission.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn parse(&self) -> Result<CustomerInput, ValidationError> {
        let defaults = CustomerInput::default();
        CustomerInput {
            company_name: self.company_name.clone(),
            contact_person: text(&self.contact_person),
            email: text(&self.email),
            phone: text(&self.phone),
            country: self.country.clone(),
            city: text(&self.city),
            address: text(&self.address),
            gst_number: text(&self.gst_number),
            pan_number: text(&self.pan_number),
            iec_code: text(&self.iec_code),
            payment_terms: text(&self.payment_terms).unwrap_or(defaults.payment_terms),
            credit_limit: decimal("credit_limit", &self.credit_limit)?,
            notes: text(&self.notes),
            status: choice("status", &self.status)?,
        }
        .validate()
    }
}
