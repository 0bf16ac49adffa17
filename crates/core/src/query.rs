//! List-page filters.
//!
//! Each filter is deserialized straight from the page's query string. A
//! selector that is absent, blank or `all` does not filter.

use serde::{Deserialize, Serialize};

use crate::models::{Customer, Inquiry, Order, Payment, Shipment, company_name};

/// A predicate over one kind of record.
pub trait ListFilter<T> {
    /// Whether `item` passes the filter.
    fn matches(&self, item: &T) -> bool;

    /// Keep the matching items, preserving order.
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Active value of a select box, if any.
fn selected(value: Option<&String>) -> Option<&str> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && *v != "all")
}

/// Lower-cased search needle, if any.
fn needle(q: Option<&String>) -> Option<String> {
    q.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty())
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn contains_opt(haystack: Option<&String>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains(h, needle))
}

/// Filters for the order list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFilter {
    pub q: Option<String>,
    pub status: Option<String>,
    pub currency: Option<String>,
}

impl ListFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        let search = needle(self.q.as_ref()).is_none_or(|n| {
            contains(&order.order_number, &n)
                || contains(&order.product_description, &n)
                || contains(company_name(order.customer.as_ref()), &n)
        });
        search
            && selected(self.status.as_ref()).is_none_or(|s| order.status.as_str() == s)
            && selected(self.currency.as_ref()).is_none_or(|c| order.currency == c)
    }
}

/// Filters for the customer list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFilter {
    pub q: Option<String>,
    pub country: Option<String>,
}

impl ListFilter<Customer> for CustomerFilter {
    fn matches(&self, customer: &Customer) -> bool {
        let search = needle(self.q.as_ref()).is_none_or(|n| {
            contains(&customer.company_name, &n)
                || contains_opt(customer.contact_person.as_ref(), &n)
                || contains_opt(customer.email.as_ref(), &n)
                || contains(&customer.country, &n)
        });
        search && selected(self.country.as_ref()).is_none_or(|c| customer.country == c)
    }
}

/// Filters for the payment tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentFilter {
    pub q: Option<String>,
    pub status: Option<String>,
    pub mode: Option<String>,
}

impl ListFilter<Payment> for PaymentFilter {
    fn matches(&self, payment: &Payment) -> bool {
        let search = needle(self.q.as_ref()).is_none_or(|n| {
            contains(&payment.payment_reference, &n)
                || contains_opt(payment.invoice_number.as_ref(), &n)
                || contains(company_name(payment.customer.as_ref()), &n)
        });
        search
            && selected(self.status.as_ref()).is_none_or(|s| payment.status.as_str() == s)
            && selected(self.mode.as_ref()).is_none_or(|m| payment.payment_mode.as_str() == m)
    }
}

/// Filters for the shipment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentFilter {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl ListFilter<Shipment> for ShipmentFilter {
    fn matches(&self, shipment: &Shipment) -> bool {
        let search = needle(self.q.as_ref()).is_none_or(|n| {
            contains(&shipment.shipment_number, &n)
                || contains_opt(shipment.vessel_name.as_ref(), &n)
                || contains_opt(shipment.bl_number.as_ref(), &n)
                || contains_opt(shipment.container_number.as_ref(), &n)
        });
        search && selected(self.status.as_ref()).is_none_or(|s| shipment.status.as_str() == s)
    }
}

/// Filters for the inquiry list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryFilter {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl ListFilter<Inquiry> for InquiryFilter {
    fn matches(&self, inquiry: &Inquiry) -> bool {
        let search = needle(self.q.as_ref()).is_none_or(|n| {
            contains(&inquiry.inquiry_number, &n)
                || contains(&inquiry.product_description, &n)
                || contains(company_name(inquiry.customer.as_ref()), &n)
        });
        search && selected(self.status.as_ref()).is_none_or(|s| inquiry.status.as_str() == s)
    }
}

/// Distinct customer countries, sorted.
#[must_use]
pub fn countries(customers: &[Customer]) -> Vec<String> {
    let mut countries: Vec<String> = customers.iter().map(|c| c.country.clone()).collect();
    countries.sort();
    countries.dedup();
    countries
}
