//! Tracked business records.
//!
//! Each record has a stored form (`Customer`, `Order`, ...) and an input form
//! (`CustomerInput`, `OrderInput`, ...) used for both create and full update.
//! Stored records may carry optional denormalized references (`customer`,
//! `order`, `inquiry`) that the data layer fills in on reads.

pub mod customer;
pub mod inquiry;
pub mod order;
pub mod payment;
pub mod quotation;
pub mod shipment;

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, InquiryId, OrderId};

pub use customer::{Customer, CustomerInput};
pub use inquiry::{Inquiry, InquiryInput};
pub use order::{Order, OrderInput};
pub use payment::{Payment, PaymentInput};
pub use quotation::{Quotation, QuotationInput};
pub use shipment::{Shipment, ShipmentInput};

/// Denormalized customer reference joined onto dependent records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub company_name: String,
    pub country: String,
}

impl From<&Customer> for CustomerRef {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            company_name: customer.company_name.clone(),
            country: customer.country.clone(),
        }
    }
}

/// Denormalized order reference joined onto payments and shipments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: OrderId,
    pub order_number: String,
}

impl From<&Order> for OrderRef {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.clone(),
        }
    }
}

/// Denormalized inquiry reference joined onto quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRef {
    pub id: InquiryId,
    pub inquiry_number: String,
}

impl From<&Inquiry> for InquiryRef {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id,
            inquiry_number: inquiry.inquiry_number.clone(),
        }
    }
}

/// Company name of a joined customer, or an empty string.
#[must_use]
pub fn company_name(customer: Option<&CustomerRef>) -> &str {
    customer.map_or("", |c| c.company_name.as_str())
}

/// Trim a free-text field, mapping blank input to `None`.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" HDFC ".to_string())), Some("HDFC".to_string()));
    }
}
