//! Exports of the (filtered) rows shown on the list pages.

use chrono::NaiveDate;

use crate::analytics::customer_summary;
use crate::models::{Customer, Inquiry, Order, Payment, Shipment, company_name};

use super::{Cell, Report};

fn dated_stem(entity: &str, today: NaiveDate) -> String {
    format!("{entity}-{}", today.format("%Y-%m-%d"))
}

/// Order list export.
#[must_use]
pub fn order_list(orders: &[&Order], today: NaiveDate) -> Report {
    let mut report = Report::new(
        "Orders",
        dated_stem("orders", today),
        "Orders",
        &[
            "Order Number",
            "Customer",
            "Order Date",
            "Product",
            "HSN Code",
            "Quantity",
            "Unit",
            "Unit Price",
            "Total Amount",
            "Currency",
            "Exchange Rate",
            "INR Value",
            "Delivery Terms",
            "Payment Terms",
            "LC Number",
            "LC Expiry",
            "Shipping Bill",
            "GST Invoice",
            "RoDTEP Claim",
            "RoDTEP Status",
            "Drawback Amount",
            "Status",
        ],
    );
    report.rows = orders
        .iter()
        .map(|o| {
            vec![
                Cell::text(&o.order_number),
                Cell::text(company_name(o.customer.as_ref())),
                Cell::Date(o.order_date),
                Cell::text(&o.product_description),
                Cell::opt_text(o.hsn_code.as_deref()),
                Cell::Decimal(o.quantity),
                Cell::text(&o.unit),
                Cell::Decimal(o.unit_price),
                Cell::Decimal(o.total_amount),
                Cell::text(&o.currency),
                Cell::Decimal(o.exchange_rate),
                Cell::opt_decimal(o.inr_value),
                Cell::text(&o.delivery_terms),
                Cell::text(&o.payment_terms),
                Cell::opt_text(o.lc_number.as_deref()),
                Cell::opt_date(o.lc_expiry_date),
                Cell::opt_text(o.shipping_bill_number.as_deref()),
                Cell::opt_text(o.gst_invoice_number.as_deref()),
                Cell::Decimal(o.rodtep_claim),
                Cell::text(o.rodtep_status.as_str()),
                Cell::Decimal(o.drawback_amount),
                Cell::text(o.status.as_str()),
            ]
        })
        .collect();
    report
}

/// Customer list export with ledger totals computed over all orders and payments.
#[must_use]
pub fn customer_list(
    customers: &[&Customer],
    orders: &[Order],
    payments: &[Payment],
    today: NaiveDate,
) -> Report {
    let mut report = Report::new(
        "Customers",
        dated_stem("customers", today),
        "Customers",
        &[
            "Company",
            "Contact",
            "Email",
            "Phone",
            "Country",
            "City",
            "GST Number",
            "PAN Number",
            "IEC Code",
            "Payment Terms",
            "Credit Limit",
            "Total Orders",
            "Total Ordered (USD)",
            "Outstanding (USD)",
            "Status",
        ],
    );
    report.rows = customers
        .iter()
        .map(|c| {
            let summary = customer_summary(c.id, orders, payments);
            vec![
                Cell::text(&c.company_name),
                Cell::opt_text(c.contact_person.as_deref()),
                Cell::opt_text(c.email.as_deref()),
                Cell::opt_text(c.phone.as_deref()),
                Cell::text(&c.country),
                Cell::opt_text(c.city.as_deref()),
                Cell::opt_text(c.gst_number.as_deref()),
                Cell::opt_text(c.pan_number.as_deref()),
                Cell::opt_text(c.iec_code.as_deref()),
                Cell::text(&c.payment_terms),
                Cell::Decimal(c.credit_limit),
                Cell::count(summary.order_count),
                Cell::Decimal(summary.total_ordered),
                Cell::Decimal(summary.outstanding),
                Cell::text(c.status.as_str()),
            ]
        })
        .collect();
    report
}

/// Payment list export.
#[must_use]
pub fn payment_list(payments: &[&Payment], today: NaiveDate) -> Report {
    let mut report = Report::new(
        "Payments",
        dated_stem("payments", today),
        "Payments",
        &[
            "Payment Ref",
            "Invoice #",
            "Invoice Date",
            "Invoice Amount",
            "Currency",
            "Due Date",
            "Received Date",
            "Amount Received",
            "Outstanding",
            "Overdue Days",
            "Payment Mode",
            "FIRC Number",
            "FIRC Date",
            "FIRC Bank",
            "INR Realized",
            "Bank Charges",
            "Status",
        ],
    );
    report.rows = payments
        .iter()
        .map(|p| {
            vec![
                Cell::text(&p.payment_reference),
                Cell::opt_text(p.invoice_number.as_deref()),
                Cell::opt_date(p.invoice_date),
                Cell::Decimal(p.invoice_amount),
                Cell::text(&p.invoice_currency),
                Cell::Date(p.payment_due_date),
                Cell::opt_date(p.payment_received_date),
                Cell::Decimal(p.amount_received),
                Cell::Decimal(p.outstanding()),
                Cell::Integer(p.overdue_days(today)),
                Cell::text(p.payment_mode.as_str()),
                Cell::opt_text(p.firc_number.as_deref()),
                Cell::opt_date(p.firc_date),
                Cell::opt_text(p.firc_bank.as_deref()),
                Cell::Decimal(p.inr_realized),
                Cell::Decimal(p.bank_charges),
                Cell::text(p.status.as_str()),
            ]
        })
        .collect();
    report
}

/// Shipment list export.
#[must_use]
pub fn shipment_list(shipments: &[&Shipment], today: NaiveDate) -> Report {
    let mut report = Report::new(
        "Shipments",
        dated_stem("shipments", today),
        "Shipments",
        &[
            "Shipment #",
            "Shipment Date",
            "Vessel",
            "Voyage #",
            "B/L Number",
            "B/L Date",
            "Container",
            "Container Size",
            "Shipping Line",
            "Origin Port",
            "Destination Port",
            "ETD",
            "ETA",
            "Freight Amount",
            "CHA Name",
            "Status",
        ],
    );
    report.rows = shipments
        .iter()
        .map(|s| {
            vec![
                Cell::text(&s.shipment_number),
                Cell::opt_date(s.shipment_date),
                Cell::opt_text(s.vessel_name.as_deref()),
                Cell::opt_text(s.voyage_number.as_deref()),
                Cell::opt_text(s.bl_number.as_deref()),
                Cell::opt_date(s.bl_date),
                Cell::opt_text(s.container_number.as_deref()),
                Cell::text(&s.container_size),
                Cell::opt_text(s.shipping_line.as_deref()),
                Cell::opt_text(s.origin_port.as_deref()),
                Cell::opt_text(s.destination_port.as_deref()),
                Cell::opt_date(s.etd),
                Cell::opt_date(s.eta),
                Cell::Decimal(s.freight_amount),
                Cell::opt_text(s.cha_name.as_deref()),
                Cell::text(s.status.as_str()),
            ]
        })
        .collect();
    report
}

/// Inquiry list export.
#[must_use]
pub fn inquiry_list(inquiries: &[&Inquiry], today: NaiveDate) -> Report {
    let mut report = Report::new(
        "Inquiries",
        dated_stem("inquiries", today),
        "Inquiries",
        &[
            "Inquiry #",
            "Customer",
            "Date",
            "Product",
            "Quantity",
            "Unit",
            "Target Price",
            "Currency",
            "Delivery Terms",
            "Destination Port",
            "Follow Up",
            "Status",
        ],
    );
    report.rows = inquiries
        .iter()
        .map(|i| {
            vec![
                Cell::text(&i.inquiry_number),
                Cell::text(company_name(i.customer.as_ref())),
                Cell::Date(i.inquiry_date),
                Cell::text(&i.product_description),
                Cell::opt_decimal(i.quantity),
                Cell::text(&i.unit),
                Cell::opt_decimal(i.target_price),
                Cell::text(&i.currency),
                Cell::text(&i.delivery_terms),
                Cell::opt_text(i.destination_port.as_deref()),
                Cell::opt_date(i.follow_up_date),
                Cell::text(i.status.as_str()),
            ]
        })
        .collect();
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::ShipmentInput;
    use crate::types::{OrderId, ShipmentId};

    #[test]
    fn test_list_export_is_dated() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        let input = ShipmentInput {
            shipment_number: "SHP-7".to_string(),
            order_id: Some(OrderId::generate()),
            ..ShipmentInput::default()
        };
        let shipment = Shipment::from_input(ShipmentId::generate(), input, Utc::now()).unwrap();

        let report = shipment_list(&[&shipment], today);
        assert_eq!(report.file_stem, "shipments-2026-02-07");
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].len(), report.headers.len());
        assert_eq!(report.rows[0][7].to_string(), "20FT");
    }

    #[test]
    fn test_empty_list_export() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        assert!(order_list(&[], today).is_empty());
        assert!(customer_list(&[], &[], &[], today).is_empty());
    }
}
