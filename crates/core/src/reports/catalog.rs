//! Column layouts and row builders for the report catalogue.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::analytics::{AgingBucket, customer_summary};
use crate::models::company_name;
use crate::types::{CustomerId, PaymentStatus};

use super::{Cell, ReportKind, ReportSources};

pub(super) const fn headers(kind: ReportKind) -> &'static [&'static str] {
    match kind {
        ReportKind::OrderSummary => &[
            "Order #",
            "Customer",
            "Country",
            "Date",
            "Product",
            "HSN Code",
            "Qty",
            "Unit",
            "Unit Price",
            "Total",
            "Currency",
            "INR Value",
            "Delivery Terms",
            "Payment Terms",
            "Status",
        ],
        ReportKind::PaymentAging => &[
            "Payment Ref",
            "Customer",
            "Invoice #",
            "Invoice Amount",
            "Currency",
            "Due Date",
            "Amount Received",
            "Outstanding",
            "Overdue Days",
            "Aging Bucket",
            "Mode",
            "Status",
        ],
        ReportKind::ShipmentTracker => &[
            "Shipment #",
            "Date",
            "Vessel",
            "Voyage #",
            "B/L #",
            "B/L Date",
            "Container",
            "Size",
            "Shipping Line",
            "Origin Port",
            "Dest Port",
            "ETD",
            "ETA",
            "Freight",
            "Insurance",
            "CHA",
            "Status",
        ],
        ReportKind::CustomerLedger => &[
            "Company",
            "Country",
            "Contact",
            "Email",
            "Phone",
            "GST Number",
            "IEC Code",
            "Total Orders",
            "Total Ordered (USD)",
            "Total Invoiced (USD)",
            "Total Received (USD)",
            "Outstanding (USD)",
            "Credit Limit",
            "Status",
        ],
        ReportKind::FircReport => &[
            "Payment Ref",
            "FIRC Number",
            "FIRC Date",
            "FIRC Bank",
            "Invoice #",
            "Amount (USD)",
            "Exchange Rate",
            "INR Realized",
            "Bank Charges",
            "Net INR",
            "Mode",
        ],
        ReportKind::RodtepDrawback => &[
            "Order #",
            "Customer",
            "Product",
            "HSN Code",
            "Order Value (USD)",
            "Shipping Bill",
            "SB Date",
            "RoDTEP Amount",
            "RoDTEP Status",
            "Drawback Amount",
            "Drawback Status",
            "Total Incentives",
        ],
        ReportKind::MonthlySales => &[
            "Month",
            "Order Count",
            "Total USD",
            "Total INR",
            "Avg Order USD",
        ],
        ReportKind::CountryWise => &[
            "Country",
            "Total Orders",
            "Total Value (USD)",
            "Unique Customers",
            "Avg Order Value",
        ],
        ReportKind::LcTracker => &[
            "Order #",
            "Customer",
            "LC Number",
            "LC Date",
            "LC Expiry",
            "Days to Expiry",
            "LC Amount",
            "LC Bank",
            "Order Amount",
            "Currency",
            "Alert",
            "Status",
        ],
        ReportKind::InquiryConversion => &[
            "Inquiry #",
            "Customer",
            "Date",
            "Product",
            "Quantity",
            "Target Price",
            "Currency",
            "Quotation #",
            "Quoted Price",
            "Quoted Amount",
            "Inquiry Status",
            "Quote Status",
            "Follow Up",
        ],
    }
}

pub(super) fn rows(kind: ReportKind, src: &ReportSources<'_>, today: NaiveDate) -> Vec<Vec<Cell>> {
    match kind {
        ReportKind::OrderSummary => order_summary(src),
        ReportKind::PaymentAging => payment_aging(src, today),
        ReportKind::ShipmentTracker => shipment_tracker(src),
        ReportKind::CustomerLedger => customer_ledger(src),
        ReportKind::FircReport => firc(src),
        ReportKind::RodtepDrawback => rodtep_drawback(src),
        ReportKind::MonthlySales => monthly_sales(src),
        ReportKind::CountryWise => country_wise(src),
        ReportKind::LcTracker => lc_tracker(src, today),
        ReportKind::InquiryConversion => inquiry_conversion(src),
    }
}

/// Whole-unit average, `0` for an empty group.
fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn order_summary(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    src.orders
        .iter()
        .map(|o| {
            vec![
                Cell::text(&o.order_number),
                Cell::text(company_name(o.customer.as_ref())),
                Cell::text(o.customer.as_ref().map_or("", |c| c.country.as_str())),
                Cell::Date(o.order_date),
                Cell::text(&o.product_description),
                Cell::opt_text(o.hsn_code.as_deref()),
                Cell::Decimal(o.quantity),
                Cell::text(&o.unit),
                Cell::Decimal(o.unit_price),
                Cell::Decimal(o.total_amount),
                Cell::text(&o.currency),
                Cell::opt_decimal(o.inr_value),
                Cell::text(&o.delivery_terms),
                Cell::text(&o.payment_terms),
                Cell::text(o.status.as_str()),
            ]
        })
        .collect()
}

fn payment_aging(src: &ReportSources<'_>, today: NaiveDate) -> Vec<Vec<Cell>> {
    src.payments
        .iter()
        .filter(|p| p.status != PaymentStatus::Received)
        .map(|p| {
            let days = p.overdue_days(today);
            vec![
                Cell::text(&p.payment_reference),
                Cell::text(company_name(p.customer.as_ref())),
                Cell::opt_text(p.invoice_number.as_deref()),
                Cell::Decimal(p.invoice_amount),
                Cell::text(&p.invoice_currency),
                Cell::Date(p.payment_due_date),
                Cell::Decimal(p.amount_received),
                Cell::Decimal(p.outstanding()),
                Cell::Integer(days),
                Cell::text(AgingBucket::for_days(days).short_label()),
                Cell::text(p.payment_mode.as_str()),
                Cell::text(p.status.as_str()),
            ]
        })
        .collect()
}

fn shipment_tracker(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    src.shipments
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
                Cell::Decimal(s.insurance_amount),
                Cell::opt_text(s.cha_name.as_deref()),
                Cell::text(s.status.as_str()),
            ]
        })
        .collect()
}

fn customer_ledger(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    src.customers
        .iter()
        .map(|c| {
            let summary = customer_summary(c.id, src.orders, src.payments);
            vec![
                Cell::text(&c.company_name),
                Cell::text(&c.country),
                Cell::opt_text(c.contact_person.as_deref()),
                Cell::opt_text(c.email.as_deref()),
                Cell::opt_text(c.phone.as_deref()),
                Cell::opt_text(c.gst_number.as_deref()),
                Cell::opt_text(c.iec_code.as_deref()),
                Cell::count(summary.order_count),
                Cell::Decimal(summary.total_ordered),
                Cell::Decimal(summary.total_invoiced),
                Cell::Decimal(summary.total_received),
                Cell::Decimal(summary.outstanding),
                Cell::Decimal(c.credit_limit),
                Cell::text(c.status.as_str()),
            ]
        })
        .collect()
}

fn firc(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    src.payments
        .iter()
        .filter(|p| p.firc_number.is_some() || p.status == PaymentStatus::Received)
        .map(|p| {
            vec![
                Cell::text(&p.payment_reference),
                Cell::text(p.firc_number.as_deref().unwrap_or("PENDING")),
                Cell::opt_date(p.firc_date),
                Cell::opt_text(p.firc_bank.as_deref()),
                Cell::opt_text(p.invoice_number.as_deref()),
                Cell::Decimal(p.amount_received),
                Cell::opt_decimal(p.exchange_rate_at_receipt),
                Cell::Decimal(p.inr_realized),
                Cell::Decimal(p.bank_charges),
                Cell::Decimal(p.net_inr()),
                Cell::text(p.payment_mode.as_str()),
            ]
        })
        .collect()
}

fn rodtep_drawback(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    src.orders
        .iter()
        .filter(|o| o.has_incentives())
        .map(|o| {
            vec![
                Cell::text(&o.order_number),
                Cell::text(company_name(o.customer.as_ref())),
                Cell::text(&o.product_description),
                Cell::opt_text(o.hsn_code.as_deref()),
                Cell::Decimal(o.total_amount),
                Cell::opt_text(o.shipping_bill_number.as_deref()),
                Cell::opt_date(o.shipping_bill_date),
                Cell::Decimal(o.rodtep_claim),
                Cell::text(o.rodtep_status.as_str()),
                Cell::Decimal(o.drawback_amount),
                Cell::text(o.drawback_status.as_str()),
                Cell::Decimal(o.total_incentives()),
            ]
        })
        .collect()
}

#[derive(Default)]
struct MonthTotals {
    count: usize,
    total: Decimal,
    total_inr: Decimal,
}

fn monthly_sales(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    let mut months: BTreeMap<String, MonthTotals> = BTreeMap::new();
    for order in src.orders {
        let entry = months
            .entry(order.order_date.format("%Y-%m").to_string())
            .or_default();
        entry.count += 1;
        entry.total = entry.total.saturating_add(order.total_amount);
        entry.total_inr = entry
            .total_inr
            .saturating_add(order.inr_value.unwrap_or_default());
    }

    months
        .into_iter()
        .map(|(month, totals)| {
            vec![
                Cell::Text(month),
                Cell::count(totals.count),
                Cell::Decimal(totals.total),
                Cell::Decimal(totals.total_inr),
                Cell::Decimal(average(totals.total, totals.count)),
            ]
        })
        .collect()
}

#[derive(Default)]
struct CountryTotals {
    count: usize,
    total: Decimal,
    customers: BTreeSet<CustomerId>,
}

fn country_wise(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    let mut countries: BTreeMap<String, CountryTotals> = BTreeMap::new();
    for order in src.orders {
        let country = order
            .customer
            .as_ref()
            .map_or_else(|| "Unknown".to_string(), |c| c.country.clone());
        let entry = countries.entry(country).or_default();
        entry.count += 1;
        entry.total = entry.total.saturating_add(order.total_amount);
        if let Some(customer_id) = order.customer_id {
            entry.customers.insert(customer_id);
        }
    }

    let mut ranked: Vec<(String, CountryTotals)> = countries.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    ranked
        .into_iter()
        .map(|(country, totals)| {
            vec![
                Cell::Text(country),
                Cell::count(totals.count),
                Cell::Decimal(totals.total),
                Cell::count(totals.customers.len()),
                Cell::Decimal(average(totals.total, totals.count)),
            ]
        })
        .collect()
}

/// LC tracker alert: URGENT under 15 days, Warning under 30.
fn lc_alert(days_to_expiry: Option<i64>) -> &'static str {
    match days_to_expiry {
        Some(days) if days < 15 => "URGENT",
        Some(days) if days < 30 => "Warning",
        _ => "OK",
    }
}

fn lc_tracker(src: &ReportSources<'_>, today: NaiveDate) -> Vec<Vec<Cell>> {
    src.orders
        .iter()
        .filter(|o| o.lc_number.is_some())
        .map(|o| {
            let days = o.lc_expiry_date.map(|expiry| (expiry - today).num_days());
            vec![
                Cell::text(&o.order_number),
                Cell::text(company_name(o.customer.as_ref())),
                Cell::opt_text(o.lc_number.as_deref()),
                Cell::opt_date(o.lc_date),
                Cell::opt_date(o.lc_expiry_date),
                days.map_or(Cell::Blank, Cell::Integer),
                Cell::opt_decimal(o.lc_amount),
                Cell::opt_text(o.lc_bank.as_deref()),
                Cell::Decimal(o.total_amount),
                Cell::text(&o.currency),
                Cell::text(lc_alert(days)),
                Cell::text(o.status.as_str()),
            ]
        })
        .collect()
}

fn inquiry_conversion(src: &ReportSources<'_>) -> Vec<Vec<Cell>> {
    let dash = || Cell::text("-");
    src.inquiries
        .iter()
        .map(|inq| {
            let quote = src
                .quotations
                .iter()
                .find(|q| q.inquiry_id == Some(inq.id));
            vec![
                Cell::text(&inq.inquiry_number),
                Cell::text(company_name(inq.customer.as_ref())),
                Cell::Date(inq.inquiry_date),
                Cell::text(&inq.product_description),
                Cell::opt_decimal(inq.quantity),
                Cell::opt_decimal(inq.target_price),
                Cell::text(&inq.currency),
                quote.map_or_else(dash, |q| Cell::text(&q.quotation_number)),
                quote.map_or_else(dash, |q| Cell::Decimal(q.unit_price)),
                quote
                    .and_then(|q| q.total_amount)
                    .filter(|total| !total.is_zero())
                    .map_or_else(dash, Cell::Decimal),
                Cell::text(inq.status.as_str()),
                quote.map_or_else(dash, |q| Cell::text(q.status.as_str())),
                Cell::opt_date(inq.follow_up_date),
            ]
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use super::super::build;
    use super::*;
    use crate::models::{
        Customer, CustomerInput, CustomerRef, Inquiry, InquiryInput, Order, OrderInput, Payment,
        PaymentInput, Quotation, QuotationInput,
    };
    use crate::types::{InquiryId, OrderId, PaymentId, QuotationId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn customer(name: &str, country: &str) -> Customer {
        let input = CustomerInput {
            company_name: name.to_string(),
            country: country.to_string(),
            ..CustomerInput::default()
        };
        Customer::from_input(CustomerId::generate(), input, Utc::now())
    }

    fn order(number: &str, buyer: Option<&Customer>, date: NaiveDate, total: &str) -> Order {
        let input = OrderInput {
            order_number: number.to_string(),
            customer_id: buyer.map(|c| c.id),
            order_date: date,
            total_amount: dec(total),
            inr_value: Some(dec(total) * dec("84")),
            ..OrderInput::default()
        };
        let mut order = Order::from_input(OrderId::generate(), input, Utc::now());
        order.customer = buyer.map(CustomerRef::from);
        order
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn column(report: &super::super::Report, header: &str) -> Vec<String> {
        let index = report.headers.iter().position(|h| *h == header).unwrap();
        report.rows.iter().map(|row| row[index].to_string()).collect()
    }

    #[test]
    fn test_headers_match_row_width() {
        let acme = customer("Acme", "UAE");
        let orders = vec![order("EXP-1", Some(&acme), date(6, 1), "100")];
        let customers = vec![acme];
        let sources = ReportSources {
            customers: &customers,
            orders: &orders,
            ..ReportSources::default()
        };
        for kind in [
            ReportKind::OrderSummary,
            ReportKind::CustomerLedger,
            ReportKind::MonthlySales,
            ReportKind::CountryWise,
        ] {
            let report = build(kind, &sources, today());
            assert_eq!(report.rows.len(), 1, "{kind}");
            assert_eq!(report.rows[0].len(), report.headers.len(), "{kind}");
        }
    }

    #[test]
    fn test_monthly_sales_sorted_with_rounded_average() {
        let orders = vec![
            order("A", None, date(6, 3), "100"),
            order("B", None, date(5, 20), "1000"),
            order("C", None, date(6, 9), "51"),
        ];
        let sources = ReportSources {
            orders: &orders,
            ..ReportSources::default()
        };
        let report = build(ReportKind::MonthlySales, &sources, today());
        assert_eq!(column(&report, "Month"), vec!["2026-05", "2026-06"]);
        assert_eq!(column(&report, "Order Count"), vec!["1", "2"]);
        assert_eq!(column(&report, "Avg Order USD"), vec!["1000", "76"]);
    }

    #[test]
    fn test_country_wise_ranks_by_value() {
        let acme = customer("Acme", "UAE");
        let baltic = customer("Baltic", "Germany");
        let orders = vec![
            order("A", Some(&acme), date(6, 1), "100"),
            order("B", Some(&acme), date(6, 2), "300"),
            order("C", Some(&baltic), date(6, 3), "5000"),
            order("D", None, date(6, 4), "10"),
        ];
        let sources = ReportSources {
            orders: &orders,
            ..ReportSources::default()
        };
        let report = build(ReportKind::CountryWise, &sources, today());
        assert_eq!(column(&report, "Country"), vec!["Germany", "UAE", "Unknown"]);
        assert_eq!(column(&report, "Unique Customers"), vec!["1", "1", "0"]);
        assert_eq!(column(&report, "Avg Order Value"), vec!["5000", "200", "10"]);
    }

    #[test]
    fn test_lc_tracker_alerts() {
        let mut orders = vec![
            order("A", None, date(6, 1), "1"),
            order("B", None, date(6, 1), "1"),
            order("C", None, date(6, 1), "1"),
            order("D", None, date(6, 1), "1"),
            order("E", None, date(6, 1), "1"),
        ];
        for (order, expiry) in orders.iter_mut().zip([Some(3), Some(20), Some(45), None]) {
            order.lc_number = Some(format!("LC-{}", order.order_number));
            order.lc_expiry_date = expiry.map(|d| today() + Duration::days(d));
        }
        let sources = ReportSources {
            orders: &orders,
            ..ReportSources::default()
        };
        let report = build(ReportKind::LcTracker, &sources, today());
        assert_eq!(column(&report, "Alert"), vec!["URGENT", "Warning", "OK", "OK"]);
        assert_eq!(column(&report, "Days to Expiry"), vec!["3", "20", "45", ""]);
    }

    #[test]
    fn test_payment_aging_and_firc() {
        let make = |reference: &str, overdue: i64, status: PaymentStatus, firc: Option<&str>| {
            let input = PaymentInput {
                payment_reference: reference.to_string(),
                order_id: Some(OrderId::generate()),
                invoice_amount: dec("1000"),
                amount_received: dec("400"),
                inr_realized: dec("33600"),
                bank_charges: dec("600"),
                payment_due_date: today() - Duration::days(overdue),
                firc_number: firc.map(str::to_string),
                status,
                ..PaymentInput::default()
            };
            Payment::from_input(PaymentId::generate(), input, Utc::now()).unwrap()
        };
        let payments = vec![
            make("P1", 75, PaymentStatus::Partial, None),
            make("P2", 10, PaymentStatus::Received, None),
            make("P3", 0, PaymentStatus::Pending, Some("FIRC-9")),
        ];
        let sources = ReportSources {
            payments: &payments,
            ..ReportSources::default()
        };

        let aging = build(ReportKind::PaymentAging, &sources, today());
        assert_eq!(column(&aging, "Payment Ref"), vec!["P1", "P3"]);
        assert_eq!(column(&aging, "Aging Bucket"), vec!["60-90", "0-30"]);
        assert_eq!(column(&aging, "Outstanding"), vec!["600", "600"]);

        let firc = build(ReportKind::FircReport, &sources, today());
        assert_eq!(column(&firc, "Payment Ref"), vec!["P2", "P3"]);
        assert_eq!(column(&firc, "FIRC Number"), vec!["PENDING", "FIRC-9"]);
        assert_eq!(column(&firc, "Net INR"), vec!["33000", "33000"]);
    }

    #[test]
    fn test_inquiry_conversion_links_first_quotation() {
        let quoted = Inquiry::from_input(
            InquiryId::generate(),
            InquiryInput {
                inquiry_number: "INQ-1".to_string(),
                product_description: "Cardamom".to_string(),
                ..InquiryInput::default()
            },
            Utc::now(),
        );
        let open = Inquiry::from_input(
            InquiryId::generate(),
            InquiryInput {
                inquiry_number: "INQ-2".to_string(),
                product_description: "Clove".to_string(),
                ..InquiryInput::default()
            },
            Utc::now(),
        );
        let quotation = Quotation::from_input(
            QuotationId::generate(),
            QuotationInput {
                quotation_number: "QT-1".to_string(),
                inquiry_id: Some(quoted.id),
                product_description: "Cardamom".to_string(),
                unit_price: dec("14.5"),
                ..QuotationInput::default()
            },
            Utc::now(),
        );
        let inquiries = vec![quoted, open];
        let quotations = vec![quotation];
        let sources = ReportSources {
            inquiries: &inquiries,
            quotations: &quotations,
            ..ReportSources::default()
        };
        let report = build(ReportKind::InquiryConversion, &sources, today());
        assert_eq!(column(&report, "Quotation #"), vec!["QT-1", "-"]);
        assert_eq!(column(&report, "Quoted Price"), vec!["14.5", "-"]);
        assert_eq!(column(&report, "Quoted Amount"), vec!["-", "-"]);
        assert_eq!(column(&report, "Quote Status"), vec!["draft", "-"]);
    }

    #[test]
    fn test_inquiry_conversion_hides_zero_quoted_amount() {
        let inquiries: Vec<Inquiry> = ["INQ-1", "INQ-2"]
            .into_iter()
            .map(|number| {
                Inquiry::from_input(
                    InquiryId::generate(),
                    InquiryInput {
                        inquiry_number: number.to_string(),
                        product_description: "Turmeric".to_string(),
                        ..InquiryInput::default()
                    },
                    Utc::now(),
                )
            })
            .collect();
        let quotations: Vec<Quotation> = inquiries
            .iter()
            .zip([Decimal::ZERO, dec("2400")])
            .map(|(inquiry, total)| {
                Quotation::from_input(
                    QuotationId::generate(),
                    QuotationInput {
                        quotation_number: format!("QT-{}", inquiry.inquiry_number),
                        inquiry_id: Some(inquiry.id),
                        product_description: "Turmeric".to_string(),
                        unit_price: dec("1.2"),
                        total_amount: Some(total),
                        ..QuotationInput::default()
                    },
                    Utc::now(),
                )
            })
            .collect();
        let sources = ReportSources {
            inquiries: &inquiries,
            quotations: &quotations,
            ..ReportSources::default()
        };
        let report = build(ReportKind::InquiryConversion, &sources, today());
        assert_eq!(column(&report, "Quoted Amount"), vec!["-", "2400"]);
    }
}
