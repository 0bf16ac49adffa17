//! Tabular reports for spreadsheet download.
//!
//! A [`Report`] is format-agnostic: a header row and typed cells. The admin
//! crate writes it out as CSV.

mod catalog;
mod lists;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Customer, Inquiry, Order, Payment, Quotation, Shipment};

pub use lists::{customer_list, inquiry_list, order_list, payment_list, shipment_list};

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Decimal(Decimal),
    Integer(i64),
    Date(NaiveDate),
    Blank,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text cell, blank when absent.
    #[must_use]
    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Self::Blank, |v| Self::Text(v.to_string()))
    }

    /// Date cell, blank when absent.
    #[must_use]
    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Blank, Self::Date)
    }

    /// Decimal cell, blank when absent.
    #[must_use]
    pub fn opt_decimal(value: Option<Decimal>) -> Self {
        value.map_or(Self::Blank, Self::Decimal)
    }

    /// Count cell.
    #[must_use]
    pub fn count(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Blank => Ok(()),
        }
    }
}

/// A finished report: header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    /// Download file name without extension.
    pub file_stem: String,
    pub sheet_name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    fn new(title: &str, file_stem: impl Into<String>, sheet_name: &str, headers: &[&'static str]) -> Self {
        Self {
            title: title.to_string(),
            file_stem: file_stem.into(),
            sheet_name: sheet_name.to_string(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Whether the report has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Error returned for an unknown report slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report: {0}")]
pub struct UnknownReport(pub String);

/// The report catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    OrderSummary,
    PaymentAging,
    ShipmentTracker,
    CustomerLedger,
    FircReport,
    RodtepDrawback,
    MonthlySales,
    CountryWise,
    LcTracker,
    InquiryConversion,
}

impl ReportKind {
    pub const ALL: [Self; 10] = [
        Self::OrderSummary,
        Self::PaymentAging,
        Self::ShipmentTracker,
        Self::CustomerLedger,
        Self::FircReport,
        Self::RodtepDrawback,
        Self::MonthlySales,
        Self::CountryWise,
        Self::LcTracker,
        Self::InquiryConversion,
    ];

    /// URL slug (`/reports/{slug}`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::OrderSummary => "order-summary",
            Self::PaymentAging => "payment-aging",
            Self::ShipmentTracker => "shipment-tracker",
            Self::CustomerLedger => "customer-ledger",
            Self::FircReport => "firc-report",
            Self::RodtepDrawback => "rodtep-drawback",
            Self::MonthlySales => "monthly-sales",
            Self::CountryWise => "country-wise",
            Self::LcTracker => "lc-tracker",
            Self::InquiryConversion => "inquiry-conversion",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::OrderSummary => "Order Summary Report",
            Self::PaymentAging => "Payment Aging Report",
            Self::ShipmentTracker => "Shipment Tracking Report",
            Self::CustomerLedger => "Customer Ledger Report",
            Self::FircReport => "FIRC Report",
            Self::RodtepDrawback => "RoDTEP & Drawback Report",
            Self::MonthlySales => "Monthly Sales Report",
            Self::CountryWise => "Country-wise Export Report",
            Self::LcTracker => "LC Tracker Report",
            Self::InquiryConversion => "Inquiry Conversion Report",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OrderSummary => {
                "All orders with customer details, values, and status. Complete export order register."
            }
            Self::PaymentAging => {
                "Outstanding payments bucketed by age: 0-30, 30-60, 60-90, and 90+ days."
            }
            Self::ShipmentTracker => {
                "All shipments with vessel, container, B/L, port details and delivery status."
            }
            Self::CustomerLedger => {
                "Customer-wise summary with total orders, payments, and outstanding balances."
            }
            Self::FircReport => {
                "Foreign Inward Remittance Certificate tracking for RBI compliance."
            }
            Self::RodtepDrawback => {
                "Government incentive claims tracking: RoDTEP and Duty Drawback status."
            }
            Self::MonthlySales => "Month-wise sales analysis with order count and value.",
            Self::CountryWise => {
                "Exports grouped by destination country with total values and order counts."
            }
            Self::LcTracker => {
                "Letter of Credit tracking with expiry dates, amounts, and bank details."
            }
            Self::InquiryConversion => {
                "Inquiry to order conversion funnel with quotation details."
            }
        }
    }

    /// Download file name without extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::OrderSummary => "order-summary-report",
            Self::PaymentAging => "payment-aging-report",
            Self::ShipmentTracker => "shipment-tracking-report",
            Self::CustomerLedger => "customer-ledger-report",
            Self::FircReport => "firc-report",
            Self::RodtepDrawback => "rodtep-drawback-report",
            Self::MonthlySales => "monthly-sales-report",
            Self::CountryWise => "country-wise-export-report",
            Self::LcTracker => "lc-tracker-report",
            Self::InquiryConversion => "inquiry-conversion-report",
        }
    }

    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::OrderSummary => "Orders",
            Self::PaymentAging => "Aging",
            Self::ShipmentTracker => "Shipments",
            Self::CustomerLedger => "Customer Ledger",
            Self::FircReport => "FIRC",
            Self::RodtepDrawback => "Incentives",
            Self::MonthlySales => "Monthly Sales",
            Self::CountryWise => "By Country",
            Self::LcTracker => "LC Tracker",
            Self::InquiryConversion => "Conversion",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = UnknownReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownReport(s.to_string()))
    }
}

/// Everything a report may read. Joins on the records should be populated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSources<'a> {
    pub customers: &'a [Customer],
    pub orders: &'a [Order],
    pub payments: &'a [Payment],
    pub shipments: &'a [Shipment],
    pub inquiries: &'a [Inquiry],
    pub quotations: &'a [Quotation],
}

/// Build a catalogue report as of `today`.
#[must_use]
pub fn build(kind: ReportKind, sources: &ReportSources<'_>, today: NaiveDate) -> Report {
    let mut report = Report::new(
        kind.title(),
        kind.file_stem(),
        kind.sheet_name(),
        catalog::headers(kind),
    );
    report.rows = catalog::rows(kind, sources, today);
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.slug().parse::<ReportKind>().unwrap(), kind);
        }
        assert_eq!(
            "sales".parse::<ReportKind>().unwrap_err().to_string(),
            "unknown report: sales"
        );
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::opt_text(None).to_string(), "");
        assert_eq!(Cell::text("OK").to_string(), "OK");
        assert_eq!(
            Cell::opt_date(NaiveDate::from_ymd_opt(2026, 1, 9)).to_string(),
            "2026-01-09"
        );
        assert_eq!(Cell::Decimal("12.50".parse().unwrap()).to_string(), "12.50");
        assert_eq!(Cell::count(3).to_string(), "3");
    }

    #[test]
    fn test_every_report_builds_on_empty_data() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        for kind in ReportKind::ALL {
            let report = build(kind, &ReportSources::default(), today);
            assert!(report.is_empty());
            assert!(!report.headers.is_empty());
            assert_eq!(report.file_stem, kind.file_stem());
        }
    }
}
