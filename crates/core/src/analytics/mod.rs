//! Derived statistics over the tracked records.
//!
//! Everything here is a pure function of the records and an explicit
//! `today`, so results are reproducible in tests and in the CLI.

pub mod aging;
pub mod dashboard;
pub mod lc;
pub mod ledger;
pub mod tone;

pub use aging::{AgingBucket, AgingGroup, OverdueTone, aging_analysis, overdue_days, overdue_tone};
pub use dashboard::{DashboardStats, active_shipments, dashboard_stats, overdue_payments, recent_orders};
pub use lc::{LcAlert, LcAlertLevel, lc_expiry_alert};
pub use ledger::{CustomerSummary, PaymentSummary, customer_summary, payment_summary, status_counts};
pub use tone::{Tone, status_tone};
