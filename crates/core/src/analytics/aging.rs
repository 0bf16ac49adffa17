//! Receivables aging.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Payment;
use crate::types::PaymentStatus;

/// Whole days `due` lies in the past, never negative. No due date counts as zero.
#[must_use]
pub fn overdue_days(due: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due.map_or(0, |due| (today - due).num_days().max(0))
}

impl Payment {
    /// Days past the payment due date as of `today`.
    #[must_use]
    pub fn overdue_days(&self, today: NaiveDate) -> i64 {
        overdue_days(Some(self.payment_due_date), today)
    }
}

/// Overdue-day range an unpaid invoice falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    /// Up to 30 days (including not yet due).
    UpTo30,
    UpTo60,
    UpTo90,
    Over90,
}

impl AgingBucket {
    /// Buckets in report order.
    pub const ALL: [Self; 4] = [Self::UpTo30, Self::UpTo60, Self::UpTo90, Self::Over90];

    /// Bucket for a number of overdue days.
    #[must_use]
    pub const fn for_days(days: i64) -> Self {
        if days <= 30 {
            Self::UpTo30
        } else if days <= 60 {
            Self::UpTo60
        } else if days <= 90 {
            Self::UpTo90
        } else {
            Self::Over90
        }
    }

    /// Range label shown on the payments page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo30 => "0-30 days",
            Self::UpTo60 => "30-60 days",
            Self::UpTo90 => "60-90 days",
            Self::Over90 => "90+ days",
        }
    }

    /// Short label used in report cells.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::UpTo30 => "0-30",
            Self::UpTo60 => "30-60",
            Self::UpTo90 => "60-90",
            Self::Over90 => "90+",
        }
    }
}

/// Unpaid invoices in one aging bucket.
#[derive(Debug, Clone, Serialize)]
pub struct AgingGroup<'a> {
    pub bucket: AgingBucket,
    pub range: &'static str,
    pub count: usize,
    /// Σ (invoice amount − amount received).
    pub total_outstanding: Decimal,
    pub payments: Vec<&'a Payment>,
}

/// Group every payment not yet received into the four aging buckets.
///
/// Always returns four groups in [`AgingBucket::ALL`] order, empty ones included.
/// Written-off invoices are still counted.
#[must_use]
pub fn aging_analysis(payments: &[Payment], today: NaiveDate) -> Vec<AgingGroup<'_>> {
    let mut groups: Vec<AgingGroup<'_>> = AgingBucket::ALL
        .iter()
        .map(|&bucket| AgingGroup {
            bucket,
            range: bucket.label(),
            count: 0,
            total_outstanding: Decimal::ZERO,
            payments: Vec::new(),
        })
        .collect();

    for payment in payments
        .iter()
        .filter(|p| p.status != PaymentStatus::Received)
    {
        let bucket = AgingBucket::for_days(payment.overdue_days(today));
        if let Some(group) = groups.iter_mut().find(|g| g.bucket == bucket) {
            group.count += 1;
            group.total_outstanding = group.total_outstanding.saturating_add(payment.outstanding());
            group.payments.push(payment);
        }
    }

    groups
}

/// Severity of an overdue count, used to colour the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverdueTone {
    Good,
    Caution,
    Warning,
    Critical,
}

impl OverdueTone {
    /// Text CSS classes.
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Good => "text-green-600",
            Self::Caution => "text-yellow-600",
            Self::Warning => "text-orange-600",
            Self::Critical => "text-red-600 font-bold",
        }
    }
}

/// 0 → good, up to 30 → caution, up to 60 → warning, beyond → critical.
#[must_use]
pub const fn overdue_tone(days: i64) -> OverdueTone {
    if days <= 0 {
        OverdueTone::Good
    } else if days <= 30 {
        OverdueTone::Caution
    } else if days <= 60 {
        OverdueTone::Warning
    } else {
        OverdueTone::Critical
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::PaymentInput;
    use crate::types::{OrderId, PaymentId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
    }

    fn payment(days_overdue: i64, invoice: &str, received: &str, status: PaymentStatus) -> Payment {
        let input = PaymentInput {
            payment_reference: format!("PAY-{days_overdue}"),
            order_id: Some(OrderId::generate()),
            invoice_amount: invoice.parse().unwrap(),
            amount_received: received.parse().unwrap(),
            payment_due_date: today() - Duration::days(days_overdue),
            status,
            ..PaymentInput::default()
        };
        Payment::from_input(PaymentId::generate(), input, Utc::now()).unwrap()
    }

    #[test]
    fn test_overdue_days() {
        let due = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(overdue_days(Some(due), today()), 29);
        assert_eq!(overdue_days(Some(today() + Duration::days(5)), today()), 0);
        assert_eq!(overdue_days(None, today()), 0);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(AgingBucket::for_days(0), AgingBucket::UpTo30);
        assert_eq!(AgingBucket::for_days(30), AgingBucket::UpTo30);
        assert_eq!(AgingBucket::for_days(31), AgingBucket::UpTo60);
        assert_eq!(AgingBucket::for_days(60), AgingBucket::UpTo60);
        assert_eq!(AgingBucket::for_days(90), AgingBucket::UpTo90);
        assert_eq!(AgingBucket::for_days(91), AgingBucket::Over90);
    }

    #[test]
    fn test_aging_analysis_groups_unpaid() {
        let payments = vec![
            payment(10, "1000", "0", PaymentStatus::Pending),
            payment(45, "5000", "2000", PaymentStatus::Partial),
            payment(120, "800", "0", PaymentStatus::WriteOff),
            payment(200, "9999", "9999", PaymentStatus::Received),
        ];
        let groups = aging_analysis(&payments, today());

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].range, "0-30 days");
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[1].total_outstanding, "3000".parse().unwrap());
        assert_eq!(groups[2].count, 0);
        assert_eq!(groups[3].count, 1);
        assert_eq!(groups[3].payments[0].status, PaymentStatus::WriteOff);
    }

    #[test]
    fn test_aging_analysis_empty() {
        let groups = aging_analysis(&[], today());
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.count == 0 && g.payments.is_empty()));
    }

    #[test]
    fn test_overdue_tone() {
        assert_eq!(overdue_tone(0), OverdueTone::Good);
        assert_eq!(overdue_tone(30), OverdueTone::Caution);
        assert_eq!(overdue_tone(31), OverdueTone::Warning);
        assert_eq!(overdue_tone(61), OverdueTone::Critical);
        assert_eq!(OverdueTone::Critical.text_class(), "text-red-600 font-bold");
    }
}
