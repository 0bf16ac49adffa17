//! Receivable totals per customer and across payments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Order, Payment};
use crate::types::{CustomerId, PaymentStatus};

/// Order and receivable totals for one customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub order_count: usize,
    pub total_ordered: Decimal,
    pub total_invoiced: Decimal,
    pub total_received: Decimal,
    /// Invoiced minus received.
    pub outstanding: Decimal,
}

/// Totals over the orders and payments linked to `customer_id`.
#[must_use]
pub fn customer_summary(
    customer_id: CustomerId,
    orders: &[Order],
    payments: &[Payment],
) -> CustomerSummary {
    let (order_count, total_ordered) = orders
        .iter()
        .filter(|o| o.customer_id == Some(customer_id))
        .fold((0, Decimal::ZERO), |(count, sum), o| {
            (count + 1, sum.saturating_add(o.total_amount))
        });

    let (total_invoiced, total_received) = payments
        .iter()
        .filter(|p| p.customer_id == Some(customer_id))
        .fold((Decimal::ZERO, Decimal::ZERO), |(invoiced, received), p| {
            (
                invoiced.saturating_add(p.invoice_amount),
                received.saturating_add(p.amount_received),
            )
        });

    CustomerSummary {
        order_count,
        total_ordered,
        total_invoiced,
        total_received,
        outstanding: total_invoiced.saturating_sub(total_received),
    }
}

/// Summary cards on the payments page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub total_invoiced: Decimal,
    pub total_received: Decimal,
    pub outstanding: Decimal,
    /// Outstanding on unreceived invoices already past due.
    pub overdue: Decimal,
}

/// Totals over `payments` as of `today`.
#[must_use]
pub fn payment_summary(payments: &[Payment], today: NaiveDate) -> PaymentSummary {
    let mut summary = PaymentSummary::default();
    for payment in payments {
        summary.total_invoiced = summary.total_invoiced.saturating_add(payment.invoice_amount);
        summary.total_received = summary.total_received.saturating_add(payment.amount_received);
        if payment.status != PaymentStatus::Received && payment.overdue_days(today) > 0 {
            summary.overdue = summary.overdue.saturating_add(payment.outstanding());
        }
    }
    summary.outstanding = summary.total_invoiced.saturating_sub(summary.total_received);
    summary
}

/// Count of records per status, one entry for every status in `all` (zeros included).
#[must_use]
pub fn status_counts<S>(statuses: impl IntoIterator<Item = S>, all: &[S]) -> Vec<(S, usize)>
where
    S: Copy + Eq,
{
    let mut counts: Vec<(S, usize)> = all.iter().map(|&s| (s, 0)).collect();
    for status in statuses {
        if let Some(entry) = counts.iter_mut().find(|(s, _)| *s == status) {
            entry.1 += 1;
        }
    }
    counts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::{OrderInput, PaymentInput};
    use crate::types::{OrderId, PaymentId, ShipmentStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn payment(customer: Option<CustomerId>, invoice: &str, received: &str, overdue: i64) -> Payment {
        let status = if invoice == received {
            PaymentStatus::Received
        } else {
            PaymentStatus::Pending
        };
        let input = PaymentInput {
            payment_reference: "PAY".to_string(),
            order_id: Some(OrderId::generate()),
            customer_id: customer,
            invoice_amount: dec(invoice),
            amount_received: dec(received),
            payment_due_date: today() - Duration::days(overdue),
            status,
            ..PaymentInput::default()
        };
        Payment::from_input(PaymentId::generate(), input, Utc::now()).unwrap()
    }

    #[test]
    fn test_customer_summary() {
        let customer = CustomerId::generate();
        let other = CustomerId::generate();
        let orders: Vec<Order> = [(customer, "1000"), (customer, "2500"), (other, "99")]
            .into_iter()
            .map(|(id, total)| {
                let input = OrderInput {
                    customer_id: Some(id),
                    total_amount: dec(total),
                    ..OrderInput::default()
                };
                Order::from_input(OrderId::generate(), input, Utc::now())
            })
            .collect();
        let payments = vec![
            payment(Some(customer), "1000", "1000", 10),
            payment(Some(customer), "2500", "500", 10),
            payment(Some(other), "99", "0", 10),
        ];

        let summary = customer_summary(customer, &orders, &payments);
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_ordered, dec("3500"));
        assert_eq!(summary.total_invoiced, dec("3500"));
        assert_eq!(summary.total_received, dec("1500"));
        assert_eq!(summary.outstanding, dec("2000"));
    }

    #[test]
    fn test_customer_without_records() {
        let summary = customer_summary(CustomerId::generate(), &[], &[]);
        assert_eq!(summary, CustomerSummary::default());
    }

    #[test]
    fn test_payment_summary() {
        let payments = vec![
            payment(None, "1000", "1000", 40),
            payment(None, "2000", "500", 12),
            payment(None, "700", "0", -5),
        ];
        let summary = payment_summary(&payments, today());
        assert_eq!(summary.total_invoiced, dec("3700"));
        assert_eq!(summary.total_received, dec("1500"));
        assert_eq!(summary.outstanding, dec("2200"));
        assert_eq!(summary.overdue, dec("1500"));
    }

    #[test]
    fn test_status_counts_include_zeros() {
        let counts = status_counts(
            [ShipmentStatus::InTransit, ShipmentStatus::InTransit, ShipmentStatus::Booked],
            ShipmentStatus::ALL,
        );
        assert_eq!(counts.len(), ShipmentStatus::ALL.len());
        assert_eq!(counts[0], (ShipmentStatus::Booked, 1));
        assert_eq!(counts[2], (ShipmentStatus::InTransit, 2));
        assert_eq!(counts[5], (ShipmentStatus::Cancelled, 0));
    }

    #[test]
    fn test_payment_summary_saturates() {
        let max = Decimal::MAX.to_string();
        let payments = vec![payment(None, &max, "0", 10), payment(None, &max, "0", 10)];
        let summary = payment_summary(&payments, today());
        assert_eq!(summary.total_invoiced, Decimal::MAX);
        assert_eq!(summary.outstanding, Decimal::MAX);
        assert_eq!(summary.overdue, Decimal::MAX);
    }
}
