//! Dashboard headline numbers and watch lists.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Customer, Inquiry, Order, Payment, Shipment};
use crate::types::{InquiryStatus, PaymentStatus};

/// Headline counters shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Payments still pending, partial or overdue.
    pub pending_payments: usize,
    /// Unreceived payments more than 30 days past due.
    pub overdue_payments: usize,
    pub shipments_in_transit: usize,
    /// Σ order totals dated in the current calendar month.
    pub this_month_revenue: Decimal,
    pub total_customers: usize,
    pub total_inquiries: usize,
    /// Converted inquiries as a percentage of all inquiries.
    pub conversion_rate: f64,
}

/// Compute the dashboard counters as of `today`.
#[must_use]
pub fn dashboard_stats(
    orders: &[Order],
    payments: &[Payment],
    shipments: &[Shipment],
    customers: &[Customer],
    inquiries: &[Inquiry],
    today: NaiveDate,
) -> DashboardStats {
    let this_month_revenue = orders
        .iter()
        .filter(|o| o.order_date.year() == today.year() && o.order_date.month() == today.month())
        .fold(Decimal::ZERO, |sum, o| sum.saturating_add(o.total_amount));

    let converted = inquiries
        .iter()
        .filter(|i| i.status == InquiryStatus::Converted)
        .count();

    DashboardStats {
        total_orders: orders.len(),
        pending_payments: payments.iter().filter(|p| p.status.is_open()).count(),
        overdue_payments: payments
            .iter()
            .filter(|p| p.status != PaymentStatus::Received && p.overdue_days(today) > 30)
            .count(),
        shipments_in_transit: shipments.iter().filter(|s| s.status.is_active()).count(),
        this_month_revenue,
        total_customers: customers.len(),
        total_inquiries: inquiries.len(),
        conversion_rate: percentage(converted, inquiries.len()),
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// The `limit` most recent orders by order date.
#[must_use]
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut recent: Vec<&Order> = orders.iter().collect();
    recent.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    recent.truncate(limit);
    recent
}

/// Unreceived payments past their due date with their overdue days, worst first.
#[must_use]
pub fn overdue_payments(payments: &[Payment], today: NaiveDate) -> Vec<(&Payment, i64)> {
    let mut overdue: Vec<(&Payment, i64)> = payments
        .iter()
        .filter(|p| p.status != PaymentStatus::Received)
        .map(|p| (p, p.overdue_days(today)))
        .filter(|(_, days)| *days > 0)
        .collect();
    overdue.sort_by(|a, b| b.1.cmp(&a.1));
    overdue
}

/// Shipments currently loaded or in transit.
#[must_use]
pub fn active_shipments(shipments: &[Shipment]) -> Vec<&Shipment> {
    shipments.iter().filter(|s| s.status.is_active()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::{InquiryInput, OrderInput, PaymentInput, ShipmentInput};
    use crate::types::{InquiryId, OrderId, OrderStatus, PaymentId, ShipmentId, ShipmentStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn order(date: NaiveDate, total: &str) -> Order {
        let input = OrderInput {
            order_number: format!("EXP-{date}"),
            order_date: date,
            total_amount: total.parse().unwrap(),
            status: OrderStatus::Confirmed,
            ..OrderInput::default()
        };
        Order::from_input(OrderId::generate(), input, Utc::now())
    }

    fn payment(days_overdue: i64, status: PaymentStatus) -> Payment {
        let input = PaymentInput {
            payment_reference: "PAY".to_string(),
            order_id: Some(OrderId::generate()),
            payment_due_date: today() - Duration::days(days_overdue),
            status,
            ..PaymentInput::default()
        };
        Payment::from_input(PaymentId::generate(), input, Utc::now()).unwrap()
    }

    fn shipment(status: ShipmentStatus) -> Shipment {
        let input = ShipmentInput {
            shipment_number: "SHP".to_string(),
            order_id: Some(OrderId::generate()),
            status,
            ..ShipmentInput::default()
        };
        Shipment::from_input(ShipmentId::generate(), input, Utc::now()).unwrap()
    }

    fn inquiry(status: InquiryStatus) -> Inquiry {
        let input = InquiryInput {
            inquiry_number: "INQ".to_string(),
            status,
            ..InquiryInput::default()
        };
        Inquiry::from_input(InquiryId::generate(), input, Utc::now())
    }

    #[test]
    fn test_dashboard_stats() {
        let orders = vec![
            order(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(), "1000.50"),
            order(NaiveDate::from_ymd_opt(2026, 6, 14).unwrap(), "2000"),
            order(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(), "7000"),
            order(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(), "500"),
        ];
        let payments = vec![
            payment(5, PaymentStatus::Pending),
            payment(40, PaymentStatus::Partial),
            payment(45, PaymentStatus::WriteOff),
            payment(90, PaymentStatus::Received),
        ];
        let shipments = vec![
            shipment(ShipmentStatus::Loaded),
            shipment(ShipmentStatus::InTransit),
            shipment(ShipmentStatus::Arrived),
        ];
        let inquiries = vec![
            inquiry(InquiryStatus::Converted),
            inquiry(InquiryStatus::Pending),
            inquiry(InquiryStatus::Lost),
            inquiry(InquiryStatus::Quoted),
        ];

        let stats = dashboard_stats(&orders, &payments, &shipments, &[], &inquiries, today());
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.pending_payments, 2);
        assert_eq!(stats.overdue_payments, 2);
        assert_eq!(stats.shipments_in_transit, 2);
        assert_eq!(stats.this_month_revenue, "3000.50".parse().unwrap());
        assert_eq!(stats.total_customers, 0);
        assert_eq!(stats.total_inquiries, 4);
        assert!((stats.conversion_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_conversion_rate_without_inquiries() {
        let stats = dashboard_stats(&[], &[], &[], &[], &[], today());
        assert!(stats.conversion_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn test_recent_orders() {
        let orders: Vec<Order> = (1..=7)
            .map(|d| order(NaiveDate::from_ymd_opt(2026, 6, d).unwrap(), "1"))
            .collect();
        let recent = recent_orders(&orders, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].order_date.day(), 7);
        assert_eq!(recent[4].order_date.day(), 3);
    }

    #[test]
    fn test_overdue_payments_sorted() {
        let payments = vec![
            payment(3, PaymentStatus::Pending),
            payment(-2, PaymentStatus::Pending),
            payment(50, PaymentStatus::Overdue),
            payment(80, PaymentStatus::Received),
        ];
        let overdue = overdue_payments(&payments, today());
        let days: Vec<i64> = overdue.iter().map(|(_, d)| *d).collect();
        assert_eq!(days, vec![50, 3]);
    }

    #[test]
    fn test_active_shipments() {
        let shipments = vec![
            shipment(ShipmentStatus::Booked),
            shipment(ShipmentStatus::Loaded),
        ];
        assert_eq!(active_shipments(&shipments).len(), 1);
    }

    #[test]
    fn test_revenue_saturates_instead_of_overflowing() {
        let max = Decimal::MAX.to_string();
        let orders = vec![order(today(), &max), order(today(), &max)];
        let stats = dashboard_stats(&orders, &[], &[], &[], &[], today());
        assert_eq!(stats.this_month_revenue, Decimal::MAX);
    }
}
