//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use export_tracker_core::analytics::{
    DashboardStats, active_shipments, dashboard_stats, overdue_payments, overdue_tone,
    recent_orders,
};
use export_tracker_core::format::{format_currency, format_date};
use export_tracker_core::models::{Order, Payment, Shipment};

use crate::{error::AppError, state::AppState};

use super::{BadgeView, PageContext, customer_name, render};

/// Orders shown in the "recent orders" panel.
const RECENT_ORDERS: usize = 5;

/// Headline numbers, pre-formatted.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub total_orders: String,
    pub pending_payments: String,
    pub overdue_payments: String,
    pub shipments_in_transit: String,
    pub this_month_revenue: String,
    pub total_customers: String,
    pub total_inquiries: String,
    pub conversion_rate: String,
}

impl From<&DashboardStats> for DashboardMetrics {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_orders: stats.total_orders.to_string(),
            pending_payments: stats.pending_payments.to_string(),
            overdue_payments: stats.overdue_payments.to_string(),
            shipments_in_transit: stats.shipments_in_transit.to_string(),
            this_month_revenue: format_currency(Some(stats.this_month_revenue), "USD"),
            total_customers: stats.total_customers.to_string(),
            total_inquiries: stats.total_inquiries.to_string(),
            conversion_rate: format!("{:.1}%", stats.conversion_rate),
        }
    }
}

/// Recent order row.
#[derive(Debug, Clone)]
pub struct RecentOrderView {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub date: String,
    pub total: String,
    pub status: BadgeView,
}

impl From<&Order> for RecentOrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_number: order.order_number.clone(),
            customer: customer_name(order.customer.as_ref()),
            date: format_date(Some(order.order_date)),
            total: format_currency(Some(order.total_amount), &order.currency),
            status: BadgeView::status(order.status.as_str(), order.status.label()),
        }
    }
}

/// Overdue payment row.
#[derive(Debug, Clone)]
pub struct OverduePaymentView {
    pub reference: String,
    pub customer: String,
    pub outstanding: String,
    pub due_date: String,
    pub overdue_days: String,
    pub days_class: String,
}

impl OverduePaymentView {
    fn new(payment: &Payment, days: i64) -> Self {
        Self {
            reference: payment.payment_reference.clone(),
            customer: customer_name(payment.customer.as_ref()),
            outstanding: format_currency(Some(payment.outstanding()), &payment.invoice_currency),
            due_date: format_date(Some(payment.payment_due_date)),
            overdue_days: format!("{days} days"),
            days_class: overdue_tone(days).text_class().to_string(),
        }
    }
}

/// Active shipment row.
#[derive(Debug, Clone)]
pub struct ActiveShipmentView {
    pub shipment_number: String,
    pub order_number: String,
    pub vessel: String,
    pub route: String,
    pub eta: String,
    pub status: BadgeView,
}

impl From<&Shipment> for ActiveShipmentView {
    fn from(shipment: &Shipment) -> Self {
        Self {
            shipment_number: shipment.shipment_number.clone(),
            order_number: shipment
                .order
                .as_ref()
                .map_or_else(|| "-".to_string(), |o| o.order_number.clone()),
            vessel: shipment.vessel_name.clone().unwrap_or_else(|| "-".to_string()),
            route: route(shipment),
            eta: format_date(shipment.eta),
            status: BadgeView::status(shipment.status.as_str(), shipment.status.label()),
        }
    }
}

/// `ORIGIN → DEST`, with `-` for missing ports.
pub(super) fn route(shipment: &Shipment) -> String {
    format!(
        "{} → {}",
        shipment.origin_port.as_deref().unwrap_or("-"),
        shipment.destination_port.as_deref().unwrap_or("-")
    )
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub page: PageContext,
    pub metrics: DashboardMetrics,
    pub recent_orders: Vec<RecentOrderView>,
    pub overdue_payments: Vec<OverduePaymentView>,
    pub active_shipments: Vec<ActiveShipmentView>,
}

/// Dashboard page handler.
///
/// # Errors
///
/// Returns an error if the records cannot be loaded.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = state.today();
    let data = state.data().snapshot().await?;

    let stats = dashboard_stats(
        &data.orders,
        &data.payments,
        &data.shipments,
        &data.customers,
        &data.inquiries,
        today,
    );

    let template = DashboardTemplate {
        page: PageContext::new(&state, "/dashboard"),
        metrics: DashboardMetrics::from(&stats),
        recent_orders: recent_orders(&data.orders, RECENT_ORDERS)
            .into_iter()
            .map(RecentOrderView::from)
            .collect(),
        overdue_payments: overdue_payments(&data.payments, today)
            .into_iter()
            .map(|(payment, days)| OverduePaymentView::new(payment, days))
            .collect(),
        active_shipments: active_shipments(&data.shipments)
            .into_iter()
            .map(ActiveShipmentView::from)
            .collect(),
    };

    Ok(render(&template))
}
