//! Payment tracker route handlers.
//!
//! The payments page shows receivable totals, the aging buckets of unpaid
//! invoices, the filtered payment list and the FIRC register.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::NaiveDate;
use tracing::instrument;

use export_tracker_core::PaymentStatus;
use export_tracker_core::analytics::{
    AgingBucket, AgingGroup, PaymentSummary, aging_analysis, overdue_tone, payment_summary,
};
use export_tracker_core::format::{format_currency, format_date};
use export_tracker_core::models::Payment;
use export_tracker_core::query::{ListFilter, PaymentFilter};
use export_tracker_core::reports::payment_list;

use crate::{
    components::data_table::{DataTableConfig, payments_table_config},
    error::AppError,
    export::CsvDownload,
    state::AppState,
};

use super::{BadgeView, PageContext, customer_name, render};

/// Summary cards, in USD.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub total_invoiced: String,
    pub total_received: String,
    pub outstanding: String,
    pub overdue: String,
}

impl From<&PaymentSummary> for SummaryView {
    fn from(summary: &PaymentSummary) -> Self {
        Self {
            total_invoiced: format_currency(Some(summary.total_invoiced), "USD"),
            total_received: format_currency(Some(summary.total_received), "USD"),
            outstanding: format_currency(Some(summary.outstanding), "USD"),
            overdue: format_currency(Some(summary.overdue), "USD"),
        }
    }
}

/// One aging bucket card.
#[derive(Debug, Clone)]
pub struct AgingView {
    pub range: String,
    pub count: String,
    pub total: String,
    pub class: String,
}

impl From<&AgingGroup<'_>> for AgingView {
    fn from(group: &AgingGroup<'_>) -> Self {
        let class = match group.bucket {
            AgingBucket::UpTo30 => "border-green-200 bg-green-50",
            AgingBucket::UpTo60 => "border-yellow-200 bg-yellow-50",
            AgingBucket::UpTo90 => "border-orange-200 bg-orange-50",
            AgingBucket::Over90 => "border-red-200 bg-red-50",
        };
        Self {
            range: group.range.to_string(),
            count: group.count.to_string(),
            total: format_currency(Some(group.total_outstanding), "USD"),
            class: class.to_string(),
        }
    }
}

/// Payment list row.
#[derive(Debug, Clone)]
pub struct PaymentRowView {
    pub reference: String,
    pub order_number: String,
    pub customer: String,
    pub invoice_number: String,
    pub invoice_amount: String,
    pub received: String,
    pub due_date: String,
    /// Empty when not overdue or already received.
    pub overdue: String,
    pub overdue_class: String,
    pub mode: String,
    pub status: BadgeView,
}

impl PaymentRowView {
    fn new(payment: &Payment, today: NaiveDate) -> Self {
        let days = if payment.status == PaymentStatus::Received {
            0
        } else {
            payment.overdue_days(today)
        };
        Self {
            reference: payment.payment_reference.clone(),
            order_number: payment
                .order
                .as_ref()
                .map_or_else(|| "-".to_string(), |o| o.order_number.clone()),
            customer: customer_name(payment.customer.as_ref()),
            invoice_number: payment.invoice_number.clone().unwrap_or_else(|| "-".to_string()),
            invoice_amount: format_currency(Some(payment.invoice_amount), &payment.invoice_currency),
            received: format_currency(Some(payment.amount_received), &payment.received_currency),
            due_date: format_date(Some(payment.payment_due_date)),
            overdue: if days > 0 {
                format!("{days} days")
            } else {
                String::new()
            },
            overdue_class: overdue_tone(days).text_class().to_string(),
            mode: payment.payment_mode.label().to_string(),
            status: BadgeView::status(payment.status.as_str(), payment.status.label()),
        }
    }
}

/// FIRC register row.
#[derive(Debug, Clone)]
pub struct FircRowView {
    pub reference: String,
    pub customer: String,
    pub received_date: String,
    pub amount_received: String,
    pub inr_realized: String,
    pub bank_charges: String,
    pub net_inr: String,
    /// `PENDING` until the certificate arrives.
    pub firc_number: String,
    pub firc_pending: bool,
    pub firc_date: String,
    pub firc_bank: String,
}

impl From<&Payment> for FircRowView {
    fn from(payment: &Payment) -> Self {
        Self {
            reference: payment.payment_reference.clone(),
            customer: customer_name(payment.customer.as_ref()),
            received_date: format_date(payment.payment_received_date),
            amount_received: format_currency(
                Some(payment.amount_received),
                &payment.received_currency,
            ),
            inr_realized: format_currency(Some(payment.inr_realized), "INR"),
            bank_charges: format_currency(Some(payment.bank_charges), "INR"),
            net_inr: format_currency(Some(payment.net_inr()), "INR"),
            firc_number: payment
                .firc_number
                .clone()
                .unwrap_or_else(|| "PENDING".to_string()),
            firc_pending: payment.firc_number.is_none(),
            firc_date: format_date(payment.firc_date),
            firc_bank: payment.firc_bank.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Payments in the FIRC register: certificate on file, or money received.
fn in_firc_register(payment: &Payment) -> bool {
    payment.firc_number.is_some() || payment.status == PaymentStatus::Received
}

/// Payments page template.
#[derive(Template)]
#[template(path = "payments/index.html")]
pub struct PaymentsTemplate {
    pub page: PageContext,
    pub summary: SummaryView,
    pub aging: Vec<AgingView>,
    pub table: DataTableConfig,
    pub payments: Vec<PaymentRowView>,
    pub total_count: usize,
    pub firc: Vec<FircRowView>,
}

/// Payments page handler.
///
/// # Errors
///
/// Returns an error if the payments cannot be loaded.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<PaymentFilter>,
) -> Result<Html<String>, AppError> {
    let today = state.today();
    let payments = state.data().list_payments().await?;

    let template = PaymentsTemplate {
        page: PageContext::new(&state, "/payments"),
        summary: SummaryView::from(&payment_summary(&payments, today)),
        aging: aging_analysis(&payments, today)
            .iter()
            .map(AgingView::from)
            .collect(),
        table: payments_table_config(&filter),
        payments: filter
            .apply(&payments)
            .into_iter()
            .map(|p| PaymentRowView::new(p, today))
            .collect(),
        total_count: payments.len(),
        firc: payments
            .iter()
            .filter(|p| in_firc_register(p))
            .map(FircRowView::from)
            .collect(),
    };
    Ok(render(&template))
}

/// CSV of the filtered payment list.
///
/// # Errors
///
/// Returns `400` when no payments match.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(filter): Query<PaymentFilter>,
) -> Result<CsvDownload, AppError> {
    let payments = state.data().list_payments().await?;
    let report = payment_list(&filter.apply(&payments), state.today());
    Ok(CsvDownload::new(&report)?)
}
