//! Inquiry route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::NaiveDate;
use tracing::instrument;

use export_tracker_core::InquiryStatus;
use export_tracker_core::analytics::status_counts;
use export_tracker_core::format::{format_amount, format_currency, format_date};
use export_tracker_core::models::Inquiry;
use export_tracker_core::query::{InquiryFilter, ListFilter};
use export_tracker_core::reports::inquiry_list;

use crate::{
    components::data_table::{DataTableConfig, inquiries_table_config},
    error::AppError,
    export::CsvDownload,
    state::AppState,
};

use super::{BadgeView, PageContext, StatusCountView, customer_name, render};

/// Inquiry list row.
#[derive(Debug, Clone)]
pub struct InquiryRowView {
    pub inquiry_number: String,
    pub customer: String,
    pub date: String,
    pub product: String,
    pub quantity: String,
    pub target_price: String,
    pub delivery_terms: String,
    pub follow_up: String,
    /// Follow-up date has passed while the inquiry is still pending.
    pub follow_up_due: bool,
    pub status: BadgeView,
}

impl InquiryRowView {
    fn new(inquiry: &Inquiry, today: NaiveDate) -> Self {
        Self {
            inquiry_number: inquiry.inquiry_number.clone(),
            customer: customer_name(inquiry.customer.as_ref()),
            date: format_date(Some(inquiry.inquiry_date)),
            product: inquiry.product_description.clone(),
            quantity: inquiry.quantity.map_or_else(
                || "-".to_string(),
                |q| format!("{} {}", format_amount(q), inquiry.unit),
            ),
            target_price: format_currency(inquiry.target_price, &inquiry.currency),
            delivery_terms: inquiry.delivery_terms.clone(),
            follow_up: format_date(inquiry.follow_up_date),
            follow_up_due: inquiry.status == InquiryStatus::Pending
                && inquiry.follow_up_date.is_some_and(|d| d <= today),
            status: BadgeView::status(inquiry.status.as_str(), inquiry.status.label()),
        }
    }
}

/// Inquiries page template.
#[derive(Template)]
#[template(path = "inquiries/index.html")]
pub struct InquiriesTemplate {
    pub page: PageContext,
    pub counts: Vec<StatusCountView>,
    pub table: DataTableConfig,
    pub inquiries: Vec<InquiryRowView>,
    pub total_count: usize,
}

/// Inquiries page handler.
///
/// # Errors
///
/// Returns an error if the inquiries cannot be loaded.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<InquiryFilter>,
) -> Result<Html<String>, AppError> {
    let today = state.today();
    let inquiries = state.data().list_inquiries().await?;

    let template = InquiriesTemplate {
        page: PageContext::new(&state, "/inquiries"),
        counts: status_counts(inquiries.iter().map(|i| i.status), InquiryStatus::ALL)
            .into_iter()
            .map(|(status, count)| StatusCountView::new(status.as_str(), status.label(), count))
            .collect(),
        table: inquiries_table_config(&filter),
        inquiries: filter
            .apply(&inquiries)
            .into_iter()
            .map(|i| InquiryRowView::new(i, today))
            .collect(),
        total_count: inquiries.len(),
    };
    Ok(render(&template))
}

/// CSV of the filtered inquiry list.
///
/// # Errors
///
/// Returns `400` when no inquiries match.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(filter): Query<InquiryFilter>,
) -> Result<CsvDownload, AppError> {
    let inquiries = state.data().list_inquiries().await?;
    let report = inquiry_list(&filter.apply(&inquiries), state.today());
    Ok(CsvDownload::new(&report)?)
}
