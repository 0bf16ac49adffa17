//! Dashboard counters and receivables aging as JSON.

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use tracing::instrument;

use export_tracker_core::analytics::{DashboardStats, aging_analysis, dashboard_stats};

use crate::{error::ApiError, state::AppState};

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(stats))
        .route("/api/aging", get(aging))
}

/// Headline counters as of today.
///
/// # Errors
///
/// Returns an error if the records cannot be loaded.
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    let data = state.data().snapshot().await?;
    Ok(Json(dashboard_stats(
        &data.orders,
        &data.payments,
        &data.shipments,
        &data.customers,
        &data.inquiries,
        state.today(),
    )))
}

/// The four aging buckets of unpaid invoices, with their payments.
///
/// # Errors
///
/// Returns an error if the payments cannot be loaded.
#[instrument(skip(state))]
pub async fn aging(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let payments = state.data().list_payments().await?;
    let groups = aging_analysis(&payments, state.today());
    Ok(Json(json!({ "buckets": groups })))
}
