//! Payment API handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use export_tracker_core::PaymentId;
use export_tracker_core::models::{Payment, PaymentInput};

use crate::{error::ApiError, state::AppState};

use super::{ApiJson, ApiPath};

/// Build the payments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/payments", get(list).post(create))
        .route("/api/payments/{id}", get(show).put(update))
}

/// List payments by due date.
///
/// # Errors
///
/// Returns an error if the payments cannot be loaded.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, ApiError> {
    Ok(Json(state.data().list_payments().await?))
}

/// Fetch one payment.
///
/// # Errors
///
/// Returns `404` if the payment does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PaymentId>,
) -> Result<Json<Payment>, ApiError> {
    Ok(Json(state.data().get_payment(id).await?))
}

/// Record an invoice against an order.
///
/// # Errors
///
/// Returns `422` for invalid input and `409` for a duplicate reference or
/// unknown order.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PaymentInput>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    let payment = state.data().create_payment(input.validate()?).await?;
    tracing::info!(reference = %payment.payment_reference, "Payment created");
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Replace a payment's fields (receipt, FIRC, status).
///
/// # Errors
///
/// Returns `422` for invalid input and `404` if the payment does not exist.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PaymentId>,
    ApiJson(input): ApiJson<PaymentInput>,
) -> Result<Json<Payment>, ApiError> {
    Ok(Json(state.data().update_payment(id, input.validate()?).await?))
}
