//! Inquiry and quotation API handlers.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tracing::instrument;

use export_tracker_core::models::{Inquiry, InquiryInput, Quotation, QuotationInput};

use crate::{error::ApiError, state::AppState};

use super::ApiJson;

/// Build the sales pipeline router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/inquiries", get(list_inquiries).post(create_inquiry))
        .route("/api/quotations", get(list_quotations).post(create_quotation))
}

/// List inquiries, newest first.
///
/// # Errors
///
/// Returns an error if the inquiries cannot be loaded.
#[instrument(skip(state))]
pub async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Inquiry>>, ApiError> {
    Ok(Json(state.data().list_inquiries().await?))
}

/// Log an inquiry.
///
/// # Errors
///
/// Returns `422` for invalid input and `409` for a duplicate inquiry number.
#[instrument(skip(state, input))]
pub async fn create_inquiry(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<InquiryInput>,
) -> Result<(StatusCode, Json<Inquiry>), ApiError> {
    let inquiry = state.data().create_inquiry(input.validate()?).await?;
    tracing::info!(inquiry_number = %inquiry.inquiry_number, "Inquiry created");
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// List quotations, newest first.
///
/// # Errors
///
/// Returns an error if the quotations cannot be loaded.
#[instrument(skip(state))]
pub async fn list_quotations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Quotation>>, ApiError> {
    Ok(Json(state.data().list_quotations().await?))
}

/// Issue a quotation, optionally answering an inquiry.
///
/// # Errors
///
/// Returns `422` for invalid input and `409` for a duplicate quotation number
/// or unknown inquiry.
#[instrument(skip(state, input))]
pub async fn create_quotation(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuotationInput>,
) -> Result<(StatusCode, Json<Quotation>), ApiError> {
    let quotation = state.data().create_quotation(input.validate()?).await?;
    tracing::info!(quotation_number = %quotation.quotation_number, "Quotation created");
    Ok((StatusCode::CREATED, Json(quotation)))
}
