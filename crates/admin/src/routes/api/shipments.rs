//! Shipment API handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use export_tracker_core::ShipmentId;
use export_tracker_core::models::{Shipment, ShipmentInput};

use crate::{error::ApiError, state::AppState};

use super::{ApiJson, ApiPath};

/// Build the shipments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/shipments", get(list).post(create))
        .route("/api/shipments/{id}", get(show).put(update))
}

/// List shipments, latest shipment date first.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Shipment>>, ApiError> {
    Ok(Json(state.data().list_shipments().await?))
}

/// Fetch one shipment.
///
/// # Errors
///
/// Returns `404` if the shipment does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ShipmentId>,
) -> Result<Json<Shipment>, ApiError> {
    Ok(Json(state.data().get_shipment(id).await?))
}

/// Book a shipment for an order.
///
/// # Errors
///
/// Returns `422` for invalid input and `409` for a duplicate shipment number
/// or unknown order.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ShipmentInput>,
) -> Result<(StatusCode, Json<Shipment>), ApiError> {
    let shipment = state.data().create_shipment(input.validate()?).await?;
    tracing::info!(shipment_number = %shipment.shipment_number, "Shipment created");
    Ok((StatusCode::CREATED, Json(shipment)))
}

/// Replace a shipment's fields.
///
/// # Errors
///
/// Returns `422` for invalid input and `404` if the shipment does not exist.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ShipmentId>,
    ApiJson(input): ApiJson<ShipmentInput>,
) -> Result<Json<Shipment>, ApiError> {
    Ok(Json(state.data().update_shipment(id, input.validate()?).await?))
}
