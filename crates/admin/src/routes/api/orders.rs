//! Order API handlers.
//!
//! Totals are stored as submitted; only the HTML form derives them from
//! quantity and unit price.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use export_tracker_core::OrderId;
use export_tracker_core::models::{Order, OrderInput};

use crate::{error::ApiError, state::AppState};

use super::{ApiJson, ApiPath};

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list).post(create))
        .route("/api/orders/{id}", get(show).put(update).delete(remove))
}

/// List orders, newest first.
///
/// # Errors
///
/// Returns an error if the orders cannot be loaded.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.data().list_orders().await?))
}

/// Fetch one order.
///
/// # Errors
///
/// Returns `404` if the order does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.data().get_order(id).await?))
}

/// Create an order.
///
/// # Errors
///
/// Returns `422` for invalid input and `409` for a duplicate order number or
/// unknown customer/quotation.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OrderInput>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.data().create_order(input.validate()?).await?;
    tracing::info!(order_number = %order.order_number, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// Replace an order's fields.
///
/// # Errors
///
/// Returns `422` for invalid input and `404` if the order does not exist.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
    ApiJson(input): ApiJson<OrderInput>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.data().update_order(id, input.validate()?).await?))
}

/// Delete an order with its payments and shipments.
///
/// # Errors
///
/// Returns `404` if the order does not exist.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<StatusCode, ApiError> {
    state.data().delete_order(id).await?;
    tracing::info!(order_id = %id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}
