//! Customer API handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use export_tracker_core::CustomerId;
use export_tracker_core::models::{Customer, CustomerInput};

use crate::{error::ApiError, state::AppState};

use super::{ApiJson, ApiPath};

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/customers", get(list).post(create))
        .route("/api/customers/{id}", get(show).put(update).delete(remove))
}

/// List customers by company name.
///
/// # Errors
///
/// Returns an error if the customers cannot be loaded.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.data().list_customers().await?))
}

/// Fetch one customer.
///
/// # Errors
///
/// Returns `404` if the customer does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.data().get_customer(id).await?))
}

/// Create a customer.
///
/// # Errors
///
/// Returns `422` for invalid input.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.data().create_customer(input.validate()?).await?;
    tracing::info!(customer_id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer's fields.
///
/// # Errors
///
/// Returns `422` for invalid input and `404` if the customer does not exist.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.data().update_customer(id, input.validate()?).await?))
}

/// Delete a customer. Dependent records keep their data without the link.
///
/// # Errors
///
/// Returns `404` if the customer does not exist.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> Result<StatusCode, ApiError> {
    state.data().delete_customer(id).await?;
    tracing::info!(customer_id = %id, "Customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
