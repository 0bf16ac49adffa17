//! JSON API.
//!
//! ```text
//! GET/POST        /api/customers          GET/PUT/DELETE /api/customers/{id}
//! GET/POST        /api/orders             GET/PUT/DELETE /api/orders/{id}
//! GET/POST        /api/payments           GET/PUT        /api/payments/{id}
//! GET/POST        /api/shipments          GET/PUT        /api/shipments/{id}
//! GET/POST        /api/inquiries
//! GET/POST        /api/quotations
//! GET             /api/dashboard
//! GET             /api/aging
//! ```
//!
//! Bodies are the core `*Input` types and responses the stored records with
//! their joins. Errors are `{"error": "..."}` with the status from
//! [`AppError::status`](crate::error::AppError::status), including bodies and
//! path ids that fail to extract (see [`ApiJson`] and [`ApiPath`]).

pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod payments;
pub mod pipeline;
pub mod shipments;

use axum::{
    Router,
    extract::{FromRequest, FromRequestParts},
};

use crate::{error::ApiError, state::AppState};

/// `Json` extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(customers::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(shipments::router())
        .merge(pipeline::router())
        .merge(dashboard::router())
}
