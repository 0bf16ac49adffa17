//! HTTP route handlers for the tracker.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the dashboard
//! GET  /dashboard              - Headline cards, recent orders, overdue payments, active shipments
//!
//! # Orders
//! GET  /orders/new             - New order form
//! POST /orders                 - Create order
//! GET  /orders/list            - Order list (?q&status&currency) with LC alerts
//! GET  /orders/export          - CSV of the filtered orders
//! GET  /orders/{id}/edit       - Edit form
//! POST /orders/{id}            - Update order
//! POST /orders/{id}/delete     - Delete order (and its payments and shipments)
//!
//! # Customers
//! GET  /customers              - Customer list (?q&country) with ledger totals and add form
//! POST /customers              - Create customer
//! GET  /customers/export
//!
//! # Payments, shipments, inquiries
//! GET  /payments               - Summary, aging buckets, payment list (?q&status&mode), FIRC table
//! GET  /payments/export
//! GET  /shipments              - Status counts, shipment list (?q&status)
//! GET  /shipments/export
//! GET  /inquiries              - Status counts, inquiry list (?q&status)
//! GET  /inquiries/export
//!
//! # Reports
//! GET  /reports                - Report catalogue
//! GET  /reports/{slug}         - CSV download
//!
//! # JSON API
//! /api/...                     - See [`api`]
//! ```

pub mod api;
pub mod customers;
pub mod dashboard;
pub mod forms;
pub mod inquiries;
pub mod orders;
pub mod payments;
pub mod reports;
pub mod shipments;

use askama::Template;
use axum::{
    Router,
    response::{Html, Redirect},
    routing::{get, post},
};

use export_tracker_core::analytics::status_tone;
use export_tracker_core::models::CustomerRef;

use crate::state::AppState;

/// Build the page router (the API is merged in).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard::index))
        // Orders
        .route("/orders", post(orders::create))
        .route("/orders/new", get(orders::new))
        .route("/orders/list", get(orders::index))
        .route("/orders/export", get(orders::export))
        .route("/orders/{id}", post(orders::update))
        .route("/orders/{id}/edit", get(orders::edit))
        .route("/orders/{id}/delete", post(orders::delete))
        // Customers
        .route("/customers", get(customers::index).post(customers::create))
        .route("/customers/export", get(customers::export))
        // Payments, shipments, inquiries
        .route("/payments", get(payments::index))
        .route("/payments/export", get(payments::export))
        .route("/shipments", get(shipments::index))
        .route("/shipments/export", get(shipments::export))
        .route("/inquiries", get(inquiries::index))
        .route("/inquiries/export", get(inquiries::export))
        // Reports
        .route("/reports", get(reports::index))
        .route("/reports/{slug}", get(reports::download))
        .merge(api::router())
}

async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

/// Layout data every page template carries.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Request path, used to highlight the active nav item.
    pub current_path: String,
    /// Show the in-memory demo data banner.
    pub demo_mode: bool,
}

impl PageContext {
    #[must_use]
    pub fn new(state: &AppState, current_path: &str) -> Self {
        Self {
            current_path: current_path.to_string(),
            demo_mode: state.data().is_demo(),
        }
    }
}

/// Status badge view.
#[derive(Debug, Clone)]
pub struct BadgeView {
    pub label: String,
    pub class: String,
}

impl BadgeView {
    /// Badge for a status wire string and its display label.
    #[must_use]
    pub fn status(wire: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            class: status_tone(wire).badge_class().to_string(),
        }
    }
}

/// Count card for one status.
#[derive(Debug, Clone)]
pub struct StatusCountView {
    pub label: String,
    pub count: String,
    pub class: String,
}

impl StatusCountView {
    #[must_use]
    pub fn new(wire: &str, label: &str, count: usize) -> Self {
        Self {
            label: label.to_string(),
            count: count.to_string(),
            class: status_tone(wire).badge_class().to_string(),
        }
    }
}

/// Joined customer name, or `-`.
fn customer_name(customer: Option<&CustomerRef>) -> String {
    customer.map_or_else(|| "-".to_string(), |c| c.company_name.clone())
}

/// Render a template, logging failures.
fn render<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
