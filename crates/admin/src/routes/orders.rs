//! Order route handlers: list, export, create, edit, delete.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use export_tracker_core::analytics::lc_expiry_alert;
use export_tracker_core::format::{format_currency, format_date};
use export_tracker_core::models::{Customer, Order, OrderInput, Quotation};
use export_tracker_core::query::{ListFilter, OrderFilter};
use export_tracker_core::reports::order_list;
use export_tracker_core::{IncentiveStatus, OrderId, OrderStatus, ValidationError};

use crate::{
    components::data_table::{DataTableConfig, FilterOption, orders_table_config},
    db::RepositoryError,
    error::AppError,
    export::CsvDownload,
    state::AppState,
};

use super::forms::OrderForm;
use super::{BadgeView, PageContext, customer_name, render};

const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "AED", "INR"];
const DELIVERY_TERMS: [&str; 5] = ["FOB", "CIF", "CFR", "EXW", "DDP"];

// =============================================================================
// Views
// =============================================================================

/// Order list row.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub date: String,
    pub product: String,
    pub total: String,
    pub inr_value: String,
    pub lc_number: String,
    /// Empty when the LC is not close to expiry.
    pub lc_alert: String,
    pub lc_alert_class: String,
    pub status: BadgeView,
}

impl OrderRowView {
    fn new(order: &Order, today: chrono::NaiveDate) -> Self {
        let alert = lc_expiry_alert(order.lc_expiry_date, today);
        Self {
            id: order.id.to_string(),
            order_number: order.order_number.clone(),
            customer: customer_name(order.customer.as_ref()),
            date: format_date(Some(order.order_date)),
            product: order.product_description.clone(),
            total: format_currency(Some(order.total_amount), &order.currency),
            inr_value: format_currency(order.inr_value, "INR"),
            lc_number: order.lc_number.clone().unwrap_or_else(|| "-".to_string()),
            lc_alert_class: alert
                .as_ref()
                .map(|a| a.level.css_class().to_string())
                .unwrap_or_default(),
            lc_alert: alert.map(|a| a.message).unwrap_or_default(),
            status: BadgeView::status(order.status.as_str(), order.status.label()),
        }
    }
}

/// Orders list page template.
#[derive(Template)]
#[template(path = "orders/list.html")]
pub struct OrdersListTemplate {
    pub page: PageContext,
    pub table: DataTableConfig,
    pub orders: Vec<OrderRowView>,
    pub total_count: usize,
}

/// Order create/edit form template.
#[derive(Template)]
#[template(path = "orders/form.html")]
pub struct OrderFormTemplate {
    pub page: PageContext,
    pub title: String,
    /// Form POST target.
    pub action: String,
    pub form: OrderForm,
    /// Validation or conflict message; empty when none.
    pub error: String,
    pub customers: Vec<FilterOption>,
    pub quotations: Vec<FilterOption>,
    pub currencies: Vec<FilterOption>,
    pub delivery_terms: Vec<FilterOption>,
    pub statuses: Vec<FilterOption>,
    pub rodtep_statuses: Vec<FilterOption>,
    pub drawback_statuses: Vec<FilterOption>,
}

impl OrderFormTemplate {
    fn new(
        page: PageContext,
        title: &str,
        action: String,
        form: OrderForm,
        customers: &[Customer],
        quotations: &[Quotation],
    ) -> Self {
        let mut customer_options = vec![FilterOption::new("", "Select customer...")];
        customer_options.extend(customers.iter().map(|c| FilterOption {
            value: c.id.to_string(),
            label: format!("{} ({})", c.company_name, c.country),
            selected: c.id.to_string() == form.customer_id,
        }));

        let mut quotation_options = vec![FilterOption::new("", "None")];
        quotation_options.extend(quotations.iter().map(|q| FilterOption {
            value: q.id.to_string(),
            label: q.quotation_number.clone(),
            selected: q.id.to_string() == form.quotation_id,
        }));

        let incentive = |current: &str| {
            FilterOption::list(
                IncentiveStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
                current,
            )
        };

        Self {
            page,
            title: title.to_string(),
            action,
            customers: customer_options,
            quotations: quotation_options,
            currencies: FilterOption::list(CURRENCIES.iter().map(|c| (*c, *c)), &form.currency),
            delivery_terms: FilterOption::list(
                DELIVERY_TERMS.iter().map(|t| (*t, *t)),
                &form.delivery_terms,
            ),
            statuses: FilterOption::list(
                OrderStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
                &form.status,
            ),
            rodtep_statuses: incentive(&form.rodtep_status),
            drawback_statuses: incentive(&form.drawback_status),
            error: String::new(),
            form,
        }
    }

    #[must_use]
    fn with_error(mut self, error: impl ToString) -> Self {
        self.error = error.to_string();
        self
    }
}

/// Load the select options and build a form page.
async fn form_page(
    state: &AppState,
    title: &str,
    action: String,
    form: OrderForm,
) -> Result<OrderFormTemplate, AppError> {
    let customers = state.data().list_customers().await?;
    let quotations = state.data().list_quotations().await?;
    Ok(OrderFormTemplate::new(
        PageContext::new(state, "/orders/new"),
        title,
        action,
        form,
        &customers,
        &quotations,
    ))
}

/// Re-render a rejected submission with its message.
fn rejected(template: OrderFormTemplate, status: StatusCode, error: impl ToString) -> Response {
    (status, render(&template.with_error(error))).into_response()
}

/// Map a failed write to a re-rendered form where the user can fix it.
async fn write_failed(
    state: &AppState,
    title: &str,
    action: String,
    form: OrderForm,
    err: RepositoryError,
) -> Result<Response, AppError> {
    match err {
        RepositoryError::Conflict(message) => {
            let template = form_page(state, title, action, form).await?;
            Ok(rejected(template, StatusCode::CONFLICT, message))
        }
        other => Err(other.into()),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Order list page handler.
///
/// # Errors
///
/// Returns an error if the orders cannot be loaded.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<Html<String>, AppError> {
    let today = state.today();
    let orders = state.data().list_orders().await?;
    let filtered = filter.apply(&orders);

    let template = OrdersListTemplate {
        page: PageContext::new(&state, "/orders/list"),
        table: orders_table_config(&filter),
        total_count: orders.len(),
        orders: filtered
            .into_iter()
            .map(|o| OrderRowView::new(o, today))
            .collect(),
    };
    Ok(render(&template))
}

/// CSV of the filtered order list.
///
/// # Errors
///
/// Returns `400` when no orders match.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<CsvDownload, AppError> {
    let orders = state.data().list_orders().await?;
    let report = order_list(&filter.apply(&orders), state.today());
    Ok(CsvDownload::new(&report)?)
}

/// New order form.
///
/// # Errors
///
/// Returns an error if the customer or quotation lists cannot be loaded.
#[instrument(skip(state))]
pub async fn new(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = OrderForm::from(&OrderInput::default());
    let template = form_page(&state, "New Order", "/orders".to_string(), form).await?;
    Ok(render(&template))
}

/// Create an order from the form.
///
/// # Errors
///
/// Returns an error for database failures other than constraint conflicts.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<Response, AppError> {
    let action = "/orders".to_string();
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return validation_failed(&state, "New Order", action, form, &e).await,
    };

    match state.data().create_order(input).await {
        Ok(order) => {
            tracing::info!(order_number = %order.order_number, "Order created");
            Ok(Redirect::to("/orders/list").into_response())
        }
        Err(e) => write_failed(&state, "New Order", action, form, e).await,
    }
}

/// Edit form for an existing order.
///
/// # Errors
///
/// Returns `404` if the order does not exist.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Html<String>, AppError> {
    let order = state.data().get_order(id).await?;
    let form = OrderForm::from(&order.to_input());
    let title = format!("Edit Order {}", order.order_number);
    let template = form_page(&state, &title, format!("/orders/{id}"), form).await?;
    Ok(render(&template))
}

/// Replace an order with the submitted form.
///
/// # Errors
///
/// Returns `404` if the order does not exist.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Form(form): Form<OrderForm>,
) -> Result<Response, AppError> {
    let action = format!("/orders/{id}");
    let title = format!("Edit Order {}", form.order_number);
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => return validation_failed(&state, &title, action, form, &e).await,
    };

    match state.data().update_order(id, input).await {
        Ok(order) => {
            tracing::info!(order_number = %order.order_number, "Order updated");
            Ok(Redirect::to("/orders/list").into_response())
        }
        Err(e) => write_failed(&state, &title, action, form, e).await,
    }
}

/// Delete an order together with its payments and shipments.
///
/// # Errors
///
/// Returns `404` if the order does not exist.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Redirect, AppError> {
    state.data().delete_order(id).await?;
    tracing::info!(order_id = %id, "Order deleted");
    Ok(Redirect::to("/orders/list"))
}

async fn validation_failed(
    state: &AppState,
    title: &str,
    action: String,
    form: OrderForm,
    err: &ValidationError,
) -> Result<Response, AppError> {
    let template = form_page(state, title, action, form).await?;
    Ok(rejected(template, StatusCode::UNPROCESSABLE_ENTITY, err))
}
