//! Customer route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use tracing::instrument;

use export_tracker_core::CustomerStatus;
use export_tracker_core::analytics::{CustomerSummary, customer_summary};
use export_tracker_core::format::format_currency;
use export_tracker_core::models::Customer;
use export_tracker_core::query::{CustomerFilter, ListFilter, countries};
use export_tracker_core::reports::customer_list;

use crate::{
    components::data_table::{DataTableConfig, FilterOption, customers_table_config},
    db::RepositoryError,
    error::AppError,
    export::CsvDownload,
    state::AppState,
};

use super::forms::CustomerForm;
use super::{BadgeView, PageContext, render};

/// Customer row with ledger totals.
#[derive(Debug, Clone)]
pub struct CustomerRowView {
    pub company_name: String,
    pub contact: String,
    pub email: String,
    pub country: String,
    pub city: String,
    pub order_count: String,
    pub total_ordered: String,
    pub outstanding: String,
    pub has_outstanding: bool,
    pub payment_terms: String,
    pub status: BadgeView,
}

impl CustomerRowView {
    fn new(customer: &Customer, summary: &CustomerSummary) -> Self {
        Self {
            company_name: customer.company_name.clone(),
            contact: customer.contact_person.clone().unwrap_or_else(|| "-".to_string()),
            email: customer.email.clone().unwrap_or_default(),
            country: customer.country.clone(),
            city: customer.city.clone().unwrap_or_default(),
            order_count: summary.order_count.to_string(),
            total_ordered: format_currency(Some(summary.total_ordered), "USD"),
            outstanding: format_currency(Some(summary.outstanding), "USD"),
            has_outstanding: summary.outstanding > Decimal::ZERO,
            payment_terms: customer.payment_terms.clone(),
            status: BadgeView::status(customer.status.as_str(), customer.status.label()),
        }
    }
}

/// Customers page template.
#[derive(Template)]
#[template(path = "customers/index.html")]
pub struct CustomersTemplate {
    pub page: PageContext,
    pub table: DataTableConfig,
    pub customers: Vec<CustomerRowView>,
    pub total_count: usize,
    /// Add-customer form, refilled after a rejected submission.
    pub form: CustomerForm,
    pub statuses: Vec<FilterOption>,
    pub error: String,
}

async fn customers_page(
    state: &AppState,
    filter: &CustomerFilter,
    form: CustomerForm,
    error: String,
) -> Result<CustomersTemplate, AppError> {
    let customers = state.data().list_customers().await?;
    let orders = state.data().list_orders().await?;
    let payments = state.data().list_payments().await?;

    let rows = filter
        .apply(&customers)
        .into_iter()
        .map(|c| CustomerRowView::new(c, &customer_summary(c.id, &orders, &payments)))
        .collect();

    Ok(CustomersTemplate {
        page: PageContext::new(state, "/customers"),
        table: customers_table_config(filter, &countries(&customers)),
        customers: rows,
        total_count: customers.len(),
        statuses: FilterOption::list(
            CustomerStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
            &form.status,
        ),
        form,
        error,
    })
}

/// Customer list page handler.
///
/// # Errors
///
/// Returns an error if the records cannot be loaded.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<CustomerFilter>,
) -> Result<Html<String>, AppError> {
    let template =
        customers_page(&state, &filter, CustomerForm::default(), String::new()).await?;
    Ok(render(&template))
}

/// Create a customer from the add form.
///
/// # Errors
///
/// Returns an error for database failures other than constraint conflicts.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Response, AppError> {
    let filter = CustomerFilter::default();
    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => {
            let template = customers_page(&state, &filter, form, e.to_string()).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&template)).into_response());
        }
    };

    match state.data().create_customer(input).await {
        Ok(customer) => {
            tracing::info!(company = %customer.company_name, "Customer created");
            Ok(Redirect::to("/customers").into_response())
        }
        Err(RepositoryError::Conflict(message)) => {
            let template = customers_page(&state, &filter, form, message).await?;
            Ok((StatusCode::CONFLICT, render(&template)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// CSV of the filtered customer list with ledger totals.
///
/// # Errors
///
/// Returns `400` when no customers match.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(filter): Query<CustomerFilter>,
) -> Result<CsvDownload, AppError> {
    let customers = state.data().list_customers().await?;
    let orders = state.data().list_orders().await?;
    let payments = state.data().list_payments().await?;
    let report = customer_list(&filter.apply(&customers), &orders, &payments, state.today());
    Ok(CsvDownload::new(&report)?)
}
