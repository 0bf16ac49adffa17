//! Shipment route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::instrument;

use export_tracker_core::ShipmentStatus;
use export_tracker_core::analytics::status_counts;
use export_tracker_core::format::format_date;
use export_tracker_core::models::Shipment;
use export_tracker_core::query::{ListFilter, ShipmentFilter};
use export_tracker_core::reports::shipment_list;

use crate::{
    components::data_table::{DataTableConfig, shipments_table_config},
    error::AppError,
    export::CsvDownload,
    state::AppState,
};

use super::dashboard::route;
use super::{BadgeView, PageContext, StatusCountView, customer_name, render};

/// Shipment list row.
#[derive(Debug, Clone)]
pub struct ShipmentRowView {
    pub shipment_number: String,
    pub order_number: String,
    pub customer: String,
    pub vessel: String,
    pub bl_number: String,
    pub container: String,
    pub route: String,
    pub etd: String,
    pub eta: String,
    pub status: BadgeView,
}

fn or_dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

impl From<&Shipment> for ShipmentRowView {
    fn from(shipment: &Shipment) -> Self {
        let vessel = match (&shipment.vessel_name, &shipment.voyage_number) {
            (Some(name), Some(voyage)) => format!("{name} / {voyage}"),
            (name, _) => or_dash(name.as_ref()),
        };
        let container = format!(
            "{} ({})",
            or_dash(shipment.container_number.as_ref()),
            shipment.container_size
        );
        Self {
            shipment_number: shipment.shipment_number.clone(),
            order_number: shipment
                .order
                .as_ref()
                .map_or_else(|| "-".to_string(), |o| o.order_number.clone()),
            customer: customer_name(shipment.customer.as_ref()),
            vessel,
            bl_number: or_dash(shipment.bl_number.as_ref()),
            container,
            route: route(shipment),
            etd: format_date(shipment.etd),
            eta: format_date(shipment.eta),
            status: BadgeView::status(shipment.status.as_str(), shipment.status.label()),
        }
    }
}

/// Shipments page template.
#[derive(Template)]
#[template(path = "shipments/index.html")]
pub struct ShipmentsTemplate {
    pub page: PageContext,
    pub counts: Vec<StatusCountView>,
    pub table: DataTableConfig,
    pub shipments: Vec<ShipmentRowView>,
    pub total_count: usize,
}

/// Shipments page handler.
///
/// # Errors
///
/// Returns an error if the shipments cannot be loaded.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ShipmentFilter>,
) -> Result<Html<String>, AppError> {
    let shipments = state.data().list_shipments().await?;

    let template = ShipmentsTemplate {
        page: PageContext::new(&state, "/shipments"),
        counts: status_counts(shipments.iter().map(|s| s.status), ShipmentStatus::ALL)
            .into_iter()
            .map(|(status, count)| StatusCountView::new(status.as_str(), status.label(), count))
            .collect(),
        table: shipments_table_config(&filter),
        shipments: filter
            .apply(&shipments)
            .into_iter()
            .map(ShipmentRowView::from)
            .collect(),
        total_count: shipments.len(),
    };
    Ok(render(&template))
}

/// CSV of the filtered shipment list.
///
/// # Errors
///
/// Returns `400` when no shipments match.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(filter): Query<ShipmentFilter>,
) -> Result<CsvDownload, AppError> {
    let shipments = state.data().list_shipments().await?;
    let report = shipment_list(&filter.apply(&shipments), state.today());
    Ok(CsvDownload::new(&report)?)
}
