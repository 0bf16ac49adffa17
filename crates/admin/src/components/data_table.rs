//! Data table component types.
//!
//! These types describe the filterable list tables (orders, customers,
//! payments, shipments, inquiries). The shared toolbar template
//! `components/filter_bar.html` renders the search box, the select filters
//! and the CSV export link from a [`DataTableConfig`].

use serde::Serialize;

use export_tracker_core::query::{
    CustomerFilter, InquiryFilter, OrderFilter, PaymentFilter, ShipmentFilter,
};
use export_tracker_core::{
    InquiryStatus, OrderStatus, PaymentMode, PaymentStatus, ShipmentStatus,
};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableColumn {
    /// Display label for the column header.
    pub label: String,
    /// Right-align (amounts, counts).
    pub numeric: bool,
}

impl TableColumn {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            numeric: false,
        }
    }

    /// A right-aligned column.
    #[must_use]
    pub fn numeric(label: &str) -> Self {
        Self {
            label: label.to_string(),
            numeric: true,
        }
    }
}

/// Option for a select filter or form select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected: false,
        }
    }

    /// Build options from `(value, label)` pairs, selecting `current`.
    #[must_use]
    pub fn list<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        current: &str,
    ) -> Vec<Self> {
        pairs
            .into_iter()
            .map(|(value, label)| Self {
                value: value.to_string(),
                label: label.to_string(),
                selected: value == current,
            })
            .collect()
    }
}

/// Select filter definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableFilter {
    /// Query-string key.
    pub key: String,
    /// Label of the "no filter" option.
    pub label: String,
    /// Options, including the leading `all` entry.
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// A select whose first option (`all`) disables the filter.
    #[must_use]
    pub fn select(
        key: &str,
        label: &str,
        mut options: Vec<FilterOption>,
        current: Option<&str>,
    ) -> Self {
        let current = current.map(str::trim).unwrap_or_default();
        let mut all = FilterOption::new("all", label);
        all.selected = current.is_empty() || current == "all";
        for option in &mut options {
            option.selected = option.value == current;
        }
        options.insert(0, all);
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Form action for the filter bar.
    pub action: String,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub search_placeholder: String,
    /// Current search text.
    pub search_value: String,
    /// CSV link carrying the current filters, empty when there is no export.
    pub export_href: String,
    pub empty_title: String,
}

impl DataTableConfig {
    #[must_use]
    pub fn new(table_id: &str, action: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            action: action.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            search_value: String::new(),
            export_href: String::new(),
            empty_title: "No items found".to_string(),
        }
    }

    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn search(mut self, placeholder: &str, value: Option<&str>) -> Self {
        self.search_placeholder = placeholder.to_string();
        self.search_value = value.unwrap_or_default().to_string();
        self
    }

    /// Link the export button to `path`, carrying the active filters.
    #[must_use]
    pub fn export(mut self, path: &str) -> Self {
        let mut params: Vec<(String, String)> = Vec::new();
        if !self.search_value.trim().is_empty() {
            params.push(("q".to_string(), self.search_value.clone()));
        }
        for filter in &self.filters {
            if let Some(option) = filter.options.iter().find(|o| o.selected && o.value != "all") {
                params.push((filter.key.clone(), option.value.clone()));
            }
        }
        self.export_href = if params.is_empty() {
            path.to_string()
        } else {
            let query = params
                .iter()
                .map(|(k, v)| format!("{k}={}", encode_query_value(v)))
                .collect::<Vec<_>>()
                .join("&");
            format!("{path}?{query}")
        };
        self
    }

    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }
}

/// Percent-encode a query-string value (RFC 3986 unreserved characters pass through).
fn encode_query_value(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                char::from(b).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

fn status_options<S>(
    all: &[S],
    as_str: fn(&S) -> &'static str,
    label: fn(&S) -> &'static str,
) -> Vec<FilterOption> {
    all.iter()
        .map(|s| FilterOption::new(as_str(s), label(s)))
        .collect()
}

// =============================================================================
// Table configurations
// =============================================================================

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config(filter: &OrderFilter) -> DataTableConfig {
    let currencies = ["USD", "EUR", "GBP", "AED", "INR"]
        .iter()
        .map(|c| FilterOption::new(c, c))
        .collect();
    DataTableConfig::new("orders", "/orders/list")
        .column(TableColumn::new("Order #"))
        .column(TableColumn::new("Customer"))
        .column(TableColumn::new("Date"))
        .column(TableColumn::new("Product"))
        .column(TableColumn::numeric("Total"))
        .column(TableColumn::numeric("INR Value"))
        .column(TableColumn::new("LC"))
        .column(TableColumn::new("Status"))
        .column(TableColumn::new(""))
        .search("Search order #, product or customer...", filter.q.as_deref())
        .filter(TableFilter::select(
            "status",
            "All statuses",
            status_options(OrderStatus::ALL, OrderStatus::as_str, OrderStatus::label),
            filter.status.as_deref(),
        ))
        .filter(TableFilter::select(
            "currency",
            "All currencies",
            currencies,
            filter.currency.as_deref(),
        ))
        .export("/orders/export")
        .empty_state("No orders found")
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config(filter: &CustomerFilter, countries: &[String]) -> DataTableConfig {
    let countries = countries
        .iter()
        .map(|c| FilterOption::new(c, c))
        .collect();
    DataTableConfig::new("customers", "/customers")
        .column(TableColumn::new("Company"))
        .column(TableColumn::new("Contact"))
        .column(TableColumn::new("Country"))
        .column(TableColumn::numeric("Orders"))
        .column(TableColumn::numeric("Total Ordered"))
        .column(TableColumn::numeric("Outstanding"))
        .column(TableColumn::new("Terms"))
        .column(TableColumn::new("Status"))
        .search("Search company, contact, email or country...", filter.q.as_deref())
        .filter(TableFilter::select(
            "country",
            "All countries",
            countries,
            filter.country.as_deref(),
        ))
        .export("/customers/export")
        .empty_state("No customers found")
}

/// Build the payments table configuration.
#[must_use]
pub fn payments_table_config(filter: &PaymentFilter) -> DataTableConfig {
    DataTableConfig::new("payments", "/payments")
        .column(TableColumn::new("Reference"))
        .column(TableColumn::new("Order"))
        .column(TableColumn::new("Customer"))
        .column(TableColumn::new("Invoice"))
        .column(TableColumn::numeric("Invoice Amount"))
        .column(TableColumn::numeric("Received"))
        .column(TableColumn::new("Due"))
        .column(TableColumn::numeric("Overdue"))
        .column(TableColumn::new("Mode"))
        .column(TableColumn::new("Status"))
        .search("Search reference, invoice or customer...", filter.q.as_deref())
        .filter(TableFilter::select(
            "status",
            "All statuses",
            status_options(PaymentStatus::ALL, PaymentStatus::as_str, PaymentStatus::label),
            filter.status.as_deref(),
        ))
        .filter(TableFilter::select(
            "mode",
            "All modes",
            status_options(PaymentMode::ALL, PaymentMode::as_str, PaymentMode::label),
            filter.mode.as_deref(),
        ))
        .export("/payments/export")
        .empty_state("No payments found")
}

/// Build the shipments table configuration.
#[must_use]
pub fn shipments_table_config(filter: &ShipmentFilter) -> DataTableConfig {
    DataTableConfig::new("shipments", "/shipments")
        .column(TableColumn::new("Shipment #"))
        .column(TableColumn::new("Order"))
        .column(TableColumn::new("Customer"))
        .column(TableColumn::new("Vessel"))
        .column(TableColumn::new("B/L"))
        .column(TableColumn::new("Container"))
        .column(TableColumn::new("Route"))
        .column(TableColumn::new("ETD"))
        .column(TableColumn::new("ETA"))
        .column(TableColumn::new("Status"))
        .search("Search shipment #, vessel, B/L or container...", filter.q.as_deref())
        .filter(TableFilter::select(
            "status",
            "All statuses",
            status_options(ShipmentStatus::ALL, ShipmentStatus::as_str, ShipmentStatus::label),
            filter.status.as_deref(),
        ))
        .export("/shipments/export")
        .empty_state("No shipments found")
}

/// Build the inquiries table configuration.
#[must_use]
pub fn inquiries_table_config(filter: &InquiryFilter) -> DataTableConfig {
    DataTableConfig::new("inquiries", "/inquiries")
        .column(TableColumn::new("Inquiry #"))
        .column(TableColumn::new("Customer"))
        .column(TableColumn::new("Date"))
        .column(TableColumn::new("Product"))
        .column(TableColumn::numeric("Quantity"))
        .column(TableColumn::numeric("Target Price"))
        .column(TableColumn::new("Terms"))
        .column(TableColumn::new("Follow-up"))
        .column(TableColumn::new("Status"))
        .search("Search inquiry #, product or customer...", filter.q.as_deref())
        .filter(TableFilter::select(
            "status",
            "All statuses",
            status_options(InquiryStatus::ALL, InquiryStatus::as_str, InquiryStatus::label),
            filter.status.as_deref(),
        ))
        .export("/inquiries/export")
        .empty_state("No inquiries found")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_select_marks_current_option() {
        let filter = TableFilter::select(
            "status",
            "All statuses",
            vec![FilterOption::new("shipped", "Shipped")],
            Some("shipped"),
        );
        let selected: Vec<&str> = filter
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["shipped"]);
        assert_eq!(filter.options.first().unwrap().value, "all");

        let filter = TableFilter::select("status", "All", vec![], None);
        assert!(filter.options.first().unwrap().selected);
    }

    #[test]
    fn test_export_link_carries_filters() {
        let filter = OrderFilter {
            q: Some("black pepper".to_string()),
            status: Some("shipped".to_string()),
            currency: Some("all".to_string()),
        };
        let config = orders_table_config(&filter);
        assert_eq!(
            config.export_href,
            "/orders/export?q=black%20pepper&status=shipped"
        );

        let config = orders_table_config(&OrderFilter::default());
        assert_eq!(config.export_href, "/orders/export");
        assert_eq!(config.columns.len(), 9);
    }
}
