//! Server-rendered pages and CSV downloads against the demo data.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use export_tracker_integration_tests::{
    AL_NOOR_ID, RICE_ORDER_ID, delete, get, post_form, test_app,
};

fn new_order<'a>(number: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("order_number", number),
        ("customer_id", AL_NOOR_ID),
        ("order_date", "2026-03-15"),
        ("product_description", "Sona Masoori rice, 10 kg bags"),
        ("quantity", "12,000"),
        ("unit_price", "0.92"),
        ("currency", "USD"),
        ("exchange_rate", "83.50"),
        ("status", "confirmed"),
    ]
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = test_app();
    assert_eq!(get(&app, "/health").await.status, StatusCode::OK);
    assert_eq!(get(&app, "/health/ready").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_root_redirects_to_dashboard() {
    let response = get(&test_app(), "/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, "/dashboard");
}

#[tokio::test]
async fn test_dashboard_shows_demo_banner_and_panels() {
    let response = get(&test_app(), "/dashboard").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Demo mode"));
    assert!(response.body.contains("Recent Orders"));
    assert!(response.body.contains("Overdue Payments"));
    assert!(response.body.contains("Active Shipments"));
}

#[tokio::test]
async fn test_order_list_filters_by_status() {
    let app = test_app();

    let all = get(&app, "/orders/list").await;
    assert_eq!(all.status, StatusCode::OK);
    assert!(all.body.contains("EXP-2026-001"));
    assert!(all.body.contains("EXP-2026-005"));

    let shipped = get(&app, "/orders/list?status=shipped").await;
    assert_eq!(shipped.status, StatusCode::OK);
    assert!(shipped.body.contains("EXP-2026-001"));
    assert!(!shipped.body.contains("EXP-2026-002"));
}

#[tokio::test]
async fn test_order_list_search_matches_customer_name() {
    let response = get(&test_app(), "/orders/list?q=hamburg").await;
    assert!(response.body.contains("EXP-2026-002"));
    assert!(!response.body.contains("EXP-2026-004"));
}

#[tokio::test]
async fn test_new_order_form_lists_customers() {
    let response = get(&test_app(), "/orders/new").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Al Noor Trading LLC"));
}

#[tokio::test]
async fn test_create_order_redirects_to_list() {
    let app = test_app();
    let response = post_form(&app, "/orders", &new_order("EXP-2026-050")).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, "/orders/list");

    let list = get(&app, "/orders/list").await;
    assert!(list.body.contains("EXP-2026-050"));
}

#[tokio::test]
async fn test_create_order_without_number_is_rejected() {
    let response = post_form(&test_app(), "/orders", &new_order("")).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("order_number"));
}

#[tokio::test]
async fn test_create_order_with_bad_number_field_is_rejected() {
    let mut fields = new_order("EXP-2026-051");
    fields.push(("lc_amount", "lots"));
    let response = post_form(&test_app(), "/orders", &fields).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("lc_amount"));
}

#[tokio::test]
async fn test_create_order_with_taken_number_conflicts() {
    let response = post_form(&test_app(), "/orders", &new_order("EXP-2026-001")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    // The form comes back with what was typed.
    assert!(response.body.contains("Sona Masoori rice"));
}

#[tokio::test]
async fn test_edit_form_loads_existing_order() {
    let response = get(&test_app(), &format!("/orders/{RICE_ORDER_ID}/edit")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("EXP-2026-001"));
    assert!(response.body.contains("Emirates NBD"));
}

#[tokio::test]
async fn test_edit_unknown_order_is_not_found() {
    let response = get(
        &test_app(),
        "/orders/00000000-0000-0000-0000-00000000ffff/edit",
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_with_malformed_id_is_bad_request() {
    let response = get(&test_app(), "/orders/not-a-uuid/edit").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_order_changes_list() {
    let app = test_app();
    let mut fields: Vec<_> = new_order("EXP-2026-001")
        .into_iter()
        .filter(|(name, _)| *name != "status")
        .collect();
    fields.push(("remarks", "Revised"));
    fields.push(("status", "delivered"));
    let response = post_form(&app, &format!("/orders/{RICE_ORDER_ID}"), &fields).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let list = get(&app, "/orders/list?status=delivered").await;
    assert!(list.body.contains("EXP-2026-001"));
}

#[tokio::test]
async fn test_update_order_to_taken_number_conflicts() {
    let response = post_form(
        &test_app(),
        &format!("/orders/{RICE_ORDER_ID}"),
        &new_order("EXP-2026-002"),
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_order_removes_it() {
    let app = test_app();
    let response = post_form(&app, &format!("/orders/{RICE_ORDER_ID}/delete"), &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let list = get(&app, "/orders/list").await;
    assert!(!list.body.contains("EXP-2026-001"));
    assert!(list.body.contains("EXP-2026-002"));

    // Its payment and shipment went with it.
    let payments = get(&app, "/payments").await;
    assert!(!payments.body.contains("PAY-2026-002"));
    let shipments = get(&app, "/shipments").await;
    assert!(!shipments.body.contains("SHP-2026-001"));
}

#[tokio::test]
async fn test_order_export_is_csv_attachment() {
    let response = get(&test_app(), "/orders/export?status=shipped").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/csv"));
    assert!(response.disposition.starts_with("attachment"));

    let mut lines = response.body.lines();
    assert!(lines.next().unwrap().starts_with("Order Number"));
    assert!(lines.next().unwrap().starts_with("EXP-2026-001"));
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn test_export_with_no_matches_is_bad_request() {
    let response = get(&test_app(), "/orders/export?q=saffron").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_customer_page_and_create() {
    let app = test_app();
    let page = get(&app, "/customers").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Pacific Fine Foods Inc"));
    assert!(page.body.contains("Add Customer"));

    let created = post_form(
        &app,
        "/customers",
        &[
            ("company_name", "Doha Spice House"),
            ("country", "Qatar"),
            ("credit_limit", "40000"),
        ],
    )
    .await;
    assert_eq!(created.status, StatusCode::SEE_OTHER);
    assert_eq!(created.location, "/customers");

    let page = get(&app, "/customers?country=Qatar").await;
    assert!(page.body.contains("Doha Spice House"));
    assert!(!page.body.contains("Pacific Fine Foods Inc"));
}

#[tokio::test]
async fn test_customer_without_country_is_rejected() {
    let response = post_form(
        &test_app(),
        "/customers",
        &[("company_name", "Doha Spice House")],
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("country"));
}

#[tokio::test]
async fn test_payments_page_sections() {
    let response = get(&test_app(), "/payments").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Receivables Aging"));
    assert!(response.body.contains("FIRC Register"));
    assert!(response.body.contains("HDFC Bank"));
    assert!(response.body.contains("PAY-2026-004"));
}

#[tokio::test]
async fn test_payments_filter_by_status() {
    let response = get(&test_app(), "/payments?status=overdue").await;
    assert!(response.body.contains("PAY-2026-004"));
    assert!(!response.body.contains("PAY-2026-003"));
}

#[tokio::test]
async fn test_shipments_page() {
    let response = get(&test_app(), "/shipments").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("SHP-2026-001"));
    assert!(response.body.contains("In Transit"));
}

#[tokio::test]
async fn test_inquiries_page() {
    let response = get(&test_app(), "/inquiries?status=lost").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("INQ-2026-004"));
    assert!(!response.body.contains("INQ-2026-001"));
}

#[tokio::test]
async fn test_report_catalogue_and_download() {
    let app = test_app();
    let page = get(&app, "/reports").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("/reports/payment-aging"));
    assert!(page.body.contains("/reports/firc-report"));

    let report = get(&app, "/reports/payment-aging").await;
    assert_eq!(report.status, StatusCode::OK);
    assert!(report.content_type.starts_with("text/csv"));
    assert!(report.body.starts_with("Payment Ref"));
    assert!(report.body.contains("PAY-2026-004"));
    // Received payments are not outstanding.
    assert!(!report.body.contains("PAY-2026-001"));
}

#[tokio::test]
async fn test_unknown_report_is_not_found() {
    let response = get(&test_app(), "/reports/tax-summary").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_routes_reject_api_only_methods() {
    let response = delete(&test_app(), "/customers").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_create_order_with_overflowing_quantity_is_rejected() {
    let mut fields: Vec<_> = new_order("EXP-2026-052")
        .into_iter()
        .filter(|(name, _)| *name != "quantity")
        .collect();
    fields.push(("quantity", "79228162514264337593543950335"));
    let response = post_form(&test_app(), "/orders", &fields).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("out of range"));
}
