//! JSON API against the demo data.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use export_tracker_integration_tests::{
    AL_NOOR_ID, RICE_ORDER_ID, delete, get, send_json, test_app,
};

fn order_body(number: &str) -> Value {
    json!({
        "order_number": number,
        "customer_id": AL_NOOR_ID,
        "order_date": "2026-03-15",
        "product_description": "Sona Masoori rice",
        "quantity": "12000",
        "unit_price": "0.92",
        "total_amount": "11040",
        "exchange_rate": "83.5"
    })
}

#[tokio::test]
async fn test_list_customers() {
    let response = get(&test_app(), "/api/customers").await;
    assert_eq!(response.status, StatusCode::OK);
    let customers = response.json();
    assert_eq!(customers.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_show_customer() {
    let response = get(&test_app(), &format!("/api/customers/{AL_NOOR_ID}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["company_name"], "Al Noor Trading LLC");
}

#[tokio::test]
async fn test_create_customer() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/api/customers",
        &json!({ "company_name": "Doha Spice House", "country": "Qatar" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["company_name"], "Doha Spice House");
    assert_eq!(created["status"], "active");

    let list = get(&app, "/api/customers").await.json();
    assert_eq!(list.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_customer_requires_company_name() {
    let response = send_json(
        &test_app(),
        "POST",
        "/api/customers",
        &json!({ "country": "Qatar" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response.json()["error"]
            .as_str()
            .unwrap()
            .contains("company_name")
    );
}

#[tokio::test]
async fn test_delete_customer_keeps_orders() {
    let app = test_app();
    let response = delete(&app, &format!("/api/customers/{AL_NOOR_ID}")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let order = get(&app, &format!("/api/orders/{RICE_ORDER_ID}")).await;
    assert_eq!(order.status, StatusCode::OK);
    assert!(order.json()["customer_id"].is_null());
}

#[tokio::test]
async fn test_show_order() {
    let response = get(&test_app(), &format!("/api/orders/{RICE_ORDER_ID}")).await;
    assert_eq!(response.status, StatusCode::OK);
    let order = response.json();
    assert_eq!(order["order_number"], "EXP-2026-001");
    assert_eq!(order["status"], "shipped");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let response = get(
        &test_app(),
        "/api/orders/00000000-0000-0000-0000-00000000ffff",
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_create_order() {
    let app = test_app();
    let response = send_json(&app, "POST", "/api/orders", &order_body("EXP-2026-050")).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["order_number"], "EXP-2026-050");

    let list = get(&app, "/api/orders").await.json();
    assert_eq!(list.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_order_with_taken_number_conflicts() {
    let response = send_json(
        &test_app(),
        "POST",
        "/api/orders",
        &order_body("EXP-2026-001"),
    )
    .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_order_for_unknown_customer_conflicts() {
    let mut body = order_body("EXP-2026-051");
    body["customer_id"] = json!("00000000-0000-0000-0000-00000000ffff");
    let response = send_json(&test_app(), "POST", "/api/orders", &body).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_order_with_zero_quantity_is_rejected() {
    let mut body = order_body("EXP-2026-052");
    body["quantity"] = json!("0");
    let response = send_json(&test_app(), "POST", "/api/orders", &body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_order() {
    let app = test_app();
    let mut body = order_body("EXP-2026-001");
    body["status"] = json!("delivered");
    let response = send_json(
        &app,
        "PUT",
        &format!("/api/orders/{RICE_ORDER_ID}"),
        &body,
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "delivered");
}

#[tokio::test]
async fn test_delete_order_cascades() {
    let app = test_app();
    let response = delete(&app, &format!("/api/orders/{RICE_ORDER_ID}")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let again = delete(&app, &format!("/api/orders/{RICE_ORDER_ID}")).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let payments = get(&app, "/api/payments").await.json();
    assert!(
        payments
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["payment_reference"] != "PAY-2026-002")
    );
    let shipments = get(&app, "/api/shipments").await.json();
    assert_eq!(shipments.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dashboard_counters() {
    let response = get(&test_app(), "/api/dashboard").await;
    assert_eq!(response.status, StatusCode::OK);
    let stats = response.json();
    assert_eq!(stats["total_orders"], 5);
    assert_eq!(stats["total_customers"], 5);
    assert_eq!(stats["total_inquiries"], 4);
}

#[tokio::test]
async fn test_aging_has_four_buckets() {
    let response = get(&test_app(), "/api/aging").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let buckets = body["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 4);

    let unpaid: u64 = buckets.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(unpaid, 3);
}

#[tokio::test]
async fn test_create_payment_and_shipment() {
    let app = test_app();
    let payment = send_json(
        &app,
        "POST",
        "/api/payments",
        &json!({
            "payment_reference": "PAY-2026-010",
            "order_id": RICE_ORDER_ID,
            "invoice_amount": "21000",
            "payment_due_date": "2026-04-30"
        }),
    )
    .await;
    assert_eq!(payment.status, StatusCode::CREATED);

    let shipment = send_json(
        &app,
        "POST",
        "/api/shipments",
        &json!({ "shipment_number": "SHP-2026-010", "order_id": RICE_ORDER_ID }),
    )
    .await;
    assert_eq!(shipment.status, StatusCode::CREATED);
    assert_eq!(shipment.json()["status"], "booked");
}

#[tokio::test]
async fn test_payment_requires_order() {
    let response = send_json(
        &test_app(),
        "POST",
        "/api/payments",
        &json!({ "payment_reference": "PAY-2026-011", "invoice_amount": "100" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_inquiries_and_quotations() {
    let app = test_app();
    let inquiries = get(&app, "/api/inquiries").await.json();
    assert_eq!(inquiries.as_array().unwrap().len(), 4);

    let quotation = send_json(
        &app,
        "POST",
        "/api/quotations",
        &json!({
            "quotation_number": "QT-2026-010",
            "inquiry_id": "00000000-0000-0000-0000-00000000ffff",
            "product_description": "Cardamom 8 mm"
        }),
    )
    .await;
    assert_eq!(quotation.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_enum_value_is_json_error() {
    let response = send_json(
        &test_app(),
        "POST",
        "/api/customers",
        &json!({ "company_name": "Doha Spice House", "country": "Qatar", "status": "bogus" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.content_type.starts_with("application/json"));
    let message = response.json()["error"].as_str().unwrap().to_string();
    assert!(message.contains("unknown variant"));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let request = axum::http::Request::post("/api/orders")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"order_number\": "))
        .unwrap();
    let response = export_tracker_integration_tests::send(&test_app(), request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.content_type.starts_with("application/json"));
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_malformed_id_is_json_error() {
    let response = get(&test_app(), "/api/orders/not-a-uuid").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.content_type.starts_with("application/json"));
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_oversized_amounts_are_rejected_and_dashboard_survives() {
    let app = test_app();
    for number in ["EXP-2026-060", "EXP-2026-061"] {
        let mut body = order_body(number);
        body["total_amount"] = json!("50000000000000000000000000000");
        let response = send_json(&app, "POST", "/api/orders", &body).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json()["error"],
            "total_amount: is out of range"
        );
    }

    let dashboard = get(&app, "/api/dashboard").await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.json()["total_orders"], 5);
}

#[tokio::test]
async fn test_quotation_with_overflowing_quantity_is_rejected() {
    let response = send_json(
        &test_app(),
        "POST",
        "/api/quotations",
        &json!({
            "quotation_number": "QT-2026-011",
            "product_description": "Cardamom 8 mm",
            "quantity": "79228162514264337593543950335",
            "unit_price": "2"
        }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["error"], "quantity: is out of range");
}
