//! Order lifecycle integration tests
//!
//! Covers server-side money derivation, the per-tenant order number
//! sequence, status transitions, and the timeline.

mod common;

use http::StatusCode;
use serde_json::{Value, json};

use common::{login_owner, request, setup_app};

async fn seeded_item_id(router: &axum::Router, token: &str, name: &str) -> (i64, f64) {
    let (status, items) = request(router, "GET", "/api/menu/items", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    let item = items
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == name)
        .unwrap_or_else(|| panic!("seeded item {name}"));
    (
        item["id"].as_i64().unwrap(),
        item["price"].as_f64().unwrap(),
    )
}

async fn set_company_rates(router: &axum::Router, token: &str, tax_rate: f64, delivery_fee: f64) {
    let (status, _) = request(
        router,
        "PUT",
        "/api/settings/company",
        Some(token),
        Some(json!({ "tax_rate": tax_rate, "delivery_fee": delivery_fee })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn totals_are_derived_server_side() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;
    set_company_rates(&app.router, &token, 0.10, 3.50).await;

    // Garlic Bread is seeded at 4.50
    let (item_id, price) = seeded_item_id(&app.router, &token, "Garlic Bread").await;
    assert_eq!(price, 4.50);

    let (status, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 2 }],
            // Client-sent money fields are not part of the schema and are ignored
            "total": 0.01
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {order}");

    assert_eq!(order["status"], "pending");
    assert_eq!(order["subtotal"], 9.00);
    assert_eq!(order["tax"], 0.90);
    // Pickup order: no delivery fee even though the tenant has one configured
    assert_eq!(order["delivery_fee"], 0.0);
    assert_eq!(order["total"], 9.90);

    let items = order["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["unit_price"], 4.50);
    assert_eq!(items[0]["line_total"], 9.00);

    // Timeline opens with pending
    let timeline = order["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0]["status"], "pending");
}

#[tokio::test]
async fn delivery_orders_get_fee_and_require_address() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;
    set_company_rates(&app.router, &token, 0.0, 2.50).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Margherita Pizza").await;

    // Missing address -> 400
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "delivery",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "delivery",
            "delivery_address": "1 Main St",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["delivery_fee"], 2.50);
    assert_eq!(order["total"], 14.00); // 11.50 + 0 tax + 2.50
}

#[tokio::test]
async fn order_numbers_are_sequential_per_tenant() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Tomato Soup").await;
    let place = |qty: i64| {
        json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": qty }]
        })
    };

    let (_, first) = request(&app.router, "POST", "/api/orders", Some(&token), Some(place(1))).await;
    let (_, second) =
        request(&app.router, "POST", "/api/orders", Some(&token), Some(place(2))).await;

    let n1 = first["order_number"].as_i64().unwrap();
    let n2 = second["order_number"].as_i64().unwrap();
    assert_eq!(n2, n1 + 1);
}

#[tokio::test]
async fn status_transitions_and_terminal_guard() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Garlic Bread").await;
    let (_, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    let id = order["id"].as_i64().unwrap();

    let transition = |status: &str| {
        json!({ "status": status })
    };

    for status in ["confirmed", "preparing", "ready", "completed"] {
        let (code, body) = request(
            &app.router,
            "PUT",
            &format!("/api/orders/{id}/status"),
            Some(&token),
            Some(transition(status)),
        )
        .await;
        assert_eq!(code, StatusCode::OK, "transition to {status}: {body}");
        assert_eq!(body["status"], status);
    }

    // Completed is terminal
    let (code, _) = request(
        &app.router,
        "PUT",
        &format!("/api/orders/{id}/status"),
        Some(&token),
        Some(transition("cancelled")),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    // Timeline holds one row per change: pending + 4 transitions
    let (_, detail) = request(
        &app.router,
        "GET",
        &format!("/api/orders/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(detail["timeline"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn delete_cancels_instead_of_removing() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Garlic Bread").await;
    let (_, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    let id = order["id"].as_i64().unwrap();

    let (status, cancelled) = request(
        &app.router,
        "DELETE",
        &format!("/api/orders/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "cancelled");

    // Still retrievable
    let (status, detail) = request(
        &app.router,
        "GET",
        &format!("/api/orders/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["status"], "cancelled");
}

#[tokio::test]
async fn list_filters_by_status() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Tomato Soup").await;
    let (_, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    let id = order["id"].as_i64().unwrap();
    let (_, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/orders/{id}"),
        Some(&token),
        None,
    )
    .await;

    let (status, cancelled) = request(
        &app.router,
        "GET",
        "/api/orders?status=cancelled",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = cancelled.as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|o| o["status"] == Value::from("cancelled")));

    // Unknown status value -> 400
    let (status, _) = request(
        &app.router,
        "GET",
        "/api/orders?status=bogus",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unavailable_items_cannot_be_ordered() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (item_id, _) = seeded_item_id(&app.router, &token, "Garlic Bread").await;
    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/menu/items/{item_id}"),
        Some(&token),
        Some(json!({ "is_available": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
