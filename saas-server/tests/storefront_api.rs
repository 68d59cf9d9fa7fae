//! Public storefront integration tests (no authentication)

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login_owner, request, setup_app};

#[tokio::test]
async fn info_and_menu_are_public() {
    let app = setup_app().await;

    let (status, info) = request(
        &app.router,
        "GET",
        "/api/storefront/demo-bistro/info",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "info failed: {info}");
    assert_eq!(info["slug"], "demo-bistro");
    assert_eq!(info["name"], "Demo Bistro");

    let (status, menu) = request(
        &app.router,
        "GET",
        "/api/storefront/demo-bistro/menu",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let categories = menu.as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert!(
        categories
            .iter()
            .any(|c| c["name"] == "Starters" && !c["items"].as_array().unwrap().is_empty())
    );
}

#[tokio::test]
async fn unknown_slug_returns_404() {
    let app = setup_app().await;

    let (status, _) = request(
        &app.router,
        "GET",
        "/api/storefront/nope/info",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disabled_storefront_returns_403() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (status, _) = request(
        &app.router,
        "PUT",
        "/api/settings/company",
        Some(&token),
        Some(json!({ "is_storefront_enabled": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app.router,
        "GET",
        "/api/storefront/demo-bistro/menu",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn public_order_placement() {
    let app = setup_app().await;

    let (_, menu) = request(
        &app.router,
        "GET",
        "/api/storefront/demo-bistro/menu",
        None,
        None,
    )
    .await;
    let item_id = menu.as_array().unwrap()[0]["items"].as_array().unwrap()[0]["id"]
        .as_i64()
        .unwrap();

    // Missing contact info -> 400
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/storefront/demo-bistro/orders",
        None,
        Some(json!({
            "order_type": "pickup",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Dine-in is back-office only
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/storefront/demo-bistro/orders",
        None,
        Some(json!({
            "order_type": "dine_in",
            "customer_name": "Eve",
            "customer_phone": "123",
            "items": [{ "menu_item_id": item_id, "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, order) = request(
        &app.router,
        "POST",
        "/api/storefront/demo-bistro/orders",
        None,
        Some(json!({
            "order_type": "pickup",
            "customer_name": "Eve",
            "customer_phone": "123456",
            "items": [{ "menu_item_id": item_id, "quantity": 2 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "order failed: {order}");
    assert_eq!(order["status"], "pending");
    assert!(order["order_number"].as_i64().is_some());
    assert!(order["total"].as_f64().unwrap() > 0.0);
}
