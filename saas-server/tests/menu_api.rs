//! Menu category and item API integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login, login_admin, login_owner, request, setup_app};

#[tokio::test]
async fn category_crud_and_duplicate_guard() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (status, created) = request(
        &app.router,
        "POST",
        "/api/menu/categories",
        Some(&token),
        Some(json!({ "name": "Desserts", "sort_order": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");
    assert_eq!(created["name"], "Desserts");
    let id = created["id"].as_i64().unwrap();

    // Duplicate name within the tenant -> 409
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/menu/categories",
        Some(&token),
        Some(json!({ "name": "Desserts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Rename
    let (status, updated) = request(
        &app.router,
        "PUT",
        &format!("/api/menu/categories/{id}"),
        Some(&token),
        Some(json!({ "name": "Sweets" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Sweets");

    // Empty category deletes fine
    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/menu/categories/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn category_with_items_cannot_be_deleted() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    // Seeded "Starters" category still holds items
    let (status, categories) =
        request(&app.router, "GET", "/api/menu/categories", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let starters = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Starters")
        .expect("seeded Starters category");
    let id = starters["id"].as_i64().unwrap();

    let (status, body) = request(
        &app.router,
        "DELETE",
        &format!("/api/menu/categories/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("existing menu items")
    );
}

#[tokio::test]
async fn menu_item_crud_with_category_filter() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, categories) =
        request(&app.router, "GET", "/api/menu/categories", Some(&token), None).await;
    let mains_id = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Mains")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, item) = request(
        &app.router,
        "POST",
        "/api/menu/items",
        Some(&token),
        Some(json!({
            "category_id": mains_id,
            "name": "Lasagna",
            "price": 13.50
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {item}");
    let item_id = item["id"].as_i64().unwrap();
    assert_eq!(item["is_available"], true);

    // Filter by category
    let (status, items) = request(
        &app.router,
        "GET",
        &format!("/api/menu/items?category_id={mains_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        items
            .as_array()
            .unwrap()
            .iter()
            .all(|i| i["category_id"].as_i64() == Some(mains_id))
    );

    // Price update
    let (status, updated) = request(
        &app.router,
        "PUT",
        &format!("/api/menu/items/{item_id}"),
        Some(&token),
        Some(json!({ "price": 14.00, "is_available": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 14.00);
    assert_eq!(updated["is_available"], false);

    // Negative price rejected
    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/menu/items/{item_id}"),
        Some(&token),
        Some(json!({ "price": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/menu/items/{item_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deactivated_category_remains_visible_to_back_office() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, categories) =
        request(&app.router, "GET", "/api/menu/categories", Some(&token), None).await;
    let starters_id = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Starters")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, updated) = request(
        &app.router,
        "PUT",
        &format!("/api/menu/categories/{starters_id}"),
        Some(&token),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_active"], false);

    // Admin listing keeps the row so it can be re-enabled
    let (status, categories) =
        request(&app.router, "GET", "/api/menu/categories", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let starters = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_i64() == Some(starters_id))
        .expect("deactivated category still listed");
    assert_eq!(starters["is_active"], false);

    // Storefront menu drops it
    let (status, menu) = request(
        &app.router,
        "GET",
        "/api/storefront/demo-bistro/menu",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        menu.as_array()
            .unwrap()
            .iter()
            .all(|c| c["id"].as_i64() != Some(starters_id))
    );
}

#[tokio::test]
async fn same_category_name_allowed_across_tenants() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (_, tenant) = request(
        &app.router,
        "POST",
        "/api/tenants",
        Some(&admin),
        Some(json!({ "name": "Second Fork" })),
    )
    .await;
    let tenant_id = tenant["id"].as_i64().unwrap();

    let (status, _) = request(
        &app.router,
        "POST",
        &format!("/api/users?tenant_id={tenant_id}"),
        Some(&admin),
        Some(json!({
            "username": "forkowner",
            "password": "secret99",
            "role": "owner"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login(&app.router, "forkowner", "secret99").await;

    // The demo tenant already has "Starters"; another tenant may reuse it
    let (status, created) = request(
        &app.router,
        "POST",
        "/api/menu/categories",
        Some(&token),
        Some(json!({ "name": "Starters" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");
    assert_eq!(created["name"], "Starters");
}

#[tokio::test]
async fn item_requires_existing_category() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (status, _) = request(
        &app.router,
        "POST",
        "/api/menu/items",
        Some(&token),
        Some(json!({ "category_id": 999_999, "name": "Ghost", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
