//! Platform-level API integration tests: tenants, blog, pricing, roles

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login_admin, login_owner, request, setup_app};

#[tokio::test]
async fn tenant_management_is_platform_only() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;
    let owner = login_owner(&app.router).await;

    // Tenant owner gets 403
    let (status, _) = request(&app.router, "GET", "/api/tenants", Some(&owner), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Platform admin can create tenants
    let (status, tenant) = request(
        &app.router,
        "POST",
        "/api/tenants",
        Some(&admin),
        Some(json!({ "name": "Second Spoon" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {tenant}");
    assert_eq!(tenant["slug"], "second-spoon");
    let id = tenant["id"].as_i64().unwrap();

    // Duplicate slug -> 409
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/tenants",
        Some(&admin),
        Some(json!({ "name": "Second Spoon" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Fresh tenant has no users or orders, delete succeeds
    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/tenants/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn tenant_with_users_cannot_be_deleted() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    // The seeded demo tenant has an owner account
    let (_, tenants) = request(&app.router, "GET", "/api/tenants", Some(&admin), None).await;
    let demo_id = tenants
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["slug"] == "demo-bistro")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/tenants/{demo_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn new_tenant_is_provisioned_for_orders() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, tenant) = request(
        &app.router,
        "POST",
        "/api/tenants",
        Some(&admin),
        Some(json!({ "name": "Fresh Fork" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {tenant}");
    let tenant_id = tenant["id"].as_i64().unwrap();

    let (status, _) = request(
        &app.router,
        "POST",
        &format!("/api/users?tenant_id={tenant_id}"),
        Some(&admin),
        Some(json!({
            "username": "freshowner",
            "password": "secret99",
            "role": "owner"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = common::login(&app.router, "freshowner", "secret99").await;

    // Settings row was created alongside the tenant
    let (status, settings) =
        request(&app.router, "GET", "/api/settings/company", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["display_name"], "Fresh Fork");

    let (_, category) = request(
        &app.router,
        "POST",
        "/api/menu/categories",
        Some(&token),
        Some(json!({ "name": "Mains" })),
    )
    .await;
    let (_, item) = request(
        &app.router,
        "POST",
        "/api/menu/items",
        Some(&token),
        Some(json!({
            "category_id": category["id"].as_i64().unwrap(),
            "name": "Shepherd's Pie",
            "price": 9.50
        })),
    )
    .await;

    // The order counter was provisioned too, so the first order is number 1
    let (status, order) = request(
        &app.router,
        "POST",
        "/api/orders",
        Some(&token),
        Some(json!({
            "items": [{ "menu_item_id": item["id"].as_i64().unwrap(), "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "order failed: {order}");
    assert_eq!(order["order_number"], 1);
}

#[tokio::test]
async fn blog_drafts_are_hidden_from_public() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    let (status, draft) = request(
        &app.router,
        "POST",
        "/api/blog/admin/posts",
        Some(&admin),
        Some(json!({
            "title": "Unfinished Thoughts",
            "body": "wip",
            "is_published": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["slug"], "unfinished-thoughts");

    // Public listing only shows published posts
    let (status, posts) = request(&app.router, "GET", "/api/blog/posts", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        posts
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["is_published"] == true)
    );

    // Draft slug 404s publicly
    let (status, _) = request(
        &app.router,
        "GET",
        "/api/blog/posts/unfinished-thoughts",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Publishing stamps published_at
    let id = draft["id"].as_i64().unwrap();
    let (status, published) = request(
        &app.router,
        "PUT",
        &format!("/api/blog/admin/posts/{id}"),
        Some(&admin),
        Some(json!({ "is_published": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(published["published_at"].as_i64().is_some());

    let (status, post) = request(
        &app.router,
        "GET",
        "/api/blog/posts/unfinished-thoughts",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "Unfinished Thoughts");
}

#[tokio::test]
async fn blog_admin_requires_platform_role() {
    let app = setup_app().await;
    let owner = login_owner(&app.router).await;

    let (status, _) = request(
        &app.router,
        "POST",
        "/api/blog/admin/posts",
        Some(&owner),
        Some(json!({ "title": "Nope", "body": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn pricing_packages_public_listing_hides_inactive() {
    let app = setup_app().await;
    let admin = login_admin(&app.router).await;

    // Retire one of the seeded packages
    let (_, all) = request(
        &app.router,
        "GET",
        "/api/pricing/admin/packages",
        Some(&admin),
        None,
    )
    .await;
    let first_id = all.as_array().unwrap()[0]["id"].as_i64().unwrap();
    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/pricing/admin/packages/{first_id}"),
        Some(&admin),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, public) = request(&app.router, "GET", "/api/pricing/packages", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = public.as_array().unwrap();
    assert!(rows.iter().all(|p| p["id"].as_i64() != Some(first_id)));
    // features round-trips as a JSON array
    assert!(rows.iter().all(|p| p["features"].is_array()));
}

#[tokio::test]
async fn user_management_scoping() {
    let app = setup_app().await;
    let owner = login_owner(&app.router).await;

    // Owner creates a staff account in their tenant
    let (status, staff) = request(
        &app.router,
        "POST",
        "/api/users",
        Some(&owner),
        Some(json!({
            "username": "waiter1",
            "password": "secret99",
            "role": "staff"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {staff}");
    assert_eq!(staff["role"], "staff");
    // Password hash never serialized
    assert!(staff.get("password_hash").is_none());

    // Owners cannot mint platform admins
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/users",
        Some(&owner),
        Some(json!({
            "username": "sneaky",
            "password": "secret99",
            "role": "platform"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Staff cannot manage users
    let staff_token = common::login(&app.router, "waiter1", "secret99").await;
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/users",
        Some(&staff_token),
        Some(json!({ "username": "waiter2", "password": "secret99" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Duplicate username -> 409
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/users",
        Some(&owner),
        Some(json!({ "username": "waiter1", "password": "secret99" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
