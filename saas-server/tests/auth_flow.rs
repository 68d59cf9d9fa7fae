//! Authentication flow integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login_owner, request, setup_app};

#[tokio::test]
async fn login_returns_token_and_user_info() {
    let app = setup_app().await;

    let (status, body) = request(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "owner", "password": "owner123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "owner");
    assert_eq!(body["user"]["role"], "owner");
    assert!(body["user"]["tenant_id"].as_i64().is_some());
}

#[tokio::test]
async fn login_rejects_bad_password_with_unified_message() {
    let app = setup_app().await;

    let (status, body) = request(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "owner", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid username or password");

    // Unknown username gets the identical message (no enumeration)
    let (status, body) = request(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "nobody", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = setup_app().await;

    let (status, _) = request(&app.router, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app.router,
        "GET",
        "/api/orders",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (status, body) = request(&app.router, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "owner");
}

#[tokio::test]
async fn health_is_public() {
    let app = setup_app().await;

    let (status, body) = request(&app.router, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn health_detailed_reports_database_and_environment() {
    let app = setup_app().await;

    let (status, body) = request(&app.router, "GET", "/health/detailed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["database"]["status"], "ok");
    assert!(body["database"]["latency_ms"].as_i64().is_some());
    assert!(body["timestamp"].as_i64().is_some());
}
