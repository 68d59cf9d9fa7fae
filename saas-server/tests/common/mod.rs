//! Integration test helpers
//!
//! Each test gets its own work dir (tempfile) and therefore its own
//! SQLite database, seeded with the development demo data.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use saas_server::{Config, ServerState, api};

pub struct TestApp {
    #[allow(dead_code)]
    pub state: ServerState,
    pub router: Router,
    // Held so the database outlives the test
    _work_dir: tempfile::TempDir,
}

/// Boot a fresh server state with its own database
pub async fn setup_app() -> TestApp {
    let work_dir = tempfile::tempdir().expect("create temp work dir");
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);

    let state = ServerState::initialize(&config)
        .await
        .expect("initialize server state");
    let router = api::build_app(&state).with_state(state.clone());

    TestApp {
        state,
        router,
        _work_dir: work_dir,
    }
}

/// Send a request, returning status and parsed JSON body
pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router must respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Login and return the JWT token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"]
        .as_str()
        .expect("login response must contain token")
        .to_string()
}

/// Login as the seeded demo tenant owner
pub async fn login_owner(app: &Router) -> String {
    login(app, "owner", "owner123").await
}

/// Login as the seeded platform admin
pub async fn login_admin(app: &Router) -> String {
    login(app, "admin", "admin123").await
}
