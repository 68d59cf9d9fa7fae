//! Company and system settings API integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login_owner, request, setup_app};

#[tokio::test]
async fn company_settings_roundtrip() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    // Provisioned with defaults
    let (status, settings) =
        request(&app.router, "GET", "/api/settings/company", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["currency"], "EUR");

    let (status, updated) = request(
        &app.router,
        "PUT",
        "/api/settings/company",
        Some(&token),
        Some(json!({ "display_name": "Demo Bistro & Bar", "tax_rate": 0.07 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["display_name"], "Demo Bistro & Bar");
    assert_eq!(updated["tax_rate"], 0.07);
}

#[tokio::test]
async fn system_settings_upsert_get_delete_cycle() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    // First PUT inserts
    let (status, setting) = request(
        &app.router,
        "PUT",
        "/api/settings/system/receipt.footer",
        Some(&token),
        Some(json!({ "value": "Thanks for dining with us" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "upsert failed: {setting}");
    assert_eq!(setting["key"], "receipt.footer");
    assert_eq!(setting["value"], "Thanks for dining with us");

    // Second PUT overwrites in place
    let (status, setting) = request(
        &app.router,
        "PUT",
        "/api/settings/system/receipt.footer",
        Some(&token),
        Some(json!({ "value": "See you soon" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(setting["value"], "See you soon");

    // The listing carries the latest value
    let (status, settings) =
        request(&app.router, "GET", "/api/settings/system", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = settings
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["key"] == "receipt.footer")
        .expect("upserted key listed");
    assert_eq!(entry["value"], "See you soon");

    // Single-key read
    let (status, setting) = request(
        &app.router,
        "GET",
        "/api/settings/system/receipt.footer",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(setting["value"], "See you soon");

    // Delete removes the key; subsequent reads 404
    let (status, _) = request(
        &app.router,
        "DELETE",
        "/api/settings/system/receipt.footer",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app.router,
        "GET",
        "/api/settings/system/receipt.footer",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app.router,
        "DELETE",
        "/api/settings/system/receipt.footer",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
