//! Table and reservation API integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login_owner, request, setup_app};

#[tokio::test]
async fn table_crud_and_duplicate_guard() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (status, table) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Terrace 1", "capacity": 6, "location": "terrace" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {table}");
    let id = table["id"].as_i64().unwrap();

    // Duplicate name -> 409
    let (status, _) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Terrace 1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // No reservations yet, delete succeeds
    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/tables/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn table_with_active_reservation_cannot_be_deleted() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, table) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Window 2", "capacity": 4 })),
    )
    .await;
    let table_id = table["id"].as_i64().unwrap();

    let (status, reservation) = request(
        &app.router,
        "POST",
        &format!("/api/tables/{table_id}/reservations"),
        Some(&token),
        Some(json!({
            "customer_name": "Ada",
            "party_size": 2,
            "reserved_at": 1924992000000i64
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reservation failed: {reservation}");
    assert_eq!(reservation["status"], "booked");
    let reservation_id = reservation["id"].as_i64().unwrap();

    // Active reservation blocks deletion
    let (status, body) = request(
        &app.router,
        "DELETE",
        &format!("/api/tables/{table_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("active reservations")
    );

    // Cancel the reservation, then deletion succeeds
    let (status, cancelled) = request(
        &app.router,
        "DELETE",
        &format!("/api/reservations/{reservation_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "cancelled");

    let (status, _) = request(
        &app.router,
        "DELETE",
        &format!("/api/tables/{table_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reservation_rejects_oversized_party() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, table) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Small", "capacity": 2 })),
    )
    .await;
    let table_id = table["id"].as_i64().unwrap();

    let (status, _) = request(
        &app.router,
        "POST",
        &format!("/api/tables/{table_id}/reservations"),
        Some(&token),
        Some(json!({
            "customer_name": "Crowd",
            "party_size": 8,
            "reserved_at": 1924992000000i64
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reservation_update_cannot_exceed_capacity() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, table) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Duo", "capacity": 2 })),
    )
    .await;
    let table_id = table["id"].as_i64().unwrap();

    let (_, reservation) = request(
        &app.router,
        "POST",
        &format!("/api/tables/{table_id}/reservations"),
        Some(&token),
        Some(json!({
            "customer_name": "Lin",
            "party_size": 2,
            "reserved_at": 1924992000000i64
        })),
    )
    .await;
    let id = reservation["id"].as_i64().unwrap();

    // Growing past the table's capacity is refused
    let (status, body) = request(
        &app.router,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(&token),
        Some(json!({ "party_size": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("capacity"));

    // Shrinking is fine
    let (status, updated) = request(
        &app.router,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(&token),
        Some(json!({ "party_size": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["party_size"], 1);
}

#[tokio::test]
async fn reservation_lifecycle() {
    let app = setup_app().await;
    let token = login_owner(&app.router).await;

    let (_, table) = request(
        &app.router,
        "POST",
        "/api/tables",
        Some(&token),
        Some(json!({ "name": "Booth 3", "capacity": 4 })),
    )
    .await;
    let table_id = table["id"].as_i64().unwrap();

    let (_, reservation) = request(
        &app.router,
        "POST",
        &format!("/api/tables/{table_id}/reservations"),
        Some(&token),
        Some(json!({
            "customer_name": "Grace",
            "party_size": 3,
            "reserved_at": 1924992000000i64
        })),
    )
    .await;
    let id = reservation["id"].as_i64().unwrap();

    // Seat the party
    let (status, seated) = request(
        &app.router,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(&token),
        Some(json!({ "status": "seated" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seated["status"], "seated");

    // Complete, then further updates are refused
    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(&token),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app.router,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(&token),
        Some(json!({ "party_size": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
