use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_core::errors::BookingError;
use slotbook_core::models::SlotKey;
use slotbook_gql::{GraphQlClient, SlotRepository};

/// Spawns a stub GraphQL endpoint on an ephemeral port that answers every
/// POST with `response` and records the request bodies it receives.
async fn spawn_stub(response: Value) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let received_by_handler = received.clone();

    let app = Router::new().route(
        "/",
        post(move |Json(body): Json<Value>| {
            let response = response.clone();
            let received = received_by_handler.clone();
            async move {
                received.lock().unwrap().push(body);
                Json(response)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

fn key(day: u32, month: u32, year: i32, hour: u32) -> SlotKey {
    SlotKey {
        day,
        month,
        year,
        hour,
    }
}

#[tokio::test]
async fn test_available_slots_decodes_month() {
    let (endpoint, received) = spawn_stub(json!({
        "data": {
            "availableSlots": [
                { "day": 10, "month": 6, "year": 2024, "hour": 10, "available": true, "dni": null },
                { "day": 11, "month": 6, "year": 2024, "hour": 12, "available": false, "dni": "12345678" }
            ]
        }
    }))
    .await;

    let client = GraphQlClient::new(&endpoint).unwrap();
    let slots = client.available_slots(2024, 6).await.unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].hour, 10);
    assert!(slots[0].available);
    assert_eq!(slots[0].dni, None);
    assert_eq!(slots[1].dni.as_deref(), Some("12345678"));

    let requests = received.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]["query"]
        .as_str()
        .unwrap()
        .contains("availableSlots(year: $year, month: $month)"));
    assert_eq!(requests[0]["variables"], json!({ "year": 2024, "month": 6 }));
}

#[tokio::test]
async fn test_add_slot_sends_full_key() {
    let (endpoint, received) = spawn_stub(json!({
        "data": {
            "addSlot": { "day": 10, "month": 6, "year": 2024, "hour": 11, "available": true }
        }
    }))
    .await;

    let client = GraphQlClient::new(&endpoint).unwrap();
    let slot = client.add_slot(key(10, 6, 2024, 11)).await.unwrap();

    // The create selection set omits dni; a fresh slot has none anyway.
    assert!(slot.available);
    assert_eq!(slot.dni, None);

    let requests = received.lock().unwrap();
    assert_eq!(
        requests[0]["variables"],
        json!({ "day": 10, "month": 6, "year": 2024, "hour": 11 })
    );
}

#[tokio::test]
async fn test_book_slot_sends_dni() {
    let (endpoint, received) = spawn_stub(json!({
        "data": {
            "bookSlot": {
                "day": 10, "month": 6, "year": 2024, "hour": 10,
                "available": false, "dni": "12345678"
            }
        }
    }))
    .await;

    let client = GraphQlClient::new(&endpoint).unwrap();
    let slot = client
        .book_slot(key(10, 6, 2024, 10), "12345678".to_string())
        .await
        .unwrap();

    assert!(!slot.available);
    assert_eq!(slot.dni.as_deref(), Some("12345678"));

    let requests = received.lock().unwrap();
    assert_eq!(
        requests[0]["variables"],
        json!({ "day": 10, "month": 6, "year": 2024, "hour": 10, "dni": "12345678" })
    );
}

#[tokio::test]
async fn test_errors_array_maps_to_rejected() {
    let (endpoint, _received) = spawn_stub(json!({
        "data": null,
        "errors": [ { "message": "slot is already booked" } ]
    }))
    .await;

    let client = GraphQlClient::new(&endpoint).unwrap();
    let result = client
        .book_slot(key(10, 6, 2024, 10), "12345678".to_string())
        .await;

    match result {
        Err(BookingError::Rejected(message)) => {
            assert_eq!(message, "slot is already booked");
        }
        other => panic!("Expected rejection, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_data_maps_to_rejected() {
    let (endpoint, _received) = spawn_stub(json!({ "data": null })).await;

    let client = GraphQlClient::new(&endpoint).unwrap();
    let result = client.available_slots(2024, 6).await;

    assert!(matches!(result, Err(BookingError::Rejected(_))));
}

#[tokio::test]
async fn test_http_error_maps_to_api_failure() {
    let app = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = GraphQlClient::new(&format!("http://{addr}")).unwrap();
    let result = client.available_slots(2024, 6).await;

    assert!(matches!(result, Err(BookingError::Api(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_api_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GraphQlClient::new(&format!("http://{addr}")).unwrap();
    let result = client.available_slots(2024, 6).await;

    assert!(matches!(result, Err(BookingError::Api(_))));
}
