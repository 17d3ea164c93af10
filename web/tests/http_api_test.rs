//! HTTP API integration tests.
//!
//! Each test builds an isolated store, mounts the full router, and drives
//! it end to end with `axum_test::TestServer`, asserting status codes and
//! the `{success, data, error, count}` envelope.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Integration tests can use unwrap for setup

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tangomango_web::{build_router, AppState};
use tangomango_testing::{fixtures, mocks};

fn empty_server() -> TestServer {
    let state = AppState::new(fixtures::empty_database(), Arc::new(mocks::test_clock()));
    TestServer::new(build_router(state)).expect("router should mount")
}

fn seeded_server() -> TestServer {
    let state = AppState::new(fixtures::seeded_database(), Arc::new(mocks::test_clock()));
    TestServer::new(build_router(state)).expect("router should mount")
}

#[tokio::test]
async fn test_health_check() {
    let server = seeded_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_areas_envelope_and_count() {
    let server = seeded_server();
    let response = server.get("/areas").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 6);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    // Every area carries a derived eventCount.
    for area in body["data"].as_array().unwrap() {
        assert!(area["eventCount"].is_u64());
    }
}

#[tokio::test]
async fn test_get_area_not_found() {
    let server = seeded_server();
    let response = server.get("/areas/ghost").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Area not found");
}

#[tokio::test]
async fn test_create_area_then_event_count_tracks() {
    let server = empty_server();

    // POST /areas -> 201, eventCount starts at 0
    let response = server
        .post("/areas")
        .json(&json!({"name": "Test", "description": "D"}))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["eventCount"], 0);
    let area_id = body["data"]["id"].as_str().unwrap().to_string();

    // POST /events with that area and a valid type -> 201
    let response = server
        .post("/events")
        .json(&json!({
            "title": "Practica",
            "date": "2025-02-01",
            "time": "7:00 PM",
            "venue": "Studio",
            "areaId": area_id,
            "typeId": "milonga"
        }))
        .await;
    response.assert_status(http::StatusCode::CREATED);

    // GET /areas/:id -> eventCount is now 1
    let response = server.get(&format!("/areas/{area_id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["eventCount"], 1);
}

#[tokio::test]
async fn test_create_area_missing_fields() {
    let server = empty_server();
    let response = server.post("/areas").json(&json!({"name": "Test"})).await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields: name, description");
}

#[tokio::test]
async fn test_delete_area_with_events_is_refused() {
    let server = empty_server();

    let area: Value = server
        .post("/areas")
        .json(&json!({"name": "Test", "description": "D"}))
        .await
        .json();
    let area_id = area["data"]["id"].as_str().unwrap().to_string();

    server
        .post("/events")
        .json(&json!({
            "title": "Practica",
            "date": "2025-02-01",
            "time": "7:00 PM",
            "venue": "Studio",
            "areaId": area_id,
            "typeId": "milonga"
        }))
        .await
        .assert_status(http::StatusCode::CREATED);

    let response = server.delete(&format!("/areas/{area_id}")).await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Cannot delete area with 1 existing events");

    // The area is still present afterwards.
    server
        .get(&format!("/areas/{area_id}"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_update_area_partial_merge() {
    let server = empty_server();
    let area: Value = server
        .post("/areas")
        .json(&json!({"name": "Test", "description": "D"}))
        .await
        .json();
    let area_id = area["data"]["id"].as_str().unwrap().to_string();

    let response = server
        .put(&format!("/areas/{area_id}"))
        .json(&json!({"name": "Renamed"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Renamed");
    // Omitted fields keep their previous values.
    assert_eq!(body["data"]["description"], "D");
}

#[tokio::test]
async fn test_filter_events_by_type() {
    let server = seeded_server();
    let response = server.get("/events?type=milonga").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let events = body["data"].as_array().unwrap();
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| e["type"]["id"] == "milonga"));
    assert_eq!(body["count"].as_u64().unwrap() as usize, events.len());
}

#[tokio::test]
async fn test_filter_events_by_date_matches_calendar_day() {
    let server = seeded_server();

    let response = server.get("/events?date=2025-01-18").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Milonga La Noche");

    // A day with no events yields an empty 200, not an error.
    let response = server.get("/events?date=2025-03-01").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let server = seeded_server();
    let response = server.get("/events?type=milonga&areaId=downtown").await;
    response.assert_status_ok();

    let body: Value = response.json();
    for event in body["data"].as_array().unwrap() {
        assert_eq!(event["type"]["id"], "milonga");
        assert_eq!(event["areaId"], "downtown");
    }
}

#[tokio::test]
async fn test_create_event_with_bad_type_does_not_mutate() {
    let server = seeded_server();
    let before: Value = server.get("/events").await.json();
    let before_count = before["count"].as_u64().unwrap();

    let response = server
        .post("/events")
        .json(&json!({
            "title": "Rave",
            "date": "2025-02-01",
            "time": "11:00 PM",
            "venue": "Warehouse",
            "areaId": "downtown",
            "typeId": "rave"
        }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid event type");

    let after: Value = server.get("/events").await.json();
    assert_eq!(after["count"].as_u64().unwrap(), before_count);
}

#[tokio::test]
async fn test_event_types_catalog() {
    let server = seeded_server();
    let response = server.get("/events/types/all").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_duplicate_registration_is_case_insensitive() {
    let server = seeded_server();

    let response = server
        .post("/registrations")
        .json(&json!({"eventId": "1", "name": "Ada", "email": "A@B.com"}))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    let body: Value = response.json();
    // Email is stored lowercase, status is forced to confirmed.
    assert_eq!(body["data"]["email"], "a@b.com");
    assert_eq!(body["data"]["status"], "confirmed");

    let response = server
        .post("/registrations")
        .json(&json!({"eventId": "1", "name": "Ada", "email": "a@b.com"}))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "User is already registered for this event");
}

#[tokio::test]
async fn test_registration_for_unknown_event_is_404() {
    let server = seeded_server();
    let response = server
        .post("/registrations")
        .json(&json!({"eventId": "999", "name": "Ada", "email": "a@b.com"}))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn test_registration_count_for_unknown_event_is_empty_200() {
    let server = seeded_server();
    let response = server.get("/registrations/event/ghost/count").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["count"], 0);
    assert!(body["data"]["registrations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_registration_deletes_record() {
    let server = seeded_server();
    let created: Value = server
        .post("/registrations")
        .json(&json!({"eventId": "1", "name": "Ada", "email": "a@b.com"}))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    server
        .delete(&format!("/registrations/{id}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/registrations/{id}"))
        .await
        .assert_status_not_found();

    // The pair is free again after deletion.
    server
        .post("/registrations")
        .json(&json!({"eventId": "1", "name": "Ada", "email": "a@b.com"}))
        .await
        .assert_status(http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_registration_email_filter_is_substring() {
    let server = seeded_server();
    server
        .post("/registrations")
        .json(&json!({"eventId": "1", "name": "Maria", "email": "Maria@Tango.ar"}))
        .await
        .assert_status(http::StatusCode::CREATED);

    let body: Value = server.get("/registrations?email=TANGO").await.json();
    assert_eq!(body["count"], 1);

    let body: Value = server.get("/registrations?email=salsa").await.json();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_area_events_listing() {
    let server = seeded_server();
    let response = server.get("/areas/downtown/events").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["area"]["id"], "downtown");
    let events = body["data"]["events"].as_array().unwrap();
    assert_eq!(body["data"]["eventCount"].as_u64().unwrap() as usize, events.len());
    assert!(events.iter().all(|e| e["areaId"] == "downtown"));
}

#[tokio::test]
async fn test_unmatched_route_is_enveloped_404() {
    let server = seeded_server();
    let response = server.get("/nope/nothing").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_malformed_json_body_is_enveloped_400() {
    let server = seeded_server();
    let response = server
        .post("/areas")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_event_clears_price_with_null() {
    let server = seeded_server();

    let response = server
        .put("/events/1")
        .json(&json!({"price": null}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["data"].get("price").is_none());

    // An update without the field keeps it cleared, and other fields are
    // untouched.
    let response = server.put("/events/1").json(&json!({"time": "9:00 PM"})).await;
    let body: Value = response.json();
    assert!(body["data"].get("price").is_none());
    assert_eq!(body["data"]["title"], "Argentine Tango Masterclass");
}

#[tokio::test]
async fn test_correlation_id_echoed() {
    let server = seeded_server();
    let response = server.get("/areas").await;
    assert!(response
        .headers()
        .get("X-Correlation-ID")
        .is_some());
}
