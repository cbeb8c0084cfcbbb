mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use partypass_backend::domain::ports::EventRepository;
use serde_json::json;

const USER: &str = "user-1";

async fn setup_guest(app: &TestApp) -> (String, String) {
    let event = app.create_event(USER, "Urodziny").await;
    let contact = app.create_contact(USER, "Jan", "Kowalski").await;
    let event_id = event["id"].as_str().unwrap().to_string();

    let body = parse_body(app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({ "contact_id": contact["id"] })),
    ).await).await;

    (event_id, body["guest"]["id"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_manual_status_change_moves_buckets() {
    let app = TestApp::new().await;
    let (event_id, guest_id) = setup_guest(&app).await;

    let response = app.request(
        "PUT",
        &format!("/api/v1/{}/guests/{}/status", USER, guest_id),
        Some(json!({ "status": "accepted" })),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let snapshot = app.get_event(USER, &event_id).await;
    assert_eq!(snapshot["guest_count"], 1);
    assert_eq!(snapshot["pending_count"], 0);
    assert_eq!(snapshot["accepted_count"], 1);

    // And back to pending, clearing responded_at.
    let guest = parse_body(app.request(
        "PUT",
        &format!("/api/v1/{}/guests/{}/status", USER, guest_id),
        Some(json!({ "status": "pending" })),
    ).await).await;
    assert!(guest["responded_at"].is_null());

    let snapshot = app.get_event(USER, &event_id).await;
    assert_eq!(snapshot["pending_count"], 1);
    assert_eq!(snapshot["accepted_count"], 0);
}

#[tokio::test]
async fn test_repeated_same_status_is_stable() {
    let app = TestApp::new().await;
    let (event_id, guest_id) = setup_guest(&app).await;

    for _ in 0..3 {
        app.request(
            "PUT",
            &format!("/api/v1/{}/guests/{}/status", USER, guest_id),
            Some(json!({ "status": "maybe" })),
        ).await;
    }

    let snapshot = app.get_event(USER, &event_id).await;
    assert_eq!(snapshot["guest_count"], 1);
    assert_eq!(snapshot["maybe_count"], 1);
    assert_eq!(snapshot["pending_count"], 0);
}

#[tokio::test]
async fn test_invalid_status_rejected() {
    let app = TestApp::new().await;
    let (_, guest_id) = setup_guest(&app).await;

    let response = app.request(
        "PUT",
        &format!("/api/v1/{}/guests/{}/status", USER, guest_id),
        Some(json!({ "status": "perhaps" })),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_counters_clamp_at_zero() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Pusta impreza").await;
    let event_id = event["id"].as_str().unwrap();

    // Drive removals directly against the repository on an event with no
    // guests; every counter must stay at its floor.
    for _ in 0..3 {
        app.state.event_repo.adjust_counts(event_id, "accepted", -1).await.unwrap();
    }
    app.state.event_repo.adjust_counts(event_id, "unknown-status", -1).await.unwrap();

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 0);
    assert_eq!(snapshot["accepted_count"], 0);
    assert_eq!(snapshot["pending_count"], 0);
}

#[tokio::test]
async fn test_unknown_status_counts_into_pending_bucket() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Impreza").await;
    let event_id = event["id"].as_str().unwrap();

    app.state.event_repo.adjust_counts(event_id, "something-else", 1).await.unwrap();

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 1);
    assert_eq!(snapshot["pending_count"], 1);
}

#[tokio::test]
async fn test_transition_on_drifted_counters_still_lands_in_target_bucket() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Impreza").await;
    let event_id = event["id"].as_str().unwrap();

    // All buckets are at zero, so the decrement half clamps away while
    // the increment half lands.
    partypass_backend::domain::services::counters::transition(
        &*app.state.event_repo, event_id, "pending", "accepted",
    ).await;

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["pending_count"], 0);
    assert_eq!(snapshot["accepted_count"], 1);
    assert_eq!(snapshot["guest_count"], 1);
}

#[tokio::test]
async fn test_counter_adjustment_failure_is_swallowed() {
    let app = TestApp::new().await;

    // Adjusting a nonexistent event is a hard error at the repository...
    let err = app.state.event_repo.adjust_counts("no-such-event", "pending", 1).await;
    assert!(err.is_err());

    // ...but the soft wrapper absorbs it.
    partypass_backend::domain::services::counters::adjust(
        &*app.state.event_repo, "no-such-event", "pending", 1,
    ).await;
}
