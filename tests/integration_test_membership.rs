mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

const USER: &str = "user-1";

#[tokio::test]
async fn test_add_guest_without_plus_one_creates_single_record() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Urodziny").await;
    let contact = app.create_contact(USER, "Jan", "Kowalski").await;
    let event_id = event["id"].as_str().unwrap();

    let response = app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({ "contact_id": contact["id"], "plus_one_type": "none" })),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["guest"]["status"], "pending");
    assert!(body["companion"].is_null());

    let guests = parse_body(
        app.request("GET", &format!("/api/v1/{}/events/{}/guests", USER, event_id), None).await
    ).await;
    assert_eq!(guests.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_plus_one_with_details_expands_to_companion_record() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Wesele").await;
    let contact = app.create_contact(USER, "Piotr", "Nowak").await;
    let event_id = event["id"].as_str().unwrap();

    let response = app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": contact["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Anna", "last_name": "Nowak" }
        })),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;

    let companion = &body["companion"];
    assert_eq!(companion["first_name"], "Anna");
    assert!(companion["contact_id"].is_null());
    assert_eq!(companion["companion_of_guest_id"], body["guest"]["id"]);
    assert_eq!(companion["status"], "pending");

    let guests = parse_body(
        app.request("GET", &format!("/api/v1/{}/events/{}/guests", USER, event_id), None).await
    ).await;
    assert_eq!(guests.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_plus_one_with_details_but_no_name_stays_single() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Impreza").await;
    let contact = app.create_contact(USER, "Ewa", "Lis").await;
    let event_id = event["id"].as_str().unwrap();

    let body = parse_body(app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": contact["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "", "last_name": "  " }
        })),
    ).await).await;

    assert!(body["companion"].is_null());
}

#[tokio::test]
async fn test_duplicate_guest_rejected() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Urodziny").await;
    let contact = app.create_contact(USER, "Jan", "Kowalski").await;
    let event_id = event["id"].as_str().unwrap();
    let payload = json!({ "contact_id": contact["id"] });

    let first = app.request("POST", &format!("/api/v1/{}/events/{}/guests", USER, event_id), Some(payload.clone())).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.request("POST", &format!("/api/v1/{}/events/{}/guests", USER, event_id), Some(payload)).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_missing_guest_is_not_found() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Urodziny").await;
    let event_id = event["id"].as_str().unwrap();

    let response = app.request(
        "DELETE",
        &format!("/api/v1/{}/events/{}/guests/no-such-contact", USER, event_id),
        None,
    ).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_counter_scenario_add_add_remove() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Urodziny").await;
    let c1 = app.create_contact(USER, "Jan", "Kowalski").await;
    let c2 = app.create_contact(USER, "Piotr", "Nowak").await;
    let event_id = event["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({ "contact_id": c1["id"], "plus_one_type": "none" })),
    ).await;

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 1);
    assert_eq!(snapshot["pending_count"], 1);

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": c2["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Anna" }
        })),
    ).await;

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 3);
    assert_eq!(snapshot["pending_count"], 3);

    let removed = app.request(
        "DELETE",
        &format!("/api/v1/{}/events/{}/guests/{}", USER, event_id, c1["id"].as_str().unwrap()),
        None,
    ).await;
    assert_eq!(removed.status(), StatusCode::OK);

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 2);
    assert_eq!(snapshot["pending_count"], 2);
}

#[tokio::test]
async fn test_removing_primary_also_removes_companion() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Wesele").await;
    let contact = app.create_contact(USER, "Piotr", "Nowak").await;
    let event_id = event["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": contact["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Anna" }
        })),
    ).await;

    let removed = parse_body(app.request(
        "DELETE",
        &format!("/api/v1/{}/events/{}/guests/{}", USER, event_id, contact["id"].as_str().unwrap()),
        None,
    ).await).await;
    assert_eq!(removed["deleted"], 2);

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 0);
    assert_eq!(snapshot["pending_count"], 0);
}

#[tokio::test]
async fn test_companion_removal_keeps_counters_in_sync_with_rows() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Wesele").await;
    let contact = app.create_contact(USER, "Piotr", "Nowak").await;
    let event_id = event["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": contact["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Anna", "last_name": "Nowak" }
        })),
    ).await;

    app.request(
        "DELETE",
        &format!("/api/v1/{}/events/{}/guests/{}", USER, event_id, contact["id"].as_str().unwrap()),
        None,
    ).await;

    // The counters must agree with the actual guest rows, companion
    // included: decrementing only once would leave a phantom guest.
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 0);
    assert_eq!(snapshot["pending_count"], 0);
}

#[tokio::test]
async fn test_plus_one_upgrade_creates_companion_and_downgrade_removes_it() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Impreza").await;
    let contact = app.create_contact(USER, "Ewa", "Lis").await;
    let event_id = event["id"].as_str().unwrap();
    let contact_id = contact["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({ "contact_id": contact_id, "plus_one_type": "none" })),
    ).await;

    let upgraded = parse_body(app.request(
        "PUT",
        &format!("/api/v1/{}/events/{}/guests/{}/plus-one", USER, event_id, contact_id),
        Some(json!({
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Tomasz", "last_name": "Lis" }
        })),
    ).await).await;
    assert_eq!(upgraded["guest"]["plus_one_type"], "with_details");
    assert_eq!(upgraded["companion"]["first_name"], "Tomasz");

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 2);

    let downgraded = parse_body(app.request(
        "PUT",
        &format!("/api/v1/{}/events/{}/guests/{}/plus-one", USER, event_id, contact_id),
        Some(json!({ "plus_one_type": "none" })),
    ).await).await;
    assert_eq!(downgraded["guest"]["plus_one_type"], "none");
    assert!(downgraded["companion"].is_null());

    let snapshot = app.get_event(USER, event_id).await;
    assert_eq!(snapshot["guest_count"], 1);
    assert_eq!(snapshot["pending_count"], 1);
}

#[tokio::test]
async fn test_list_guests_enriches_companion_with_inline_projection() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Wesele").await;
    let contact = app.create_contact(USER, "Piotr", "Nowak").await;
    let event_id = event["id"].as_str().unwrap();

    app.request(
        "POST",
        &format!("/api/v1/{}/events/{}/guests", USER, event_id),
        Some(json!({
            "contact_id": contact["id"],
            "plus_one_type": "with_details",
            "plus_one_details": { "first_name": "Anna", "last_name": "Nowak" }
        })),
    ).await;

    let guests = parse_body(
        app.request("GET", &format!("/api/v1/{}/events/{}/guests", USER, event_id), None).await
    ).await;
    let guests = guests.as_array().unwrap();
    assert_eq!(guests.len(), 2);

    let companion = guests.iter().find(|g| g["contact_id"].is_null()).unwrap();
    assert_eq!(companion["contact"]["first_name"], "Anna");
    assert!(companion["contact"]["id"].is_null());

    let primary = guests.iter().find(|g| !g["contact_id"].is_null()).unwrap();
    assert_eq!(primary["contact"]["first_name"], "Piotr");
    assert_eq!(primary["contact"]["email"], "piotr@example.com");
}
