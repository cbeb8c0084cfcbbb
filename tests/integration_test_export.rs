mod common;

use axum::http::StatusCode;
use common::{body_text, TestApp};
use serde_json::json;

const USER: &str = "user-1";

#[tokio::test]
async fn test_csv_export_shape() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Urodziny").await;
    let contact = app.create_contact(USER, "Jan", "Kowalski").await;
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

    let response = app.request(
        "GET",
        &format!("/api/v1/{}/events/{}/guests/export", USER, event_id),
        None,
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"].to_str().unwrap().starts_with("text/csv"));

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Imię,Nazwisko,Email,Status,Data zaproszenia");
    assert_eq!(lines.len(), 3); // header + primary + companion

    assert!(lines.iter().any(|l| l.starts_with("Jan,Kowalski,jan@example.com,pending,")));
    assert!(lines.iter().any(|l| l.starts_with("Anna,Nowak,,pending,")));

    // Dates come out as dd.MM.yyyy HH:mm.
    let date_field = lines[1].rsplit(',').next().unwrap();
    assert_eq!(date_field.len(), 16);
    assert_eq!(&date_field[2..3], ".");
    assert_eq!(&date_field[5..6], ".");
    assert_eq!(&date_field[13..14], ":");
}

#[tokio::test]
async fn test_csv_export_empty_event_has_header_only() {
    let app = TestApp::new().await;
    let event = app.create_event(USER, "Pusta impreza").await;
    let event_id = event["id"].as_str().unwrap();

    let response = app.request(
        "GET",
        &format!("/api/v1/{}/events/{}/guests/export", USER, event_id),
        None,
    ).await;
    let csv = body_text(response).await;
    assert_eq!(csv.trim_end(), "Imię,Nazwisko,Email,Status,Data zaproszenia");
}
