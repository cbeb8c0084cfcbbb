use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, event, contact, guest, invitation, rsvp};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Events
        .route("/api/v1/{user_id}/events", post(event::create_event).get(event::list_events))
        .route("/api/v1/{user_id}/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Contacts
        .route("/api/v1/{user_id}/contacts", post(contact::create_contact).get(contact::list_contacts))
        .route("/api/v1/{user_id}/contacts/{contact_id}", get(contact::get_contact).put(contact::update_contact).delete(contact::delete_contact))

        // Guest membership
        .route("/api/v1/{user_id}/events/{event_id}/guests", post(guest::add_guest).get(guest::list_guests))
        .route("/api/v1/{user_id}/events/{event_id}/guests/export", get(guest::export_guests))
        .route("/api/v1/{user_id}/events/{event_id}/guests/{contact_id}", delete(guest::remove_guest))
        .route("/api/v1/{user_id}/events/{event_id}/guests/{contact_id}/plus-one", put(guest::update_plus_one))
        .route("/api/v1/{user_id}/guests/{guest_id}/status", put(guest::update_guest_status))

        // Invitations
        .route("/api/v1/{user_id}/events/{event_id}/invitations", get(invitation::generate_invitations))
        .route("/api/v1/{user_id}/events/{event_id}/invitations/{guest_id}/sms", get(invitation::invitation_sms))

        // Public RSVP flow
        .route("/api/v1/rsvp/{token}", get(rsvp::get_rsvp).post(rsvp::submit_rsvp))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
