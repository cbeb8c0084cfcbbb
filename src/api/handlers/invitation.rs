use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::models::{contact::Contact, guest::Guest, token::RsvpToken};
use crate::domain::services::invitations;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Reuses the guest's active token, or mints and persists a fresh one.
/// Calling this twice for the same guest yields the same token.
async fn ensure_token(state: &AppState, guest: &Guest) -> Result<RsvpToken, AppError> {
    if let Some(existing) = state.token_repo.find_active_by_guest(&guest.id).await? {
        return Ok(existing);
    }
    let token = RsvpToken::new(guest.id.clone(), guest.event_id.clone());
    state.token_repo.create(&token).await
}

async fn contact_for(state: &AppState, user_id: &str, guest: &Guest) -> Result<Option<Contact>, AppError> {
    match &guest.contact_id {
        Some(contact_id) => state.contact_repo.find_by_id(user_id, contact_id).await,
        None => Ok(None),
    }
}

pub async fn generate_invitations(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Companion guests are independent RSVP targets and get their own
    // token and link, contact or not.
    let guests = state.guest_repo.list_by_event(&event.id).await?;
    let mut result = Vec::with_capacity(guests.len());
    for guest in guests {
        let token = ensure_token(&state, &guest).await?;
        let contact = contact_for(&state, &user_id, &guest).await?;
        result.push(invitations::build_invitation(&guest, contact.as_ref(), &token, &state.config.public_base_url));
    }

    info!("Generated {} invitation(s) for event {}", result.len(), event.id);
    Ok(Json(result))
}

pub async fn invitation_sms(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id, guest_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    let guest = state.guest_repo.find_by_id(&guest_id).await?
        .filter(|g| g.event_id == event.id)
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    let token = ensure_token(&state, &guest).await?;
    let contact = contact_for(&state, &user_id, &guest).await?;
    let invitation = invitations::build_invitation(&guest, contact.as_ref(), &token, &state.config.public_base_url);
    let message = invitations::sms_message(&state.templates, &invitation, &event)?;

    Ok(Json(serde_json::json!({ "message": message })))
}
