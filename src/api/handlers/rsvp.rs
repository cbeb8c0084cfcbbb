use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::RsvpResponseRequest;
use crate::api::dtos::responses::{RsvpDetails, RsvpEventSummary};
use crate::domain::models::event::GUEST_STATUSES;
use crate::domain::models::guest::PLUS_ONE_TYPES;
use crate::domain::models::token::{RsvpToken, REASON_NOT_FOUND};
use crate::domain::services::counters;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

async fn lookup_valid_token(state: &AppState, token: &str) -> Result<RsvpToken, AppError> {
    let record = state.token_repo.find_by_token(token).await?
        .ok_or(AppError::NotFound(REASON_NOT_FOUND.into()))?;
    if let Some(reason) = record.rejection() {
        return Err(AppError::TokenInvalid(reason.to_string()));
    }
    Ok(record)
}

/// Public lookup backing the RSVP form: who is responding, to what.
pub async fn get_rsvp(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = lookup_valid_token(&state, &token).await?;

    let guest = state.guest_repo.find_by_id(&record.event_guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;
    let event = state.event_repo.find_public(&record.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let (first_name, last_name) = match &guest.contact_id {
        Some(contact_id) => {
            let contact = state.contact_repo.find_by_id(&event.user_id, contact_id).await?;
            match contact {
                Some(c) => (c.first_name, c.last_name),
                None => (String::new(), String::new()),
            }
        }
        None => (
            guest.first_name.clone().unwrap_or_default(),
            guest.last_name.clone().unwrap_or_default(),
        ),
    };

    Ok(Json(RsvpDetails {
        event: RsvpEventSummary::from_event(&event),
        first_name,
        last_name,
        status: guest.status,
    }))
}

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(payload): Json<RsvpResponseRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Validation happens before any write; a used or expired token leaves
    // every record untouched.
    let record = lookup_valid_token(&state, &token).await?;

    if !GUEST_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::Validation(format!("Invalid RSVP status: {}", payload.status)));
    }
    if let Some(plus_one_type) = &payload.plus_one_type {
        if !PLUS_ONE_TYPES.contains(&plus_one_type.as_str()) {
            return Err(AppError::Validation(format!("Invalid plus-one type: {}", plus_one_type)));
        }
    }

    let mut guest = state.guest_repo.find_by_id(&record.event_guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;
    let event = state.event_repo.find_public(&record.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let previous = guest.status.clone();
    guest.status = payload.status.clone();
    guest.responded_at = Some(Utc::now());
    if let Some(plus_one_type) = payload.plus_one_type {
        guest.plus_one_type = plus_one_type;
        if let Some(details) = &payload.plus_one_details {
            guest.plus_one_first_name = Some(details.first_name.clone());
            guest.plus_one_last_name = Some(details.last_name.clone());
            guest.plus_one_dietary_restrictions = Some(details.dietary_restrictions.clone());
        }
    }
    if let Some(notes) = &payload.notes {
        guest.event_specific_notes = Some(notes.clone());
    }

    // Dietary preferences land on the contact when one is linked, or on
    // the guest's inline fields for synthetic companions.
    let contact = match &guest.contact_id {
        Some(contact_id) if payload.dietary_restrictions.is_some() || payload.notes.is_some() => {
            match state.contact_repo.find_by_id(&event.user_id, contact_id).await? {
                Some(mut c) => {
                    if let Some(dietary) = &payload.dietary_restrictions {
                        c.dietary_restrictions = dietary.clone();
                    }
                    if let Some(notes) = &payload.notes {
                        c.notes = notes.clone();
                    }
                    Some(c)
                }
                None => None,
            }
        }
        _ => None,
    };
    if guest.contact_id.is_none() {
        if let Some(dietary) = &payload.dietary_restrictions {
            guest.dietary_restrictions = Some(dietary.clone());
        }
    }

    // Token burn and guest/contact mutation commit or fail as one unit.
    let updated = state.guest_repo.apply_response(&guest, contact.as_ref(), &record.token).await?;

    counters::transition(&*state.event_repo, &event.id, &previous, &updated.status).await;

    info!("RSVP recorded for guest {}: {} -> {}", updated.id, previous, updated.status);
    Ok(Json(updated))
}
