use axum::{extract::{State, Path}, http::header, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{AddGuestRequest, UpdateGuestStatusRequest, UpdatePlusOneRequest};
use crate::api::dtos::responses::{AddGuestResponse, ContactSummary, GuestWithContact};
use crate::domain::models::event::GUEST_STATUSES;
use crate::domain::models::guest::{Guest, PLUS_ONE_TYPES};
use crate::domain::services::{counters, export};
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

fn check_plus_one_type(value: &str) -> Result<(), AppError> {
    if PLUS_ONE_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid plus-one type: {}", value)))
    }
}

pub async fn add_guest(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
    Json(payload): Json<AddGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    let contact = state.contact_repo.find_by_id(&user_id, &payload.contact_id).await?
        .ok_or(AppError::NotFound("Contact not found".into()))?;

    if state.guest_repo.find_by_event_and_contact(&event.id, &contact.id).await?.is_some() {
        return Err(AppError::Conflict("Contact is already a guest of this event".into()));
    }

    let plus_one_type = payload.plus_one_type.unwrap_or_else(|| "none".to_string());
    check_plus_one_type(&plus_one_type)?;

    let primary = Guest::primary(
        event.id.clone(),
        contact.id.clone(),
        plus_one_type.clone(),
        payload.plus_one_details.as_ref(),
        payload.event_specific_notes,
    );

    // A named plus-one becomes its own synthetic guest record, committed
    // in the same transaction as the primary.
    let companion = match (&plus_one_type[..], &payload.plus_one_details) {
        ("with_details", Some(details)) if details.has_name() => Some(Guest::companion(&primary, details)),
        _ => None,
    };

    let created = state.guest_repo.create_with_companion(&primary, companion.as_ref()).await?;

    counters::adjust(&*state.event_repo, &event.id, "pending", 1).await;
    if companion.is_some() {
        counters::adjust(&*state.event_repo, &event.id, "pending", 1).await;
    }

    info!("Added contact {} to event {} ({} record(s))", contact.id, event.id, 1 + companion.is_some() as usize);

    Ok(Json(AddGuestResponse {
        guest: created,
        companion,
    }))
}

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let guests = state.guest_repo.list_by_event(&event.id).await?;
    let mut enriched = Vec::with_capacity(guests.len());
    for guest in guests {
        let contact = match &guest.contact_id {
            Some(contact_id) => state.contact_repo.find_by_id(&user_id, contact_id).await?,
            None => None,
        };
        let summary = match &contact {
            Some(c) => ContactSummary::from_contact(c),
            None => ContactSummary::from_inline(&guest),
        };
        enriched.push(GuestWithContact { guest, contact: summary });
    }

    Ok(Json(enriched))
}

pub async fn remove_guest(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id, contact_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    let guest = state.guest_repo.find_by_event_and_contact(&event.id, &contact_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    let deleted = state.guest_repo.delete_with_companion(&guest.id).await?;
    for record in &deleted {
        counters::adjust(&*state.event_repo, &event.id, &record.status, -1).await;
    }

    info!("Removed contact {} from event {} ({} record(s))", contact_id, event.id, deleted.len());
    Ok(Json(serde_json::json!({ "status": "removed", "deleted": deleted.len() })))
}

pub async fn update_plus_one(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id, contact_id)): Path<(String, String, String)>,
    Json(payload): Json<UpdatePlusOneRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    let mut guest = state.guest_repo.find_by_event_and_contact(&event.id, &contact_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    check_plus_one_type(&payload.plus_one_type)?;

    let existing = state.guest_repo.find_companion(&guest.id).await?;
    let details = payload.plus_one_details.unwrap_or_default();

    guest.plus_one_type = payload.plus_one_type.clone();
    let companion = if payload.plus_one_type == "with_details" {
        guest.plus_one_first_name = Some(details.first_name.clone());
        guest.plus_one_last_name = Some(details.last_name.clone());
        guest.plus_one_dietary_restrictions = Some(details.dietary_restrictions.clone());

        match existing {
            Some(mut companion) => {
                companion.first_name = Some(details.first_name.clone());
                companion.last_name = Some(details.last_name.clone());
                companion.dietary_restrictions = Some(details.dietary_restrictions.clone());
                Some(state.guest_repo.update(&companion).await?)
            }
            None => {
                let companion = Guest::companion(&guest, &details);
                let created = state.guest_repo.create(&companion).await?;
                counters::adjust(&*state.event_repo, &event.id, "pending", 1).await;
                Some(created)
            }
        }
    } else {
        // No detailed plus-one any more: the synthetic record has nothing
        // left to represent.
        guest.plus_one_first_name = None;
        guest.plus_one_last_name = None;
        guest.plus_one_dietary_restrictions = None;

        if let Some(companion) = existing {
            state.guest_repo.delete(&companion.id).await?;
            counters::adjust(&*state.event_repo, &event.id, &companion.status, -1).await;
        }
        None
    };

    let updated = state.guest_repo.update(&guest).await?;
    info!("Updated plus-one for guest {} to {}", updated.id, updated.plus_one_type);

    Ok(Json(AddGuestResponse { guest: updated, companion }))
}

pub async fn update_guest_status(
    State(state): State<Arc<AppState>>,
    Path((user_id, guest_id)): Path<(String, String)>,
    Json(payload): Json<UpdateGuestStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !GUEST_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::Validation(format!("Invalid guest status: {}", payload.status)));
    }

    let mut guest = state.guest_repo.find_by_id(&guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;
    let event = state.event_repo.find_by_id(&user_id, &guest.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let previous = guest.status.clone();
    guest.status = payload.status;
    guest.responded_at = if guest.status == "pending" { None } else { Some(Utc::now()) };

    let updated = state.guest_repo.update(&guest).await?;
    counters::transition(&*state.event_repo, &event.id, &previous, &updated.status).await;

    info!("Guest {} status {} -> {}", updated.id, previous, updated.status);
    Ok(Json(updated))
}

pub async fn export_guests(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let guests = state.guest_repo.list_by_event(&event.id).await?;
    let mut rows = Vec::with_capacity(guests.len());
    for guest in guests {
        let contact = match &guest.contact_id {
            Some(contact_id) => state.contact_repo.find_by_id(&user_id, contact_id).await?,
            None => None,
        };
        rows.push((guest, contact));
    }

    let csv = export::guests_to_csv(&rows);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"goscie-{}.csv\"", event.id)),
        ],
        csv,
    ))
}
