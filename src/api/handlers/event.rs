use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::domain::models::event::{Event, EVENT_STATUSES};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }

    let event = Event::new(
        user_id,
        payload.title,
        payload.description.unwrap_or_default(),
        payload.date,
        payload.location.unwrap_or_default(),
        payload.max_guests.unwrap_or(0),
    );
    let created = state.event_repo.create(&event).await?;

    info!("Created event {}", created.id);
    Ok(Json(created))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list(&user_id).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&user_id, &event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(title) = payload.title {
        event.title = title;
    }
    if let Some(description) = payload.description {
        event.description = description;
    }
    if let Some(date) = payload.date {
        event.date = date;
    }
    if let Some(location) = payload.location {
        event.location = location;
    }
    if let Some(max_guests) = payload.max_guests {
        event.max_guests = max_guests;
    }
    if let Some(status) = payload.status {
        if !EVENT_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation(format!("Invalid event status: {}", status)));
        }
        event.status = status;
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Updated event {}", event_id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.delete(&user_id, &event_id).await?;
    info!("Deleted event {}", event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
