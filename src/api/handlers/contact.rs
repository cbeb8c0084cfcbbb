use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateContactRequest, UpdateContactRequest};
use crate::domain::models::contact::Contact;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn tags_to_json(tags: Vec<String>) -> Result<String, AppError> {
    serde_json::to_string(&tags).map_err(|e| AppError::InternalWithMsg(format!("Tag serialization failed: {}", e)))
}

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.first_name.trim().is_empty() {
        return Err(AppError::Validation("First name must not be empty".into()));
    }

    let mut contact = Contact::new(
        user_id,
        payload.first_name,
        payload.last_name.unwrap_or_default(),
        payload.email.unwrap_or_default(),
        payload.phone.unwrap_or_default(),
    );
    contact.dietary_restrictions = payload.dietary_restrictions.unwrap_or_default();
    contact.notes = payload.notes.unwrap_or_default();
    if let Some(tags) = payload.tags {
        contact.tags = tags_to_json(tags)?;
    }

    let created = state.contact_repo.create(&contact).await?;
    info!("Created contact {}", created.id);
    Ok(Json(created))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = state.contact_repo.list(&user_id).await?;
    Ok(Json(contacts))
}

pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path((user_id, contact_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let contact = state.contact_repo.find_by_id(&user_id, &contact_id).await?
        .ok_or(AppError::NotFound("Contact not found".into()))?;
    Ok(Json(contact))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path((user_id, contact_id)): Path<(String, String)>,
    Json(payload): Json<UpdateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut contact = state.contact_repo.find_by_id(&user_id, &contact_id).await?
        .ok_or(AppError::NotFound("Contact not found".into()))?;

    if let Some(first_name) = payload.first_name {
        contact.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        contact.last_name = last_name;
    }
    if let Some(email) = payload.email {
        contact.email = email;
    }
    if let Some(phone) = payload.phone {
        contact.phone = phone;
    }
    if let Some(dietary) = payload.dietary_restrictions {
        contact.dietary_restrictions = dietary;
    }
    if let Some(notes) = payload.notes {
        contact.notes = notes;
    }
    if let Some(tags) = payload.tags {
        contact.tags = tags_to_json(tags)?;
    }

    let updated = state.contact_repo.update(&contact).await?;
    info!("Updated contact {}", contact_id);
    Ok(Json(updated))
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path((user_id, contact_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.contact_repo.delete(&user_id, &contact_id).await?;
    info!("Deleted contact {}", contact_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
