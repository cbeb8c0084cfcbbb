use crate::domain::models::guest::PlusOneDetails;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub max_guests: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub max_guests: Option<i32>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct AddGuestRequest {
    pub contact_id: String,
    pub plus_one_type: Option<String>,
    pub plus_one_details: Option<PlusOneDetails>,
    pub event_specific_notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePlusOneRequest {
    pub plus_one_type: String,
    pub plus_one_details: Option<PlusOneDetails>,
}

#[derive(Deserialize)]
pub struct UpdateGuestStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct RsvpResponseRequest {
    pub status: String,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub plus_one_type: Option<String>,
    pub plus_one_details: Option<PlusOneDetails>,
}
