use crate::domain::models::{contact::Contact, event::Event, guest::Guest};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Contact-shaped view of whoever the guest record stands for: the linked
/// contact, or the inline fields of a synthetic companion.
#[derive(Debug, Serialize, Clone)]
pub struct ContactSummary {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dietary_restrictions: String,
}

impl ContactSummary {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id.clone()),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            dietary_restrictions: contact.dietary_restrictions.clone(),
        }
    }

    pub fn from_inline(guest: &Guest) -> Self {
        Self {
            id: None,
            first_name: guest.first_name.clone().unwrap_or_default(),
            last_name: guest.last_name.clone().unwrap_or_default(),
            email: guest.email.clone().unwrap_or_default(),
            phone: guest.phone.clone().unwrap_or_default(),
            dietary_restrictions: guest.dietary_restrictions.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct GuestWithContact {
    #[serde(flatten)]
    pub guest: Guest,
    pub contact: ContactSummary,
}

#[derive(Serialize)]
pub struct AddGuestResponse {
    pub guest: Guest,
    pub companion: Option<Guest>,
}

#[derive(Serialize)]
pub struct RsvpEventSummary {
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl RsvpEventSummary {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            location: event.location.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct RsvpDetails {
    pub event: RsvpEventSummary,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
}
