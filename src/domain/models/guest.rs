use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const PLUS_ONE_TYPES: [&str; 3] = ["none", "without_details", "with_details"];

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlusOneDetails {
    pub first_name: String,
    pub last_name: String,
    pub dietary_restrictions: String,
}

impl PlusOneDetails {
    pub fn has_name(&self) -> bool {
        !self.first_name.trim().is_empty() || !self.last_name.trim().is_empty()
    }
}

/// One invited attendee slot of one event. `contact_id` is absent for a
/// synthetic companion guest, which instead carries the inline identity
/// fields and points back at its primary via `companion_of_guest_id`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub id: String,
    pub event_id: String,
    pub contact_id: Option<String>,
    pub companion_of_guest_id: Option<String>,
    pub status: String, // pending, accepted, declined, maybe
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub plus_one_type: String, // none, without_details, with_details
    pub plus_one_first_name: Option<String>,
    pub plus_one_last_name: Option<String>,
    pub plus_one_dietary_restrictions: Option<String>,
    pub event_specific_notes: Option<String>,
    pub invited_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl Guest {
    pub fn primary(event_id: String, contact_id: String, plus_one_type: String, plus_one_details: Option<&PlusOneDetails>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            contact_id: Some(contact_id),
            companion_of_guest_id: None,
            status: "pending".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            dietary_restrictions: None,
            plus_one_type,
            plus_one_first_name: plus_one_details.map(|d| d.first_name.clone()),
            plus_one_last_name: plus_one_details.map(|d| d.last_name.clone()),
            plus_one_dietary_restrictions: plus_one_details.map(|d| d.dietary_restrictions.clone()),
            event_specific_notes: notes,
            invited_at: Utc::now(),
            responded_at: None,
        }
    }

    pub fn companion(primary: &Guest, details: &PlusOneDetails) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: primary.event_id.clone(),
            contact_id: None,
            companion_of_guest_id: Some(primary.id.clone()),
            status: "pending".to_string(),
            first_name: Some(details.first_name.clone()),
            last_name: Some(details.last_name.clone()),
            email: Some(String::new()),
            phone: Some(String::new()),
            dietary_restrictions: Some(details.dietary_restrictions.clone()),
            plus_one_type: "none".to_string(),
            plus_one_first_name: None,
            plus_one_last_name: None,
            plus_one_dietary_restrictions: None,
            event_specific_notes: None,
            invited_at: Utc::now(),
            responded_at: None,
        }
    }

    pub fn is_companion(&self) -> bool {
        self.companion_of_guest_id.is_some()
    }
}
