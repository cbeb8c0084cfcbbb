use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const EVENT_STATUSES: [&str; 4] = ["draft", "active", "completed", "cancelled"];

/// Guest statuses double as the names of the counter buckets on the event
/// record. Anything outside this set is counted as pending.
pub const GUEST_STATUSES: [&str; 4] = ["pending", "accepted", "declined", "maybe"];

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_guests: i32,
    pub status: String, // draft, active, completed, cancelled
    pub guest_count: i32,
    pub accepted_count: i32,
    pub pending_count: i32,
    pub declined_count: i32,
    pub maybe_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(user_id: String, title: String, description: String, date: DateTime<Utc>, location: String, max_guests: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            title,
            description,
            date,
            location,
            max_guests,
            status: "draft".to_string(),
            guest_count: 0,
            accepted_count: 0,
            pending_count: 0,
            declined_count: 0,
            maybe_count: 0,
            created_at: Utc::now(),
        }
    }
}
