use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Contact {
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dietary_restrictions: String,
    pub notes: String,
    pub tags: String, // JSON array of tag strings
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(user_id: String, first_name: String, last_name: String, email: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            first_name,
            last_name,
            email,
            phone,
            dietary_restrictions: String::new(),
            notes: String::new(),
            tags: "[]".to_string(),
            created_at: Utc::now(),
        }
    }
}
