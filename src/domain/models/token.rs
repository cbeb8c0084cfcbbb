use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use rand::Rng;

pub const TOKEN_VALIDITY_DAYS: i64 = 30;

// Human-readable rejection reasons, surfaced as-is to the RSVP form.
pub const REASON_NOT_FOUND: &str = "Nieprawidłowy token";
pub const REASON_ALREADY_USED: &str = "Token został już użyty";
pub const REASON_EXPIRED: &str = "Token wygasł";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RsvpToken {
    pub id: String,
    pub event_guest_id: String,
    pub event_id: String,
    pub token: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl RsvpToken {
    /// Mints a fresh token for a guest. The opaque value is a base36
    /// millisecond timestamp plus a base36 random suffix, which keeps
    /// collisions improbable without a uniqueness query.
    pub fn new(event_guest_id: String, event_id: String) -> Self {
        let now = Utc::now();
        let token = format!(
            "{}-{}",
            to_base36(now.timestamp_millis() as u64),
            to_base36(rand::thread_rng().gen::<u64>()),
        );

        Self {
            id: Uuid::new_v4().to_string(),
            event_guest_id,
            event_id,
            token,
            is_used: false,
            created_at: now,
            expires_at: now + Duration::days(TOKEN_VALIDITY_DAYS),
            used_at: None,
        }
    }

    /// Used wins over expired: a consumed token stays consumed forever.
    pub fn rejection(&self) -> Option<&'static str> {
        if self.is_used {
            Some(REASON_ALREADY_USED)
        } else if self.expires_at < Utc::now() {
            Some(REASON_EXPIRED)
        } else {
            None
        }
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}
