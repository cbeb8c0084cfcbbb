use crate::domain::models::{
    contact::Contact, event::Event, guest::Guest, token::RsvpToken,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Event>, AppError>;
    /// Unscoped lookup for the token-gated public RSVP flow, where the
    /// bearer has a token instead of an owner id.
    async fn find_public(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self, user_id: &str) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;

    /// Applies `delta` to guest_count and to the bucket matching `status`
    /// (unrecognized statuses land in the pending bucket) as one atomic
    /// UPDATE, clamping every counter at zero.
    async fn adjust_counts(&self, event_id: &str, status: &str, delta: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<Contact, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Contact>, AppError>;
    async fn list(&self, user_id: &str) -> Result<Vec<Contact>, AppError>;
    async fn update(&self, contact: &Contact) -> Result<Contact, AppError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError>;
    /// Creates the primary guest and, when present, its synthetic
    /// companion in a single transaction.
    async fn create_with_companion(&self, primary: &Guest, companion: Option<&Guest>) -> Result<Guest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError>;
    async fn find_by_event_and_contact(&self, event_id: &str, contact_id: &str) -> Result<Option<Guest>, AppError>;
    async fn find_companion(&self, primary_guest_id: &str) -> Result<Option<Guest>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Guest>, AppError>;
    async fn update(&self, guest: &Guest) -> Result<Guest, AppError>;
    /// Deletes the guest and any companion pointing at it, returning the
    /// deleted records so the caller can settle counters.
    async fn delete_with_companion(&self, id: &str) -> Result<Vec<Guest>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Commits an RSVP response atomically: burns the token (conditional
    /// on it being unused), writes the guest mutation and, when given,
    /// the contact update. Fails with the already-used reason if the
    /// token was consumed concurrently; nothing is written in that case.
    async fn apply_response(&self, guest: &Guest, contact: Option<&Contact>, token: &str) -> Result<Guest, AppError>;
}

#[async_trait]
pub trait RsvpTokenRepository: Send + Sync {
    async fn create(&self, token: &RsvpToken) -> Result<RsvpToken, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<RsvpToken>, AppError>;
    /// Most recent unused, unexpired token for a guest, for idempotent reuse.
    async fn find_active_by_guest(&self, guest_id: &str) -> Result<Option<RsvpToken>, AppError>;
}
