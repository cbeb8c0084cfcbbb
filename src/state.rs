use std::sync::Arc;
use crate::domain::ports::{
    ContactRepository, EventRepository, GuestRepository, RsvpTokenRepository,
};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub token_repo: Arc<dyn RsvpTokenRepository>,
    pub templates: Arc<Tera>,
}
