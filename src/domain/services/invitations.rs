use crate::domain::models::{
    contact::Contact, event::Event, guest::Guest, invitation::GuestInvitation, token::RsvpToken,
};
use crate::error::AppError;
use tera::{Context, Tera};

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const QR_SIZE: &str = "300x300";

pub fn rsvp_url(base_url: &str, token: &str) -> String {
    format!("{}/rsvp/{}", base_url.trim_end_matches('/'), token)
}

/// QR rendering is delegated to a third-party endpoint; the payload is just
/// a GET URL carrying the percent-encoded RSVP link.
pub fn qr_code_url(rsvp_url: &str) -> String {
    format!("{}?size={}&data={}", QR_ENDPOINT, QR_SIZE, urlencoding::encode(rsvp_url))
}

pub fn build_invitation(guest: &Guest, contact: Option<&Contact>, token: &RsvpToken, base_url: &str) -> GuestInvitation {
    let url = rsvp_url(base_url, &token.token);
    let (first_name, last_name, email) = match contact {
        Some(c) => (c.first_name.clone(), c.last_name.clone(), c.email.clone()),
        None => (
            guest.first_name.clone().unwrap_or_default(),
            guest.last_name.clone().unwrap_or_default(),
            guest.email.clone().unwrap_or_default(),
        ),
    };

    GuestInvitation {
        event_guest_id: guest.id.clone(),
        contact_id: guest.contact_id.clone(),
        email,
        first_name,
        last_name,
        rsvp_token: token.token.clone(),
        qr_code: qr_code_url(&url),
        rsvp_url: url,
    }
}

pub fn sms_message(templates: &Tera, invitation: &GuestInvitation, event: &Event) -> Result<String, AppError> {
    let mut ctx = Context::new();
    ctx.insert("first_name", &invitation.first_name);
    ctx.insert("event_title", &event.title);
    ctx.insert("event_date", &event.date.format("%d.%m.%Y %H:%M").to_string());
    ctx.insert("event_location", &event.location);
    ctx.insert("rsvp_url", &invitation.rsvp_url);

    templates
        .render("invitation_sms.txt", &ctx)
        .map_err(|e| AppError::InternalWithMsg(format!("SMS template rendering failed: {}", e)))
}
