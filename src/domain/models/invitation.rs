use serde::Serialize;

/// Delivery-ready invitation payload, derived on demand from a guest and
/// its active token. Never persisted.
#[derive(Debug, Serialize, Clone)]
pub struct GuestInvitation {
    pub event_guest_id: String,
    pub contact_id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub rsvp_token: String,
    pub rsvp_url: String,
    pub qr_code: String,
}
