pub mod health;
pub mod event;
pub mod contact;
pub mod guest;
pub mod invitation;
pub mod rsvp;
