pub mod event;
pub mod contact;
pub mod guest;
pub mod token;
pub mod invitation;
