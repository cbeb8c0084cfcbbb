pub mod counters;
pub mod invitations;
pub mod export;
