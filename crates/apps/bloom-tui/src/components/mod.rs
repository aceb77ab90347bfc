pub mod analytics;
pub mod auth;
pub mod confessions;
pub mod environments;
pub mod header;
pub mod home;
pub mod journal;
pub mod mood_check;
pub mod not_found;
pub mod reminders;
pub mod shared;
pub mod status_bar;
