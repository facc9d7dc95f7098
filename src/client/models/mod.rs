//! Personio API data models

mod auth;
mod time_off;

pub use auth::{AuthResponse, AuthToken, Credentials};
pub use time_off::TimeOffPage;
