//! Personio API client

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;

use crate::error::{Error, Result};

pub mod auth;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod personio;

#[cfg(test)]
pub use mock::MockAbsenceClient;
pub use models::Credentials;
pub use personio::PersonioClient;

/// Timeout applied to every outbound request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of absentee names for a day
#[async_trait]
pub trait AbsenceApi: Send {
    /// Names of employees absent on `date`, in the order the API returned them
    async fn absences_on(&mut self, date: NaiveDate) -> Result<Vec<String>>;
}

/// Build the HTTP client shared by the Personio client and the notifier
pub fn build_http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::HttpClient(e.to_string()))
}
