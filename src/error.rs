//! Error types for personio-absences

use thiserror::Error;

/// Result type alias for personio-absences operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Credential exchange errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to reach Personio auth endpoint: {0}")]
    Network(String),

    #[error("Invalid auth response (status {status}): {reason}")]
    InvalidResponse { status: u16, reason: String },

    #[error("Personio authentication failed with status code {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Received empty token from Personio")]
    EmptyToken,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(describe_transport(&err))
    }
}

/// Time-off listing errors. `page` is the 0-based page index.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not get absences (page {page}): {reason}")]
    Network { page: usize, reason: String },

    #[error("Could not get absences (page {page}): status code {status}: {body}")]
    Status {
        page: usize,
        status: u16,
        body: String,
    },

    #[error("Could not parse absences (page {page}): {reason}")]
    Decode { page: usize, reason: String },
}

/// Webhook delivery errors
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Could not send Slack message: {0}")]
    Network(String),

    #[error("Could not send Slack message: status code {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Network(describe_transport(&err))
    }
}

/// Flatten a transport error into a message, calling out timeouts and
/// connection failures.
pub fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("Request timed out: {}", err)
    } else if err.is_connect() {
        format!("Failed to connect: {}", err)
    } else {
        err.to_string()
    }
}
