//! Authentication models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Remaining validity a cached token must have to be reused
pub const TOKEN_SKEW_SECONDS: i64 = 5;

/// Client id and secret exchanged for a bearer token
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// The bearer token string
    pub value: String,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Build a token that expires `expires_in` seconds after `now`.
    pub fn expiring_in(value: String, expires_in: i64, now: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: now + Duration::seconds(expires_in.clamp(0, i64::from(u32::MAX))),
        }
    }

    /// A token is usable only while `now + skew < expires_at`.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_SKEW_SECONDS) < self.expires_at
    }
}

/// Body returned by `POST /v1/auth`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Option<AuthData>,

    #[serde(default)]
    pub error: Option<AuthErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub token: String,

    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,

    #[serde(default)]
    #[allow(dead_code)]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub message: String,
}
