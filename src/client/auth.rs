//! Bearer token lifecycle
//!
//! [`TokenManager`] holds the credentials and a single token slot. A token
//! is reused while it has more than five seconds left; otherwise the
//! credentials are exchanged again and the slot is overwritten.

use chrono::Utc;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;

use super::models::{AuthResponse, AuthToken, Credentials};
use crate::error::AuthError;

/// Credential exchange endpoint, relative to the API host
pub const AUTH_PATH: &str = "/v1/auth";

/// Owns the credentials and the cached token for one run.
#[derive(Debug)]
pub struct TokenManager {
    http: HttpClient,
    auth_url: String,
    credentials: Credentials,
    token: Option<AuthToken>,
}

impl TokenManager {
    pub fn new(http: HttpClient, base_url: &str, credentials: Credentials) -> Self {
        Self {
            http,
            auth_url: format!("{}{}", base_url, AUTH_PATH),
            credentials,
            token: None,
        }
    }

    /// Replace the cached token
    pub fn set_token(&mut self, token: AuthToken) {
        self.token = Some(token);
    }

    /// The cached token, if one has been fetched
    #[allow(dead_code)]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Return a usable bearer token, exchanging credentials only when the
    /// cached one is missing or about to expire.
    pub async fn get_token(&mut self) -> Result<String, AuthError> {
        if let Some(ref token) = self.token {
            if token.is_usable(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.exchange().await?;
        let value = token.value.clone();
        self.set_token(token);

        Ok(value)
    }

    /// POST the credentials and build a token from the response
    async fn exchange(&self) -> Result<AuthToken, AuthError> {
        debug!(
            "authenticating to personio (client_id={})",
            self.credentials.client_id
        );

        let response = self
            .http
            .post(&self.auth_url)
            .header(ACCEPT, "application/json")
            .json(&self.credentials)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let parsed: AuthResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse {
                status,
                reason: format!("failed to parse response: {}", e),
            })?;

        if !parsed.success {
            let message = parsed
                .error
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "no error message returned".to_string());
            return Err(AuthError::Rejected { status, message });
        }

        let data = parsed.data.unwrap_or_default();
        if data.token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let token = AuthToken::expiring_in(data.token, data.expires_in, Utc::now());
        debug!(
            "successfully retrieved new token (expires {})",
            token.expires_at.to_rfc2822()
        );

        Ok(token)
    }
}
