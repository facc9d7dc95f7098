//! Personio API client implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, trace};
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, StatusCode};

use super::AbsenceApi;
use super::auth::TokenManager;
use super::models::{Credentials, TimeOffPage};
use super::pagination::PageParams;
use crate::error::{FetchError, Result, describe_transport};

/// Time-off listing endpoint, relative to the API host
pub const TIME_OFF_PATH: &str = "/v1/company/time-offs";

/// Personio API client
#[derive(Debug)]
pub struct PersonioClient {
    http: HttpClient,
    base_url: String,
    tokens: TokenManager,
}

impl PersonioClient {
    /// Create a client against `base_url` (no trailing slash)
    pub fn new(http: HttpClient, base_url: &str, credentials: Credentials) -> Self {
        Self {
            tokens: TokenManager::new(http.clone(), base_url, credentials),
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Token manager used to authorize requests
    #[allow(dead_code)]
    pub fn tokens_mut(&mut self) -> &mut TokenManager {
        &mut self.tokens
    }

    /// Request a single page of time-offs for `day`
    async fn fetch_page(&self, token: &str, day: &str, params: PageParams) -> Result<TimeOffPage> {
        let page = params.page;

        let url = format!("{}{}", self.base_url, TIME_OFF_PATH);
        let mut query = params.to_query_params();
        query.push(("start_date", day.to_string()));
        query.push(("end_date", day.to_string()));

        debug!(
            "fetching absences (page={}, offset={}, url={})",
            page,
            params.offset(),
            url
        );

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                page,
                reason: describe_transport(&e),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            page,
            reason: describe_transport(&e),
        })?;

        let parsed: TimeOffPage = serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            page,
            reason: e.to_string(),
        })?;

        Ok(parsed)
    }
}

#[async_trait]
impl AbsenceApi for PersonioClient {
    async fn absences_on(&mut self, date: NaiveDate) -> Result<Vec<String>> {
        // one token for the whole listing
        let token = self.tokens.get_token().await?;

        let day = date.format("%Y-%m-%d").to_string();
        let mut params = PageParams::first();
        let mut absentees = Vec::new();

        loop {
            let response = self.fetch_page(&token, &day, params).await?;

            debug!(
                "received absences (page={}, total_pages={}, total_elements={}, current_page={}, returned={}, success={})",
                params.page,
                response.metadata.total_pages,
                response.metadata.total_elements,
                response.metadata.current_page,
                response.data.len(),
                response.success
            );

            for record in &response.data {
                let name = record.employee_name();
                let attrs = &record.attributes;
                trace!(
                    "absence: {} ({} to {}, {})",
                    name,
                    attrs.start_date.as_deref().unwrap_or("?"),
                    attrs.end_date.as_deref().unwrap_or("?"),
                    attrs.status.as_deref().unwrap_or("unknown status")
                );
                absentees.push(name);
            }

            if response.metadata.is_last_page(params.page) {
                break;
            }

            params = params.next();
        }

        debug!("retrieved absences (total={})", absentees.len());

        Ok(absentees)
    }
}
