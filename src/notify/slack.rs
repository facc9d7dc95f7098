//! Slack incoming-webhook notifier

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;

use super::Notifier;
use crate::error::DeliveryError;

/// Webhook payload; Slack renders `text` as mrkdwn
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts messages to a Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    http: HttpClient,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(http: HttpClient, webhook_url: impl Into<String>) -> Self {
        Self {
            http,
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        debug!("sending slack message ({} bytes)", text.len());

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&WebhookPayload { text })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
