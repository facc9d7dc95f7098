//! Recording notifier for testing

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Notifier;
use crate::error::DeliveryError;

/// Records every message instead of sending it.
#[derive(Debug, Default)]
pub struct MockNotifier {
    /// Messages passed to send
    sent: Arc<Mutex<Vec<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<DeliveryError>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next send with `error`
    pub fn with_error(self, error: DeliveryError) -> Self {
        Self {
            error: Arc::new(Mutex::new(Some(error))),
            ..self
        }
    }

    /// Messages received so far
    pub async fn sent(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.sent.lock().await.push(text.to_string());

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }

        Ok(())
    }
}
