//! Outbound notification delivery

use async_trait::async_trait;

use crate::error::DeliveryError;

#[cfg(test)]
pub mod mock;
pub mod slack;

#[cfg(test)]
pub use mock::MockNotifier;
pub use slack::SlackNotifier;

/// Delivers a preformatted message
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
