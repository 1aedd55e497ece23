use crate::domain::error::DeliveryError;
use async_trait::async_trait;

/// Outbound chat channel for finished reports.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for logs (e.g., "telegram").
    fn name(&self) -> &str;

    async fn send(&self, message: &str) -> Result<(), DeliveryError>;
}
