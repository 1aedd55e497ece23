use crate::domain::error::DeliveryError;
use crate::domain::ports::notifier::Notifier;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// The chat channel accepted the message.
    Sent,
    /// No channel is configured; the caller should print the report locally.
    NoChannel,
}

pub struct DeliverUseCase {
    notifier: Option<Arc<dyn Notifier>>,
}

impl DeliverUseCase {
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { notifier }
    }

    pub fn has_channel(&self) -> bool {
        self.notifier.is_some()
    }

    pub async fn execute(&self, message: &str) -> Result<DeliveryOutcome, DeliveryError> {
        let Some(notifier) = &self.notifier else {
            info!("No chat channel configured, report will be printed locally");
            return Ok(DeliveryOutcome::NoChannel);
        };

        match notifier.send(message).await {
            Ok(()) => {
                info!(channel = notifier.name(), "Report sent");
                Ok(DeliveryOutcome::Sent)
            }
            Err(e) => {
                warn!(channel = notifier.name(), error = %e, "Failed to send report");
                Err(e)
            }
        }
    }
}
