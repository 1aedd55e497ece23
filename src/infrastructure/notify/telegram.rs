use crate::domain::error::DeliveryError;
use crate::domain::ports::notifier::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API `sendMessage` with Markdown parse mode.
pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, bot_token, chat_id)
    }

    pub fn with_base_url(base_url: impl Into<String>, bot_token: String, chat_id: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bot_token,
            chat_id,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        if self.bot_token.is_empty() || self.chat_id.is_empty() {
            return Err(DeliveryError::MissingCredentials);
        }

        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let resp = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text: message,
                parse_mode: "Markdown",
            })
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }

        info!(chat_id = %self.chat_id, "Report delivered to Telegram");
        Ok(())
    }
}
