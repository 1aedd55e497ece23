use crate::domain::ports::translator::Translator;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Google Translate through the public `gtx` endpoint (no key).
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn request(&self, text: &str, target: &str) -> Result<String, String> {
        let resp = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("Translate API error: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Translate API {}", resp.status()));
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
        extract_translation(&body).ok_or_else(|| "Unexpected translate response shape".to_string())
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// The response is `[[["segment", "source", ...], ...], ...]`; the
/// translation is the concatenation of every segment's first element.
fn extract_translation(body: &serde_json::Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|s| s.as_str()))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        match self.request(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(target, error = %e, "Translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}
