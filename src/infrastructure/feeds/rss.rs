use crate::domain::entities::news_item::RawNewsEntry;
use crate::domain::error::SourceError;
use crate::domain::ports::news_source::{FeedFetch, NewsSource};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// RSS 2.0 / Atom feed client backed by `feed-rs`.
pub struct RssSource {
    client: reqwest::Client,
}

impl RssSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("DailyInsight/0.1 (+rss)")
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for RssSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for RssSource {
    async fn fetch(&self, url: &str) -> Result<FeedFetch, SourceError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                status: resp.status().as_u16(),
                target: url.to_string(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let fetch = parse_feed(&bytes)?;
        debug!(url, entries = fetch.entries.len(), "Parsed feed");
        Ok(fetch)
    }
}

/// Parse a feed document. Entries missing fields are kept with those
/// fields empty; the ranking pipeline fills in defaults.
pub fn parse_feed(bytes: &[u8]) -> Result<FeedFetch, SourceError> {
    let feed = feed_rs::parser::parse(bytes).map_err(|e| SourceError::Parse(e.to_string()))?;

    let feed_title = feed.title.map(|t| t.content.trim().to_string());

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let published = entry.published.or(entry.updated);
            RawNewsEntry {
                title: entry.title.map(|t| t.content),
                link: entry.links.first().map(|l| l.href.clone()),
                summary: entry.summary.map(|s| s.content),
                source: None,
                published_label: published.map(|ts| ts.to_rfc2822()),
                published,
            }
        })
        .collect();

    Ok(FeedFetch {
        feed_title,
        entries,
    })
}
