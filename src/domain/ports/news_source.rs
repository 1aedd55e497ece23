use crate::domain::entities::news_item::RawNewsEntry;
use crate::domain::error::SourceError;
use async_trait::async_trait;

/// Entries of one fetched feed.
#[derive(Debug, Clone, Default)]
pub struct FeedFetch {
    /// Channel title, when the feed declares one.
    pub feed_title: Option<String>,
    pub entries: Vec<RawNewsEntry>,
}

/// A news feed client. Malformed items inside a feed are skipped by the
/// implementation; only a failure for the whole URL is an `Err`.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FeedFetch, SourceError>;
}
