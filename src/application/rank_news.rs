//! News ranking: fetch every feed of a category, drop duplicate headlines,
//! score by keyword lexicon and recency, keep the top N.

use crate::domain::entities::news_item::RankedNewsItem;
use crate::domain::entities::ranked::Ranked;
use crate::domain::ports::news_source::{FeedFetch, NewsSource};
use crate::domain::values::category::Category;
use crate::domain::values::lexicon::Lexicon;
use crate::domain::values::source_config::SourceConfig;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RankNewsUseCase {
    source: Arc<dyn NewsSource>,
    sources: Arc<SourceConfig>,
    lexicon: Arc<Lexicon>,
}

impl RankNewsUseCase {
    pub fn new(
        source: Arc<dyn NewsSource>,
        sources: Arc<SourceConfig>,
        lexicon: Arc<Lexicon>,
    ) -> Self {
        Self {
            source,
            sources,
            lexicon,
        }
    }

    pub async fn execute(&self, category: Category, limit: usize) -> Ranked<RankedNewsItem> {
        self.execute_at(category, limit, Utc::now()).await
    }

    /// Same as [`execute`](Self::execute) with an explicit clock for the
    /// recency bonus.
    pub async fn execute_at(
        &self,
        category: Category,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Ranked<RankedNewsItem> {
        let urls = self.sources.feeds(category);
        if urls.is_empty() {
            return Ranked::empty();
        }

        info!(%category, feeds = urls.len(), "Fetching news");

        // join_all yields results in input order, so dedup stays first-seen
        // by configuration order no matter which request finishes first.
        let results = join_all(urls.iter().map(|url| self.source.fetch(url))).await;

        let mut batches = Vec::with_capacity(results.len());
        let mut warnings = Vec::new();
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(fetch) => batches.push(fetch),
                Err(e) => {
                    warn!(%category, url = %url, error = %e, "Feed fetch failed");
                    warnings.push(format!("{url}: {e}"));
                }
            }
        }

        let items = rank_entries(batches, &self.lexicon, limit, now);
        info!(%category, ranked = items.len(), failed_feeds = warnings.len(), "News ranked");
        Ranked::new(items, warnings)
    }
}

/// Dedup, score, sort and truncate already-fetched feeds. Pure.
pub fn rank_entries(
    batches: Vec<FeedFetch>,
    lexicon: &Lexicon,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<RankedNewsItem> {
    let mut seen = HashSet::new();
    let mut scored = Vec::new();

    for batch in batches {
        for mut entry in batch.entries {
            if !seen.insert(entry.dedup_key()) {
                continue;
            }
            if entry.source.is_none() {
                entry.source = batch.feed_title.clone();
            }
            let score = lexicon.score(
                &entry.clean_title(),
                entry.summary.as_deref().unwrap_or(""),
                entry.published,
                now,
            );
            scored.push(RankedNewsItem::from_raw(entry, score));
        }
    }

    // sort_by is stable: equal scores keep first-seen order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
