use super::news_item::RankedNewsItem;
use super::ranked::Ranked;
use super::stock_item::RankedStockItem;
use crate::domain::values::category::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The four ranked lists of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub limit: usize,
    pub world_news: Ranked<RankedNewsItem>,
    pub malaysia_news: Ranked<RankedNewsItem>,
    pub world_stocks: Ranked<RankedStockItem>,
    pub malaysia_stocks: Ranked<RankedStockItem>,
}

impl Report {
    pub fn news(&self, category: Category) -> &Ranked<RankedNewsItem> {
        match category {
            Category::World => &self.world_news,
            Category::Malaysia => &self.malaysia_news,
        }
    }

    pub fn stocks(&self, category: Category) -> &Ranked<RankedStockItem> {
        match category {
            Category::World => &self.world_stocks,
            Category::Malaysia => &self.malaysia_stocks,
        }
    }

    /// All warnings, prefixed with the list they came from.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        for cat in Category::ALL {
            out.extend(
                self.news(cat)
                    .warnings
                    .iter()
                    .map(|w| format!("{cat} news: {w}")),
            );
            out.extend(
                self.stocks(cat)
                    .warnings
                    .iter()
                    .map(|w| format!("{cat} stocks: {w}")),
            );
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.world_news.is_empty()
            && self.malaysia_news.is_empty()
            && self.world_stocks.is_empty()
            && self.malaysia_stocks.is_empty()
    }
}
