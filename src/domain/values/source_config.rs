use super::category::Category;
use std::collections::HashMap;

/// Static mapping of category to the feeds and tickers it draws from.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    feeds: HashMap<Category, Vec<String>>,
    tickers: HashMap<Category, Vec<String>>,
}

impl SourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feeds(mut self, category: Category, urls: &[&str]) -> Self {
        self.feeds
            .insert(category, urls.iter().map(|u| u.to_string()).collect());
        self
    }

    pub fn with_tickers(mut self, category: Category, symbols: &[&str]) -> Self {
        self.tickers
            .insert(category, symbols.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Feed URLs for a category, in priority order. Empty if unconfigured.
    pub fn feeds(&self, category: Category) -> &[String] {
        self.feeds.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tickers(&self, category: Category) -> &[String] {
        self.tickers.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// BBC, CNN and CNBC for world news; The Star, Malay Mail and Bernama
    /// for Malaysia. Tickers are the major US names plus Bursa blue chips.
    pub fn standard() -> Self {
        Self::new()
            .with_feeds(
                Category::World,
                &[
                    "http://feeds.bbci.co.uk/news/world/rss.xml",
                    "http://rss.cnn.com/rss/edition_world.rss",
                    "https://www.cnbc.com/id/100003114/device/rss/rss.html",
                ],
            )
            .with_feeds(
                Category::Malaysia,
                &[
                    "https://www.thestar.com.my/rss/news/nation",
                    "https://www.thestar.com.my/rss/business/business-news",
                    "https://www.malaymail.com/feed/rss/malaysia",
                    "https://www.bernama.com/en/rss/news.php?cat=general",
                ],
            )
            .with_tickers(
                Category::World,
                &[
                    "^GSPC", "^IXIC", "AAPL", "MSFT", "GOOG", "AMZN", "TSLA", "NVDA", "META",
                    "BRK-B",
                ],
            )
            .with_tickers(
                Category::Malaysia,
                &[
                    "^KLSE", "1155.KL", "1023.KL", "1295.KL", "5183.KL", "5225.KL", "6033.KL",
                    "5347.KL", "4065.KL", "5819.KL",
                ],
            )
    }
}
