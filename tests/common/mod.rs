//! Shared test helpers: in-memory adapters for every port.

#![allow(dead_code)]

use async_trait::async_trait;
use daily_insight::config::Settings;
use daily_insight::domain::entities::news_item::RawNewsEntry;
use daily_insight::domain::error::{DeliveryError, SourceError};
use daily_insight::domain::ports::market_data::{MarketData, PriceSeries};
use daily_insight::domain::ports::news_source::{FeedFetch, NewsSource};
use daily_insight::domain::ports::notifier::Notifier;
use daily_insight::domain::ports::translator::Translator;
use daily_insight::domain::values::category::Category;
use daily_insight::domain::values::lexicon::Lexicon;
use daily_insight::domain::values::source_config::SourceConfig;
use daily_insight::infrastructure::translate::noop::NoopTranslator;
use daily_insight::{DailyInsight, Providers};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Feeds keyed by URL. URLs without an entry fail with a network error.
#[derive(Default)]
pub struct StubNews {
    feeds: HashMap<String, FeedFetch>,
}

impl StubNews {
    pub fn with_feed(mut self, url: &str, feed_title: &str, titles: &[&str]) -> Self {
        let entries = titles.iter().map(|t| RawNewsEntry::titled(*t)).collect();
        self.feeds.insert(
            url.to_string(),
            FeedFetch {
                feed_title: Some(feed_title.to_string()),
                entries,
            },
        );
        self
    }

    pub fn with_entries(mut self, url: &str, feed_title: &str, entries: Vec<RawNewsEntry>) -> Self {
        self.feeds.insert(
            url.to_string(),
            FeedFetch {
                feed_title: Some(feed_title.to_string()),
                entries,
            },
        );
        self
    }
}

#[async_trait]
impl NewsSource for StubNews {
    async fn fetch(&self, url: &str) -> Result<FeedFetch, SourceError> {
        self.feeds
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::Network(format!("connection refused: {url}")))
    }
}

/// Fixed market data. `None` simulates a failed batch download.
pub struct StubMarket {
    series: Option<PriceSeries>,
}

impl StubMarket {
    pub fn new(series: &[(&str, Vec<Option<f64>>)]) -> Self {
        Self {
            series: Some(
                series
                    .iter()
                    .map(|(t, c)| (t.to_string(), c.clone()))
                    .collect(),
            ),
        }
    }

    pub fn down() -> Self {
        Self { series: None }
    }
}

#[async_trait]
impl MarketData for StubMarket {
    async fn closing_prices(
        &self,
        tickers: &[String],
        _window_days: u32,
    ) -> Result<PriceSeries, SourceError> {
        let all = self
            .series
            .as_ref()
            .ok_or_else(|| SourceError::Network("market data unreachable".into()))?;
        Ok(tickers
            .iter()
            .filter_map(|t| all.get(t).map(|c| (t.clone(), c.clone())))
            .collect())
    }
}

/// Prefixes the target language and records every input.
#[derive(Default)]
pub struct TaggingTranslator {
    pub seen: Mutex<Vec<String>>,
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(&self, text: &str, target: &str) -> String {
        self.seen.lock().unwrap().push(text.to_string());
        format!("[{target}] {text}")
    }
}

/// Records sent messages, or fails every send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 401,
                body: "Unauthorized".into(),
            });
        }
        self.sent.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub const WORLD_A: &str = "https://world.example/a.rss";
pub const WORLD_B: &str = "https://world.example/b.rss";
pub const MY_A: &str = "https://my.example/a.rss";

pub fn sources() -> SourceConfig {
    SourceConfig::new()
        .with_feeds(Category::World, &[WORLD_A, WORLD_B])
        .with_feeds(Category::Malaysia, &[MY_A])
        .with_tickers(Category::World, &["ABC", "DEF", "XYZ"])
        .with_tickers(Category::Malaysia, &["1155.KL"])
}

pub fn setup(
    news: StubNews,
    market: StubMarket,
    translator: Arc<dyn Translator>,
    notifier: Option<Arc<dyn Notifier>>,
) -> DailyInsight {
    DailyInsight::with_providers(
        Settings::default(),
        sources(),
        Lexicon::default(),
        Providers {
            news: Arc::new(news),
            market: Arc::new(market),
            translator,
            notifier,
        },
    )
}

pub fn setup_offline(news: StubNews, market: StubMarket) -> DailyInsight {
    setup(news, market, Arc::new(NoopTranslator), None)
}
