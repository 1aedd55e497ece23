pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::assemble::{AssembleReportUseCase, MessageStyle};
use crate::application::deliver::{DeliverUseCase, DeliveryOutcome};
use crate::application::rank_news::RankNewsUseCase;
use crate::application::rank_stocks::RankStocksUseCase;
use crate::config::Settings;
use crate::domain::entities::news_item::RankedNewsItem;
use crate::domain::entities::ranked::Ranked;
use crate::domain::entities::report::Report;
use crate::domain::entities::stock_item::RankedStockItem;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::translator::Translator;
use crate::domain::values::category::Category;
use crate::domain::values::lexicon::Lexicon;
use crate::domain::values::source_config::SourceConfig;
use crate::infrastructure::feeds::rss::RssSource;
use crate::infrastructure::market::yahoo::YahooMarketData;
use crate::infrastructure::notify::telegram::TelegramNotifier;
use crate::infrastructure::translate::google::GoogleTranslator;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Adapters behind the ports. `notifier` is `None` when no chat channel
/// is configured.
pub struct Providers {
    pub news: Arc<dyn NewsSource>,
    pub market: Arc<dyn MarketData>,
    pub translator: Arc<dyn Translator>,
    pub notifier: Option<Arc<dyn Notifier>>,
}

pub struct DailyInsight {
    settings: Settings,
    news_uc: RankNewsUseCase,
    stocks_uc: RankStocksUseCase,
    assemble_uc: AssembleReportUseCase,
    deliver_uc: DeliverUseCase,
}

/// What a full fetch → rank → assemble → deliver run produced.
#[derive(Debug, Serialize)]
pub struct JobOutcome {
    pub delivery: DeliveryOutcome,
    pub message: String,
    pub warnings: Vec<String>,
}

impl DailyInsight {
    /// Live adapters, standard sources and lexicon.
    pub fn new(settings: Settings) -> Self {
        let notifier: Option<Arc<dyn Notifier>> = settings.telegram.as_ref().map(|creds| {
            Arc::new(TelegramNotifier::new(
                creds.bot_token.clone(),
                creds.chat_id.clone(),
            )) as Arc<dyn Notifier>
        });

        Self::with_providers(
            settings,
            SourceConfig::standard(),
            Lexicon::default(),
            Providers {
                news: Arc::new(RssSource::new()),
                market: Arc::new(YahooMarketData::new()),
                translator: Arc::new(GoogleTranslator::new()),
                notifier,
            },
        )
    }

    pub fn with_providers(
        settings: Settings,
        sources: SourceConfig,
        lexicon: Lexicon,
        providers: Providers,
    ) -> Self {
        let sources = Arc::new(sources);
        Self {
            settings,
            news_uc: RankNewsUseCase::new(providers.news, sources.clone(), Arc::new(lexicon)),
            stocks_uc: RankStocksUseCase::new(providers.market, sources),
            assemble_uc: AssembleReportUseCase::new(providers.translator),
            deliver_uc: DeliverUseCase::new(providers.notifier),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn news(&self, category: Category, limit: usize) -> Ranked<RankedNewsItem> {
        self.news_uc.execute(category, limit).await
    }

    pub async fn stocks(&self, category: Category, limit: usize) -> Ranked<RankedStockItem> {
        self.stocks_uc.execute(category, limit).await
    }

    /// Fetch and rank both domains for both categories. The four pipelines
    /// run concurrently; nothing outside the returned report is touched.
    pub async fn produce_report(&self, limit: usize) -> Report {
        let (world_news, malaysia_news, world_stocks, malaysia_stocks) = tokio::join!(
            self.news(Category::World, limit),
            self.news(Category::Malaysia, limit),
            self.stocks(Category::World, limit),
            self.stocks(Category::Malaysia, limit),
        );

        Report {
            generated_at: Utc::now(),
            limit,
            world_news,
            malaysia_news,
            world_stocks,
            malaysia_stocks,
        }
    }

    pub async fn format_report(&self, report: &Report, style: &MessageStyle) -> String {
        self.assemble_uc.execute(report, style).await
    }

    pub async fn deliver(&self, message: &str) -> Result<DeliveryOutcome, DomainError> {
        Ok(self.deliver_uc.execute(message).await?)
    }

    /// One complete run. A delivery failure is returned as `Err`; the
    /// caller decides whether that is fatal.
    pub async fn run_job(&self, style: &MessageStyle) -> Result<JobOutcome, DomainError> {
        info!("Starting daily insight job");
        let report = self.produce_report(self.settings.limit).await;
        let warnings = report.warnings();
        if report.is_empty() {
            info!("Every source came back empty");
        }

        let message = self.format_report(&report, style).await;
        let delivery = self.deliver(&message).await?;

        Ok(JobOutcome {
            delivery,
            message,
            warnings,
        })
    }
}
