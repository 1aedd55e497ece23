pub mod market_data;
pub mod news_source;
pub mod notifier;
pub mod translator;
