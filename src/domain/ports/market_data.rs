use crate::domain::error::SourceError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Per-ticker closing prices, oldest first, `None` for missing sessions.
pub type PriceSeries = HashMap<String, Vec<Option<f64>>>;

/// Market-data client.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch a trailing window of daily closes for every ticker in one batch.
    ///
    /// Tickers the provider could not serve are absent from the map. `Err`
    /// means the batch as a whole failed.
    async fn closing_prices(
        &self,
        tickers: &[String],
        window_days: u32,
    ) -> Result<PriceSeries, SourceError>;
}
