use crate::domain::error::SourceError;
use crate::domain::ports::market_data::{MarketData, PriceSeries};
use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Daily closes from the Yahoo Finance v8 chart API (no auth required).
pub struct YahooMarketData {
    base_url: String,
    client: reqwest::Client,
}

impl YahooMarketData {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Debug, serde::Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[async_trait]
impl MarketData for YahooMarketData {
    async fn closing_prices(
        &self,
        tickers: &[String],
        window_days: u32,
    ) -> Result<PriceSeries, SourceError> {
        if tickers.is_empty() {
            return Ok(PriceSeries::new());
        }

        let results = join_all(
            tickers
                .iter()
                .map(|ticker| self.fetch_closes(ticker, window_days)),
        )
        .await;

        let mut series = PriceSeries::new();
        let mut last_error = None;
        for (ticker, result) in tickers.iter().zip(results) {
            match result {
                Ok(closes) => {
                    series.insert(ticker.clone(), closes);
                }
                Err(e) => {
                    warn!(ticker = %ticker, error = %e, "Failed to fetch closes");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if series.is_empty() => Err(e),
            _ => Ok(series),
        }
    }
}

impl YahooMarketData {
    async fn fetch_closes(
        &self,
        ticker: &str,
        window_days: u32,
    ) -> Result<Vec<Option<f64>>, SourceError> {
        let url = format!("{}/v8/finance/chart/{ticker}", self.base_url);
        let range = format!("{window_days}d");

        let resp = self
            .client
            .get(&url)
            .query(&[("range", range.as_str()), ("interval", "1d")])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                status: resp.status().as_u16(),
                target: ticker.to_string(),
            });
        }

        let data: ChartEnvelope = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        parse_chart(data, ticker)
    }
}

fn parse_chart(data: ChartEnvelope, ticker: &str) -> Result<Vec<Option<f64>>, SourceError> {
    if let Some(err) = data.chart.error {
        return Err(SourceError::Parse(format!("Yahoo error for {ticker}: {err}")));
    }

    let result = data
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| SourceError::Parse(format!("No chart results for {ticker}")))?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    debug!(ticker, sessions = closes.len(), "Parsed chart");
    Ok(closes)
}
