//! Stock movers: day-over-day percent change from the last two valid
//! closes, ranked by magnitude.

use crate::domain::entities::ranked::Ranked;
use crate::domain::entities::stock_item::{RankedStockItem, RawStockSample};
use crate::domain::error::MoverError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::category::Category;
use crate::domain::values::source_config::SourceConfig;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sessions requested per ticker; wide enough to span weekends and holidays.
pub const TRAILING_WINDOW_DAYS: u32 = 5;

pub struct RankStocksUseCase {
    market: Arc<dyn MarketData>,
    sources: Arc<SourceConfig>,
}

impl RankStocksUseCase {
    pub fn new(market: Arc<dyn MarketData>, sources: Arc<SourceConfig>) -> Self {
        Self { market, sources }
    }

    pub async fn execute(&self, category: Category, limit: usize) -> Ranked<RankedStockItem> {
        let tickers = self.sources.tickers(category);
        if tickers.is_empty() {
            return Ranked::empty();
        }

        info!(%category, tickers = tickers.len(), "Fetching stocks");

        let mut series = match self
            .market
            .closing_prices(tickers, TRAILING_WINDOW_DAYS)
            .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(%category, error = %e, "Market data download failed");
                return Ranked::new(vec![], vec![format!("market data unavailable: {e}")]);
            }
        };

        let mut warnings = Vec::new();
        let mut samples = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            match series.remove(ticker) {
                Some(closes) => samples.push(RawStockSample::new(ticker.clone(), closes)),
                None => warnings.push(format!("{ticker}: no data returned")),
            }
        }

        let (items, skipped) = rank_samples(samples, limit);
        warnings.extend(skipped);
        info!(%category, ranked = items.len(), "Stocks ranked");
        Ranked::new(items, warnings)
    }
}

/// Compute the day-over-day move for one ticker.
///
/// `Ok(None)` when fewer than two valid closes exist. `Err` when the
/// previous close is zero or the result is not finite.
pub fn compute_mover(sample: &RawStockSample) -> Result<Option<RankedStockItem>, MoverError> {
    let closes = sample.valid_closes();
    let (prev, last) = match closes.as_slice() {
        [.., prev, last] => (*prev, *last),
        _ => return Ok(None),
    };

    if prev == 0.0 {
        return Err(MoverError::ZeroPrevious {
            ticker: sample.ticker.clone(),
        });
    }

    let change = last - prev;
    let pct_change = change / prev * 100.0;
    if !pct_change.is_finite() {
        return Err(MoverError::NonFinite {
            ticker: sample.ticker.clone(),
        });
    }

    Ok(Some(RankedStockItem {
        ticker: sample.ticker.clone(),
        price: last,
        change,
        pct_change,
    }))
}

/// Rank samples by absolute percent change, descending, and keep `limit`.
/// Returns the movers plus a warning for every ticker that errored.
pub fn rank_samples(
    samples: impl IntoIterator<Item = RawStockSample>,
    limit: usize,
) -> (Vec<RankedStockItem>, Vec<String>) {
    let mut movers = Vec::new();
    let mut warnings = Vec::new();

    for sample in samples {
        match compute_mover(&sample) {
            Ok(Some(item)) => movers.push(item),
            Ok(None) => debug!(ticker = %sample.ticker, "Fewer than two closes, skipped"),
            Err(e) => {
                warn!(error = %e, "Skipping ticker");
                warnings.push(e.to_string());
            }
        }
    }

    movers.sort_by(|a, b| {
        b.abs_change()
            .partial_cmp(&a.abs_change())
            .unwrap_or(Ordering::Equal)
    });
    movers.truncate(limit);
    (movers, warnings)
}
