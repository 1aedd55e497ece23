use serde::{Deserialize, Serialize};

/// Closing prices for one ticker over the trailing window, oldest first.
/// `None` marks a session with no data.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStockSample {
    pub ticker: String,
    pub closes: Vec<Option<f64>>,
}

impl RawStockSample {
    pub fn new(ticker: impl Into<String>, closes: Vec<Option<f64>>) -> Self {
        Self {
            ticker: ticker.into(),
            closes,
        }
    }

    /// Closes with missing and NaN sessions removed, order kept.
    pub fn valid_closes(&self) -> Vec<f64> {
        self.closes
            .iter()
            .filter_map(|c| *c)
            .filter(|c| c.is_finite())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStockItem {
    pub ticker: String,
    pub price: f64,
    pub change: f64,
    pub pct_change: f64,
}

impl RankedStockItem {
    /// Sort key for movers.
    pub fn abs_change(&self) -> f64 {
        self.pct_change.abs()
    }

    pub fn is_up(&self) -> bool {
        self.pct_change >= 0.0
    }
}
