//! Keyword lexicon for headline importance scoring.

use chrono::{DateTime, Duration, Utc};

pub const HIGH_WEIGHT: u32 = 10;
pub const MEDIUM_WEIGHT: u32 = 5;
pub const RECENCY_BONUS: u32 = 5;

const HIGH_KEYWORDS: &[&str] = &[
    "market", "economy", "crisis", "surge", "crash", "policy", "ban",
    "investment", "trade", "inflation", "gdp", "tax", "regulation",
    "merger", "acquisition", "war", "conflict", "election", "scandal",
    "profit", "loss", "record", "bank", "interest rate", "dividend",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "launch", "announce", "update", "report", "growth", "decline",
    "forecast", "trend", "sector", "industry", "technology", "development",
];

/// Two-tier keyword lexicon. Keywords are matched as lower-case substrings
/// and each one counts at most once per headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    high: Vec<String>,
    medium: Vec<String>,
    recency_window: Duration,
}

impl Lexicon {
    pub fn new(high: Vec<String>, medium: Vec<String>) -> Self {
        Self {
            high: high.into_iter().map(|k| k.to_lowercase()).collect(),
            medium: medium.into_iter().map(|k| k.to_lowercase()).collect(),
            recency_window: Duration::hours(24),
        }
    }

    pub fn high(&self) -> &[String] {
        &self.high
    }

    pub fn medium(&self) -> &[String] {
        &self.medium
    }

    /// `10 × high hits + 5 × medium hits + 5 if published within the
    /// recency window`. A missing timestamp earns no bonus.
    pub fn score(
        &self,
        title: &str,
        summary: &str,
        published: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> u32 {
        let text = format!("{title} {summary}").to_lowercase();

        let high_hits = self.high.iter().filter(|k| text.contains(k.as_str())).count() as u32;
        let medium_hits = self.medium.iter().filter(|k| text.contains(k.as_str())).count() as u32;

        let recent = published
            .map(|ts| now - ts < self.recency_window)
            .unwrap_or(false);

        high_hits * HIGH_WEIGHT
            + medium_hits * MEDIUM_WEIGHT
            + if recent { RECENCY_BONUS } else { 0 }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            HIGH_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            MEDIUM_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        )
    }
}
