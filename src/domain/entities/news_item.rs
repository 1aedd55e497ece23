use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed entry as the source adapter produced it, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawNewsEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub source: Option<String>,
    /// Publish date as shown to readers. The RSS adapter formats the parsed
    /// timestamp as RFC 2822; a date feed-rs could not parse leaves this `None`.
    pub published_label: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl RawNewsEntry {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Trimmed title; the value shown to readers.
    pub fn clean_title(&self) -> String {
        self.title.as_deref().unwrap_or("").trim().to_string()
    }

    /// Dedup key: lower-cased with whitespace runs collapsed.
    pub fn dedup_key(&self) -> String {
        normalize_title(self.title.as_deref().unwrap_or(""))
    }
}

pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedNewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub published: String,
    pub score: u32,
}

impl RankedNewsItem {
    /// Fill missing fields with the display defaults and attach a score.
    pub fn from_raw(raw: RawNewsEntry, score: u32) -> Self {
        let title = raw.clean_title();
        Self {
            title,
            link: raw.link.filter(|l| !l.is_empty()).unwrap_or_else(|| "#".into()),
            summary: raw.summary.unwrap_or_default(),
            source: raw.source.unwrap_or_else(|| "Unknown Source".into()),
            published: raw.published_label.unwrap_or_else(|| "Unknown Date".into()),
            score,
        }
    }
}
