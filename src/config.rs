//! Runtime settings read from the environment.

use crate::domain::error::DomainError;
use chrono::NaiveTime;
use chrono_tz::Tz;
use std::num::NonZeroUsize;

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_LANGUAGE: &str = "zh-CN";
pub const DEFAULT_TIME: &str = "08:30";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kuala_Lumpur";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` when either token or chat id is unset.
    pub telegram: Option<TelegramCredentials>,
    pub limit: usize,
    /// Target language for the bilingual report.
    pub language: String,
    pub schedule_at: NaiveTime,
    pub timezone: Tz,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(get: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram = match (get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramCredentials { bot_token, chat_id }),
            _ => None,
        };

        let limit = match get("DAILY_INSIGHT_LIMIT") {
            Some(v) => v.parse::<NonZeroUsize>().map(NonZeroUsize::get).map_err(|_| {
                DomainError::Config(format!("DAILY_INSIGHT_LIMIT must be a positive integer, got {v}"))
            })?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            telegram,
            limit,
            language: get("DAILY_INSIGHT_LANG").unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
            schedule_at: parse_time(&get("DAILY_INSIGHT_TIME").unwrap_or_else(|| DEFAULT_TIME.into()))?,
            timezone: parse_timezone(
                &get("DAILY_INSIGHT_TZ").unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
            )?,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            telegram: None,
            limit: DEFAULT_LIMIT,
            language: DEFAULT_LANGUAGE.into(),
            schedule_at: NaiveTime::from_hms_opt(8, 30, 0).unwrap_or_default(),
            timezone: chrono_tz::Asia::Kuala_Lumpur,
        }
    }
}

/// Parse `HH:MM` (24h).
pub fn parse_time(s: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| DomainError::Config(format!("Invalid time: {s}. Use HH:MM (24h)")))
}

pub fn parse_timezone(s: &str) -> Result<Tz, DomainError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::Config(format!("Unknown timezone: {s}")))
}
