//! Chat report assembly. Markdown text for Telegram, optionally bilingual.

use crate::domain::entities::news_item::RankedNewsItem;
use crate::domain::entities::report::Report;
use crate::domain::entities::stock_item::RankedStockItem;
use crate::domain::ports::translator::Translator;
use crate::domain::values::category::Category;
use futures::future::join_all;
use std::sync::Arc;

/// Summaries are cut to this many characters before translation.
pub const SUMMARY_TRANSLATION_LIMIT: usize = 500;

const HEADER: &str = "🌍 *DAILY INSIGHT REPORT* 🇲🇾";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Plain,
    Bilingual {
        target: String,
        translate_summaries: bool,
    },
}

/// Translations for one news item, aligned with the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsTranslation {
    pub title: String,
    pub summary: Option<String>,
}

pub struct AssembleReportUseCase {
    translator: Arc<dyn Translator>,
}

impl AssembleReportUseCase {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub async fn execute(&self, report: &Report, style: &MessageStyle) -> String {
        match style {
            MessageStyle::Plain => format_message(report),
            MessageStyle::Bilingual {
                target,
                translate_summaries,
            } => {
                let world = self
                    .translate_items(&report.world_news.items, target, *translate_summaries)
                    .await;
                let malaysia = self
                    .translate_items(&report.malaysia_news.items, target, *translate_summaries)
                    .await;
                format_bilingual_message(report, target, &world, &malaysia)
            }
        }
    }

    async fn translate_items(
        &self,
        items: &[RankedNewsItem],
        target: &str,
        translate_summaries: bool,
    ) -> Vec<NewsTranslation> {
        join_all(items.iter().map(|item| async move {
            let title = self.translator.translate(&item.title, target).await;
            let summary = if translate_summaries && !item.summary.is_empty() {
                let clipped: String = item.summary.chars().take(SUMMARY_TRANSLATION_LIMIT).collect();
                Some(self.translator.translate(&clipped, target).await)
            } else {
                None
            };
            NewsTranslation { title, summary }
        }))
        .await
    }
}

/// Single-language report.
pub fn format_message(report: &Report) -> String {
    let mut parts = vec![format!("{HEADER}\n")];
    for cat in Category::ALL {
        if let Some(s) = news_section(cat, report.limit, &report.news(cat).items, &[]) {
            parts.push(s);
        }
    }
    for cat in Category::ALL {
        if let Some(s) = stock_section(cat, report.limit, &report.stocks(cat).items) {
            parts.push(s);
        }
    }
    parts.join("\n")
}

/// Report with each headline followed by its translation. `world` and
/// `malaysia` line up with the report's news lists; missing entries fall
/// back to the original line only.
pub fn format_bilingual_message(
    report: &Report,
    target: &str,
    world: &[NewsTranslation],
    malaysia: &[NewsTranslation],
) -> String {
    let mut parts = vec![format!("{HEADER}\n🗣 English / {target}\n")];
    for (cat, translations) in [(Category::World, world), (Category::Malaysia, malaysia)] {
        if let Some(s) = news_section(cat, report.limit, &report.news(cat).items, translations) {
            parts.push(s);
        }
    }
    for cat in Category::ALL {
        if let Some(s) = stock_section(cat, report.limit, &report.stocks(cat).items) {
            parts.push(s);
        }
    }
    parts.join("\n")
}

fn news_section(
    category: Category,
    limit: usize,
    items: &[RankedNewsItem],
    translations: &[NewsTranslation],
) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut s = format!("📰 *TOP {limit} {} NEWS*\n", category.label());
    for (i, item) in items.iter().enumerate() {
        s.push_str(&format!(
            "{}. [{}]({}) - _{}_\n",
            i + 1,
            strip_markdown(&item.title),
            item.link,
            strip_markdown(&item.source)
        ));
        if let Some(t) = translations.get(i) {
            if !t.title.is_empty() && t.title != item.title {
                s.push_str(&format!("   ↳ {}\n", strip_markdown(&t.title)));
            }
            if let Some(summary) = t.summary.as_deref().filter(|s| !s.is_empty()) {
                s.push_str(&format!("   {}\n", strip_markdown(summary)));
            }
        }
    }
    Some(s)
}

fn stock_section(category: Category, limit: usize, items: &[RankedStockItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut s = format!("📈 *TOP {limit} {} STOCKS (Movers)*\n", category.label());
    for (i, stock) in items.iter().enumerate() {
        s.push_str(&format!("{}. {}\n", i + 1, stock_line(stock)));
    }
    Some(s)
}

/// `TICKER: 12.00 (🟢 +20.00%)`
pub fn stock_line(stock: &RankedStockItem) -> String {
    let marker = if stock.is_up() { "🟢" } else { "🔴" };
    format!(
        "{}: {:.2} ({marker} {:+.2}%)",
        stock.ticker, stock.price, stock.pct_change
    )
}

/// Telegram legacy Markdown has no escaping; drop the emphasis markers.
fn strip_markdown(text: &str) -> String {
    text.replace('*', "").replace('_', "")
}
