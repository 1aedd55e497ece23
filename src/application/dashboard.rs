//! Static HTML dashboard: world on the left, Malaysia on the right.

use crate::domain::entities::news_item::RankedNewsItem;
use crate::domain::entities::report::Report;
use crate::domain::entities::stock_item::RankedStockItem;
use crate::domain::error::DomainError;
use crate::domain::values::category::Category;
use askama::Template;
use std::path::Path;
use tracing::info;

pub const DATA_SOURCES: &str =
    "Data sources: Yahoo Finance, RSS Feeds (BBC, CNN, CNBC, The Star, Malay Mail, Bernama)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFormat {
    Html,
    /// The raw report, for other front ends.
    Json,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    generated: String,
    columns: Vec<Column<'a>>,
    data_sources: &'a str,
}

struct Column<'a> {
    name: &'static str,
    news: &'a [RankedNewsItem],
    stocks: &'a [RankedStockItem],
}

pub fn render_dashboard(report: &Report) -> Result<String, DomainError> {
    let page = DashboardPage {
        generated: report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        columns: Category::ALL
            .into_iter()
            .map(|cat| Column {
                name: cat.display_name(),
                news: &report.news(cat).items,
                stocks: &report.stocks(cat).items,
            })
            .collect(),
        data_sources: DATA_SOURCES,
    };
    page.render().map_err(|e| DomainError::Render(e.to_string()))
}

pub fn render(report: &Report, format: DashboardFormat) -> Result<String, DomainError> {
    match format {
        DashboardFormat::Html => render_dashboard(report),
        DashboardFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| DomainError::Render(e.to_string()))
        }
    }
}

/// Render and write the dashboard, replacing any existing file.
pub fn write_dashboard(
    report: &Report,
    format: DashboardFormat,
    path: &Path,
) -> Result<(), DomainError> {
    let rendered = render(report, format)?;
    std::fs::write(path, rendered)
        .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "Dashboard written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ranked::Ranked;
    use chrono::Utc;

    fn empty_report() -> Report {
        Report {
            generated_at: Utc::now(),
            limit: 5,
            world_news: Ranked::empty(),
            malaysia_news: Ranked::empty(),
            world_stocks: Ranked::empty(),
            malaysia_stocks: Ranked::empty(),
        }
    }

    #[test]
    fn test_empty_lists_show_error_panels() {
        let html = render_dashboard(&empty_report()).unwrap();
        assert_eq!(html.matches("Failed to fetch stock data").count(), 2);
        assert_eq!(html.matches("No news available").count(), 2);
    }

    #[test]
    fn test_items_are_escaped() {
        let mut report = empty_report();
        report.world_news = Ranked::new(
            vec![RankedNewsItem {
                title: "<script>alert(1)</script>".into(),
                link: "https://e.com/?a=1&b=2".into(),
                summary: "Tom & Jerry".into(),
                source: "BBC".into(),
                published: "Unknown Date".into(),
                score: 15,
            }],
            vec![],
        );
        let html = render_dashboard(&report).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("href=\"https://e.com/?a=1&amp;b=2\""));
        assert!(html.contains("Source: BBC | Score: 15"));
    }

    #[test]
    fn test_stock_table_formatting() {
        let mut report = empty_report();
        report.malaysia_stocks = Ranked::new(
            vec![RankedStockItem {
                ticker: "1155.KL".into(),
                price: 9.876,
                change: -0.1,
                pct_change: -1.25,
            }],
            vec![],
        );
        let html = render_dashboard(&report).unwrap();
        assert!(html.contains("<td>1155.KL</td><td>9.88</td><td class=\"down\">-1.25%</td>"));
        assert_eq!(html.matches("Failed to fetch stock data").count(), 1);
    }
}
