//! End-to-end runs over stub adapters: fetch → rank → assemble → deliver.

mod common;

use common::*;
use daily_insight::application::assemble::{MessageStyle, SUMMARY_TRANSLATION_LIMIT};
use daily_insight::application::dashboard::{render_dashboard, write_dashboard, DashboardFormat};
use daily_insight::application::deliver::DeliveryOutcome;
use daily_insight::domain::entities::news_item::RawNewsEntry;
use daily_insight::domain::error::DomainError;
use daily_insight::domain::ports::notifier::Notifier;
use daily_insight::infrastructure::translate::noop::NoopTranslator;
use std::sync::Arc;

fn populated_news() -> StubNews {
    StubNews::default()
        .with_feed(WORLD_A, "BBC News", &["Oil surge rattles market", "Zoo welcomes panda"])
        .with_feed(WORLD_B, "CNN", &["Oil surge rattles market"])
        .with_feed(MY_A, "The Star", &["Bursa hits record high"])
}

fn populated_market() -> StubMarket {
    StubMarket::new(&[
        ("ABC", vec![Some(10.0), Some(12.0)]),
        ("DEF", vec![Some(100.0), Some(99.0)]),
        ("1155.KL", vec![Some(9.5), Some(9.3)]),
    ])
}

#[tokio::test]
async fn test_produce_report_fills_all_four_lists() {
    let app = setup_offline(populated_news(), populated_market());
    let report = app.produce_report(5).await;

    assert_eq!(report.world_news.len(), 2);
    assert_eq!(report.malaysia_news.len(), 1);
    assert_eq!(report.world_stocks.len(), 2);
    assert_eq!(report.malaysia_stocks.len(), 1);
    // XYZ is configured but absent from the batch
    assert_eq!(report.warnings(), vec!["world stocks: XYZ: no data returned".to_string()]);
}

#[tokio::test]
async fn test_everything_down_yields_empty_report() {
    let app = setup_offline(StubNews::default(), StubMarket::down());
    let report = app.produce_report(5).await;
    assert!(report.is_empty());
    assert_eq!(report.warnings().len(), 5);

    let message = app.format_report(&report, &MessageStyle::Plain).await;
    assert!(!message.contains("NEWS"));
    assert!(!message.contains("STOCKS"));

    let html = render_dashboard(&report).unwrap();
    assert_eq!(html.matches("Failed to fetch stock data").count(), 2);
}

#[tokio::test]
async fn test_plain_message() {
    let app = setup_offline(populated_news(), populated_market());
    let report = app.produce_report(5).await;
    let message = app.format_report(&report, &MessageStyle::Plain).await;

    assert!(message.contains(
        "📰 *TOP 5 WORLD NEWS*\n1. [Oil surge rattles market](#) - _BBC News_\n2. [Zoo welcomes panda](#) - _BBC News_\n"
    ));
    assert!(message.contains("📰 *TOP 5 MALAYSIA NEWS*\n1. [Bursa hits record high](#) - _The Star_\n"));
    assert!(message.contains("1. ABC: 12.00 (🟢 +20.00%)\n2. DEF: 99.00 (🔴 -1.00%)\n"));
    assert!(message.contains("1. 1155.KL: 9.30 (🔴 -2.11%)"));
}

#[tokio::test]
async fn test_bilingual_message_translates_news_only() {
    let translator = Arc::new(TaggingTranslator::default());
    let app = setup(populated_news(), populated_market(), translator.clone(), None);
    let report = app.produce_report(5).await;

    let style = MessageStyle::Bilingual {
        target: "zh-CN".into(),
        translate_summaries: false,
    };
    let message = app.format_report(&report, &style).await;

    assert!(message.contains("_BBC News_\n   ↳ [zh-CN] Oil surge rattles market\n"));
    assert!(message.contains("   ↳ [zh-CN] Bursa hits record high\n"));
    assert!(message.contains("1. ABC: 12.00 (🟢 +20.00%)"));

    let seen = translator.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|t| !t.contains("ABC")));
}

#[tokio::test]
async fn test_bilingual_summaries_are_clipped() {
    let mut entry = RawNewsEntry::titled("Long read");
    entry.summary = Some("é".repeat(SUMMARY_TRANSLATION_LIMIT + 100));
    let news = StubNews::default().with_entries(MY_A, "Malay Mail", vec![entry]);

    let translator = Arc::new(TaggingTranslator::default());
    let app = setup(news, StubMarket::down(), translator.clone(), None);
    let report = app.produce_report(5).await;

    let style = MessageStyle::Bilingual {
        target: "ms".into(),
        translate_summaries: true,
    };
    app.format_report(&report, &style).await;

    let seen = translator.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].chars().count(), SUMMARY_TRANSLATION_LIMIT);
}

#[tokio::test]
async fn test_run_job_without_channel_returns_message() {
    let app = setup_offline(populated_news(), populated_market());
    let outcome = app.run_job(&MessageStyle::Plain).await.unwrap();
    assert_eq!(outcome.delivery, DeliveryOutcome::NoChannel);
    assert!(outcome.message.contains("DAILY INSIGHT REPORT"));
}

#[tokio::test]
async fn test_run_job_sends_through_notifier() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = setup(
        populated_news(),
        populated_market(),
        Arc::new(NoopTranslator),
        Some(notifier.clone() as Arc<dyn Notifier>),
    );

    let outcome = app.run_job(&MessageStyle::Plain).await.unwrap();
    assert_eq!(outcome.delivery, DeliveryOutcome::Sent);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], outcome.message);
}

#[tokio::test]
async fn test_run_job_surfaces_delivery_failure() {
    let app = setup(
        populated_news(),
        populated_market(),
        Arc::new(NoopTranslator),
        Some(Arc::new(RecordingNotifier::failing()) as Arc<dyn Notifier>),
    );

    let err = app.run_job(&MessageStyle::Plain).await.unwrap_err();
    assert!(matches!(err, DomainError::Delivery(_)));
}

#[tokio::test]
async fn test_dashboard_written_to_file() {
    let app = setup_offline(populated_news(), populated_market());
    let report = app.produce_report(5).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.html");

    std::fs::write(&path, "stale").unwrap();
    write_dashboard(&report, DashboardFormat::Html, &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Oil surge rattles market"));
    assert!(html.contains("Bursa hits record high"));
    assert!(html.contains("<td>ABC</td><td>12.00</td><td class=\"up\">+20.00%</td>"));
    assert!(!html.contains("stale"));
}

#[tokio::test]
async fn test_dashboard_json_round_trips_report() {
    let app = setup_offline(populated_news(), populated_market());
    let report = app.produce_report(5).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    write_dashboard(&report, DashboardFormat::Json, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["limit"], 5);
    assert_eq!(value["world_news"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(value["malaysia_stocks"]["items"][0]["ticker"], "1155.KL");
}

#[tokio::test]
async fn test_dashboard_write_to_missing_dir_is_io_error() {
    let app = setup_offline(StubNews::default(), StubMarket::down());
    let report = app.produce_report(5).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dashboard.html");

    let err = write_dashboard(&report, DashboardFormat::Html, &path).unwrap_err();
    assert!(matches!(err, DomainError::Io(_)));
}
