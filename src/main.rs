use clap::Parser;
use daily_insight::application::assemble::MessageStyle;
use daily_insight::application::dashboard::{render, write_dashboard, DashboardFormat};
use daily_insight::application::deliver::DeliveryOutcome;
use daily_insight::application::schedule::run_daily;
use daily_insight::cli::commands::{Cli, Commands};
use daily_insight::config::{parse_time, parse_timezone, Settings};
use daily_insight::domain::values::category::Category;
use daily_insight::DailyInsight;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daily_insight=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = DailyInsight::new(settings);
    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: DailyInsight, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::News { category, limit } => {
            let cat: Category = category.parse().map_err(|e: String| e)?;
            let ranked = app.news(cat, limit.unwrap_or(app.settings().limit)).await;
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Commands::Stocks { category, limit } => {
            let cat: Category = category.parse().map_err(|e: String| e)?;
            let ranked = app.stocks(cat, limit.unwrap_or(app.settings().limit)).await;
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Commands::Report {
            bilingual,
            lang,
            summaries,
            limit,
        } => {
            let style = if bilingual {
                bilingual_style(&app, lang, summaries)
            } else {
                MessageStyle::Plain
            };
            let report = app.produce_report(limit.unwrap_or(app.settings().limit)).await;
            for w in report.warnings() {
                warn!("{w}");
            }
            println!("{}", app.format_report(&report, &style).await);
        }
        Commands::RunOnce {
            plain,
            lang,
            summaries,
        } => {
            let style = if plain {
                MessageStyle::Plain
            } else {
                bilingual_style(&app, lang, summaries)
            };
            // A failed send propagates and exits non-zero.
            let outcome = app.run_job(&style).await?;
            report_outcome(&outcome);
        }
        Commands::Schedule {
            at,
            tz,
            skip_initial,
        } => {
            let at = match at {
                Some(s) => parse_time(&s)?,
                None => app.settings().schedule_at,
            };
            let tz = match tz {
                Some(s) => parse_timezone(&s)?,
                None => app.settings().timezone,
            };
            info!(at = %at.format("%H:%M"), timezone = %tz, "Scheduler started");

            if !skip_initial {
                scheduled_job(&app).await;
            }
            let app = &app;
            run_daily(at, tz, move || scheduled_job(app)).await;
        }
        Commands::Dashboard { out, json, limit } => {
            let report = app.produce_report(limit.unwrap_or(app.settings().limit)).await;
            let format = if json {
                DashboardFormat::Json
            } else {
                DashboardFormat::Html
            };
            match out {
                Some(path) => write_dashboard(&report, format, &path)?,
                None => println!("{}", render(&report, format)?),
            }
        }
    }
    Ok(())
}

fn bilingual_style(app: &DailyInsight, lang: Option<String>, summaries: bool) -> MessageStyle {
    MessageStyle::Bilingual {
        target: lang.unwrap_or_else(|| app.settings().language.clone()),
        translate_summaries: summaries,
    }
}

/// Scheduler job: failures are logged and the loop waits for the next day.
async fn scheduled_job(app: &DailyInsight) {
    match app.run_job(&MessageStyle::Plain).await {
        Ok(outcome) => report_outcome(&outcome),
        Err(e) => error!(error = %e, "Scheduled run failed, retrying at next slot"),
    }
}

fn report_outcome(outcome: &daily_insight::JobOutcome) {
    for w in &outcome.warnings {
        warn!("{w}");
    }
    match outcome.delivery {
        DeliveryOutcome::Sent => info!("Report sent successfully"),
        DeliveryOutcome::NoChannel => {
            info!("Telegram credentials missing, printing report to console");
            println!("{}", outcome.message);
        }
    }
}
