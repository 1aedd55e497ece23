use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "daily-insight",
    about = "Ranked world and Malaysia news headlines and stock movers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank headlines for one category and print them as JSON
    News {
        /// Category (world, malaysia)
        category: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rank stock movers for one category and print them as JSON
    Stocks {
        /// Category (world, malaysia)
        category: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Build the full report and print it without sending
    Report {
        /// Interleave translated headlines
        #[arg(long)]
        bilingual: bool,
        /// Target language for --bilingual (default: DAILY_INSIGHT_LANG or zh-CN)
        #[arg(long)]
        lang: Option<String>,
        /// Also translate summaries (first 500 characters)
        #[arg(long)]
        summaries: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch, format (bilingual) and deliver once; exits non-zero if sending fails
    RunOnce {
        /// Single-language report instead of bilingual
        #[arg(long)]
        plain: bool,
        #[arg(long)]
        lang: Option<String>,
        #[arg(long)]
        summaries: bool,
    },
    /// Run once now, then every day at a fixed local time
    Schedule {
        /// Local time of day, HH:MM (default: DAILY_INSIGHT_TIME or 08:30)
        #[arg(long)]
        at: Option<String>,
        /// IANA timezone (default: DAILY_INSIGHT_TZ or Asia/Kuala_Lumpur)
        #[arg(long)]
        tz: Option<String>,
        /// Do not run the job at startup
        #[arg(long)]
        skip_initial: bool,
    },
    /// Render the dashboard as HTML (or JSON)
    Dashboard {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
        /// Emit the raw report as JSON
        #[arg(long)]
        json: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
}
