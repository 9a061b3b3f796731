mod app;
mod booking;
mod config;
mod models;
mod roster;
mod tui;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::AppConfig;

/// Browse the artist roster, filter by genre, location and budget, and draft booking inquiries.
#[derive(Parser)]
#[command(name = "stagebook")]
struct Args {
    /// JSON roster to load instead of the bundled one.
    #[arg(long, env = "STAGEBOOK_ROSTER")]
    roster: Option<PathBuf>,

    /// Directory for the diagnostic log.
    #[arg(long, default_value = "data", env = "STAGEBOOK_DATA_DIR")]
    data_dir: PathBuf,

    /// Initial budget ceiling; defaults to the highest rate on the roster.
    #[arg(long)]
    budget: Option<u32>,

    /// Currency symbol used when displaying rates.
    #[arg(long, default_value = "$")]
    currency: String,
}

fn configure_logging(config: &AppConfig) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .with_context(|| format!("Failed to open log file {}", config.log_path().display()))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal belongs to the TUI, so everything goes to the file.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(args.data_dir, args.roster, args.budget, args.currency);
    config.ensure_filesystem()?;
    configure_logging(&config)?;

    info!(roster = ?config.roster_path(), "stagebook starting");

    let (msg_tx, msg_rx) = tokio::sync::mpsc::unbounded_channel();
    let controller = tui::AppController::new(config, msg_tx);

    let app = tui::App::new(controller, msg_rx);
    tui::run(app).await
}
