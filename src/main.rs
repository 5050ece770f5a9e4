#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use fsmbti::cli::Cli;
use fsmbti::{Config, app};
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// `FSMBTI_LOG` (`error`..`trace`), defaulting to `warn` so prompts stay clean.
fn log_level() -> Level {
    std::env::var("FSMBTI_LOG")
        .ok()
        .and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(Level::WARN)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Both ring and aws-lc-rs end up linked; pick one explicitly for the QR download.
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        eprintln!("Warning: Failed to install default crypto provider: {e:?}");
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cli = Cli::parse();
    let config = Config::load_or_init()?;
    app::dispatch::dispatch(cli, config).await
}
