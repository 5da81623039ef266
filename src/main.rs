//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing error reporting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_tracker::app::run;
use site_tracker::initialization::init_logger_with;
use site_tracker::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting SITE_TRACKER_DATA_DIR without exporting it manually
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("site_tracker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
