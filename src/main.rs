//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_probe` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Rendering the results
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_probe::initialization::init_logger_with;
use seo_probe::render::{needs_competitor_notice, render};
use seo_probe::{run_analysis, AnalyzeError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists).
    // Try the current directory first, then the executable's directory.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("seo_probe error: {e}");
        process::exit(1);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_analysis(&config).await {
        Ok(outcome) => {
            if let Some(Err(e)) = &outcome.competitor {
                if needs_competitor_notice(config.format) {
                    eprintln!("⚠️  {}", e.user_message());
                }
            }
            if let Err(e) = render(&outcome, config.format, config.output.as_deref()) {
                eprintln!("seo_probe error: {e:#}");
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            match e.downcast_ref::<AnalyzeError>() {
                Some(analyze_error) => eprintln!("❌ {}", analyze_error.user_message()),
                None => eprintln!("seo_probe error: {e:#}"),
            }
            process::exit(1);
        }
    }
}
