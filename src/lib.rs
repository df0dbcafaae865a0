//! seo_probe library: on-page SEO analysis
//!
//! This library fetches a web page and extracts a fixed set of on-page SEO
//! signals (meta tags, heading structure, link and image statistics, social
//! tags, security meta tags, structured data markers, accessibility hints)
//! into a flat `MetricReport`, optionally alongside a competitor page.
//!
//! # Example
//!
//! ```no_run
//! use seo_probe::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     competitor: Some("example.org".to_string()),
//!     ..Default::default()
//! };
//!
//! let outcome = run_analysis(&config).await?;
//! println!("{} has {} words", outcome.primary.url, outcome.primary.content.word_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod analyzer;
mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod render;
mod utils;

// Re-export public API
pub use analyzer::PageAnalyzer;
pub use app::validate_and_normalize_url;
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    AnalyzeError, ErrorType, FailureCause, FetchError, InitializationError, ParseError,
    ProcessingStats, ValidationError, WarningType,
};
pub use models::{
    AccessibilityMetrics, ContentMetrics, Headings, Identity, ImageMetrics, LinkMetrics,
    MetricReport, MobileMetrics, PerformanceHints, SecurityMetrics, SocialMetrics,
    StructuredDataMetrics, TechnicalMetrics,
};
pub use run::{run_analysis, run_analysis_with, AnalysisOutcome};

// Internal run module (primary + competitor orchestration)
mod run {
    use anyhow::{Context, Result};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use log::{info, warn};

    use crate::analyzer::PageAnalyzer;
    use crate::app::{print_error_statistics, print_simple_summary};
    use crate::config::Config;
    use crate::error_handling::{AnalyzeError, ProcessingStats};
    use crate::fetch::{fetcher_from_config, PageFetcher};
    use crate::initialization::init_client;
    use crate::models::MetricReport;

    /// Results of one run.
    #[derive(Debug)]
    pub struct AnalysisOutcome {
        /// Report for the primary URL
        pub primary: MetricReport,
        /// Competitor result, `None` when no competitor URL was given
        pub competitor: Option<Result<MetricReport, AnalyzeError>>,
    }

    /// Analyzes the configured primary URL and, if given, the competitor URL.
    ///
    /// Builds the HTTP client and fetcher from `config`, then delegates to
    /// `run_analysis_with`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be created, or the primary page cannot be analyzed.
    pub async fn run_analysis(config: &Config) -> Result<AnalysisOutcome> {
        config.validate()?;
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let fetcher = fetcher_from_config(config, client);
        run_analysis_with(config, fetcher).await
    }

    /// Analyzes the configured URLs with an explicit fetcher.
    ///
    /// The primary page is analyzed first. If it fails, the run fails with the
    /// `AnalyzeError` as its root cause and the competitor is never fetched. A
    /// competitor failure is kept in the outcome and does not fail the run.
    ///
    /// # Errors
    ///
    /// Returns an error wrapping `AnalyzeError` when the primary page cannot
    /// be analyzed.
    pub async fn run_analysis_with(
        config: &Config,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<AnalysisOutcome> {
        let start_time = Instant::now();
        let stats = Arc::new(ProcessingStats::new());
        let analyzer = PageAnalyzer::new(fetcher, Duration::from_secs(config.timeout_seconds))
            .with_stats(Arc::clone(&stats));

        // A blank competitor means none was requested
        let competitor_url = config
            .competitor
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        info!("Analyzing {}", config.url.trim());
        let primary = match analyzer.analyze(&config.url).await {
            Ok(report) => report,
            Err(e) => {
                print_error_statistics(&stats);
                if competitor_url.is_some() {
                    warn!("Skipping competitor analysis because the primary page failed");
                }
                return Err(e.into());
            }
        };

        let competitor = match competitor_url {
            Some(url) => {
                info!("Analyzing competitor {url}");
                Some(analyzer.analyze(url).await)
            }
            None => None,
        };

        let failed = usize::from(matches!(competitor, Some(Err(_))));
        let analyzed = 1 + usize::from(competitor.is_some());
        print_error_statistics(&stats);
        print_simple_summary(analyzed, failed, start_time.elapsed().as_secs_f64());

        Ok(AnalysisOutcome {
            primary,
            competitor,
        })
    }
}
