//! Single-page analysis: validate, fetch, parse, extract.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::app::validate_and_normalize_url;
use crate::error_handling::{AnalyzeError, FetchError, ProcessingStats, WarningType};
use crate::fetch::PageFetcher;
use crate::models::MetricReport;
use crate::parse::{extract_metrics, parse_document};

/// Produces a `MetricReport` for one URL at a time.
///
/// Holds the fetcher, the per-fetch timeout and the statistics shared by all
/// analyses of a run. Cloning is cheap; clones share the same fetcher and counters.
#[derive(Clone)]
pub struct PageAnalyzer {
    fetcher: Arc<dyn PageFetcher>,
    timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl PageAnalyzer {
    pub fn new(fetcher: Arc<dyn PageFetcher>, timeout: Duration) -> Self {
        Self {
            fetcher,
            timeout,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Records errors and warnings into `stats` instead of a private tracker.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Analyzes the page at `url`.
    ///
    /// The input is trimmed and `https://` is assumed when no scheme is given.
    /// The fetch is bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzeError` naming the URL when validation, retrieval or
    /// parsing fails. No partial report is produced.
    pub async fn analyze(&self, url: &str) -> Result<MetricReport, AnalyzeError> {
        match self.try_analyze(url).await {
            Ok(report) => {
                self.record_warnings(&report);
                info!(
                    "Analyzed {}: {} words, {} links, {} images",
                    report.url,
                    report.content.word_count,
                    report.links.link_count,
                    report.images.img_count
                );
                Ok(report)
            }
            Err(e) => {
                let error_type = e.cause.error_type();
                self.stats.increment_error(error_type);
                warn!("Failed to analyze {} ({error_type}): {}", e.url, e.cause);
                Err(e)
            }
        }
    }

    async fn try_analyze(&self, url: &str) -> Result<MetricReport, AnalyzeError> {
        let target =
            validate_and_normalize_url(url).map_err(|e| AnalyzeError::new(url.trim(), e))?;
        debug!("Normalized {url:?} to {target}");

        let page = tokio::time::timeout(self.timeout, self.fetcher.fetch(&target))
            .await
            .map_err(|_| {
                AnalyzeError::new(
                    target.as_str(),
                    FetchError::Timeout {
                        seconds: self.timeout.as_secs(),
                    },
                )
            })?
            .map_err(|e| AnalyzeError::new(target.as_str(), e))?;

        let header_charset = page.header_charset();
        let document = parse_document(&page.body, page.content_type.as_deref())
            .map_err(|e| AnalyzeError::new(page.final_url.as_str(), e))?;

        Ok(extract_metrics(
            &document,
            &page.body,
            &page.final_url,
            header_charset.as_deref(),
        ))
    }

    fn record_warnings(&self, report: &MetricReport) {
        let identity = &report.identity;
        let missing = [
            (identity.title.is_empty(), WarningType::MissingTitle),
            (
                identity.description.is_empty(),
                WarningType::MissingMetaDescription,
            ),
            (identity.keywords.is_empty(), WarningType::MissingMetaKeywords),
            (
                !report.accessibility.has_lang_attribute,
                WarningType::MissingLangAttribute,
            ),
        ];
        for (is_missing, warning) in missing {
            if !is_missing {
                continue;
            }
            match warning {
                WarningType::MissingTitle | WarningType::MissingMetaDescription => {
                    warn!("{}: {}", report.url, warning.as_str())
                }
                _ => debug!("{}: {}", report.url, warning.as_str()),
            }
            self.stats.increment_warning(warning);
        }
    }
}
