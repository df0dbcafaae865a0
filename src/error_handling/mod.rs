//! Error handling and processing statistics.
//!
//! This module provides:
//! - Failure kinds of a page analysis (`ValidationError`, `FetchError`, `ParseError`)
//! - The `AnalyzeError` wrapper that collapses them into "page not analyzable"
//! - Error/warning categories and thread-safe counters
//! - Categorization of `reqwest` errors
//!
//! Categories are split into:
//! - **Errors**: Failures that prevent a report from being produced
//! - **Warnings**: Missing optional data that doesn't prevent a report

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{
    AnalyzeError, ErrorType, FailureCause, FetchError, InitializationError, ParseError,
    ValidationError, WarningType,
};
