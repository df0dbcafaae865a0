//! Application helpers.
//!
//! This module provides URL validation/normalization and end-of-run
//! statistics logging used by the run orchestration.

pub mod statistics;
pub mod url;

// Re-export public API
pub use statistics::{print_error_statistics, print_simple_summary};
pub use url::validate_and_normalize_url;
