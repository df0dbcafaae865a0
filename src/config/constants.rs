//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and the default relay endpoint.

/// Default per-fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for `--timeout-seconds`.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default User-Agent string for HTTP requests.
///
/// Uses a Chrome-like string so that pages are served the same markup a
/// desktop browser would receive. Users can override this via the
/// `--user-agent` CLI flag or the `SEO_PROBE_USER_AGENT` environment variable.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Cross-origin relay used when `--relay` is given without a value.
///
/// The percent-encoded target URL is appended to this prefix.
pub const DEFAULT_RELAY_PREFIX: &str = "https://api.allorigins.win/raw?url=";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Section heading for the primary report.
pub const PRIMARY_LABEL: &str = "Your Website";

/// Section heading for the competitor report.
pub const COMPETITOR_LABEL: &str = "Competitor's Website";
