//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, relay endpoint)
//! - Security meta tag name constants
//! - CLI option types, parsing and validation

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
