//! Application initialization.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (user agent, timeout, redirect policy)
//! - Logger (plain or JSON output)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
