//! Utility functions.
//!
//! This module provides CSS selector parsing utilities shared by the
//! extraction rules.

mod selector;

pub use selector::parse_selector_unsafe;
