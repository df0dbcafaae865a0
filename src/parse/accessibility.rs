//! Accessibility hints.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::AccessibilityMetrics;

use super::links::anchors;
use super::meta::root_lang;

static ROLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("[role]", "ROLE_SELECTOR"));

/// Extracts skip-link, language attribute and ARIA landmark signals.
///
/// A skip link is any anchor whose text contains both "skip" and
/// "navigation", ignoring case.
pub fn extract_accessibility(document: &Html) -> AccessibilityMetrics {
    let has_skip_link = anchors(document).any(|anchor| {
        let text = anchor.text().collect::<String>().to_lowercase();
        text.contains("skip") && text.contains("navigation")
    });

    AccessibilityMetrics {
        has_skip_link,
        has_lang_attribute: !root_lang(document).is_empty(),
        aria_landmarks: document.select(&ROLE_SELECTOR).count(),
    }
}
