//! Heading structure, word count and text density.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::{ContentMetrics, Headings};

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR")
});
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("body", "BODY_SELECTOR"));

/// Counts `<h1>`..`<h6>` elements in a single pass.
pub fn extract_headings(document: &Html) -> Headings {
    let mut headings = Headings::default();
    for element in document.select(&HEADING_SELECTOR) {
        match element.value().name() {
            "h1" => headings.h1_count += 1,
            "h2" => headings.h2_count += 1,
            "h3" => headings.h3_count += 1,
            "h4" => headings.h4_count += 1,
            "h5" => headings.h5_count += 1,
            "h6" => headings.h6_count += 1,
            _ => {}
        }
    }
    headings
}

/// Raw text content of `<body>`, including script and style text.
pub fn body_text(document: &Html) -> String {
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.text().collect())
        .unwrap_or_default()
}

/// Counts whitespace-separated tokens.
///
/// Empty and whitespace-only text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trimmed visible text length as a percentage of raw HTML length.
///
/// Lengths are counted in characters and the result is formatted with two
/// decimals. An empty document yields `"0.00"`.
pub fn text_to_html_ratio(html: &str, text: &str) -> String {
    let html_length = html.chars().count();
    if html_length == 0 {
        return "0.00".to_string();
    }
    let text_length = text.trim().chars().count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = (text_length as f64 / html_length as f64) * 100.0;
    format!("{ratio:.2}")
}

/// Extracts word count and text/HTML density from the body text.
pub fn extract_content(document: &Html, raw_html: &str) -> ContentMetrics {
    let text = body_text(document);
    ContentMetrics {
        word_count: count_words(&text),
        text_to_html_ratio: text_to_html_ratio(raw_html, &text),
    }
}
