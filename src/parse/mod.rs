//! HTML parsing and metric extraction.
//!
//! This module turns a fetched body into a DOM and runs every extraction rule
//! against it:
//! - Identity (title, meta description/keywords/author, language, charset)
//! - Heading counts, word count and text/HTML density
//! - Image and link statistics
//! - Technical SEO, resource hints, mobile, security and structured-data markers
//! - Open Graph / Twitter Card tags
//! - Accessibility hints
//!
//! All lookups use CSS selectors via the `scraper` crate. Extraction is
//! synchronous and deterministic for a given document and page URL.

mod accessibility;
mod content;
mod document;
mod head;
mod images;
mod links;
mod meta;
mod social;

use log::debug;
use scraper::Html;
use url::Url;

use crate::models::MetricReport;

// Re-export public API
pub use accessibility::extract_accessibility;
pub use content::{body_text, count_words, extract_content, extract_headings, text_to_html_ratio};
pub use document::{charset_from_content_type, parse_document};
pub use head::{
    extract_mobile, extract_performance, extract_security, extract_structured_data,
    extract_technical,
};
pub use images::extract_images;
pub use links::{classify_link, extract_links, LinkKind};
pub use meta::{extract_charset, extract_identity, extract_title, get_meta};
pub use social::extract_social;

/// Runs every extraction rule and assembles the report.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `raw_html` - The body text the document was parsed from
/// * `page_url` - The URL the document was retrieved from (after redirects)
/// * `header_charset` - Charset declared by the response Content-Type, if any
pub fn extract_metrics(
    document: &Html,
    raw_html: &str,
    page_url: &Url,
    header_charset: Option<&str>,
) -> MetricReport {
    let identity = extract_identity(document, header_charset);
    debug!(
        "Extracted identity for {page_url}: title={:?}, lang={:?}, charset={:?}",
        identity.title, identity.language_tag, identity.charset
    );

    let headings = extract_headings(document);
    let content = extract_content(document, raw_html);
    debug!(
        "Content for {page_url}: h1={} words={} ratio={}%",
        headings.h1_count, content.word_count, content.text_to_html_ratio
    );

    let images = extract_images(document);
    let links = extract_links(document, page_url);
    debug!(
        "Found {} images ({} without alt) and {} links ({} internal, {} external, {} broken) on {page_url}",
        images.img_count,
        images.img_without_alt,
        links.link_count,
        links.internal_links_count,
        links.external_links_count,
        links.broken_links
    );

    MetricReport {
        url: page_url.to_string(),
        identity,
        headings,
        content,
        images,
        links,
        technical: extract_technical(document, raw_html, page_url),
        social: extract_social(document),
        performance: extract_performance(document),
        mobile: extract_mobile(document),
        security: extract_security(document),
        structured_data: extract_structured_data(document, raw_html),
        accessibility: extract_accessibility(document),
    }
}
