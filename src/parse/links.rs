//! Anchor classification and link statistics.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::LinkMetrics;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("a", "ANCHOR_SELECTOR"));

/// Where an anchor points relative to the analyzed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same hostname as the analyzed page
    Internal,
    /// Different hostname, no hostname, or an href that cannot be resolved
    External,
    /// Missing, blank or `#` href
    Broken,
}

/// Classifies an anchor's `href` against the analyzed page URL.
///
/// Relative hrefs are resolved against `page_url` before comparing hostnames.
pub fn classify_link(href: Option<&str>, page_url: &Url) -> LinkKind {
    let href = match href.map(str::trim) {
        None | Some("") | Some("#") => return LinkKind::Broken,
        Some(href) => href,
    };

    match page_url.join(href) {
        Ok(resolved)
            if resolved.host_str().is_some() && resolved.host_str() == page_url.host_str() =>
        {
            LinkKind::Internal
        }
        _ => LinkKind::External,
    }
}

/// Iterates over all `<a>` elements, with or without `href`.
pub(crate) fn anchors(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.select(&ANCHOR_SELECTOR)
}

/// Counts links by kind and attribute coverage.
pub fn extract_links(document: &Html, page_url: &Url) -> LinkMetrics {
    let mut metrics = LinkMetrics::default();

    for anchor in anchors(document) {
        let attrs = anchor.value();
        metrics.link_count += 1;

        match classify_link(attrs.attr("href"), page_url) {
            LinkKind::Internal => metrics.internal_links_count += 1,
            LinkKind::External => metrics.external_links_count += 1,
            LinkKind::Broken => metrics.broken_links += 1,
        }

        if attrs
            .attr("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("nofollow"))
        {
            metrics.has_nofollow = true;
        }
        if attrs.attr("title").is_some_and(|t| !t.is_empty()) {
            metrics.links_with_title += 1;
        }
        if attrs.attr("aria-label").is_some_and(|l| !l.is_empty()) {
            metrics.links_with_aria_label += 1;
        }
    }

    metrics
}
