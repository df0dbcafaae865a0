//! Meta-tag resolution and identity fields.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::models::Identity;

use super::document::charset_from_content_type;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("meta", "META_SELECTOR"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("title", "TITLE_SELECTOR"));

/// Iterates over all `<meta>` elements in document order.
pub(crate) fn meta_elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.select(&META_SELECTOR)
}

/// Resolves a meta tag's `content`, preferring the standard name over Open Graph.
///
/// Looks up `<meta name="{name}">` first and falls back to
/// `<meta property="og:{name}">`, so `description` yields the Open Graph
/// description when the page has no standard one. Keys that already carry a
/// namespace (`og:title`, `twitter:image`) fall back to a `property` of the
/// same key instead. Returns an empty string when no tag matches or the
/// matching tag has no `content`.
pub fn get_meta(document: &Html, name: &str) -> String {
    let fallback_property = if name.contains(':') {
        name.to_string()
    } else {
        format!("og:{name}")
    };

    meta_elements(document)
        .find(|meta| meta.value().attr("name") == Some(name))
        .or_else(|| {
            meta_elements(document)
                .find(|meta| meta.value().attr("property") == Some(fallback_property.as_str()))
        })
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Returns true when any `<meta>` has a `name` exactly equal to `name`.
pub(crate) fn has_meta_name(document: &Html, name: &str) -> bool {
    meta_elements(document).any(|meta| meta.value().attr("name") == Some(name))
}

/// Extracts the document title.
///
/// Uses the first `<title>` element with whitespace runs collapsed, falling
/// back to `get_meta(document, "title")` when the element is absent or blank.
pub fn extract_title(document: &Html) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    if title.is_empty() {
        get_meta(document, "title")
    } else {
        title
    }
}

/// Resolves the document character set.
///
/// Order: `<meta charset>`, then the `charset` parameter of a
/// `<meta http-equiv="Content-Type">`, then the response header's charset.
pub fn extract_charset(document: &Html, header_charset: Option<&str>) -> String {
    let declared = meta_elements(document).find_map(|meta| {
        let value = meta.value().attr("charset")?.trim();
        (!value.is_empty()).then(|| value.to_string())
    });
    if let Some(charset) = declared {
        return charset;
    }

    let http_equiv = meta_elements(document).find_map(|meta| {
        let equiv = meta.value().attr("http-equiv")?;
        if !equiv.trim().eq_ignore_ascii_case("content-type") {
            return None;
        }
        charset_from_content_type(meta.value().attr("content")?)
    });

    http_equiv
        .or_else(|| header_charset.map(str::to_string))
        .unwrap_or_default()
}

/// The `lang` attribute of the root element, or an empty string.
pub(crate) fn root_lang(document: &Html) -> String {
    document
        .root_element()
        .value()
        .attr("lang")
        .unwrap_or_default()
        .to_string()
}

/// Extracts the identity group: title, description, keywords, author, language and charset.
pub fn extract_identity(document: &Html, header_charset: Option<&str>) -> Identity {
    Identity {
        title: extract_title(document),
        description: get_meta(document, "description"),
        keywords: get_meta(document, "keywords"),
        author: get_meta(document, "author"),
        language_tag: root_lang(document),
        charset: extract_charset(document, header_charset),
    }
}
