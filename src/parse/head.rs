//! Technical SEO, resource hints, mobile, security and structured-data markers.
//!
//! Almost all of these are presence checks on `<link>`, `<meta>` and
//! `<script>` elements; `schema.org` and `sitemap.xml` are raw substring
//! searches on the HTML text.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{
    META_CONTENT_SECURITY_POLICY, META_PERMISSIONS_POLICY, META_REFERRER, META_X_FRAME_OPTIONS,
    META_X_XSS_PROTECTION,
};
use crate::models::{
    MobileMetrics, PerformanceHints, SecurityMetrics, StructuredDataMetrics, TechnicalMetrics,
};

use super::meta::{get_meta, has_meta_name, meta_elements};

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| crate::utils::parse_selector_unsafe($css, stringify!($name)));
    };
}

selector!(FAVICON_SELECTOR, r#"link[rel*="icon"]"#);
selector!(APPLE_ICON_SELECTOR, r#"link[rel="apple-touch-icon"]"#);
selector!(VIEWPORT_SELECTOR, r#"meta[name="viewport"]"#);
selector!(CANONICAL_SELECTOR, r#"link[rel="canonical"]"#);
selector!(RSS_SELECTOR, r#"link[type="application/rss+xml"]"#);
selector!(ATOM_SELECTOR, r#"link[type="application/atom+xml"]"#);

selector!(PRELOAD_SELECTOR, r#"link[rel="preload"]"#);
selector!(PREFETCH_SELECTOR, r#"link[rel="prefetch"]"#);
selector!(PRECONNECT_SELECTOR, r#"link[rel="preconnect"]"#);
selector!(DNS_PREFETCH_SELECTOR, r#"link[rel="dns-prefetch"]"#);
selector!(MODULE_PRELOAD_SELECTOR, r#"link[rel="modulepreload"]"#);

selector!(AMP_SELECTOR, r#"link[rel="amphtml"]"#);
selector!(MANIFEST_SELECTOR, r#"link[rel="manifest"]"#);
selector!(
    MOBILE_VIEWPORT_SELECTOR,
    r#"meta[name="viewport"][content*="width=device-width"]"#
);
selector!(
    APPLE_CAPABLE_SELECTOR,
    r#"meta[name="apple-mobile-web-app-capable"]"#
);

selector!(JSON_LD_SELECTOR, r#"script[type="application/ld+json"]"#);

fn exists(document: &Html, selector: &Selector) -> bool {
    document.select(selector).next().is_some()
}

/// Extracts technical SEO markers.
///
/// `has_ssl` comes from the scheme of the URL the document was retrieved
/// from; the canonical URL is resolved against it.
pub fn extract_technical(document: &Html, raw_html: &str, page_url: &Url) -> TechnicalMetrics {
    let canonical = document.select(&CANONICAL_SELECTOR).next();
    let canonical_url = canonical
        .and_then(|link| link.value().attr("href"))
        .map(|href| {
            page_url
                .join(href.trim())
                .map(String::from)
                .unwrap_or_else(|_| href.to_string())
        })
        .unwrap_or_default();

    TechnicalMetrics {
        has_ssl: page_url.scheme() == "https",
        has_favicon: exists(document, &FAVICON_SELECTOR),
        has_apple_icon: exists(document, &APPLE_ICON_SELECTOR),
        has_viewport: exists(document, &VIEWPORT_SELECTOR),
        has_robots: has_meta_name(document, "robots"),
        robots_content: get_meta(document, "robots"),
        has_canonical: canonical.is_some(),
        canonical_url,
        has_sitemap: raw_html.contains("sitemap.xml"),
        has_rss: exists(document, &RSS_SELECTOR),
        has_atom: exists(document, &ATOM_SELECTOR),
    }
}

/// Extracts `<link rel>` resource hints.
pub fn extract_performance(document: &Html) -> PerformanceHints {
    PerformanceHints {
        has_preload: exists(document, &PRELOAD_SELECTOR),
        has_prefetch: exists(document, &PREFETCH_SELECTOR),
        has_preconnect: exists(document, &PRECONNECT_SELECTOR),
        has_dns_prefetch: exists(document, &DNS_PREFETCH_SELECTOR),
        has_module_preload: exists(document, &MODULE_PRELOAD_SELECTOR),
    }
}

/// Extracts mobile optimization markers.
pub fn extract_mobile(document: &Html) -> MobileMetrics {
    MobileMetrics {
        has_amp_link: exists(document, &AMP_SELECTOR),
        has_manifest: exists(document, &MANIFEST_SELECTOR),
        has_theme_color: !get_meta(document, "theme-color").is_empty(),
        has_mobile_viewport: exists(document, &MOBILE_VIEWPORT_SELECTOR),
        has_apple_mobile_capable: exists(document, &APPLE_CAPABLE_SELECTOR),
    }
}

/// True when a security policy is declared through a meta tag.
///
/// Matches a non-empty `get_meta(name)` or a non-empty `content` on a meta
/// whose `http-equiv` equals `name` ignoring ASCII case.
fn declares_policy(document: &Html, name: &str) -> bool {
    if !get_meta(document, name).is_empty() {
        return true;
    }
    meta_elements(document).any(|meta| {
        meta.value()
            .attr("http-equiv")
            .is_some_and(|equiv| equiv.trim().eq_ignore_ascii_case(name))
            && meta
                .value()
                .attr("content")
                .is_some_and(|content| !content.is_empty())
    })
}

/// Extracts security policies declared in `<meta>` tags.
///
/// HTTP response headers are not consulted.
pub fn extract_security(document: &Html) -> SecurityMetrics {
    SecurityMetrics {
        has_csp: declares_policy(document, META_CONTENT_SECURITY_POLICY),
        has_xss_protection: declares_policy(document, META_X_XSS_PROTECTION),
        has_frame_options: declares_policy(document, META_X_FRAME_OPTIONS),
        has_referrer_policy: has_meta_name(document, META_REFERRER),
        has_permissions_policy: declares_policy(document, META_PERMISSIONS_POLICY),
    }
}

/// Extracts structured data markers.
pub fn extract_structured_data(document: &Html, raw_html: &str) -> StructuredDataMetrics {
    StructuredDataMetrics {
        has_schema_org: raw_html.contains("schema.org"),
        has_json_ld: exists(document, &JSON_LD_SELECTOR),
    }
}
