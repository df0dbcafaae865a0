//! The metric report produced for one analyzed page.
//!
//! Fields are grouped into sub-records per signal family. Serialized output is
//! a single flat object with camelCase names (`hasSSL`, `h1Count`,
//! `textToHtmlRatio`, ...), identical to an ungrouped record.

use serde::Serialize;

/// Extracted SEO, accessibility and performance signals for one page.
///
/// Produced once per `PageAnalyzer::analyze` call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    /// Final URL the document was retrieved from
    pub url: String,
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub headings: Headings,
    #[serde(flatten)]
    pub content: ContentMetrics,
    #[serde(flatten)]
    pub images: ImageMetrics,
    #[serde(flatten)]
    pub links: LinkMetrics,
    #[serde(flatten)]
    pub technical: TechnicalMetrics,
    #[serde(flatten)]
    pub social: SocialMetrics,
    #[serde(flatten)]
    pub performance: PerformanceHints,
    #[serde(flatten)]
    pub mobile: MobileMetrics,
    #[serde(flatten)]
    pub security: SecurityMetrics,
    #[serde(flatten)]
    pub structured_data: StructuredDataMetrics,
    #[serde(flatten)]
    pub accessibility: AccessibilityMetrics,
}

/// Title and document-level meta information. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub language_tag: String,
    pub charset: String,
}

/// Raw `<h1>`..`<h6>` element counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Headings {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub h5_count: usize,
    pub h6_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub word_count: usize,
    /// Visible text length as a percentage of raw HTML length, two decimals
    pub text_to_html_ratio: String,
}

impl Default for ContentMetrics {
    fn default() -> Self {
        Self {
            word_count: 0,
            text_to_html_ratio: "0.00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetrics {
    pub img_count: usize,
    pub img_without_alt: usize,
    /// Images carrying both `width` and `height`
    pub images_with_size: usize,
    pub images_with_lazy_loading: usize,
    pub images_with_title: usize,
    pub images_with_aria: usize,
    pub svg_images: usize,
}

/// Anchor statistics. `link_count == internal + external + broken`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMetrics {
    pub link_count: usize,
    pub internal_links_count: usize,
    pub external_links_count: usize,
    pub broken_links: usize,
    pub has_nofollow: bool,
    pub links_with_title: usize,
    pub links_with_aria_label: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMetrics {
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    pub has_favicon: bool,
    pub has_apple_icon: bool,
    pub has_viewport: bool,
    pub has_robots: bool,
    pub robots_content: String,
    pub has_canonical: bool,
    pub canonical_url: String,
    pub has_sitemap: bool,
    #[serde(rename = "hasRSS")]
    pub has_rss: bool,
    pub has_atom: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub has_og_tags: bool,
    pub has_twitter_tags: bool,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
}

/// Resource hints declared with `<link rel>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceHints {
    pub has_preload: bool,
    pub has_prefetch: bool,
    pub has_preconnect: bool,
    #[serde(rename = "hasDNSPrefetch")]
    pub has_dns_prefetch: bool,
    pub has_module_preload: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileMetrics {
    pub has_amp_link: bool,
    pub has_manifest: bool,
    pub has_theme_color: bool,
    /// Viewport meta whose content includes `width=device-width`
    pub has_mobile_viewport: bool,
    pub has_apple_mobile_capable: bool,
}

/// Security policies declared through `<meta>` tags (not response headers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMetrics {
    #[serde(rename = "hasCSP")]
    pub has_csp: bool,
    #[serde(rename = "hasXSSProtection")]
    pub has_xss_protection: bool,
    pub has_frame_options: bool,
    pub has_referrer_policy: bool,
    pub has_permissions_policy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataMetrics {
    pub has_schema_org: bool,
    #[serde(rename = "hasJSONLD")]
    pub has_json_ld: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityMetrics {
    pub has_skip_link: bool,
    pub has_lang_attribute: bool,
    /// Number of elements carrying a `role` attribute
    #[serde(rename = "hasAriaLandmarks")]
    pub aria_landmarks: usize,
}
