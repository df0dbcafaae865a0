//! Open Graph and Twitter Card tags.

use scraper::Html;

use crate::models::SocialMetrics;

use super::meta::{get_meta, meta_elements};

/// Extracts social sharing tags.
///
/// Presence is a prefix match: any `<meta property="og:…">` for Open Graph,
/// any `<meta name="twitter:…">` for Twitter Cards. Individual values go
/// through `get_meta`, so a Twitter value declared with `property` is still found.
pub fn extract_social(document: &Html) -> SocialMetrics {
    let has_og_tags = meta_elements(document).any(|meta| {
        meta.value()
            .attr("property")
            .is_some_and(|property| property.starts_with("og:"))
    });
    let has_twitter_tags = meta_elements(document).any(|meta| {
        meta.value()
            .attr("name")
            .is_some_and(|name| name.starts_with("twitter:"))
    });

    SocialMetrics {
        has_og_tags,
        has_twitter_tags,
        og_title: get_meta(document, "og:title"),
        og_description: get_meta(document, "og:description"),
        og_image: get_meta(document, "og:image"),
        twitter_title: get_meta(document, "twitter:title"),
        twitter_description: get_meta(document, "twitter:description"),
        twitter_image: get_meta(document, "twitter:image"),
    }
}
