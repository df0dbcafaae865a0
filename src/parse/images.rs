//! Image statistics.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::ImageMetrics;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("img", "IMG_SELECTOR"));
static SVG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("svg", "SVG_SELECTOR"));

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Counts images and their attribute coverage.
///
/// An image counts as sized only when both `width` and `height` carry a
/// non-blank value. `alt=""` counts as missing alt text.
pub fn extract_images(document: &Html) -> ImageMetrics {
    let mut metrics = ImageMetrics::default();

    for img in document.select(&IMG_SELECTOR) {
        let attrs = img.value();
        metrics.img_count += 1;

        if !non_empty(attrs.attr("alt")) {
            metrics.img_without_alt += 1;
        }
        let width = attrs.attr("width").map(str::trim);
        let height = attrs.attr("height").map(str::trim);
        if non_empty(width) && non_empty(height) {
            metrics.images_with_size += 1;
        }
        if attrs
            .attr("loading")
            .is_some_and(|loading| loading.trim().eq_ignore_ascii_case("lazy"))
        {
            metrics.images_with_lazy_loading += 1;
        }
        if non_empty(attrs.attr("title")) {
            metrics.images_with_title += 1;
        }
        if non_empty(attrs.attr("aria-label")) {
            metrics.images_with_aria += 1;
        }
    }

    metrics.svg_images = document.select(&SVG_SELECTOR).count();
    metrics
}
