//! Human-readable cards.

use anyhow::Result;
use std::io::Write;

use crate::config::{COMPETITOR_LABEL, PRIMARY_LABEL};
use crate::models::MetricReport;
use crate::AnalysisOutcome;

const RULE_WIDTH: usize = 60;

fn mark(value: bool) -> &'static str {
    if value {
        "✅"
    } else {
        "❌"
    }
}

/// One labeled group of lines.
struct Card {
    title: &'static str,
    lines: Vec<String>,
}

impl Card {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    fn flag(mut self, label: &str, value: bool) -> Self {
        self.lines.push(format!("{label}: {}", mark(value)));
        self
    }

    fn count(mut self, label: &str, value: usize) -> Self {
        self.lines.push(format!("{label}: {value}"));
        self
    }

    /// Adds `label: value`, or nothing when `value` is empty.
    fn text(mut self, label: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.lines.push(format!("{label}: {value}"));
        }
        self
    }

    /// Adds `label: value`, with `fallback` standing in for an empty value.
    fn text_or(mut self, label: &str, value: &str, fallback: &str) -> Self {
        let shown = if value.is_empty() { fallback } else { value };
        self.lines.push(format!("{label}: {shown}"));
        self
    }

    /// A free text value followed by its length, or "Not found".
    fn measured(mut self, value: &str) -> Self {
        if value.is_empty() {
            self.lines.push("Not found".to_string());
        } else {
            self.lines.push(value.to_string());
            self.lines
                .push(format!("Length: {} characters", value.chars().count()));
        }
        self
    }
}

fn cards(report: &MetricReport) -> Vec<Card> {
    let identity = &report.identity;
    let headings = &report.headings;
    let images = &report.images;
    let links = &report.links;
    let technical = &report.technical;
    let social = &report.social;
    let performance = &report.performance;
    let mobile = &report.mobile;
    let security = &report.security;
    let a11y = &report.accessibility;

    vec![
        Card::new("Page Title").measured(&identity.title),
        Card::new("Meta Description").measured(&identity.description),
        Card::new("Meta Information")
            .text("Keywords", &identity.keywords)
            .text("Author", &identity.author)
            .text_or("Language Tag", &identity.language_tag, "Not specified")
            .text_or("Character Encoding", &identity.charset, "Not specified"),
        Card::new("Content Structure")
            .count("H1 Tags", headings.h1_count)
            .count("H2 Tags", headings.h2_count)
            .count("H3 Tags", headings.h3_count)
            .count("H4 Tags", headings.h4_count)
            .count("H5 Tags", headings.h5_count)
            .count("H6 Tags", headings.h6_count)
            .count("Word Count", report.content.word_count)
            .text(
                "Text to HTML Ratio",
                &format!("{}%", report.content.text_to_html_ratio),
            ),
        Card::new("Images Analysis")
            .count("Total Images", images.img_count)
            .count("SVG Images", images.svg_images)
            .count("Images without Alt Text", images.img_without_alt)
            .count("Images with Dimensions", images.images_with_size)
            .count("Images with Lazy Loading", images.images_with_lazy_loading)
            .count("Images with Title", images.images_with_title)
            .count("Images with ARIA Labels", images.images_with_aria),
        Card::new("Links Analysis")
            .count("Total Links", links.link_count)
            .count("Internal Links", links.internal_links_count)
            .count("External Links", links.external_links_count)
            .count("Broken Links", links.broken_links)
            .count("Links with Title", links.links_with_title)
            .count("Links with ARIA Label", links.links_with_aria_label)
            .flag("Has Nofollow Links", links.has_nofollow),
        Card::new("Technical SEO")
            .flag("SSL (HTTPS)", technical.has_ssl)
            .flag("Favicon", technical.has_favicon)
            .flag("Apple Touch Icon", technical.has_apple_icon)
            .flag("Viewport Meta Tag", technical.has_viewport)
            .flag("Robots Meta Tag", technical.has_robots)
            .text("Robots Content", &technical.robots_content)
            .flag("Canonical Link", technical.has_canonical)
            .text("Canonical URL", &technical.canonical_url)
            .flag("Sitemap XML", technical.has_sitemap)
            .flag("RSS Feed", technical.has_rss)
            .flag("Atom Feed", technical.has_atom),
        Card::new("Social Media")
            .flag("Open Graph Tags", social.has_og_tags)
            .flag("Twitter Cards", social.has_twitter_tags)
            .text("OG Title", &social.og_title)
            .text("OG Description", &social.og_description)
            .text("OG Image", &social.og_image)
            .text("Twitter Title", &social.twitter_title)
            .text("Twitter Description", &social.twitter_description)
            .text("Twitter Image", &social.twitter_image),
        Card::new("Performance Optimization")
            .flag("Preload", performance.has_preload)
            .flag("Prefetch", performance.has_prefetch)
            .flag("Preconnect", performance.has_preconnect)
            .flag("DNS Prefetch", performance.has_dns_prefetch)
            .flag("Module Preload", performance.has_module_preload),
        Card::new("Mobile Optimization")
            .flag("AMP Link", mobile.has_amp_link)
            .flag("Web Manifest", mobile.has_manifest)
            .flag("Theme Color", mobile.has_theme_color)
            .flag("Mobile Viewport", mobile.has_mobile_viewport)
            .flag("Apple Mobile Web App Capable", mobile.has_apple_mobile_capable),
        Card::new("Security Headers")
            .flag("Content Security Policy", security.has_csp)
            .flag("XSS Protection", security.has_xss_protection)
            .flag("Frame Options", security.has_frame_options)
            .flag("Referrer Policy", security.has_referrer_policy)
            .flag("Permissions Policy", security.has_permissions_policy),
        Card::new("Structured Data")
            .flag("Schema.org", report.structured_data.has_schema_org)
            .flag("JSON-LD", report.structured_data.has_json_ld),
        Card::new("Accessibility")
            .flag("Skip Navigation Link", a11y.has_skip_link)
            .flag("Language Attribute", a11y.has_lang_attribute)
            .count("ARIA Landmarks", a11y.aria_landmarks),
    ]
}

fn write_heading<W: Write>(writer: &mut W, heading: &str) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(writer, "{heading}")?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Writes the cards for one report under `label`.
pub fn write_report<W: Write>(writer: &mut W, label: &str, report: &MetricReport) -> Result<()> {
    write_heading(writer, &format!("{label}: {}", report.url))?;
    for card in cards(report) {
        writeln!(writer)?;
        writeln!(writer, "{}", card.title)?;
        for line in &card.lines {
            writeln!(writer, "  {line}")?;
        }
    }
    Ok(())
}

/// Writes the primary report and, when present, the competitor result.
pub fn write_text<W: Write>(outcome: &AnalysisOutcome, mut writer: W) -> Result<()> {
    write_report(&mut writer, PRIMARY_LABEL, &outcome.primary)?;

    match &outcome.competitor {
        Some(Ok(report)) => {
            writeln!(writer)?;
            write_report(&mut writer, COMPETITOR_LABEL, report)?;
        }
        Some(Err(e)) => {
            writeln!(writer)?;
            write_heading(&mut writer, COMPETITOR_LABEL)?;
            writeln!(writer, "{} {}", mark(false), e.user_message())?;
        }
        None => {}
    }

    writer.flush()?;
    Ok(())
}
