//! End-to-end analysis tests against a mock HTTP server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use httptest::{matchers::*, responders::*, Expectation, Server};
use seo_probe::fetch::{DirectFetcher, FetchedPage, PageFetcher};
use seo_probe::{
    run_analysis, run_analysis_with, AnalyzeError, Config, FailureCause, FetchError,
    PageAnalyzer,
};
use url::Url;

const MINIMAL: &str = r#"<html lang="en"><head><title>T</title><meta name="description" content="D"></head><body><h1>H</h1><img src="x.png"></body></html>"#;

const RICH: &str = r##"<!DOCTYPE html>
<html lang="en-GB">
<head>
  <meta charset="utf-8">
  <title>Widgets | Example</title>
  <meta name="description" content="We make widgets">
  <meta name="keywords" content="widgets, gadgets">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta property="og:title" content="Widgets">
  <meta name="twitter:card" content="summary">
  <link rel="canonical" href="/widgets">
  <link rel="preconnect" href="https://cdn.example.net">
  <script type="application/ld+json">{"@context":"https://schema.org"}</script>
</head>
<body>
  <a href="#main">Skip navigation</a>
  <nav role="navigation"><a href="/about">About</a><a href="https://other.example/">Elsewhere</a></nav>
  <main role="main"><h1>Widgets</h1><h2>Blue</h2><img src="w.png" alt="widget" width="10" height="10"></main>
</body>
</html>"##;

fn config_for(url: String) -> Config {
    Config {
        url,
        timeout_seconds: 5,
        ..Default::default()
    }
}

fn html_response(body: &'static str) -> impl httptest::responders::Responder {
    status_code(200)
        .insert_header("Content-Type", "text/html; charset=utf-8")
        .body(body)
}

fn unreachable_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/")
}

#[tokio::test]
async fn test_analyze_page_from_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(html_response(RICH)),
    );

    let outcome = run_analysis(&config_for(server.url_str("/")))
        .await
        .unwrap();
    let report = outcome.primary;

    assert_eq!(report.identity.title, "Widgets | Example");
    assert_eq!(report.identity.description, "We make widgets");
    assert_eq!(report.identity.keywords, "widgets, gadgets");
    assert_eq!(report.identity.language_tag, "en-GB");
    assert_eq!(report.identity.charset, "utf-8");
    assert_eq!(report.headings.h1_count, 1);
    assert_eq!(report.headings.h2_count, 1);
    assert_eq!(report.images.img_count, 1);
    assert_eq!(report.images.img_without_alt, 0);
    assert_eq!(report.images.images_with_size, 1);
    assert_eq!(report.links.link_count, 3);
    assert_eq!(report.links.internal_links_count, 2);
    assert_eq!(report.links.external_links_count, 1);
    assert_eq!(report.links.broken_links, 0);
    assert!(!report.technical.has_ssl);
    assert!(report.technical.has_canonical);
    assert!(report.technical.canonical_url.ends_with("/widgets"));
    assert!(report.social.has_og_tags);
    assert!(report.social.has_twitter_tags);
    assert!(report.performance.has_preconnect);
    assert!(report.mobile.has_mobile_viewport);
    assert!(report.structured_data.has_schema_org);
    assert!(report.structured_data.has_json_ld);
    assert!(report.accessibility.has_skip_link);
    assert_eq!(report.accessibility.aria_landmarks, 2);
    assert!(outcome.competitor.is_none());
}

#[tokio::test]
async fn test_not_found_is_fetch_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone")).respond_with(status_code(404)),
    );

    let err = run_analysis(&config_for(server.url_str("/gone")))
        .await
        .unwrap_err();
    let analyze_error = err
        .downcast_ref::<AnalyzeError>()
        .expect("root error should be AnalyzeError");
    assert!(matches!(
        analyze_error.cause,
        FailureCause::Fetch(FetchError::Status { status: 404 })
    ));
    assert!(analyze_error.url.ends_with("/gone"));
}

#[tokio::test]
async fn test_redirect_reports_final_url() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .respond_with(status_code(302).insert_header("Location", "/landing")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/landing"))
            .respond_with(html_response(MINIMAL)),
    );

    let outcome = run_analysis(&config_for(server.url_str("/start")))
        .await
        .unwrap();
    assert!(outcome.primary.url.ends_with("/landing"));
    assert_eq!(outcome.primary.identity.title, "T");
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    let err = run_analysis(&config_for(unreachable_url()))
        .await
        .unwrap_err();
    let analyze_error = err.downcast_ref::<AnalyzeError>().unwrap();
    assert!(matches!(analyze_error.cause, FailureCause::Fetch(_)));
}

#[tokio::test]
async fn test_competitor_failure_keeps_primary_report() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(html_response(MINIMAL)),
    );

    let config = Config {
        competitor: Some(unreachable_url()),
        ..config_for(server.url_str("/"))
    };
    let outcome = run_analysis(&config).await.unwrap();

    assert_eq!(outcome.primary.identity.title, "T");
    match outcome.competitor {
        Some(Err(e)) => assert!(matches!(e.cause, FailureCause::Fetch(_))),
        other => panic!("expected competitor failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_competitor_success() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/mine")).respond_with(html_response(MINIMAL)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/theirs")).respond_with(html_response(RICH)),
    );

    let config = Config {
        competitor: Some(server.url_str("/theirs")),
        ..config_for(server.url_str("/mine"))
    };
    let outcome = run_analysis(&config).await.unwrap();

    assert_eq!(outcome.primary.identity.title, "T");
    let competitor = outcome.competitor.unwrap().unwrap();
    assert_eq!(competitor.identity.title, "Widgets | Example");
}

#[tokio::test]
async fn test_primary_failure_skips_competitor() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/primary"))
            .respond_with(status_code(500)),
    );
    // Dropping the server verifies this was never requested
    server.expect(
        Expectation::matching(request::method_path("GET", "/competitor"))
            .times(0)
            .respond_with(html_response(MINIMAL)),
    );

    let config = Config {
        competitor: Some(server.url_str("/competitor")),
        ..config_for(server.url_str("/primary"))
    };
    let err = run_analysis(&config).await.unwrap_err();
    assert!(err.downcast_ref::<AnalyzeError>().is_some());
}

#[tokio::test]
async fn test_empty_primary_url_is_rejected_before_fetch() {
    let server = Server::run();
    server.expect(
        Expectation::matching(any())
            .times(0)
            .respond_with(status_code(200)),
    );

    let config = Config {
        competitor: Some(server.url_str("/")),
        ..config_for("   ".to_string())
    };
    let err = run_analysis(&config).await.unwrap_err();
    let analyze_error = err.downcast_ref::<AnalyzeError>().unwrap();
    assert!(matches!(analyze_error.cause, FailureCause::Validation(_)));
}

#[tokio::test]
async fn test_invalid_config_fails_before_fetch() {
    let config = Config {
        timeout_seconds: 0,
        ..config_for("example.com".to_string())
    };
    assert!(run_analysis(&config).await.is_err());
}

/// Serves one fixed document for every URL, as a relay or a local cache would.
struct FixedPage(&'static str);

#[async_trait]
impl PageFetcher for FixedPage {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        Ok(FetchedPage {
            final_url: url.clone(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: self.0.to_string(),
        })
    }
}

#[tokio::test]
async fn test_minimal_document_over_https() {
    let outcome = run_analysis_with(
        &config_for("https://example.com".to_string()),
        Arc::new(FixedPage(MINIMAL)),
    )
    .await
    .unwrap();
    let report = outcome.primary;

    assert_eq!(report.identity.title, "T");
    assert_eq!(report.identity.description, "D");
    assert_eq!(report.headings.h1_count, 1);
    assert_eq!(report.images.img_count, 1);
    assert_eq!(report.images.img_without_alt, 1);
    assert!(report.accessibility.has_lang_attribute);
    assert!(report.technical.has_ssl);
    assert_eq!(report.links.link_count, 0);
}

#[tokio::test]
async fn test_blank_competitor_is_skipped() {
    for blank in ["", "   "] {
        let config = Config {
            competitor: Some(blank.to_string()),
            ..config_for("https://example.com".to_string())
        };
        let outcome = run_analysis_with(&config, Arc::new(FixedPage(MINIMAL)))
            .await
            .unwrap();
        assert_eq!(outcome.primary.identity.title, "T");
        assert!(outcome.competitor.is_none());
    }
}

#[tokio::test]
async fn test_page_analyzer_with_direct_fetcher() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(html_response(MINIMAL)),
    );

    let client = Arc::new(reqwest::Client::new());
    let analyzer = PageAnalyzer::new(
        Arc::new(DirectFetcher::new(client)),
        Duration::from_secs(5),
    );
    let report = analyzer.analyze(&server.url_str("/")).await.unwrap();

    assert_eq!(report.identity.title, "T");
    assert_eq!(analyzer.stats().total_errors(), 0);
}
