//! Error type definitions.
//!
//! This module defines the failure kinds of a single page analysis, the
//! "page not analyzable" wrapper surfaced to callers, and the error/warning
//! categories counted during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input rejected before any network I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The URL was empty or whitespace only.
    #[error("Please enter a valid URL")]
    EmptyUrl,

    /// The URL exceeds the accepted length.
    #[error("URL is {length} characters long (maximum is {max})")]
    UrlTooLong { length: usize, max: usize },

    /// The URL could not be parsed even after adding a scheme.
    #[error("not a valid URL: {url}")]
    InvalidUrl { url: String },

    /// The URL parsed but uses a scheme other than http or https.
    #[error("unsupported URL scheme '{scheme}' (only http and https are supported)")]
    UnsupportedScheme { scheme: String },
}

/// Retrieval failure: transport error, non-success status, or a bound exceeded.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server (or relay) answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The fetch did not complete within the configured bound.
    #[error("fetch timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The request failed below the HTTP status level.
    #[error("{kind}: {source}")]
    Transport {
        kind: ErrorType,
        #[source]
        source: ReqwestError,
    },

    /// The body exceeded the configured size limit.
    #[error("response body is {size} bytes (limit is {limit})")]
    BodyTooLarge { size: usize, limit: usize },

    /// The relay URL could not be built for the target.
    #[error("cannot build relay URL for {target}")]
    InvalidRelayTarget { target: String },
}

impl FetchError {
    /// The error category used for run statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Status { status } => ErrorType::from_status(*status),
            FetchError::Timeout { .. } => ErrorType::HttpRequestTimeoutError,
            FetchError::Transport { kind, .. } => *kind,
            FetchError::BodyTooLarge { .. } => ErrorType::HttpRequestBodyError,
            FetchError::InvalidRelayTarget { .. } => ErrorType::HttpRequestBuilderError,
        }
    }
}

/// The response body cannot be interpreted as an HTML document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body contains NUL bytes, so it is binary rather than markup.
    #[error("response body is binary, not HTML")]
    BinaryContent,

    /// The declared content type is a non-document media type.
    #[error("response content type '{content_type}' is not HTML")]
    NotHtml { content_type: String },
}

/// The underlying reason a page could not be analyzed.
#[derive(Error, Debug)]
pub enum FailureCause {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FailureCause {
    /// The error category used for run statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FailureCause::Validation(_) => ErrorType::UrlValidationError,
            FailureCause::Fetch(e) => e.error_type(),
            FailureCause::Parse(_) => ErrorType::HtmlParseError,
        }
    }
}

/// A page could not be analyzed. No partial report exists for it.
///
/// Every failure of `PageAnalyzer::analyze` collapses into this one type,
/// which names the offending URL; the specific cause is its `source()`.
#[derive(Error, Debug)]
#[error("page not analyzable: {url}")]
pub struct AnalyzeError {
    /// The URL as given by the caller (normalized when possible)
    pub url: String,
    /// Why the analysis failed
    #[source]
    pub cause: FailureCause,
}

impl AnalyzeError {
    pub fn new(url: impl Into<String>, cause: impl Into<FailureCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }

    /// Message suitable for end users, including the cause.
    pub fn user_message(&self) -> String {
        format!(
            "Could not analyze {}: {}. Make sure the URL is correct and the website is accessible.",
            self.url, self.cause
        )
    }
}

/// Types of errors that can occur while analyzing a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Input and document errors
    UrlValidationError,
    HtmlParseError,
}

/// Types of warnings that can occur while analyzing a page.
///
/// Warnings indicate missing optional data that doesn't prevent a report from
/// being produced but is worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    MissingMetaKeywords,
    MissingLangAttribute,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::UrlValidationError => "URL validation error",
            ErrorType::HtmlParseError => "HTML parse error",
        }
    }

    /// Maps an HTTP status code to its category.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorType::HttpRequestBadRequest,
            401 => ErrorType::HttpRequestUnauthorized,
            403 => ErrorType::HttpRequestBotDetectionError,
            404 => ErrorType::HttpRequestNotFound,
            429 => ErrorType::HttpRequestTooManyRequests,
            500 => ErrorType::HttpRequestInternalServerError,
            502 => ErrorType::HttpRequestBadGateway,
            503 => ErrorType::HttpRequestServiceUnavailable,
            504 => ErrorType::HttpRequestGatewayTimeout,
            _ => ErrorType::HttpRequestStatusError,
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::MissingMetaKeywords => "Missing meta keywords",
            WarningType::MissingLangAttribute => "Missing lang attribute",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for error_type in ErrorType::iter() {
            assert!(
                seen.insert(error_type.as_str()),
                "duplicate label for {error_type:?}"
            );
        }
    }

    #[test]
    fn test_error_type_from_status() {
        assert_eq!(ErrorType::from_status(404), ErrorType::HttpRequestNotFound);
        assert_eq!(
            ErrorType::from_status(403),
            ErrorType::HttpRequestBotDetectionError
        );
        assert_eq!(ErrorType::from_status(418), ErrorType::HttpRequestStatusError);
    }

    #[test]
    fn test_analyze_error_names_url_and_keeps_cause() {
        let err = AnalyzeError::new(
            "https://example.com",
            FetchError::Status { status: 503 },
        );
        assert_eq!(err.to_string(), "page not analyzable: https://example.com");
        let source = err.source().expect("cause should be the source");
        assert_eq!(source.to_string(), "HTTP error! status: 503");
        assert_eq!(
            err.cause.error_type(),
            ErrorType::HttpRequestServiceUnavailable
        );
    }

    #[test]
    fn test_user_message_mentions_url_and_cause() {
        let err = AnalyzeError::new("", ValidationError::EmptyUrl);
        let msg = err.user_message();
        assert!(msg.contains("Please enter a valid URL"));
        assert!(msg.contains("website is accessible"));
        assert_eq!(err.cause.error_type(), ErrorType::UrlValidationError);
    }

    #[test]
    fn test_parse_error_category() {
        let cause = FailureCause::from(ParseError::BinaryContent);
        assert_eq!(cause.error_type(), ErrorType::HtmlParseError);
    }

    #[test]
    fn test_warning_labels() {
        for warning in WarningType::iter() {
            assert!(warning.as_str().starts_with("Missing"));
        }
    }
}
