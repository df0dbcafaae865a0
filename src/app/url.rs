//! URL validation and normalization utilities.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ValidationError;

// Any explicit scheme, e.g. "ftp://" or "HTTPS://"
static EXPLICIT_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://")
        .unwrap_or_else(|e| panic!("Failed to compile scheme pattern: {e}"))
});

/// Validates and normalizes a URL.
///
/// Trims surrounding whitespace and adds an `https://` prefix when no scheme is
/// present, then checks that the URL parses, uses http/https and has a host.
///
/// # Errors
///
/// - `ValidationError::EmptyUrl` for empty or whitespace-only input
/// - `ValidationError::UrlTooLong` when the input or its normalized form exceeds `MAX_URL_LENGTH`
/// - `ValidationError::UnsupportedScheme` for explicit non-http(s) schemes
/// - `ValidationError::InvalidUrl` when the URL cannot be parsed or has no host
pub fn validate_and_normalize_url(url: &str) -> Result<Url, ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let normalized = match EXPLICIT_SCHEME_RE.captures(trimmed) {
        Some(caps) => {
            let scheme = caps[1].to_ascii_lowercase();
            if scheme != "http" && scheme != "https" {
                return Err(ValidationError::UnsupportedScheme { scheme });
            }
            trimmed.to_string()
        }
        None => format!("https://{trimmed}"),
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(ValidationError::UrlTooLong {
            length: normalized.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(&normalized).map_err(|e| {
        debug!("Rejecting URL {trimmed:?}: {e}");
        ValidationError::InvalidUrl {
            url: trimmed.to_string(),
        }
    })?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidUrl {
            url: trimmed.to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::ValidationError;

    fn normalized(input: &str) -> String {
        validate_and_normalize_url(input)
            .expect("URL should be accepted")
            .to_string()
    }

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        assert_eq!(normalized("example.com"), "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        assert_eq!(normalized("http://example.com"), "http://example.com/");
        assert_eq!(normalized("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        assert_eq!(normalized("  example.com/a  "), "https://example.com/a");
    }

    #[test]
    fn test_validate_and_normalize_url_uppercase_scheme() {
        assert_eq!(normalized("HTTP://Example.com"), "http://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            normalized("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        assert_eq!(normalized("[2001:db8::1]"), "https://[2001:db8::1]/");
        assert_eq!(
            normalized("http://[2001:db8::1]:8080"),
            "http://[2001:db8::1]:8080/"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_empty() {
        assert_eq!(
            validate_and_normalize_url(""),
            Err(ValidationError::EmptyUrl)
        );
        assert_eq!(
            validate_and_normalize_url("   "),
            Err(ValidationError::EmptyUrl)
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        assert_eq!(
            validate_and_normalize_url("ftp://example.com"),
            Err(ValidationError::UnsupportedScheme {
                scheme: "ftp".to_string()
            })
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert!(matches!(
            validate_and_normalize_url("not a valid url!!!"),
            Err(ValidationError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_and_normalize_url("https://"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validate_and_normalize_url_too_long() {
        let long = format!("example.com/{}", "a".repeat(3000));
        assert!(matches!(
            validate_and_normalize_url(&long),
            Err(ValidationError::UrlTooLong { max: 2048, .. })
        ));
    }
}
