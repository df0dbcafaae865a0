//! Turning a response body into a DOM.

use scraper::Html;

use crate::error_handling::ParseError;

/// Media type prefixes that are never HTML documents.
const NON_DOCUMENT_MEDIA_TYPES: &[&str] = &[
    "image/",
    "audio/",
    "video/",
    "font/",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
];

/// Parses a response body into an HTML document.
///
/// The HTML parser itself is lenient and accepts any text, so a body is only
/// rejected when it is evidently not markup: the server declared a binary
/// media type, or the text contains NUL characters.
///
/// # Errors
///
/// - `ParseError::NotHtml` when `content_type` names a non-document media type
/// - `ParseError::BinaryContent` when the body contains NUL characters
pub fn parse_document(body: &str, content_type: Option<&str>) -> Result<Html, ParseError> {
    if let Some(content_type) = content_type {
        let mime = media_type(content_type);
        if NON_DOCUMENT_MEDIA_TYPES
            .iter()
            .any(|prefix| mime.starts_with(prefix))
        {
            return Err(ParseError::NotHtml {
                content_type: mime,
            });
        }
    }

    if body.contains('\0') {
        return Err(ParseError::BinaryContent);
    }

    Ok(Html::parse_document(body))
}

/// Lowercased media type without parameters, e.g. `text/html`.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Extracts the `charset` parameter of a Content-Type value.
///
/// ```
/// use seo_probe::parse::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/html; charset=\"utf-8\""),
///     Some("utf-8".to_string())
/// );
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}
