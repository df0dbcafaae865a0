//! Fetch result types.

use url::Url;

use crate::parse::charset_from_content_type;

/// A successfully retrieved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL the document was retrieved from. For direct fetches this is the
    /// URL after redirects; for relayed fetches it is the requested target.
    pub final_url: Url,
    /// HTTP status of the final response (always 2xx)
    pub status: u16,
    /// Raw `Content-Type` header value, if the server sent one
    pub content_type: Option<String>,
    /// Response body decoded as text
    pub body: String,
}

impl FetchedPage {
    /// The `charset` parameter of the response Content-Type.
    pub fn header_charset(&self) -> Option<String> {
        self.content_type
            .as_deref()
            .and_then(charset_from_content_type)
    }
}
