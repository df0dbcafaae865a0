//! HTTP request building and response reading.
//!
//! Both fetchers issue a single GET through the shared client and read the
//! body the same way; only the request URL and the reported final URL differ.

use log::debug;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

use super::types::FetchedPage;

/// Browser-like request headers.
///
/// Mimics a desktop Chrome navigation so that sites serve the same markup a
/// visitor would see. `Accept-Encoding` is left to reqwest.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}

/// Sends a GET for `request_url` and reads the response as a page.
///
/// Redirects are followed by the client; `final_url` is the URL of the last
/// response.
///
/// # Errors
///
/// - `FetchError::Status` for any non-2xx status
/// - `FetchError::BodyTooLarge` when the body exceeds `MAX_RESPONSE_BODY_SIZE`
/// - `FetchError::Transport` for connection, redirect and body read failures
pub(crate) async fn get_page(
    client: &reqwest::Client,
    request_url: Url,
) -> Result<FetchedPage, FetchError> {
    let response = RequestHeaders::apply_to_request_builder(client.get(request_url))
        .send()
        .await?;

    let final_url = response.url().clone();
    let status = response.status();
    debug!("Response for {final_url}: {status}");

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge {
                size: length,
                limit: MAX_RESPONSE_BODY_SIZE,
            });
        }
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let body = response.text().await?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(FetchError::BodyTooLarge {
            size: body.len(),
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }
    debug!("Body length for {final_url}: {} bytes", body.len());

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        content_type,
        body,
    })
}
