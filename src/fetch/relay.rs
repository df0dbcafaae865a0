//! Fetching through a cross-origin relay.
//!
//! The relay is any HTTP endpoint that returns the raw body of the URL
//! appended to its prefix, e.g. `https://api.allorigins.win/raw?url=`.

use std::sync::Arc;

use async_trait::async_trait;
use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::error_handling::FetchError;

use super::request::get_page;
use super::types::FetchedPage;
use super::PageFetcher;

/// Fetches pages through a relay prefix.
#[derive(Debug, Clone)]
pub struct RelayFetcher {
    client: Arc<reqwest::Client>,
    prefix: String,
}

impl RelayFetcher {
    pub fn new(client: Arc<reqwest::Client>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Builds the relay request URL: the prefix followed by the percent-encoded target.
///
/// # Errors
///
/// Returns `FetchError::InvalidRelayTarget` if the combined string is not a
/// valid URL.
pub fn relay_url(prefix: &str, target: &Url) -> Result<Url, FetchError> {
    let encoded: String = byte_serialize(target.as_str().as_bytes()).collect();
    Url::parse(&format!("{prefix}{encoded}")).map_err(|_| FetchError::InvalidRelayTarget {
        target: target.to_string(),
    })
}

#[async_trait]
impl PageFetcher for RelayFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let request_url = relay_url(&self.prefix, url)?;
        log::debug!("Fetching {url} via relay {request_url}");

        let page = get_page(&self.client, request_url).await?;
        // The relay's own URL says nothing about the analyzed page
        Ok(FetchedPage {
            final_url: url.clone(),
            ..page
        })
    }
}
