use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::error_handling::FetchError;

use super::request::get_page;
use super::types::FetchedPage;
use super::PageFetcher;

/// Fetches pages straight from their origin.
#[derive(Debug, Clone)]
pub struct DirectFetcher {
    client: Arc<reqwest::Client>,
}

impl DirectFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for DirectFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        log::debug!("Fetching {url} directly");
        get_page(&self.client, url.clone()).await
    }
}
