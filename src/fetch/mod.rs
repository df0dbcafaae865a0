//! Page retrieval.
//!
//! A `PageFetcher` turns a normalized URL into the page body plus the URL it
//! was actually served from. Two implementations exist:
//! - `DirectFetcher` requests the page from its origin
//! - `RelayFetcher` requests it through a cross-origin relay prefix
//!
//! Neither retries. Timeouts are enforced by the caller around `fetch`.

mod direct;
mod relay;
mod request;
mod types;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::config::Config;
use crate::error_handling::FetchError;

// Re-export public API
pub use direct::DirectFetcher;
pub use relay::{relay_url, RelayFetcher};
pub use types::FetchedPage;

/// Retrieves a page body for analysis.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, failing on transport errors and non-2xx statuses.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Builds the fetcher selected by the configuration.
///
/// A configured relay prefix selects `RelayFetcher`; otherwise pages are
/// fetched directly.
pub fn fetcher_from_config(config: &Config, client: Arc<reqwest::Client>) -> Arc<dyn PageFetcher> {
    match config.relay.as_deref() {
        Some(prefix) => {
            log::info!("Fetching pages through relay {prefix}");
            Arc::new(RelayFetcher::new(client, prefix))
        }
        None => Arc::new(DirectFetcher::new(client)),
    }
}
