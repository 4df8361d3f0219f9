// src/fetcher/http.rs
// =============================================================================
// This module is the real, network-backed PageFetcher.
//
// Key functionality:
// - One shared reqwest Client with a per-request timeout (connection
//   pooling means repeated fetches against the same host are cheap)
// - GET the page, require a success status, hand the body to the
//   HTML extractor
//
// Every failure mode (timeout, DNS, TLS, non-2xx status) comes back as
// a FetchError; the crawler decides what that means (zero links).
//
// Rust concepts:
// - async/await: For network I/O without blocking the runtime
// - #[async_trait]: Implements the async PageFetcher trait
// =============================================================================

use crate::fetcher::html::extract_article_links;
use crate::fetcher::{FetchError, PageFetcher};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// Fetches pages over HTTP and extracts their article links
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    // Builds a fetcher with the given per-request timeout
    //
    // The timeout covers the whole request (connect + response body),
    // so a hung server costs at most timeout_secs per page.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn extract_links(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        Ok(extract_article_links(&html, url))
    }
}
