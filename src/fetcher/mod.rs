// src/fetcher/mod.rs
// =============================================================================
// This module is the crawler's view of the outside world.
//
// The crawl core never touches HTTP or HTML directly. It talks to a
// PageFetcher: give it an article URL, get back the outbound article
// links of that page in document order. The real implementation
// (http.rs + html.rs) does reqwest + scraper; tests swap in canned maps.
//
// Submodules:
// - http: HttpPageFetcher, the reqwest-backed implementation
// - html: extracts article hrefs from a page's primary-content region
//
// Rust concepts:
// - async-trait: Lets trait methods be async so implementations can
//   do network I/O while tests stay purely in-memory
// - Trait objects: The crawler takes &dyn PageFetcher, so swapping
//   implementations needs no generics on the call site
// =============================================================================

mod html;
mod http;

pub use http::HttpPageFetcher;

use async_trait::async_trait;
use thiserror::Error;

// Why a page yielded no links
//
// Any of these is non-fatal to the crawl: the page is simply treated
// as having no outbound links for this run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// The request itself failed (timeout, DNS, connection, TLS)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

// The collaborator contract the crawl core depends on
//
// Implementations must return same-site article hrefs already resolved
// to absolute form, preserving document order. The crawler applies its
// own filtering and capping on top, so over-returning is fine.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn extract_links(&self, url: &str) -> Result<Vec<String>, FetchError>;
}
