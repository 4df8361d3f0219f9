// src/crawler/error.rs
// =============================================================================
// This module defines the typed errors the crawl core can return.
//
// Only input validation can fail the crawl as a whole: once the start URL
// and cycle count are accepted, per-page fetch problems are absorbed
// (a failing page just contributes zero links), so there is deliberately
// no variant for them here.
//
// Rust concepts:
// - thiserror: Derives std::error::Error + Display from attributes
// - Enums with data: Each variant carries what the caller needs to report
// =============================================================================

use thiserror::Error;

// Errors the crawler surfaces to callers
//
// Both variants are validation failures raised before any network
// activity, so a returned error means no partial crawl state exists.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start URL is not a crawlable article URL for the configured site
    #[error("invalid start URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    /// The requested cycle count is outside the configured bound
    #[error("cycle count {given} is outside the allowed range {min}-{max}")]
    InvalidCycleCount { given: u32, min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_readable() {
        let err = CrawlError::InvalidStartUrl {
            url: "https://example.com/page".to_string(),
            reason: "host is not on the target domain".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/page"));
        assert!(msg.contains("target domain"));

        let err = CrawlError::InvalidCycleCount { given: 4, min: 1, max: 3 };
        assert_eq!(
            err.to_string(),
            "cycle count 4 is outside the allowed range 1-3"
        );
    }
}
