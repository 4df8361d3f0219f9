// src/crawler/config.rs
// =============================================================================
// This module defines the crawl configuration.
//
// Everything the crawler treats as a policy decision lives here:
// - Which domain counts as "the wiki" (domain suffix match)
// - Which path prefixes are meta pages rather than articles
// - How many BFS cycles a caller is allowed to request
// - How many links we keep from a single page
// - How long we wait for a single page fetch
//
// Keeping these as configuration (instead of constants buried in the
// traversal loop) lets the same crawler run against any wiki-style site.
//
// Rust concepts:
// - Default trait: Gives us a ready-to-use Wikipedia configuration
// - RangeInclusive: A closed range type for the cycle bound
// - Serde derives: So the config can be loaded/dumped as JSON
// =============================================================================

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// Configuration for a crawl
//
// The Default impl reproduces the classic Wikipedia setup:
// English Wikipedia domain, the four standard meta namespaces excluded,
// 1-3 cycles, 10 links per page, 10 second fetch timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Hosts must end with this suffix to count as same-site
    /// (e.g. "wikipedia.org" matches "en.wikipedia.org")
    pub domain_suffix: String,

    /// Path prefixes that mark meta pages, not articles
    /// Links matching any of these are silently dropped
    pub excluded_prefixes: Vec<String>,

    /// Closed bound on how many BFS cycles a caller may request
    pub cycle_bounds: RangeInclusive<u32>,

    /// Maximum number of new links kept from a single page
    pub max_links_per_page: usize,

    /// Timeout for a single page fetch, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            domain_suffix: "wikipedia.org".to_string(),
            excluded_prefixes: vec![
                "/wiki/Special:".to_string(),
                "/wiki/Help:".to_string(),
                "/wiki/File:".to_string(),
                "/wiki/Template:".to_string(),
            ],
            cycle_bounds: 1..=3,
            max_links_per_page: 10,
            fetch_timeout_secs: 10,
        }
    }
}
