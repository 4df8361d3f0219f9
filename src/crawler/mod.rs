// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl core.
//
// Submodules:
// - config: Site policy and crawl limits (domain, namespaces, caps)
// - filter: URL canonicalization and article validation
// - frontier: The level-synchronous BFS driver itself
// - error: Typed validation errors
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod config;
mod error;
mod filter;
mod frontier;

// Re-export public items from submodules
// This lets users write `crawler::LinkFrontierCrawler` instead of
// `crawler::frontier::LinkFrontierCrawler`
pub use config::CrawlConfig;
pub use error::CrawlError;
pub use filter::LinkFilter;
pub use frontier::LinkFrontierCrawler;
