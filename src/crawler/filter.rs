// src/crawler/filter.rs
// =============================================================================
// This module decides which URLs count as crawlable articles.
//
// Two jobs:
// 1. Canonicalization: turn a possibly-relative href into an absolute,
//    comparable URL string (using the `url` crate, like a browser would)
// 2. Validation: keep only same-site article pages, dropping meta pages
//    (Special:, Help:, File:, Template: and whatever else is configured)
//
// The same validation is applied to the start URL before any network
// activity and to every link discovered during the crawl, so validating
// an already-accepted URL a second time always passes.
//
// Rust concepts:
// - Borrowing the config: LinkFilter holds a reference-free clone so it
//   can be shared with the crawl loop without lifetime juggling
// - Option combinators: map_or for concise host checks
// =============================================================================

use crate::crawler::config::CrawlConfig;
use crate::crawler::error::CrawlError;
use url::Url;

// Applies the configured site policy to candidate URLs
#[derive(Debug, Clone)]
pub struct LinkFilter {
    domain_suffix: String,
    excluded_prefixes: Vec<String>,
}

impl LinkFilter {
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            domain_suffix: config.domain_suffix.clone(),
            excluded_prefixes: config.excluded_prefixes.clone(),
        }
    }

    // Resolves a possibly-relative href against a base URL
    //
    // Returns the canonical absolute form, or None if the href cannot
    // be resolved (or is not an http(s) resource at all).
    //
    // Examples:
    //   base = "https://en.wikipedia.org/wiki/Alpha"
    //   href = "/wiki/Beta" -> Some("https://en.wikipedia.org/wiki/Beta")
    //   href = "https://en.wikipedia.org/wiki/Gamma" -> unchanged
    //   href = "mailto:someone@example.org" -> None
    pub fn canonicalize(&self, base: &Url, href: &str) -> Option<String> {
        // Skip anchors and non-navigational schemes up front
        if href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("javascript:")
        {
            return None;
        }

        // join() handles both absolute and relative hrefs
        let resolved = base.join(href).ok()?;

        if resolved.scheme() == "http" || resolved.scheme() == "https" {
            Some(resolved.to_string())
        } else {
            None
        }
    }

    // Checks whether a canonical URL is a crawlable article page
    //
    // A URL qualifies when:
    // - it parses as a URL with a host
    // - the host ends with the configured domain suffix
    // - the path is non-empty (a bare origin is not an article)
    // - the path does not start with any excluded namespace prefix
    pub fn is_article_url(&self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !parsed
            .host_str()
            .map_or(false, |host| host.ends_with(&self.domain_suffix))
        {
            return false;
        }

        let path = parsed.path();
        if path.is_empty() || path == "/" {
            return false;
        }

        !self
            .excluded_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    // Validates a start URL, producing a typed error with the reason
    //
    // This is the same policy as is_article_url, but spelled out so the
    // user gets told what was wrong with their input.
    pub fn validate_start(&self, url: &str) -> Result<(), CrawlError> {
        let invalid = |reason: &str| CrawlError::InvalidStartUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;

        let host_ok = parsed
            .host_str()
            .map_or(false, |host| host.ends_with(&self.domain_suffix));
        if !host_ok {
            return Err(invalid(&format!(
                "host is not on the target domain '{}'",
                self.domain_suffix
            )));
        }

        let path = parsed.path();
        if path.is_empty() || path == "/" {
            return Err(invalid("URL has no article path"));
        }

        if let Some(prefix) = self
            .excluded_prefixes
            .iter()
            .find(|prefix| path.starts_with(prefix.as_str()))
        {
            return Err(invalid(&format!(
                "path is in the excluded namespace '{}'",
                prefix
            )));
        }

        Ok(())
    }
}
