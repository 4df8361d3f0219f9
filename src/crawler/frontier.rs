// src/crawler/frontier.rs
// =============================================================================
// This module implements the level-synchronous breadth-first crawl.
//
// How it works:
// 1. Validate the start URL and cycle count (no network before this)
// 2. Seed the frontier and the discovered set with the start URL
// 3. For each cycle: fetch links for every frontier page, filter and
//    dedup them, and collect the survivors into the next frontier
// 4. After exactly n cycles, return everything ever discovered
//
// Guarantees:
// - No page is ever expanded (fetched for links) twice
// - A URL enters the discovered set at most once, no matter how many
//   pages link to it in the same cycle
// - A page that fails to fetch contributes zero links; the crawl goes on
// - An empty frontier does not end the crawl early; the remaining
//   cycles just find nothing
//
// Within one cycle the page fetches run concurrently (they are
// independent), but their results are merged one page at a time so the
// dedup sets never race. Cycle k+1 starts only after every cycle-k page
// has been merged and marked visited.
//
// Rust concepts:
// - HashSet: O(1) membership checks for visited/discovered URLs
// - buffer_unordered: Bounded fan-out of async fetches
// - Trait objects: The fetcher arrives as &dyn PageFetcher
// =============================================================================

use crate::crawler::config::CrawlConfig;
use crate::crawler::error::CrawlError;
use crate::crawler::filter::LinkFilter;
use crate::fetcher::PageFetcher;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use url::Url;

// How many page fetches may be in flight at once within a cycle
//
// All requests go to the same site, so this stays modest; raising it
// mostly trades politeness for speed
const CONCURRENT_FETCHES: usize = 8;

// The mutable accumulator threaded through the crawl
//
// Owned by the crawl loop and only mutated in the sequential merge
// step, which is what keeps the dedup invariants airtight even though
// fetches overlap.
#[derive(Debug, Default)]
struct CrawlState {
    /// Pages whose outbound links have been expanded
    visited: HashSet<String>,
    /// Every URL ever seen: the seed plus all links kept in any cycle
    discovered: HashSet<String>,
}

impl CrawlState {
    fn seeded(start_url: &str) -> Self {
        let mut state = Self::default();
        state.discovered.insert(start_url.to_string());
        state
    }

    /// True if the URL was already expanded or already found
    fn already_seen(&self, url: &str) -> bool {
        self.visited.contains(url) || self.discovered.contains(url)
    }
}

// Drives N-cycle breadth-first expansion from a validated start URL
pub struct LinkFrontierCrawler {
    config: CrawlConfig,
    filter: LinkFilter,
}

impl LinkFrontierCrawler {
    pub fn new(config: CrawlConfig) -> Self {
        let filter = LinkFilter::new(&config);
        Self { config, filter }
    }

    /// Checks the start URL against the configured site policy
    pub fn validate_start(&self, url: &str) -> Result<(), CrawlError> {
        self.filter.validate_start(url)
    }

    /// Checks the requested cycle count against the configured bound
    pub fn validate_cycle_count(&self, cycles: u32) -> Result<(), CrawlError> {
        if self.config.cycle_bounds.contains(&cycles) {
            Ok(())
        } else {
            Err(CrawlError::InvalidCycleCount {
                given: cycles,
                min: *self.config.cycle_bounds.start(),
                max: *self.config.cycle_bounds.end(),
            })
        }
    }

    // Runs the crawl and returns every distinct article URL discovered
    //
    // Parameters:
    //   start_url: the article to expand from (validated first)
    //   cycles: how many BFS levels to expand (validated first)
    //   fetcher: the page-link collaborator (HTTP in production)
    //
    // Both validations happen before any fetch, so an Err here means
    // nothing was crawled at all.
    pub async fn run(
        &self,
        start_url: &str,
        cycles: u32,
        fetcher: &dyn PageFetcher,
    ) -> Result<HashSet<String>, CrawlError> {
        self.validate_start(start_url)?;
        self.validate_cycle_count(cycles)?;

        let mut state = CrawlState::seeded(start_url);
        let mut frontier: HashSet<String> = HashSet::from([start_url.to_string()]);

        for cycle in 1..=cycles {
            println!("\n🔄 Cycle {}:", cycle);
            println!("Processing {} page(s)...", frontier.len());

            // Defensive: by construction the frontier never overlaps the
            // visited set, but the invariant is cheap to re-check
            let pending: Vec<String> = frontier
                .into_iter()
                .filter(|url| !state.visited.contains(url))
                .collect();

            // Fan out the fetches, bounded; results arrive as pages finish.
            // Per-page order inside each link list is still document order.
            let fetched: Vec<(String, Vec<String>)> = stream::iter(pending)
                .map(|url| async move {
                    println!("  Expanding: {}", url);
                    let links = match fetcher.extract_links(&url).await {
                        Ok(links) => links,
                        Err(e) => {
                            // Non-fatal: this page just has no links for us
                            eprintln!("  Warning: Failed to fetch {}: {}", url, e);
                            Vec::new()
                        }
                    };
                    (url, links)
                })
                .buffer_unordered(CONCURRENT_FETCHES)
                .collect()
                .await;

            // Sequential merge: the only place the sets are mutated
            let mut next_frontier = HashSet::new();
            for (page_url, links) in fetched {
                self.merge_page_links(&page_url, &links, &mut state, &mut next_frontier);
                state.visited.insert(page_url);
            }

            println!("Found {} new link(s) in this cycle", next_frontier.len());
            println!("Total unique links collected: {}", state.discovered.len());

            frontier = next_frontier;
        }

        Ok(state.discovered)
    }

    // Folds one page's extracted links into the crawl state
    //
    // Links are consumed in document order; the first max_links_per_page
    // that survive filtering and dedup are kept, the rest of THIS page's
    // links are dropped. Other pages in the cycle are unaffected.
    fn merge_page_links(
        &self,
        page_url: &str,
        links: &[String],
        state: &mut CrawlState,
        next_frontier: &mut HashSet<String>,
    ) {
        // The page URL is canonical (it came through this same path),
        // so a parse failure here is unreachable in practice
        let base = match Url::parse(page_url) {
            Ok(url) => url,
            Err(_) => return,
        };

        let mut kept = 0;
        for href in links {
            if kept >= self.config.max_links_per_page {
                break;
            }

            let Some(canonical) = self.filter.canonicalize(&base, href) else {
                continue;
            };

            // Same policy as the start URL: meta pages are silently dropped
            if !self.filter.is_article_url(&canonical) {
                continue;
            }

            if state.already_seen(&canonical) {
                continue;
            }

            state.discovered.insert(canonical.clone());
            next_frontier.insert(canonical);
            kept += 1;
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why level-synchronous BFS instead of a plain queue?
//    - A queue mixes pages from different depths
//    - Keeping whole levels ("cycles") separate makes "expand for N
//      levels" trivial: just run the loop body N times
//    - The next frontier is rebuilt from scratch each cycle
//
// 2. Why two sets (visited AND discovered)?
//    - visited answers "have we expanded this page's links?"
//    - discovered answers "have we ever seen this URL at all?"
//    - A URL can be discovered without ever being visited (found in the
//      last cycle, so it never gets expanded)
//
// 3. Why merge sequentially when fetches are concurrent?
//    - Two pages can both link to the same new URL in one cycle
//    - If both inserted into the sets at the same time, "discovered
//      once" could silently break
//    - One merge loop after the fan-out keeps the invariant without
//      any locking
//
// 4. What is buffer_unordered?
//    - Runs up to N futures concurrently, yielding results as they
//      complete (not in submission order, hence "unordered")
//    - Completion order does not matter here: the merge step treats
//      pages within a cycle as an unordered batch anyway
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const ALPHA: &str = "https://example.org/wiki/Alpha";
    const BETA: &str = "https://example.org/wiki/Beta";
    const GAMMA: &str = "https://example.org/wiki/Gamma";

    // A canned fetcher: URL -> links, recording every fetch call
    struct MapFetcher {
        pages: HashMap<String, Vec<String>>,
        calls: Mutex<Vec<String>>,
    }

    impl MapFetcher {
        fn new(pages: &[(&str, &[&str])]) -> Self {
            let pages = pages
                .iter()
                .map(|(url, links)| {
                    (
                        url.to_string(),
                        links.iter().map(|l| l.to_string()).collect(),
                    )
                })
                .collect();
            Self { pages, calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for MapFetcher {
        async fn extract_links(&self, url: &str) -> Result<Vec<String>, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            Ok(self.pages.get(url).cloned().unwrap_or_default())
        }
    }

    // A fetcher where every page fails
    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn extract_links(&self, _url: &str) -> Result<Vec<String>, FetchError> {
            Err(FetchError::Status(503))
        }
    }

    fn crawler() -> LinkFrontierCrawler {
        let config = CrawlConfig {
            domain_suffix: "example.org".to_string(),
            ..CrawlConfig::default()
        };
        LinkFrontierCrawler::new(config)
    }

    #[tokio::test]
    async fn test_single_cycle_filters_and_dedups() {
        // Beta appears twice and Special:Admin is a meta page;
        // the result keeps exactly {Alpha, Beta, Gamma}
        let fetcher = MapFetcher::new(&[(
            ALPHA,
            &[
                BETA,
                GAMMA,
                "https://example.org/wiki/Special:Admin",
                BETA,
            ][..],
        )]);

        let result = crawler().run(ALPHA, 1, &fetcher).await.unwrap();

        let expected: HashSet<String> =
            [ALPHA, BETA, GAMMA].iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_second_cycle_skips_already_discovered() {
        // Beta links back to Alpha; Alpha is already discovered so only
        // Gamma is new in cycle two
        let fetcher = MapFetcher::new(&[
            (ALPHA, &[BETA][..]),
            (BETA, &[ALPHA, GAMMA][..]),
        ]);

        let result = crawler().run(ALPHA, 2, &fetcher).await.unwrap();

        let expected: HashSet<String> =
            [ALPHA, BETA, GAMMA].iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_no_page_is_expanded_twice() {
        // Alpha and Beta link to each other; each must be fetched once
        let fetcher = MapFetcher::new(&[
            (ALPHA, &[BETA][..]),
            (BETA, &[ALPHA][..]),
        ]);

        crawler().run(ALPHA, 3, &fetcher).await.unwrap();

        let mut calls = fetcher.calls();
        calls.sort();
        calls.dedup();
        assert_eq!(calls.len(), fetcher.calls().len(), "duplicate fetch calls");
    }

    #[tokio::test]
    async fn test_per_page_cap_keeps_first_ten() {
        // 15 qualifying links on one page; only the first 10 survive
        let links: Vec<String> = (0..15)
            .map(|i| format!("https://example.org/wiki/Article_{:02}", i))
            .collect();
        let link_refs: Vec<&str> = links.iter().map(|s| s.as_str()).collect();
        let fetcher = MapFetcher::new(&[(ALPHA, &link_refs[..])]);

        let result = crawler().run(ALPHA, 1, &fetcher).await.unwrap();

        // Seed + 10 capped links
        assert_eq!(result.len(), 11);
        // Document order: the FIRST ten qualify, the last five do not
        assert!(result.contains("https://example.org/wiki/Article_00"));
        assert!(result.contains("https://example.org/wiki/Article_09"));
        assert!(!result.contains("https://example.org/wiki/Article_10"));
    }

    #[tokio::test]
    async fn test_cap_counts_only_kept_links() {
        // Excluded and duplicate links do not consume cap slots
        let mut links = vec!["https://example.org/wiki/Special:Admin"; 10];
        links.push(BETA);
        let fetcher = MapFetcher::new(&[(ALPHA, &links[..])]);

        let result = crawler().run(ALPHA, 1, &fetcher).await.unwrap();
        assert!(result.contains(BETA));
    }

    #[tokio::test]
    async fn test_empty_frontier_completes_remaining_cycles() {
        // Alpha has no links, so cycles 2 and 3 have empty frontiers;
        // the crawl still finishes normally with just the seed
        let fetcher = MapFetcher::new(&[(ALPHA, &[][..])]);

        let result = crawler().run(ALPHA, 3, &fetcher).await.unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.contains(ALPHA));
        assert_eq!(fetcher.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_non_fatal() {
        let result = crawler().run(ALPHA, 2, &FailingFetcher).await.unwrap();

        // The failing seed contributes zero links; the seed itself remains
        assert_eq!(result.len(), 1);
        assert!(result.contains(ALPHA));
    }

    #[tokio::test]
    async fn test_result_always_contains_start_url() {
        for n in 1..=3 {
            let fetcher = MapFetcher::new(&[(ALPHA, &[BETA][..])]);
            let result = crawler().run(ALPHA, n, &fetcher).await.unwrap();
            assert!(result.contains(ALPHA), "missing seed for n={}", n);
        }
    }

    #[tokio::test]
    async fn test_rejects_out_of_bounds_cycle_count() {
        let fetcher = MapFetcher::new(&[]);
        let c = crawler();

        assert!(matches!(
            c.run(ALPHA, 0, &fetcher).await,
            Err(CrawlError::InvalidCycleCount { given: 0, .. })
        ));
        assert!(matches!(
            c.run(ALPHA, 4, &fetcher).await,
            Err(CrawlError::InvalidCycleCount { given: 4, .. })
        ));
        // No network activity happened for either
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_foreign_start_url() {
        let fetcher = MapFetcher::new(&[]);
        let result = crawler().run("https://example.com/page", 1, &fetcher).await;

        assert!(matches!(result, Err(CrawlError::InvalidStartUrl { .. })));
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_shared_link_discovered_once() {
        // Beta and Gamma both link to Delta in the same cycle;
        // Delta is kept once and expanded once
        let delta = "https://example.org/wiki/Delta";
        let fetcher = MapFetcher::new(&[
            (ALPHA, &[BETA, GAMMA][..]),
            (BETA, &[delta][..]),
            (GAMMA, &[delta][..]),
        ]);

        let result = crawler().run(ALPHA, 3, &fetcher).await.unwrap();

        assert!(result.contains(delta));
        let delta_fetches = fetcher
            .calls()
            .iter()
            .filter(|u| u.as_str() == delta)
            .count();
        assert_eq!(delta_fetches, 1);
    }
}
