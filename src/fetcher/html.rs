// src/fetcher/html.rs
// =============================================================================
// This module extracts article links from a wiki page's HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Extraction is scoped to the primary-content region of the page
// (the #bodyContent div on MediaWiki sites). Navigation bars, sidebars
// and footers live outside that div, so scoping keeps us on real
// article-to-article links. A page without that region yields nothing.
//
// Rust concepts:
// - ElementRef::select: Runs a selector inside an element subtree
// - Iterator order: select() walks the DOM in document order, which is
//   what gives the crawler its "first K links" semantics
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// CSS id of the region that holds the article text on MediaWiki pages
const CONTENT_REGION: &str = "#bodyContent";

// Extracts article hrefs from HTML, in document order
//
// Parameters:
//   html: the page HTML to parse (borrowed as &str)
//   page_url: the URL of the page (for resolving relative hrefs)
//
// Returns: Vec<String> of absolute article URLs, document order preserved
//
// A link qualifies when its href starts with "/wiki/" and the article
// name contains no namespace colon (so "/wiki/Rust" passes while
// "/wiki/Special:Random" does not). Duplicates are NOT removed here;
// dedup is the crawler's job, because only the crawler knows what has
// been discovered globally.
pub fn extract_article_links(html: &str, page_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);

    // Both selectors are constants and known to be valid, so unwrap()
    // here is a programmer-error panic, never a runtime condition
    let content_selector = Selector::parse(CONTENT_REGION).unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    // Parse the page URL once for resolving relative hrefs
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid page URL: {}", page_url);
            return links;
        }
    };

    // No content region means no article body to extract from
    let Some(content) = document.select(&content_selector).next() else {
        return links;
    };

    for element in content.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if !is_article_href(href) {
                continue;
            }
            // Resolve "/wiki/Foo" against the page's origin
            if let Ok(absolute) = base.join(href) {
                links.push(absolute.to_string());
            }
        }
    }

    links
}

// Checks if an href points at a plain article
//
// Wiki article paths look like "/wiki/Article_name". Anything with a
// colon after "/wiki/" is a namespaced meta page (Special:, File:,
// Talk:, ...) and is skipped at this layer already.
fn is_article_href(href: &str) -> bool {
    match href.strip_prefix("/wiki/") {
        Some(name) => !name.is_empty() && !name.contains(':'),
        None => false,
    }
}
