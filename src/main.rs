// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Prompt interactively for anything the user left out
// 3. Run the breadth-first crawl
// 4. Print the discovered articles (readable summary or JSON)
//
// Any validation or network setup error is caught here, printed as a
// plain message, and the process ends normally - this is an interactive
// tool, not a pipeline stage, so there are no special exit codes.
//
// Rust concepts:
// - async/await: The crawl overlaps its page fetches
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: Bubbles errors up to the single handler in main
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod crawler;   // src/crawler/ - the BFS frontier-expansion core
mod fetcher;   // src/fetcher/ - HTTP fetching and HTML link extraction

use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use crawler::{CrawlConfig, LinkFrontierCrawler};
use fetcher::HttpPageFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

// How many discovered URLs the readable summary lists
const SUMMARY_LINK_COUNT: usize = 20;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Any error ends up here as a message; the process still exits
    // normally either way
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

// The final crawl result, as serialized with --json
#[derive(Debug, Serialize)]
struct CrawlReport {
    start_url: String,
    cycles: u32,
    total_links: usize,
    links: Vec<String>,
}

// This is the main application logic
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let args = Cli::parse();

    // Build the crawl configuration: defaults, then CLI overrides
    let mut config = CrawlConfig::default();
    if let Some(max_links) = args.max_links {
        config.max_links_per_page = max_links;
    }
    if let Some(domain) = args.domain {
        config.domain_suffix = domain;
    }
    if !args.excluded_prefixes.is_empty() {
        config.excluded_prefixes = args.excluded_prefixes;
    }

    // Anything not on the command line gets prompted for
    let start_url = match args.start_url {
        Some(url) => url,
        None => prompt("Enter a wiki article URL: ")?,
    };
    let cycles = match args.cycles {
        Some(n) => n,
        None => prompt("Enter number of cycles (1-3): ")?
            .parse::<u32>()
            .context("cycle count must be a whole number")?,
    };

    println!("🔍 Starting crawl from: {}", start_url);
    println!("📊 Cycles to run: {}", cycles);

    let crawler = LinkFrontierCrawler::new(config.clone());
    let fetcher = HttpPageFetcher::new(config.fetch_timeout_secs)?;

    // run() validates the URL and cycle count before touching the network
    let discovered = crawler.run(&start_url, cycles, &fetcher).await?;

    // Sort for a deterministic listing (HashSet order changes run to run)
    let mut links: Vec<String> = discovered.into_iter().collect();
    links.sort();

    let report = CrawlReport {
        start_url,
        cycles,
        total_links: links.len(),
        links,
    };

    if args.json {
        // Serialize the full report to JSON and print
        let json_output = serde_json::to_string_pretty(&report)?;
        println!("{}", json_output);
    } else {
        print_summary(&report);
    }

    Ok(())
}

// Reads one trimmed line from stdin, showing the given prompt first
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    // Flush so the prompt appears before we block on input
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

// Prints the human-readable result summary
fn print_summary(report: &CrawlReport) {
    println!();
    println!("{}", "=".repeat(50));
    println!("✅ CRAWL COMPLETED");
    println!("{}", "=".repeat(50));
    println!("Total unique article links found: {}", report.total_links);

    let shown = report.links.len().min(SUMMARY_LINK_COUNT);
    println!("\nFirst {} links:", shown);
    for (i, link) in report.links.iter().take(SUMMARY_LINK_COUNT).enumerate() {
        println!("{:2}. {}", i + 1, link);
    }
}
