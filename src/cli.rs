// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// This tool does exactly one thing (crawl outward from an article), so
// there are no subcommands - just the start URL, the cycle count, and a
// few policy overrides. The URL and cycle count are optional on the
// command line; whatever is missing gets prompted for interactively.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: Arguments the user may omit
// - Derive macros: Automatically generate parsing code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "wiki-frontier",
    version = "0.1.0",
    about = "Breadth-first crawl of a wiki site, collecting article links",
    long_about = "wiki-frontier starts from one article URL, expands outward for a \
                  small number of breadth-first cycles, and prints the set of \
                  distinct article URLs it discovered along the way."
)]
pub struct Cli {
    /// Article URL to start crawling from
    ///
    /// Example: https://en.wikipedia.org/wiki/Rust_(programming_language)
    /// Prompted for interactively when omitted
    pub start_url: Option<String>,

    /// Number of breadth-first cycles to run (1-3)
    ///
    /// Prompted for interactively when omitted
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Output the full result as JSON instead of a readable summary
    #[arg(long)]
    pub json: bool,

    /// Maximum number of new links kept per page (default: 10)
    #[arg(long)]
    pub max_links: Option<usize>,

    /// Domain suffix that counts as same-site (default: wikipedia.org)
    ///
    /// Lets the crawler run against any wiki-style site, e.g.
    /// --domain wiki.archlinux.org
    #[arg(long)]
    pub domain: Option<String>,

    /// Replace the excluded namespace prefixes (repeatable)
    ///
    /// Default excludes /wiki/Special:, /wiki/Help:, /wiki/File: and
    /// /wiki/Template:. Passing --exclude at least once replaces the
    /// whole default list.
    #[arg(long = "exclude")]
    pub excluded_prefixes: Vec<String>,
}
