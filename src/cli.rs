// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the Cli struct below IS the list of options, and
// clap generates the parsing, --help and --version from it.
//
// The rest of the program never sees Cli directly. crawl_config() turns it
// into a CrawlConfig, and prompt_for_url() asks for the URL when -u was not
// given.
// =============================================================================

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::{CrawlConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "word-crawler",
    version,
    about = "Crawls web pages and lists their most frequent words, plus password guesses built from them",
    long_about = "word-crawler downloads a web page, counts the words in its visible text and prints \
                  the most frequent ones, each followed by a set of password-style variations. \
                  With --depth above 1 it follows every link on the page and does the same there."
)]
pub struct Cli {
    /// URL of the web page to start from (asked for interactively if missing)
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Minimum word length, must be less than 10 (0 or less = no limit)
    #[arg(short = 'l', long = "length", default_value_t = 0, allow_negative_numbers = true)]
    pub min_length: i64,

    /// Number of top words to report per page (0 or less = none)
    #[arg(short = 't', long = "top", default_value_t = 10, allow_negative_numbers = true)]
    pub top_count: i64,

    /// File to write to instead of the console (emptied first)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Crawl depth (1 = only the starting page, 2 = also the pages it links to, ...;
    /// 0 or less = nothing is fetched)
    #[arg(short = 'd', long, default_value_t = 1, allow_negative_numbers = true)]
    pub depth: i64,

    /// Write one JSON object per word instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Stop after fetching this many pages
    #[arg(long, default_value_t = 10_000)]
    pub max_pages: usize,

    /// Give up on the whole crawl after this many seconds (0 = never)
    #[arg(long = "timeout", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long = "request-timeout", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Crawl each URL at most once (by default a page linked twice is crawled twice)
    #[arg(long)]
    pub unique_urls: bool,

    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            min_length: non_negative(self.min_length),
            top_count: non_negative(self.top_count),
            depth: non_negative(self.depth),
            max_pages: self.max_pages,
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            unique_urls: self.unique_urls,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Negative counts behave like 0: no length filter, no words, no crawl
fn non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

// Asks for the starting URL on the terminal
//
// The prompt goes to stderr so it never ends up in redirected output.
pub fn prompt_for_url() -> Result<String> {
    prompt_from(io::stdin().lock(), io::stderr())
}

fn prompt_from(mut input: impl BufRead, mut prompt: impl Write) -> Result<String> {
    write!(prompt, "Web URL: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let url = line.trim();
    if url.is_empty() {
        bail!("A URL is required");
    }

    Ok(url.to_string())
}
