// src/config.rs
// =============================================================================
// The validated settings the crawl core runs with.
//
// cli.rs owns the flags; this struct is what the rest of the program sees.
// Keeping it separate means the crawler never depends on clap, and tests can
// build a config directly without parsing any arguments.
// =============================================================================

use std::time::Duration;

use crate::error::CrawlError;

/// Words must be shorter than this to be accepted as a minimum length.
pub const MIN_LENGTH_LIMIT: usize = 10;

/// How ranked words are written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// "word: count" followed by one mutation per line
    #[default]
    Text,
    /// One JSON object per ranked word
    Json,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Words shorter than this (in characters) are not counted
    pub min_length: usize,
    /// How many of the most frequent words to report per page
    pub top_count: usize,
    /// Link hops allowed from the starting page (1 = just the starting page)
    pub depth: usize,
    /// Stop after this many page fetches
    pub max_pages: usize,
    /// Deadline for the whole crawl, None = no deadline
    pub timeout: Option<Duration>,
    /// Skip URLs that were already crawled
    pub unique_urls: bool,
    pub format: OutputFormat,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            top_count: 10,
            depth: 1,
            max_pages: 10_000,
            timeout: Some(Duration::from_secs(300)),
            unique_urls: false,
            format: OutputFormat::Text,
        }
    }
}

impl CrawlConfig {
    /// Checks the settings before anything touches the network or the
    /// output file.
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.min_length >= MIN_LENGTH_LIMIT {
            return Err(CrawlError::Configuration(format!(
                "Minimum length must be less than {}",
                MIN_LENGTH_LIMIT
            )));
        }

        if self.max_pages == 0 {
            return Err(CrawlError::Configuration(
                "Maximum page count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
