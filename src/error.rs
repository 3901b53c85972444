// src/error.rs
// =============================================================================
// The crawler's error type.
//
// Every failure the crawl core can hit ends up as one CrawlError variant.
// All of them are fatal: the crawl stops at the first one, nothing is retried
// and no failing link is skipped. main.rs turns them into an "Error: ..."
// line on stderr and a non-zero exit code.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[source]: keeps the underlying error so `{:#}` / anyhow can show the chain
// =============================================================================

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// Invalid options, rejected before the output sink is opened or any
    /// page is fetched.
    #[error("{0}")]
    Configuration(String),

    /// The starting URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered, but not with a 2xx status.
    #[error("HTTP status code of {status} returned for {url}, but 2xx was expected")]
    HttpStatus { url: String, status: StatusCode },

    /// The request never produced a response (DNS, connect, TLS, timeout,
    /// unsupported scheme, unreadable body...).
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be set up (TLS backend, bad
    /// default header...).
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Writing to the output file or stdout failed.
    #[error("Failed to write output: {0}")]
    Sink(#[from] std::io::Error),

    /// The whole crawl took longer than the configured deadline.
    #[error("Crawl did not finish within {0:?}")]
    Timeout(Duration),
}
