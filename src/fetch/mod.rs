// src/fetch/mod.rs
// =============================================================================
// This module is how the crawler gets page content.
//
// The crawler only knows about the PageFetcher trait. main.rs plugs in the
// real HttpFetcher; tests plug in an in-memory fake so the whole crawl can be
// exercised without a network.
//
// Rust concepts:
// - Traits: a shared interface that several types can implement
// - async-trait: lets a trait have async methods that work with &dyn / generics
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::CrawlError;

pub use http::HttpFetcher;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Downloads `url` and returns the body as text.
    ///
    /// Must fail with `CrawlError::HttpStatus` for a non-2xx response and
    /// `CrawlError::Transport` when no response could be obtained.
    async fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}
