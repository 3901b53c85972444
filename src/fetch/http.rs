// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP(S).
//
// Key functionality:
// - One reqwest Client for the whole crawl (connection pooling)
// - Per-request timeout and a bounded number of redirects
// - Any non-2xx status is an error that names the URL and the status
//
// There is deliberately no retry: a failing page stops the crawl.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::PageFetcher;
use crate::error::CrawlError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

// The production fetcher
//
// Cloning is cheap: reqwest::Client is a reference-counted handle.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher whose requests give up after `request_timeout`
    pub fn new(request_timeout: Duration) -> Result<Self, CrawlError> {
        Self::with_user_agent(request_timeout, USER_AGENT)
    }

    fn with_user_agent(request_timeout: Duration, user_agent: &str) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()
            .map_err(CrawlError::HttpClient)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let transport = |source: reqwest::Error| CrawlError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        // text() decodes using the charset from Content-Type (UTF-8 by
        // default) and replaces invalid sequences instead of failing
        let body = response.text().await.map_err(transport)?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());

        Ok(body)
    }
}
