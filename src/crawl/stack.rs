// src/crawl/stack.rs
// =============================================================================
// This module implements the crawl: depth-first, one page at a time.
//
// How it works:
// 1. Put the starting URL on a stack with the full depth budget
// 2. Pop a task; if its depth budget is used up, drop it (no request made)
// 3. Fetch the page, rank its words and write them to the output
// 4. Push the page's links with one less depth, in reverse document order
// 5. Repeat until the stack is empty
//
// Pushing the links in reverse means the first link is popped first, and its
// whole subtree is finished before the second link is touched. The output is
// therefore in the same pre-order a recursive crawl would produce: a page's
// words always come before the words of the pages it links to.
//
// Policy:
// - Any fetch error stops the whole crawl (no retries, no skipping)
// - URLs are NOT deduplicated unless unique_urls is set; a page linked twice
//   is crawled twice
// - max_pages and the overall timeout bound the work on link-heavy sites
//
// Rust concepts:
// - Vec as a stack: push() and pop() both work on the end
// - Generics: the crawl works with any PageFetcher and any io::Write sink
// =============================================================================

use std::collections::HashSet;
use std::io::Write;

use url::Url;

use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::extract::{extract_links, extract_text};
use crate::fetch::PageFetcher;
use crate::output::ReportWriter;
use crate::words::top_words;

// A page waiting to be crawled
#[derive(Debug, Clone)]
struct CrawlTask {
    url: String,
    remaining_depth: usize, // link hops still allowed, counting this page
}

// What a finished crawl did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages fetched and reported
    pub pages_visited: usize,
    /// Ranked words written, over all pages
    pub words_emitted: usize,
    /// True if max_pages stopped the crawl before it was done
    pub truncated: bool,
}

// Crawls from `start_url`, writing every page's top words to `report`
//
// Parameters:
//   start_url: the first page
//   config: validated settings (depth, min length, top-N, limits)
//   fetcher: where page content comes from
//   report: the output sink
//
// Returns: a summary, or the first error hit. Lines written before an error
// stay in the sink.
pub async fn crawl<F, W>(
    start_url: &str,
    config: &CrawlConfig,
    fetcher: &F,
    report: &mut ReportWriter<W>,
) -> Result<CrawlSummary, CrawlError>
where
    F: PageFetcher + ?Sized,
    W: Write,
{
    config.validate()?;

    // No depth budget: nothing to fetch, so the URL is never looked at
    if config.depth == 0 {
        return Ok(CrawlSummary::default());
    }

    Url::parse(start_url).map_err(|e| CrawlError::InvalidUrl {
        url: start_url.to_string(),
        reason: e.to_string(),
    })?;

    let pages = walk(start_url, config, fetcher, report);

    match config.timeout {
        Some(limit) => tokio::time::timeout(limit, pages)
            .await
            .map_err(|_| CrawlError::Timeout(limit))?,
        None => pages.await,
    }
}

async fn walk<F, W>(
    start_url: &str,
    config: &CrawlConfig,
    fetcher: &F,
    report: &mut ReportWriter<W>,
) -> Result<CrawlSummary, CrawlError>
where
    F: PageFetcher + ?Sized,
    W: Write,
{
    let mut stack = vec![CrawlTask {
        url: start_url.to_string(),
        remaining_depth: config.depth,
    }];

    // Only filled when unique_urls is on
    let mut visited = HashSet::new();

    let mut summary = CrawlSummary::default();

    while let Some(task) = stack.pop() {
        if task.remaining_depth == 0 {
            continue;
        }

        if config.unique_urls && !visited.insert(task.url.clone()) {
            tracing::debug!("Already crawled, skipping: {}", task.url);
            continue;
        }

        if summary.pages_visited >= config.max_pages {
            tracing::warn!(
                "Stopping after {} page(s): page limit reached, {} task(s) left unvisited",
                summary.pages_visited,
                stack.len() + 1
            );
            summary.truncated = true;
            break;
        }

        let level = config.depth - task.remaining_depth + 1;
        tracing::info!("Crawling [depth {}]: {}", level, task.url);

        // The same body is used for the words and for the links
        let html = fetcher.fetch(&task.url).await?;
        summary.pages_visited += 1;

        let text = extract_text(&html);
        let ranked = top_words(&text, config.min_length, config.top_count);
        summary.words_emitted += report.write_page(&task.url, &ranked)?;

        // Children of a page on the last level would be dropped unvisited
        if task.remaining_depth > 1 {
            let links = extract_links(&html, &task.url);
            tracing::debug!("{} link(s) found on {}", links.len(), task.url);

            let child_depth = task.remaining_depth - 1;
            stack.extend(links.into_iter().rev().map(|url| CrawlTask {
                url,
                remaining_depth: child_depth,
            }));
        }
    }

    Ok(summary)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack instead of recursion?
//    - An async fn can't call itself without boxing the future
//    - A Vec of tasks does the same job and its size doesn't depend on the
//      thread's stack size, however deep the crawl goes
//
// 2. Why push the links in reverse?
//    - pop() takes from the end, so the last thing pushed comes out first
//    - Reversing makes the FIRST link on the page come out first
//
// 3. What does `F: PageFetcher + ?Sized` mean?
//    - F can be any type implementing PageFetcher
//    - ?Sized also allows trait objects like `&dyn PageFetcher`
//
// 4. What is tokio::time::timeout?
//    - Wraps a future; if it isn't done in time, it is dropped and we get
//      an Elapsed error instead of its output
// -----------------------------------------------------------------------------
