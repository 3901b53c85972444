// src/crawl/mod.rs
// =============================================================================
// This module handles crawling: following links from page to page and
// reporting each page's most frequent words as it goes.
//
// Features:
// - Depth-first, pre-order traversal (a page is reported before its links)
// - Configurable depth limit
// - Optional page limit, overall timeout and visited-URL tracking
//
// The actual work lives in stack.rs.
// =============================================================================

mod stack;

// Re-export the main crawling function
pub use stack::crawl;
