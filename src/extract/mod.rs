// src/extract/mod.rs
// =============================================================================
// This module reads what the crawler needs out of a downloaded HTML page.
//
// Submodules:
// - text: the visible words of the page
// - links: the absolute URLs of every <a href> on the page
//
// Both parse with `scraper`, which never fails on bad markup, so malformed
// pages simply produce less text or fewer links instead of an error.
// =============================================================================

mod links;
mod text;

pub use links::extract_links;
pub use text::extract_text;
