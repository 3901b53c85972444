// src/extract/links.rs
// =============================================================================
// This module extracts the links a page points to.
//
// We use the `scraper` crate to find every <a> tag with an href, and the
// `url` crate to turn each href into an absolute URL, exactly the way a
// browser would resolve it against the page's own address.
//
// Unlike a link checker, we do NOT filter anything out here:
// - links to other sites are kept
// - fragment-only links ("#top") resolve to the page itself and are kept
// - duplicates are kept, in document order
// The crawler decides what to do with them.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page (for resolving relative links)
//
// Returns: Vec<String> containing the absolute URLs, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no href</a>"
//   base_url = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the base URL once
    // If the page URL itself is broken we can't resolve anything against it
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Invalid base URL {}: {}", base_url, e);
            return links;
        }
    };

    let document = Html::parse_document(html);

    // "a[href]" matches only anchors that actually carry an href,
    // so <a name="x"> style anchors are skipped for free
    let selector = anchor_selector();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match resolve_url(&base, href) {
                Some(absolute_url) => links.push(absolute_url),
                None => tracing::debug!("Skipping unresolvable href {:?} on {}", href, base_url),
            }
        }
    }

    links
}

// The selector is a constant, so parsing it can only fail if the string
// above is edited into invalid CSS
fn anchor_selector() -> Selector {
    Selector::parse("a[href]").expect("a[href] is a valid CSS selector")
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples:
//   base = "https://example.com/blog/post"
//   href = "/docs"               -> Some("https://example.com/docs")
//   href = "../about"            -> Some("https://example.com/about")
//   href = "//cdn.example.org/x" -> Some("https://cdn.example.org/x")
//   href = "#comments"           -> Some("https://example.com/blog/post#comments")
//   href = "http://[::1"         -> None (not a valid URL)
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_links() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="../about">About</a>
            <a href="next.html">Next</a>
        "#;
        let links = extract_links(html, "https://example.com/blog/post/");
        assert_eq!(
            links,
            vec![
                "https://example.com/docs",
                "https://example.com/blog/about",
                "https://example.com/blog/post/next.html",
            ]
        );
    }

    #[test]
    fn test_protocol_relative_and_fragment_links() {
        let html = r##"<a href="//cdn.example.org/lib">Lib</a><a href="#top">Top</a>"##;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(
            links,
            vec!["https://cdn.example.org/lib", "https://example.com/page#top"]
        );
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<a name="intro">Intro</a><a href="/a">A</a><a>plain</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://example.com/a"]);
    }

    #[test]
    fn test_keeps_duplicates_in_document_order() {
        let html = r#"<a href="/b">B</a><a href="/a">A</a><a href="/b">B again</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(
            links,
            vec![
                "https://example.com/b",
                "https://example.com/a",
                "https://example.com/b",
            ]
        );
    }

    #[test]
    fn test_invalid_base_url_yields_no_links() {
        let html = r#"<a href="/docs">Docs</a>"#;
        assert!(extract_links(html, "not a url").is_empty());
    }

    #[test]
    fn test_malformed_html_degrades_gracefully() {
        let html = r#"<div><a href="/ok">ok<p></div></a><a href="http://[::1">bad</a"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://example.com/ok"]);
    }
}
