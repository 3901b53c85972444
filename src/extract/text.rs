// src/extract/text.rs
// =============================================================================
// Pulls the human-readable text out of an HTML page.
//
// Every text node is collected in document order and the pieces are joined
// with a single space, so "<td>red</td><td>blue</td>" gives "red blue" rather
// than "redblue". Text inside <script>, <style>, <noscript> and <template> is
// skipped because a visitor never sees it.
//
// html5ever repairs any markup it is given, so this never fails: garbage in,
// (possibly empty) text out.
// =============================================================================

use scraper::{Html, Node};

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }

    pieces.join(" ")
}
