// src/words/rank.rs
// =============================================================================
// Picks the most frequent words out of a frequency table.
//
// Ordering: highest count first. Words with equal counts keep the order in
// which they were first seen on the page; sort_by is a stable sort and the
// table iterates in insertion order, so this tie-break is deterministic.
// =============================================================================

use serde::Serialize;

use super::count::FrequencyTable;

/// One line of a page's top-N list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

// Returns at most `top_count` entries, most frequent first
//
// A top_count of 0 returns nothing. If the table has fewer words than
// top_count, every word is returned.
pub fn rank(table: &FrequencyTable, top_count: usize) -> Vec<RankedEntry> {
    if top_count == 0 {
        return Vec::new();
    }

    let mut entries: Vec<(&String, &usize)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    entries
        .into_iter()
        .take(top_count)
        .map(|(word, count)| RankedEntry {
            word: word.clone(),
            count: *count,
        })
        .collect()
}
