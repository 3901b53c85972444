// src/words/mod.rs
// =============================================================================
// Everything that happens to a page's text after it has been extracted:
//
// - tokenize: text -> words
// - count: words -> frequency table (with a minimum length filter)
// - rank: frequency table -> top-N (word, count) list
// - mutate: word -> password guesses
//
// None of these do any I/O, so they are tested with plain #[test]s.
// =============================================================================

mod count;
mod mutate;
mod rank;
mod tokenize;

pub use count::count_words;
pub use mutate::mutate;
pub use rank::{rank, RankedEntry};
pub use tokenize::tokenize;

// Runs the whole pipeline on one page's text
//
// Example:
//   top_words("cat cat dog", 3, 2) -> [cat: 2, dog: 1]
pub fn top_words(text: &str, min_length: usize, top_count: usize) -> Vec<RankedEntry> {
    let table = count_words(tokenize(text), min_length);
    rank(&table, top_count)
}
