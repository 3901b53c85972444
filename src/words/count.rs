// src/words/count.rs
// =============================================================================
// Counts how often each word occurs on a page.
//
// The table keeps words in the order they were first seen (IndexMap). The
// ranker relies on that: words with the same count stay in first-seen order.
// =============================================================================

use indexmap::IndexMap;

/// word -> number of occurrences (always >= 1), in first-seen order
pub type FrequencyTable = IndexMap<String, usize>;

// Number of characters in a word (not bytes, so "café" has length 4)
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

// Builds a fresh frequency table from a sequence of words
//
// Parameters:
//   words: the tokens of one page
//   min_length: words with fewer characters than this are skipped
//
// Counting is exact and case-sensitive: "Cat" and "cat" are different words.
pub fn count_words<'a, I>(words: I, min_length: usize) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::new();

    for word in words {
        if word_length(word) < min_length {
            continue;
        }
        *table.entry(word.to_string()).or_insert(0) += 1;
    }

    table
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does entry().or_insert(0) do?
//    - Looks the key up once; inserts 0 if it is missing
//    - Returns a &mut to the value, so `+= 1` updates it in place
//
// 2. Why IndexMap and not HashMap?
//    - HashMap iterates in an unpredictable order
//    - IndexMap remembers insertion order, which makes ranking ties stable
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_repeated_words() {
        let table = count_words(["cat", "cat", "dog"], 0);
        assert_eq!(table.get("cat"), Some(&2));
        assert_eq!(table.get("dog"), Some(&1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_skips_short_words() {
        let words = ["a", "to", "cat", "horse", "cat"];
        let table = count_words(words, 3);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["cat", "horse"]);

        // every stored word meets the minimum and the counts add up to the
        // number of qualifying tokens
        assert!(table.keys().all(|w| word_length(w) >= 3));
        let qualifying = words.iter().filter(|w| word_length(w) >= 3).count();
        assert_eq!(table.values().sum::<usize>(), qualifying);
    }

    #[test]
    fn test_is_case_sensitive() {
        let table = count_words(["Cat", "cat", "CAT", "cat"], 0);
        assert_eq!(table.get("cat"), Some(&2));
        assert_eq!(table.get("Cat"), Some(&1));
        assert_eq!(table.get("CAT"), Some(&1));
    }

    #[test]
    fn test_length_is_measured_in_characters() {
        // "été" is 3 characters but 5 bytes
        let table = count_words(["été"], 4);
        assert!(table.is_empty());
        let table = count_words(["été"], 3);
        assert_eq!(table.get("été"), Some(&1));
    }

    #[test]
    fn test_keeps_first_seen_order() {
        let table = count_words(["zebra", "apple", "zebra", "mango"], 0);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zebra", "apple", "mango"]);
    }
}
