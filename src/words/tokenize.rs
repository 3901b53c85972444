// src/words/tokenize.rs
// =============================================================================
// Splits page text into words.
//
// A word is a maximal run of "word characters": letters, digits and '_'
// (the regex \w class, Unicode-aware). Everything else is a separator and is
// thrown away. No case folding happens here.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

// Compiled once, shared by every page
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

// Returns the words of `text`, left to right
//
// The iterator is lazy and borrows from `text`, so no strings are allocated
// until a word is actually stored somewhere. Calling tokenize() again on the
// same text starts over from the beginning.
//
// Example:
//   "cat, cat & dog_2!" -> ["cat", "cat", "dog_2"]
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_on_punctuation_and_whitespace() {
        let words: Vec<_> = tokenize("cat, cat & dog_2!\n\tbird").collect();
        assert_eq!(words, vec!["cat", "cat", "dog_2", "bird"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  ,.;!? -- ").count(), 0);
    }

    #[test]
    fn test_keeps_case_and_unicode_letters() {
        let words: Vec<_> = tokenize("Café naïve CAFÉ").collect();
        assert_eq!(words, vec!["Café", "naïve", "CAFÉ"]);
    }

    #[test]
    fn test_tokens_are_never_empty_and_appear_in_order() {
        let text = "It's 2024: hello--world (again) _x_ 42";
        let mut rest = text;
        for word in tokenize(text) {
            assert!(!word.is_empty());
            // each token is found after the previous one
            let at = rest.find(word).expect("token comes from the text");
            rest = &rest[at + word.len()..];
        }
    }

    #[test]
    fn test_is_restartable() {
        let text = "one two three";
        assert_eq!(tokenize(text).count(), 3);
        assert_eq!(tokenize(text).count(), 3);
    }
}
