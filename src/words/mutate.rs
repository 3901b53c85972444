// src/words/mutate.rs
// =============================================================================
// Turns a word into password guesses.
//
// The list is a fixed policy: case variants first, then a handful of common
// "word + digits/symbol" patterns. It is a pure function of the word, so the
// same page always produces the same guesses. Nothing here says anything
// about how strong or likely a guess is.
// =============================================================================

// Returns the guesses for `word`, always in this order:
//   word, Word, word (lower), WORD,
//   word2019, word1!, word2!, word3!, word01, word123, Summerword2021!
//
// Duplicates are kept on purpose so the output has a fixed shape
// (e.g. "Summer" appears twice for the word "Summer").
pub fn mutate(word: &str) -> Vec<String> {
    vec![
        word.to_string(),
        capitalize(word),
        word.to_lowercase(),
        word.to_uppercase(),
        format!("{}2019", word),
        format!("{}1!", word),
        format!("{}2!", word),
        format!("{}3!", word),
        format!("{}01", word),
        format!("{}123", word),
        format!("Summer{}2021!", word),
    ]
}

// First character upper-cased, the rest lower-cased: "hELLO" -> "Hello"
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}
