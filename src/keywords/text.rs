//! Word-level text helpers shared by the matcher and the provider vocabulary.

/// Folds one word for comparison: lowercase, surrounding punctuation removed.
pub(crate) fn fold_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Splits `text` into folded words, dropping those that fold to nothing.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(fold_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Start index of the first occurrence of `needle` as a contiguous run in `haystack`.
pub(crate) fn find_words(haystack: &[String], needle: &[String]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
