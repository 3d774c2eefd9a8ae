//! Fuzzy string similarity in `[0, 1]`.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Supplies the similarity primitives used by the ranker and the cache search.
///
/// Implementations must be deterministic and case-insensitive, and must return values
/// in `[0, 1]` where `1` means identical.
pub trait FuzzyMatcher: Send + Sync {
    /// Edit-distance similarity; tolerant of small misspellings.
    fn ratio(&self, a: &str, b: &str) -> f64;

    /// Token-set similarity; tolerant of word order and of extra words on one side.
    fn token_set_ratio(&self, a: &str, b: &str) -> f64;
}

/// [`FuzzyMatcher`] backed by `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimMatcher;

impl StrsimMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl FuzzyMatcher for StrsimMatcher {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
    }

    fn token_set_ratio(&self, a: &str, b: &str) -> f64 {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
        let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        let common = join_tokens(tokens_a.intersection(&tokens_b));
        let only_a = join_tokens(tokens_a.difference(&tokens_b));
        let only_b = join_tokens(tokens_b.difference(&tokens_a));

        let with_a = concat_tokens(&common, &only_a);
        let with_b = concat_tokens(&common, &only_b);

        let mut best = normalized_levenshtein(&with_a, &with_b);
        if !common.is_empty() {
            best = best
                .max(normalized_levenshtein(&common, &with_a))
                .max(normalized_levenshtein(&common, &with_b));
        }
        best
    }
}

fn join_tokens<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat_tokens(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}
