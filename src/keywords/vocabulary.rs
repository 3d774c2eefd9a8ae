use super::text::{find_words, fold_word, words};
use crate::constants::DEFAULT_PROVIDER_ALIASES;

/// Names by which a user can refer to the provider ("youtube music", "youtube").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderVocabulary {
    names: Vec<String>,
    /// Folded words per name, longest name first.
    folded: Vec<Vec<String>>,
}

impl ProviderVocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|n| !n.trim().is_empty())
            .collect();
        names.sort_by_key(|n| std::cmp::Reverse(words(n).len()));
        let folded = names.iter().map(|n| words(n)).collect();
        Self { names, folded }
    }

    /// Provider names, longest first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `true` when `phrase` mentions any provider name as whole words.
    pub fn matches(&self, phrase: &str) -> bool {
        let phrase_words = words(phrase);
        self.folded
            .iter()
            .any(|name| find_words(&phrase_words, name).is_some())
    }

    /// Removes every provider name from `phrase`, longest names first.
    ///
    /// The remaining words keep their original spelling and are joined by single
    /// spaces.
    pub fn strip(&self, phrase: &str) -> String {
        let mut original: Vec<&str> = Vec::new();
        let mut folded: Vec<String> = Vec::new();
        for word in phrase.split_whitespace() {
            let f = fold_word(word);
            if !f.is_empty() {
                original.push(word);
                folded.push(f);
            }
        }

        for name in &self.folded {
            while let Some(start) = find_words(&folded, name) {
                let end = start + name.len();
                original.drain(start..end);
                folded.drain(start..end);
            }
        }

        original.join(" ")
    }
}

impl Default for ProviderVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_ALIASES.iter().copied())
    }
}
