//! Phrase hashing for memo keys.
//!
//! Spoken queries arrive with inconsistent casing and spacing ("Johnny  Cash",
//! "johnny cash "). [`normalize_phrase`] folds those differences away before hashing so
//! they share one memo slot.

use blake3::Hasher;

/// Lowercases, trims and collapses internal whitespace.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// BLAKE3 hash of a provider id and a normalized phrase.
///
/// Two providers sharing one memo never see each other's results.
#[inline]
pub fn hash_provider_phrase(provider_id: &str, phrase: &str) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(provider_id.as_bytes());
    hasher.update(b"|");
    hasher.update(normalize_phrase(phrase).as_bytes());
    *hasher.finalize().as_bytes()
}
