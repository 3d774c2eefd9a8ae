//! Time-boxed memo of provider results.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::hashing::hash_provider_phrase;
use crate::media::Candidate;

/// Remembers the candidates a provider returned for a phrase, for a limited time.
///
/// Keys are BLAKE3 hashes of the provider id and the normalized phrase, so casing and
/// spacing differences share an entry.
#[derive(Clone)]
pub struct LiveMemo {
    entries: Cache<[u8; 32], Arc<Vec<Candidate>>>,
    ttl: Duration,
}

impl LiveMemo {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            ttl,
        }
    }

    pub fn get(&self, provider_id: &str, phrase: &str) -> Option<Arc<Vec<Candidate>>> {
        self.entries.get(&hash_provider_phrase(provider_id, phrase))
    }

    pub fn insert(&self, provider_id: &str, phrase: &str, candidates: Vec<Candidate>) {
        self.entries.insert(
            hash_provider_phrase(provider_id, phrase),
            Arc::new(candidates),
        );
    }

    pub fn contains(&self, provider_id: &str, phrase: &str) -> bool {
        self.entries
            .contains_key(&hash_provider_phrase(provider_id, phrase))
    }

    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Approximate number of live entries.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl std::fmt::Debug for LiveMemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveMemo")
            .field("entries", &self.entries.entry_count())
            .field("ttl", &self.ttl)
            .finish()
    }
}
