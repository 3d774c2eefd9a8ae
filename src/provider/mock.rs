//! Scripted provider for tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::StreamExt;
use futures_util::stream;
use parking_lot::Mutex;

use super::{CandidateStream, ProviderError, ProviderResult, SearchProvider};
use crate::media::Candidate;

/// In-memory [`SearchProvider`] returning canned candidates.
///
/// Clones share the call log, so a test can keep a clone after handing the provider
/// to a search.
#[derive(Debug, Clone, Default)]
pub struct MockSearchProvider {
    candidates: Vec<Candidate>,
    responses: HashMap<String, Vec<Candidate>>,
    fail_open: Option<ProviderError>,
    fail_after: Option<usize>,
    open_delay: Option<Duration>,
    item_delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    phrases: Arc<Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    /// Answers every phrase with `candidates`.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    /// Answers `phrase` (exact match) with `candidates` instead of the default set.
    pub fn with_response(mut self, phrase: &str, candidates: Vec<Candidate>) -> Self {
        self.responses.insert(phrase.to_string(), candidates);
        self
    }

    /// Fails every search before any candidate is produced.
    pub fn failing_open(mut self, error: ProviderError) -> Self {
        self.fail_open = Some(error);
        self
    }

    /// Yields `n` candidates, then a network error.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = Some(delay);
        self
    }

    pub fn with_item_delay(mut self, delay: Duration) -> Self {
        self.item_delay = Some(delay);
        self
    }

    /// Number of searches started.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Phrases searched for, in call order.
    pub fn phrases(&self) -> Vec<String> {
        self.phrases.lock().clone()
    }

    fn candidates_for(&self, phrase: &str) -> Vec<Candidate> {
        self.responses
            .get(phrase)
            .unwrap_or(&self.candidates)
            .clone()
    }
}

impl SearchProvider for MockSearchProvider {
    async fn search(&self, phrase: &str) -> ProviderResult<CandidateStream> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.phrases.lock().push(phrase.to_string());

        if let Some(delay) = self.open_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = &self.fail_open {
            return Err(err.clone());
        }

        let mut items: Vec<ProviderResult<Candidate>> =
            self.candidates_for(phrase).into_iter().map(Ok).collect();
        if let Some(n) = self.fail_after {
            items.truncate(n);
            items.push(Err(ProviderError::Network {
                reason: "connection reset".to_string(),
            }));
        }

        let item_delay = self.item_delay;
        Ok(stream::iter(items)
            .then(move |item| async move {
                if let Some(delay) = item_delay {
                    tokio::time::sleep(delay).await;
                }
                item
            })
            .boxed())
    }
}
