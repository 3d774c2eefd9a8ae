//! Live provider search pass.
//!
//! A pass turns a phrase into a lazy stream of scored results. Each result is written
//! to the archive before it is yielded; both stores are flushed once when the provider
//! stream ends cleanly. A provider error or timeout ends the pass with an `Err` item
//! and no flush.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::context::QueryContext;
use super::error::{SearchError, SearchResult};
use super::memo::LiveMemo;
use crate::archive::MediaArchive;
use crate::constants::DEFAULT_PROVIDER_TIMEOUT;
use crate::keywords::ProviderVocabulary;
use crate::media::{Candidate, MediaResult, MediaType, PlaylistEntry, ResultEntry, SkillIdentity};
use crate::provider::{CandidateStream, SearchProvider};
use crate::scoring::Ranker;

/// Stream of scored live results.
pub type MediaStream = BoxStream<'static, SearchResult<MediaResult>>;

/// Runs live provider searches and archives what they return.
pub struct LiveSearch<P> {
    provider: Arc<P>,
    ranker: Arc<Ranker>,
    archive: MediaArchive,
    identity: Arc<SkillIdentity>,
    vocabulary: Arc<ProviderVocabulary>,
    memo: Option<LiveMemo>,
    timeout: Duration,
}

impl<P> Clone for LiveSearch<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            ranker: Arc::clone(&self.ranker),
            archive: self.archive.clone(),
            identity: Arc::clone(&self.identity),
            vocabulary: Arc::clone(&self.vocabulary),
            memo: self.memo.clone(),
            timeout: self.timeout,
        }
    }
}

impl<P> std::fmt::Debug for LiveSearch<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSearch")
            .field("provider_id", &self.identity.provider_id)
            .field("memo", &self.memo)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl<P: SearchProvider + 'static> LiveSearch<P> {
    pub fn new(provider: Arc<P>, archive: MediaArchive, identity: SkillIdentity) -> Self {
        Self {
            provider,
            ranker: Arc::new(Ranker::default()),
            archive,
            identity: Arc::new(identity),
            vocabulary: Arc::new(ProviderVocabulary::default()),
            memo: None,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = Arc::new(ranker);
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Arc<ProviderVocabulary>) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Reuses provider results for identical phrases while the memo holds them.
    pub fn with_memo(mut self, memo: LiveMemo) -> Self {
        self.memo = Some(memo);
        self
    }

    /// Bounds opening the search and waiting for each candidate.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn memo(&self) -> Option<&LiveMemo> {
        self.memo.as_ref()
    }

    pub fn archive(&self) -> &MediaArchive {
        &self.archive
    }

    /// Starts a lazy search pass; nothing happens until the stream is polled.
    pub fn search(&self, phrase: &str, media_type: MediaType) -> MediaStream {
        let context = QueryContext::live(phrase, media_type, &self.vocabulary);
        debug!(
            phrase_len = phrase.len(),
            media_type = %media_type,
            provider_named = context.provider_named,
            base_score = context.base_score,
            "Starting live search"
        );

        let pass = LivePass {
            search: self.clone(),
            context,
            state: PassState::Pending,
            yielded: 0,
        };

        stream::unfold(pass, |mut pass| async move {
            pass.next_item().await.map(|item| (item, pass))
        })
        .boxed()
    }

    /// Drains a pass into a vector, stopping at the first error.
    pub async fn collect(
        &self,
        phrase: &str,
        media_type: MediaType,
    ) -> SearchResult<Vec<MediaResult>> {
        let mut results = Vec::new();
        let mut stream = self.search(phrase, media_type);
        while let Some(item) = stream.next().await {
            results.push(item?);
        }
        Ok(results)
    }
}

struct Source {
    candidates: CandidateStream,
    /// Zero-based rank among flat results seen so far.
    position: usize,
    /// Candidates to memoize once the provider stream ends cleanly.
    recorded: Option<Vec<Candidate>>,
}

enum PassState {
    Pending,
    Streaming(Source),
    Done,
}

struct LivePass<P> {
    search: LiveSearch<P>,
    context: QueryContext,
    state: PassState,
    yielded: usize,
}

impl<P: SearchProvider + 'static> LivePass<P> {
    async fn next_item(&mut self) -> Option<SearchResult<MediaResult>> {
        loop {
            match std::mem::replace(&mut self.state, PassState::Done) {
                PassState::Done => return None,
                PassState::Pending => {
                    let opened =
                        Self::open(self.search.clone(), self.context.search_phrase.clone()).await;
                    match opened {
                        Ok(source) => self.state = PassState::Streaming(source),
                        Err(e) => {
                            warn!(error = %e, "Live search failed to start");
                            return Some(Err(e));
                        }
                    }
                }
                PassState::Streaming(mut source) => {
                    let next = match timeout(self.search.timeout, source.candidates.next()).await {
                        Ok(next) => next,
                        Err(_) => {
                            warn!(yielded = self.yielded, "Provider timed out mid-stream");
                            return Some(Err(SearchError::ProviderTimeout {
                                timeout: self.search.timeout,
                            }));
                        }
                    };

                    match next {
                        None => return self.finish(source).err().map(Err),
                        Some(Err(e)) => {
                            warn!(error = %e, yielded = self.yielded, "Provider failed mid-stream");
                            return Some(Err(e.into()));
                        }
                        Some(Ok(candidate)) => {
                            let result = self.process(&candidate, &mut source.position);
                            if let Some(recorded) = source.recorded.as_mut() {
                                recorded.push(candidate);
                            }
                            self.state = PassState::Streaming(source);
                            if let Some(result) = result {
                                self.yielded += 1;
                                return Some(Ok(result));
                            }
                        }
                    }
                }
            }
        }
    }

    /// Takes owned inputs so the pass future never borrows the pass itself.
    async fn open(search: LiveSearch<P>, phrase: String) -> SearchResult<Source> {
        if let Some(hit) = search
            .memo
            .as_ref()
            .and_then(|memo| memo.get(&search.identity.provider_id, &phrase))
        {
            debug!(candidates = hit.len(), "Live memo hit");
            let items: Vec<_> = hit.iter().cloned().map(Ok).collect();
            return Ok(Source {
                candidates: stream::iter(items).boxed(),
                position: 0,
                recorded: None,
            });
        }

        let candidates = timeout(search.timeout, search.provider.search(&phrase))
            .await
            .map_err(|_| SearchError::ProviderTimeout {
                timeout: search.timeout,
            })??;

        Ok(Source {
            candidates,
            position: 0,
            recorded: search.memo.as_ref().map(|_| Vec::new()),
        })
    }

    /// Scores one candidate, archives it, and returns the result to yield.
    fn process(&self, candidate: &Candidate, position: &mut usize) -> Option<MediaResult> {
        let search = &self.search;
        let ctx = &self.context;
        let score = search.ranker.score(
            &ctx.search_phrase,
            candidate,
            *position,
            ctx.base_score as i32,
            ctx.media_type,
        );
        let score = f64::from(score);

        match candidate {
            Candidate::Collection { kind, info } => {
                let entry = PlaylistEntry::from_collection(*kind, info, score, &search.identity);
                let Some(entry) = entry else {
                    debug!(
                        title = info.title.as_deref().unwrap_or_default(),
                        "Dropping empty collection"
                    );
                    return None;
                };
                search.archive.insert_playlist(entry.clone());
                Some(entry.into())
            }
            Candidate::Track(track) | Candidate::Video(track) => {
                let media_type = if candidate.is_bare_video() {
                    MediaType::Video
                } else {
                    MediaType::Music
                };
                let entry = ResultEntry::from_track(track, media_type, score, &search.identity);
                search.archive.insert_track(entry.clone());
                *position += 1;
                Some(entry.into())
            }
        }
    }

    fn finish(&self, source: Source) -> SearchResult<()> {
        let search = &self.search;
        if let (Some(memo), Some(recorded)) = (search.memo.as_ref(), source.recorded) {
            memo.insert(
                &search.identity.provider_id,
                &self.context.search_phrase,
                recorded,
            );
        }

        search.archive.flush()?;

        info!(
            yielded = self.yielded,
            flat_results = source.position,
            tracks = search.archive.track_count(),
            playlists = search.archive.playlist_count(),
            "Live search complete"
        );
        Ok(())
    }
}
