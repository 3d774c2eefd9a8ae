//! Tiered media search: archive first, live provider second.

use std::sync::Arc;

use futures_util::StreamExt;
use tracing::{debug, info, instrument};

use super::cache::CacheSearch;
use super::error::SearchResult;
use super::featured::FeaturedMedia;
use super::live::{LiveSearch, MediaStream};
use super::memo::LiveMemo;
use crate::archive::MediaArchive;
use crate::config::Config;
use crate::keywords::{Harvest, KeywordMatcher, ProviderVocabulary};
use crate::media::{MediaResult, MediaType, PlaylistEntry, ResultEntry};
use crate::provider::SearchProvider;
use crate::scoring::Ranker;

/// Outcome of [`MediaSearch::lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum TieredLookupResult {
    /// The archive answered with enough confidence.
    HitCache(Vec<MediaResult>),
    /// The archive fell short; these came from a live pass.
    HitLive(Vec<MediaResult>),
    Miss,
}

impl TieredLookupResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieredLookupResult::HitCache(_) => "hit_cache",
            TieredLookupResult::HitLive(_) => "hit_live",
            TieredLookupResult::Miss => "miss",
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, TieredLookupResult::Miss)
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, TieredLookupResult::HitCache(_))
    }

    pub fn is_live_hit(&self) -> bool {
        matches!(self, TieredLookupResult::HitLive(_))
    }

    /// Results, best first; empty on a miss.
    pub fn results(&self) -> &[MediaResult] {
        match self {
            TieredLookupResult::HitCache(r) | TieredLookupResult::HitLive(r) => r,
            TieredLookupResult::Miss => &[],
        }
    }

    pub fn into_results(self) -> Vec<MediaResult> {
        match self {
            TieredLookupResult::HitCache(r) | TieredLookupResult::HitLive(r) => r,
            TieredLookupResult::Miss => Vec::new(),
        }
    }
}

/// Everything needed to answer media queries for one provider.
pub struct MediaSearch<P> {
    archive: MediaArchive,
    keywords: Arc<KeywordMatcher>,
    vocabulary: Arc<ProviderVocabulary>,
    live: LiveSearch<P>,
    cache: CacheSearch,
    featured: FeaturedMedia,
    featured_queries: Vec<String>,
    genres: Vec<String>,
    featured_confidence: f64,
    featured_count: usize,
    cache_accept_threshold: f64,
}

impl<P> std::fmt::Debug for MediaSearch<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSearch")
            .field("live", &self.live)
            .field("cache", &self.cache)
            .field("cache_accept_threshold", &self.cache_accept_threshold)
            .finish()
    }
}

impl<P: SearchProvider + 'static> MediaSearch<P> {
    /// Wires a provider and an archive together using `config`.
    pub fn new(provider: P, archive: MediaArchive, config: &Config) -> Self {
        Self::with_ranker(provider, archive, config, Ranker::default())
    }

    pub fn with_ranker(
        provider: P,
        archive: MediaArchive,
        config: &Config,
        ranker: Ranker,
    ) -> Self {
        let identity = config.identity();
        let vocabulary = Arc::new(config.vocabulary());
        let keywords = Arc::new(KeywordMatcher::new());
        let featured = FeaturedMedia::new(archive.clone(), Arc::new(identity.clone()));

        let mut live = LiveSearch::new(Arc::new(provider), archive.clone(), identity)
            .with_ranker(ranker)
            .with_vocabulary(Arc::clone(&vocabulary))
            .with_timeout(config.provider_timeout);
        if config.memo_enabled() {
            live = live.with_memo(LiveMemo::new(config.memo_ttl, config.memo_capacity));
        }

        let cache = CacheSearch::new(archive.clone(), keywords.clone(), featured.clone())
            .with_featured(config.featured_confidence, config.featured_count)
            .with_write_back_scores(config.write_back_scores);

        Self {
            archive,
            keywords,
            vocabulary,
            live,
            cache,
            featured,
            featured_queries: config.featured_queries.clone(),
            genres: config.genres.clone(),
            featured_confidence: config.featured_confidence,
            featured_count: config.featured_count,
            cache_accept_threshold: config.cache_accept_threshold,
        }
    }

    pub fn archive(&self) -> &MediaArchive {
        &self.archive
    }

    pub fn keywords(&self) -> &KeywordMatcher {
        &self.keywords
    }

    pub fn live(&self) -> &LiveSearch<P> {
        &self.live
    }

    pub fn cache(&self) -> &CacheSearch {
        &self.cache
    }

    /// Lazy live provider pass; see [`LiveSearch::search`].
    pub fn search_live(&self, phrase: &str, media_type: MediaType) -> MediaStream {
        self.live.search(phrase, media_type)
    }

    /// Archive-only search; see [`CacheSearch::search`].
    pub fn search_cache(&self, phrase: &str, media_type: MediaType) -> Vec<MediaResult> {
        self.cache.search(phrase, media_type)
    }

    pub fn featured_media(&self) -> Vec<ResultEntry> {
        self.featured.entries()
    }

    /// The featured playlist at the configured confidence and size.
    pub fn featured_playlist(&self) -> PlaylistEntry {
        self.featured
            .playlist(self.featured_confidence, self.featured_count)
    }

    /// Registers keywords harvested from the archive.
    ///
    /// With `refresh`, the configured featured queries are searched live first and
    /// their results harvested too. Returns the number of new keywords.
    #[instrument(skip(self))]
    pub async fn precache(&self, refresh: bool) -> SearchResult<usize> {
        let mut harvest = Harvest::from_archive(&self.archive);

        if refresh {
            for query in &self.featured_queries {
                let mut stream = self.live.search(query, MediaType::Music);
                while let Some(result) = stream.next().await {
                    harvest.add_result(&result?);
                }
            }
        }

        let added = harvest.register(&self.keywords, &self.vocabulary, &self.genres);
        info!(added, refresh, "Precache complete");
        Ok(added)
    }

    /// Answers from the archive when it is confident enough, otherwise from a live pass.
    #[instrument(skip(self, phrase), fields(phrase_len = phrase.len(), media_type = %media_type))]
    pub async fn lookup(
        &self,
        phrase: &str,
        media_type: MediaType,
    ) -> SearchResult<TieredLookupResult> {
        debug!("Checking archive");
        let cached = self.cache.search(phrase, media_type);
        let best = cached.first().map(MediaResult::match_confidence);
        if best.is_some_and(|b| b >= self.cache_accept_threshold) {
            info!(results = cached.len(), best, "Archive hit");
            return Ok(TieredLookupResult::HitCache(cached));
        }

        debug!(
            best,
            threshold = self.cache_accept_threshold,
            "Archive miss, searching live"
        );
        let mut results = self.live.collect(phrase, media_type).await?;
        if results.is_empty() {
            debug!("Live search returned nothing");
            return Ok(TieredLookupResult::Miss);
        }

        results.sort_by(|a, b| b.match_confidence().total_cmp(&a.match_confidence()));
        info!(
            results = results.len(),
            best = results.first().map(MediaResult::match_confidence),
            "Live hit"
        );
        Ok(TieredLookupResult::HitLive(results))
    }
}
