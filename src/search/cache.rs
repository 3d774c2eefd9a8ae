//! Archive-only search.
//!
//! Answers a phrase from previously archived tracks and playlists without contacting
//! the provider. Scoring is driven by the entities found in the phrase:
//!
//! 1. song name: archived tracks whose title contains it;
//! 2. artist name: remaining tracks whose title contains it;
//! 3. playlist name: archived playlists whose title contains it;
//! 4. provider named on its own: the featured playlist.
//!
//! Results come back sorted by confidence, highest first, ties in the order above.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::context::QueryContext;
use super::featured::FeaturedMedia;
use crate::archive::{ArchiveStores, MediaArchive};
use crate::constants::{
    CACHE_ARTIST_WEIGHT, CACHE_PRIMARY_WEIGHT, DEFAULT_FEATURED_CONFIDENCE,
    DEFAULT_FEATURED_COUNT, MAX_CONFIDENCE, MEDIA_MISMATCH_PENALTY,
};
use crate::keywords::EntityExtractor;
use crate::media::{MediaResult, MediaType, ResultEntry};
use crate::scoring::{FuzzyMatcher, StrsimMatcher};

/// Searches the archive using extracted entities.
#[derive(Clone)]
pub struct CacheSearch {
    archive: MediaArchive,
    extractor: Arc<dyn EntityExtractor>,
    matcher: Arc<dyn FuzzyMatcher>,
    featured: FeaturedMedia,
    featured_confidence: f64,
    featured_count: usize,
    write_back_scores: bool,
}

impl std::fmt::Debug for CacheSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSearch")
            .field("archive", &self.archive)
            .field("featured_confidence", &self.featured_confidence)
            .field("featured_count", &self.featured_count)
            .field("write_back_scores", &self.write_back_scores)
            .finish()
    }
}

impl CacheSearch {
    pub fn new(
        archive: MediaArchive,
        extractor: Arc<dyn EntityExtractor>,
        featured: FeaturedMedia,
    ) -> Self {
        Self {
            archive,
            extractor,
            matcher: Arc::new(StrsimMatcher::new()),
            featured,
            featured_confidence: DEFAULT_FEATURED_CONFIDENCE,
            featured_count: DEFAULT_FEATURED_COUNT,
            write_back_scores: true,
        }
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Confidence and size of the featured playlist offered when only the provider is
    /// named.
    pub fn with_featured(mut self, confidence: f64, count: usize) -> Self {
        self.featured_confidence = confidence;
        self.featured_count = count;
        self
    }

    /// When enabled (the default), computed confidences are stored back onto the
    /// archived records.
    pub fn with_write_back_scores(mut self, enabled: bool) -> Self {
        self.write_back_scores = enabled;
        self
    }

    pub fn write_back_scores(&self) -> bool {
        self.write_back_scores
    }

    /// Answers `phrase` from the archive, best match first.
    #[instrument(skip(self, phrase), fields(phrase_len = phrase.len(), media_type = %media_type))]
    pub fn search(&self, phrase: &str, media_type: MediaType) -> Vec<MediaResult> {
        let ctx = QueryContext::cache(phrase, media_type, self.extractor.extract(phrase));
        debug!(
            entities = ctx.entity_count(),
            provider_named = ctx.provider_named,
            base_score = ctx.base_score,
            "Searching archive"
        );

        let mut results = self
            .archive
            .with_stores(|stores| self.score_archive(stores, &ctx));

        if ctx.provider_named && ctx.entity_count() == 1 {
            debug!("Provider named alone, offering featured playlist");
            results.push(
                self.featured
                    .playlist(self.featured_confidence, self.featured_count)
                    .into(),
            );
        }

        results.sort_by(|a, b| b.match_confidence().total_cmp(&a.match_confidence()));

        debug!(
            results = results.len(),
            best = results.first().map(MediaResult::match_confidence),
            "Archive search complete"
        );
        results
    }

    fn score_archive(&self, stores: &mut ArchiveStores, ctx: &QueryContext) -> Vec<MediaResult> {
        let entities = &ctx.entities;
        let song = entities.song().map(str::to_lowercase);
        let artist = entities.artist().map(str::to_lowercase);
        let playlist = entities.playlist().map(str::to_lowercase);

        let mut results = Vec::new();
        let mut matched: HashSet<String> = HashSet::new();

        if let Some(song) = song.as_deref() {
            for (_, entry) in stores.tracks.iter_mut() {
                let title = entry.title.to_lowercase();
                if !title.contains(song) {
                    continue;
                }
                let similarity = self.matcher.ratio(song, &title);
                let mut score = ctx.base_score + CACHE_PRIMARY_WEIGHT * similarity;
                if let Some(artist) = artist.as_deref() {
                    if title.contains(artist) || entry.artist.to_lowercase().contains(artist) {
                        score += CACHE_ARTIST_WEIGHT * self.matcher.ratio(artist, &title);
                    }
                }
                let score = self.adjust_for_media_type(score, entry, ctx.media_type);
                matched.insert(entry.uri.clone());
                results.push(self.scored_track(entry, score));
            }
            debug!(matches = matched.len(), "Song pass");
        }

        if let Some(artist) = artist.as_deref() {
            let before = results.len();
            for (_, entry) in stores.tracks.iter_mut() {
                if matched.contains(&entry.uri) {
                    continue;
                }
                let title = entry.title.to_lowercase();
                if !title.contains(artist) {
                    continue;
                }
                let similarity = self.matcher.ratio(artist, &title);
                let score = ctx.base_score + CACHE_PRIMARY_WEIGHT * similarity;
                let score = self.adjust_for_media_type(score, entry, ctx.media_type);
                matched.insert(entry.uri.clone());
                results.push(self.scored_track(entry, score));
            }
            debug!(matches = results.len() - before, "Artist pass");
        }

        if let Some(playlist) = playlist.as_deref() {
            let before = results.len();
            for (title, entry) in stores.playlists.iter_mut() {
                let title = title.to_lowercase();
                if !title.contains(playlist) {
                    continue;
                }
                let similarity = self.matcher.ratio(&title, playlist);
                let score = ctx.base_score + CACHE_PRIMARY_WEIGHT * similarity;
                let score = score.min(MAX_CONFIDENCE);
                if self.write_back_scores {
                    entry.match_confidence = score;
                    results.push(entry.clone().into());
                } else {
                    let mut copy = entry.clone();
                    copy.match_confidence = score;
                    results.push(copy.into());
                }
            }
            debug!(matches = results.len() - before, "Playlist pass");
        }

        results
    }

    /// Clamps to the maximum, then penalises a media type other than the one asked for.
    fn adjust_for_media_type(&self, score: f64, entry: &ResultEntry, requested: MediaType) -> f64 {
        let mut score = score.min(MAX_CONFIDENCE);
        if entry.media_type != requested && !requested.is_generic() {
            score -= MEDIA_MISMATCH_PENALTY;
        }
        score
    }

    fn scored_track(&self, entry: &mut ResultEntry, score: f64) -> MediaResult {
        if self.write_back_scores {
            entry.match_confidence = score;
            entry.clone().into()
        } else {
            ResultEntry {
                match_confidence: score,
                ..entry.clone()
            }
            .into()
        }
    }
}
