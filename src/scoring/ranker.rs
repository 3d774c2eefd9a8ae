use std::sync::Arc;

use tracing::trace;

use super::similarity::{FuzzyMatcher, StrsimMatcher};
use crate::constants::{
    ARTIST_WEIGHT, GENERIC_REQUEST_PENALTY, MAX_CONFIDENCE, POSITION_DECAY, TITLE_WEIGHT,
    VIDEO_PENALTY,
};
use crate::media::{Candidate, MediaType};

/// Tunable terms of the live-result score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerWeights {
    /// Subtracted once per position down the provider's ranking. Default: `5`.
    pub position_decay: f64,
    /// Subtracted for bare videos. Default: `10`.
    pub video_penalty: f64,
    /// Multiplies the artist similarity. Default: `80`.
    pub artist_weight: f64,
    /// Multiplies the title similarity. Default: `80`.
    pub title_weight: f64,
    /// Subtracted when the request is generic. Default: `10`.
    pub generic_penalty: f64,
    /// Upper clamp. Default: `100`.
    pub max_score: f64,
}

impl Default for RankerWeights {
    fn default() -> Self {
        Self {
            position_decay: POSITION_DECAY,
            video_penalty: VIDEO_PENALTY,
            artist_weight: ARTIST_WEIGHT,
            title_weight: TITLE_WEIGHT,
            generic_penalty: GENERIC_REQUEST_PENALTY,
            max_score: MAX_CONFIDENCE,
        }
    }
}

/// Scores provider candidates against a spoken phrase.
///
/// Stateless: the same inputs always give the same score.
#[derive(Clone)]
pub struct Ranker {
    weights: RankerWeights,
    matcher: Arc<dyn FuzzyMatcher>,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("weights", &self.weights)
            .finish()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(StrsimMatcher::new()))
    }

    pub fn with_matcher(matcher: Arc<dyn FuzzyMatcher>) -> Self {
        Self {
            weights: RankerWeights::default(),
            matcher,
        }
    }

    pub fn with_weights(mut self, weights: RankerWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &RankerWeights {
        &self.weights
    }

    pub fn matcher(&self) -> &Arc<dyn FuzzyMatcher> {
        &self.matcher
    }

    /// Scores `candidate` for `phrase`, clamped above at `max_score` and truncated.
    ///
    /// `position` is the candidate's zero-based rank among flat results; `base_score`
    /// carries request-level bonuses computed by the caller.
    pub fn score(
        &self,
        phrase: &str,
        candidate: &Candidate,
        position: usize,
        base_score: i32,
        media_type: MediaType,
    ) -> i32 {
        let raw = self.raw_score(phrase, candidate, position, base_score, media_type);
        let clamped = raw.min(self.weights.max_score);

        trace!(
            position,
            base_score,
            raw,
            clamped,
            title = candidate.title().unwrap_or_default(),
            "Scored candidate"
        );

        clamped.trunc() as i32
    }

    fn raw_score(
        &self,
        phrase: &str,
        candidate: &Candidate,
        position: usize,
        base_score: i32,
        media_type: MediaType,
    ) -> f64 {
        let phrase = phrase.to_lowercase();
        let w = &self.weights;

        let mut score = f64::from(base_score) - w.position_decay * position as f64;

        if candidate.is_bare_video() {
            score -= w.video_penalty;
        }

        if let Some(artist) = candidate.artist_name().filter(|a| !a.is_empty()) {
            score += w.artist_weight * self.matcher.token_set_ratio(&phrase, artist);
        }
        if let Some(title) = candidate.title().filter(|t| !t.is_empty()) {
            score += w.title_weight * self.matcher.ratio(&phrase, title);
        }

        if media_type.is_generic() {
            score -= w.generic_penalty;
        }

        score
    }
}
