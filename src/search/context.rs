use crate::constants::{
    CACHE_ENTITY_BONUS, CACHE_MUSIC_BASE, CACHE_PROVIDER_BONUS, LIVE_MUSIC_BONUS,
    LIVE_PROVIDER_BONUS,
};
use crate::keywords::{Entities, ProviderVocabulary};
use crate::media::MediaType;

/// Per-request state derived from the phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    /// The phrase as spoken.
    pub phrase: String,
    /// The phrase sent to the provider and used for scoring.
    pub search_phrase: String,
    pub media_type: MediaType,
    /// Whether the phrase named the provider.
    pub provider_named: bool,
    /// Entities found in the phrase; empty for live searches.
    pub entities: Entities,
    /// Request-level score bias applied to every candidate.
    pub base_score: f64,
}

impl QueryContext {
    /// Context for a live provider search.
    ///
    /// A phrase naming the provider has the names stripped before searching and earns
    /// the provider bonus; a music request earns the music bonus.
    pub fn live(phrase: &str, media_type: MediaType, vocabulary: &ProviderVocabulary) -> Self {
        let provider_named = vocabulary.matches(phrase);
        let search_phrase = if provider_named {
            vocabulary.strip(phrase)
        } else {
            phrase.to_string()
        };

        let mut base_score = 0;
        if media_type == MediaType::Music {
            base_score += LIVE_MUSIC_BONUS;
        }
        if provider_named {
            base_score += LIVE_PROVIDER_BONUS;
        }

        Self {
            phrase: phrase.to_string(),
            search_phrase,
            media_type,
            provider_named,
            entities: Entities::new(),
            base_score: f64::from(base_score),
        }
    }

    /// Context for an archive search, from the entities found in the phrase.
    pub fn cache(phrase: &str, media_type: MediaType, entities: Entities) -> Self {
        let provider_named = entities.provider_named();

        let mut base_score = if media_type == MediaType::Music {
            CACHE_MUSIC_BASE
        } else {
            0.0
        };
        base_score += CACHE_ENTITY_BONUS * entities.matched_count() as f64;
        if provider_named {
            base_score += CACHE_PROVIDER_BONUS;
        }

        Self {
            phrase: phrase.to_string(),
            search_phrase: phrase.to_string(),
            media_type,
            provider_named,
            entities,
            base_score,
        }
    }

    /// Number of entity classes matched in the phrase.
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.matched_count()
    }
}
