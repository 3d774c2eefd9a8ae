//! Playcache library crate (used by the CLI and integration tests).
//!
//! Ranks media search results for a voice assistant and keeps every result it
//! returns in a local archive, so later requests can be answered without the
//! streaming provider.
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Environment-driven settings
//! - [`MediaResult`], [`ResultEntry`], [`PlaylistEntry`] - Scored result records
//! - [`MediaArchive`] - Persistent track and playlist archive
//! - [`MediaSearch`], [`TieredLookupResult`] - Archive-first lookup
//!
//! ## Search
//! - [`LiveSearch`] - Streams, scores and archives provider results
//! - [`CacheSearch`] - Answers from the archive using [`KeywordMatcher`] entities
//! - [`Ranker`] - Position, media-type and similarity scoring
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod archive;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod keywords;
pub mod media;
pub mod provider;
pub mod scoring;
pub mod search;
pub mod storage;

pub use archive::MediaArchive;
pub use config::{Config, ConfigError};
pub use hashing::{hash_provider_phrase, normalize_phrase};
pub use keywords::{
    Entities, EntityClass, EntityExtractor, Harvest, KeywordMatcher, ProviderVocabulary,
};
pub use media::{
    Candidate, CollectionInfo, CollectionKind, MediaResult, MediaType, PlaybackType,
    PlaylistEntry, ResultEntry, SkillIdentity, TrackInfo,
};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockSearchProvider;
pub use provider::{CandidateStream, ProviderError, ProviderResult, SearchProvider};
pub use scoring::{FuzzyMatcher, Ranker, RankerWeights, StrsimMatcher};
pub use search::{
    CacheSearch, FeaturedMedia, LiveMemo, LiveSearch, MediaSearch, MediaStream, QueryContext,
    SearchError, SearchResult, TieredLookupResult,
};
#[cfg(any(test, feature = "mock"))]
pub use storage::MemoryStore;
pub use storage::{JsonFileStore, Repository, StorageError, StorageResult};
