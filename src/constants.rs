//! Cross-cutting, shared constants.
//!
//! Scoring weights live here so the ranker, the cache search and the tests agree on a
//! single set of numbers. Runtime-tunable values have a matching field on
//! [`Config`](crate::config::Config) or [`RankerWeights`](crate::scoring::RankerWeights);
//! the constants below are their defaults.

use std::time::Duration;

/// Upper bound for every confidence value produced by this crate.
pub const MAX_CONFIDENCE: f64 = 100.0;

// Live-provider pass.

/// Base-score bonus when the request explicitly asks for music.
pub const LIVE_MUSIC_BONUS: i32 = 10;
/// Base-score bonus when the phrase names the provider.
pub const LIVE_PROVIDER_BONUS: i32 = 50;
/// Points lost per position down the provider's own ranking.
pub const POSITION_DECAY: f64 = 5.0;
/// Penalty for bare video results.
pub const VIDEO_PENALTY: f64 = 10.0;
/// Weight of the artist similarity term.
pub const ARTIST_WEIGHT: f64 = 80.0;
/// Weight of the title similarity term.
pub const TITLE_WEIGHT: f64 = 80.0;
/// Penalty when the request did not say music or video.
pub const GENERIC_REQUEST_PENALTY: f64 = 10.0;

// Archived-result pass.

/// Base score when the request explicitly asks for music.
pub const CACHE_MUSIC_BASE: f64 = 20.0;
/// Base-score bonus per extracted entity.
pub const CACHE_ENTITY_BONUS: f64 = 30.0;
/// Extra bonus when the provider is named.
pub const CACHE_PROVIDER_BONUS: f64 = 30.0;
/// Weight of the primary similarity term.
pub const CACHE_PRIMARY_WEIGHT: f64 = 0.8;
/// Weight of the secondary (artist within a song match) similarity term.
pub const CACHE_ARTIST_WEIGHT: f64 = 0.5;
/// Penalty when a stored entry's media type differs from the requested one.
pub const MEDIA_MISMATCH_PENALTY: f64 = 20.0;

// Featured media.

/// Confidence given to each featured child entry.
pub const FEATURED_ENTRY_CONFIDENCE: f64 = 80.0;
/// Confidence of the aggregate featured playlist.
pub const DEFAULT_FEATURED_CONFIDENCE: f64 = 50.0;
/// Number of archive entries placed in the featured playlist.
pub const DEFAULT_FEATURED_COUNT: usize = 50;

// Provider plumbing.

/// URI scheme prefix and provider identifier.
pub const DEFAULT_PROVIDER_ID: &str = "youtube";
/// Human-readable provider name used in featured titles.
pub const DEFAULT_PROVIDER_NAME: &str = "YoutubeMusic";
/// Names that mark a phrase as explicitly requesting the provider.
pub const DEFAULT_PROVIDER_ALIASES: &[&str] = &["youtube music", "youtube"];
/// Queries run by a refreshing precache pass.
pub const DEFAULT_FEATURED_QUERIES: &[&str] = &["johnny cash"];
/// Genre keywords always registered with the entity extractor.
pub const DEFAULT_GENRES: &[&str] = &["indie", "rock", "metal", "pop", "jazz", "ai covers"];
/// Owning skill identifier stamped on every result.
pub const DEFAULT_SKILL_ID: &str = "skill-youtube-music.openvoiceos";
/// Icon stamped on every result.
pub const DEFAULT_SKILL_ICON: &str = "res/ytmus.png";

/// Live results for an identical phrase are reused for this long.
pub const DEFAULT_MEMO_TTL: Duration = Duration::from_secs(3 * 60 * 60);
/// Maximum number of memoized phrases.
pub const DEFAULT_MEMO_CAPACITY: u64 = 256;
/// Upper bound on opening the provider stream and on each item it yields.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);
/// Minimum archived confidence that lets the tiered lookup skip the provider.
pub const DEFAULT_CACHE_ACCEPT_THRESHOLD: f64 = 50.0;

/// File holding the track archive.
pub const ARCHIVE_FILENAME: &str = "archive.json";
/// File holding the playlist archive.
pub const PLAYLISTS_FILENAME: &str = "playlists.json";
