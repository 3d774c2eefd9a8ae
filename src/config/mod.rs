//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PLAYCACHE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_ACCEPT_THRESHOLD, DEFAULT_FEATURED_CONFIDENCE, DEFAULT_FEATURED_COUNT,
    DEFAULT_FEATURED_QUERIES, DEFAULT_GENRES, DEFAULT_MEMO_CAPACITY, DEFAULT_MEMO_TTL,
    DEFAULT_PROVIDER_ALIASES, DEFAULT_PROVIDER_ID, DEFAULT_PROVIDER_NAME,
    DEFAULT_PROVIDER_TIMEOUT, DEFAULT_SKILL_ICON, DEFAULT_SKILL_ID, MAX_CONFIDENCE,
};
use crate::keywords::ProviderVocabulary;
use crate::media::SkillIdentity;

/// Search configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PLAYCACHE_*` overrides on top of defaults.
/// List settings are comma-separated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `archive.json` and `playlists.json`. Default: `./.playcache`.
    pub storage_path: PathBuf,

    /// URI prefix for results. Default: `youtube`.
    pub provider_id: String,

    /// Display name used in generated titles. Default: `YoutubeMusic`.
    pub provider_name: String,

    /// Names that mark a phrase as asking for this provider.
    pub provider_aliases: Vec<String>,

    pub skill_id: String,

    pub skill_icon: String,

    /// Phrases searched live by a refreshing precache. Default: `johnny cash`.
    pub featured_queries: Vec<String>,

    /// Genre keywords always registered. Not read from the environment.
    pub genres: Vec<String>,

    /// Entries in the featured playlist. Default: `50`.
    pub featured_count: usize,

    /// Confidence of the featured playlist. Default: `50`.
    pub featured_confidence: f64,

    /// How long live results are reused for an identical phrase; zero disables the
    /// memo. Default: 3 hours.
    pub memo_ttl: Duration,

    /// Maximum memoized phrases. Default: `256`.
    pub memo_capacity: u64,

    /// Bound on opening a provider search and on each candidate. Default: 30 s.
    pub provider_timeout: Duration,

    /// Archived confidence at which a tiered lookup skips the provider. Default: `50`.
    pub cache_accept_threshold: f64,

    /// Store computed archive-search confidences back on the records. Default: `true`.
    pub write_back_scores: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("./.playcache"),
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            provider_aliases: to_strings(DEFAULT_PROVIDER_ALIASES),
            skill_id: DEFAULT_SKILL_ID.to_string(),
            skill_icon: DEFAULT_SKILL_ICON.to_string(),
            featured_queries: to_strings(DEFAULT_FEATURED_QUERIES),
            genres: to_strings(DEFAULT_GENRES),
            featured_count: DEFAULT_FEATURED_COUNT,
            featured_confidence: DEFAULT_FEATURED_CONFIDENCE,
            memo_ttl: DEFAULT_MEMO_TTL,
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            cache_accept_threshold: DEFAULT_CACHE_ACCEPT_THRESHOLD,
            write_back_scores: true,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Config {
    const ENV_STORAGE_PATH: &'static str = "PLAYCACHE_STORAGE_PATH";
    const ENV_PROVIDER_ID: &'static str = "PLAYCACHE_PROVIDER_ID";
    const ENV_PROVIDER_NAME: &'static str = "PLAYCACHE_PROVIDER_NAME";
    const ENV_PROVIDER_ALIASES: &'static str = "PLAYCACHE_PROVIDER_ALIASES";
    const ENV_SKILL_ID: &'static str = "PLAYCACHE_SKILL_ID";
    const ENV_SKILL_ICON: &'static str = "PLAYCACHE_SKILL_ICON";
    const ENV_FEATURED_QUERIES: &'static str = "PLAYCACHE_FEATURED_QUERIES";
    const ENV_FEATURED_COUNT: &'static str = "PLAYCACHE_FEATURED_COUNT";
    const ENV_FEATURED_CONFIDENCE: &'static str = "PLAYCACHE_FEATURED_CONFIDENCE";
    const ENV_MEMO_TTL_SECS: &'static str = "PLAYCACHE_MEMO_TTL_SECS";
    const ENV_MEMO_CAPACITY: &'static str = "PLAYCACHE_MEMO_CAPACITY";
    const ENV_PROVIDER_TIMEOUT_SECS: &'static str = "PLAYCACHE_PROVIDER_TIMEOUT_SECS";
    const ENV_CACHE_ACCEPT_THRESHOLD: &'static str = "PLAYCACHE_CACHE_ACCEPT_THRESHOLD";
    const ENV_WRITE_BACK_SCORES: &'static str = "PLAYCACHE_WRITE_BACK_SCORES";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Malformed values are errors rather than silently replaced by defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            storage_path: Self::parse_path_from_env(Self::ENV_STORAGE_PATH, defaults.storage_path),
            provider_id: Self::parse_string_from_env(Self::ENV_PROVIDER_ID, defaults.provider_id),
            provider_name: Self::parse_string_from_env(
                Self::ENV_PROVIDER_NAME,
                defaults.provider_name,
            ),
            provider_aliases: Self::parse_list_from_env(
                Self::ENV_PROVIDER_ALIASES,
                defaults.provider_aliases,
            ),
            skill_id: Self::parse_string_from_env(Self::ENV_SKILL_ID, defaults.skill_id),
            skill_icon: Self::parse_string_from_env(Self::ENV_SKILL_ICON, defaults.skill_icon),
            featured_queries: Self::parse_list_from_env(
                Self::ENV_FEATURED_QUERIES,
                defaults.featured_queries,
            ),
            genres: defaults.genres,
            featured_count: Self::parse_int_from_env(
                Self::ENV_FEATURED_COUNT,
                defaults.featured_count,
            )?,
            featured_confidence: Self::parse_f64_from_env(
                Self::ENV_FEATURED_CONFIDENCE,
                defaults.featured_confidence,
            )?,
            memo_ttl: Self::parse_secs_from_env(Self::ENV_MEMO_TTL_SECS, defaults.memo_ttl)?,
            memo_capacity: Self::parse_int_from_env(
                Self::ENV_MEMO_CAPACITY,
                defaults.memo_capacity,
            )?,
            provider_timeout: Self::parse_secs_from_env(
                Self::ENV_PROVIDER_TIMEOUT_SECS,
                defaults.provider_timeout,
            )?,
            cache_accept_threshold: Self::parse_f64_from_env(
                Self::ENV_CACHE_ACCEPT_THRESHOLD,
                defaults.cache_accept_threshold,
            )?,
            write_back_scores: Self::parse_bool_from_env(
                Self::ENV_WRITE_BACK_SCORES,
                defaults.write_back_scores,
            )?,
        })
    }

    /// Validates basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.exists() && !self.storage_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.storage_path.clone(),
            });
        }

        if self.provider_id.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_PROVIDER_ID,
            });
        }
        if self.provider_id.contains('/') {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_PROVIDER_ID,
                reason: "must not contain '/'".to_string(),
            });
        }
        if self.provider_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_PROVIDER_NAME,
            });
        }
        if self.provider_aliases.is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_PROVIDER_ALIASES,
            });
        }

        if self.featured_count == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_FEATURED_COUNT,
                reason: "must be at least 1".to_string(),
            });
        }
        if self.memo_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MEMO_CAPACITY,
                reason: "must be at least 1".to_string(),
            });
        }
        if self.provider_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_PROVIDER_TIMEOUT_SECS,
                reason: "must be at least 1 second".to_string(),
            });
        }

        Self::check_confidence(Self::ENV_FEATURED_CONFIDENCE, self.featured_confidence)?;
        Self::check_confidence(
            Self::ENV_CACHE_ACCEPT_THRESHOLD,
            self.cache_accept_threshold,
        )?;

        Ok(())
    }

    /// Identity stamped on every produced result.
    pub fn identity(&self) -> SkillIdentity {
        SkillIdentity {
            provider_id: self.provider_id.clone(),
            provider_name: self.provider_name.clone(),
            skill_id: self.skill_id.clone(),
            skill_icon: self.skill_icon.clone(),
        }
    }

    /// Provider names recognised in phrases.
    pub fn vocabulary(&self) -> ProviderVocabulary {
        ProviderVocabulary::new(self.provider_aliases.iter().cloned())
    }

    /// `true` when live results are memoized.
    pub fn memo_enabled(&self) -> bool {
        !self.memo_ttl.is_zero()
    }

    fn check_confidence(name: &'static str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value > MAX_CONFIDENCE {
            return Err(ConfigError::InvalidValue {
                name,
                reason: format!("{value} is not a finite confidence of at most {MAX_CONFIDENCE}"),
            });
        }
        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_list_from_env(var_name: &str, default: Vec<String>) -> Vec<String> {
        match env::var(var_name) {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => default,
        }
    }

    fn parse_int_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidInteger {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidFloat {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_secs_from_env(
        var_name: &'static str,
        default: Duration,
    ) -> Result<Duration, ConfigError> {
        let secs: u64 = Self::parse_int_from_env(var_name, default.as_secs())?;
        Ok(Duration::from_secs(secs))
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
