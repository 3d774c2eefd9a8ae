//! Keyword registry and entity extraction.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use super::text::{find_words, words};

/// Vocabulary classes recognised in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityClass {
    ArtistName,
    SongName,
    PlaylistName,
    StreamingProvider,
    Genre,
}

impl EntityClass {
    pub const ALL: [EntityClass; 5] = [
        EntityClass::ArtistName,
        EntityClass::SongName,
        EntityClass::PlaylistName,
        EntityClass::StreamingProvider,
        EntityClass::Genre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityClass::ArtistName => "artist_name",
            EntityClass::SongName => "song_name",
            EntityClass::PlaylistName => "playlist_name",
            EntityClass::StreamingProvider => "music_streaming_provider",
            EntityClass::Genre => "music_genre",
        }
    }
}

impl std::fmt::Display for EntityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities found in one phrase, at most one per class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    matches: BTreeMap<EntityClass, String>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: EntityClass, value: impl Into<String>) -> Self {
        self.insert(class, value);
        self
    }

    pub fn insert(&mut self, class: EntityClass, value: impl Into<String>) {
        self.matches.insert(class, value.into());
    }

    pub fn get(&self, class: EntityClass) -> Option<&str> {
        self.matches.get(&class).map(String::as_str)
    }

    pub fn artist(&self) -> Option<&str> {
        self.get(EntityClass::ArtistName)
    }

    pub fn song(&self) -> Option<&str> {
        self.get(EntityClass::SongName)
    }

    pub fn playlist(&self) -> Option<&str> {
        self.get(EntityClass::PlaylistName)
    }

    /// `true` when the phrase named the streaming provider.
    pub fn provider_named(&self) -> bool {
        self.matches.contains_key(&EntityClass::StreamingProvider)
    }

    /// Number of classes that matched.
    pub fn matched_count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityClass, &str)> {
        self.matches.iter().map(|(c, v)| (*c, v.as_str()))
    }
}

/// Finds known entities in a free-text phrase.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, phrase: &str) -> Entities;
}

#[derive(Debug, Clone)]
struct Keyword {
    words: Vec<String>,
    /// The keyword as first registered, trimmed.
    display: String,
}

/// Thread-safe keyword registry implementing [`EntityExtractor`].
///
/// Matching is case-insensitive on whole words. When several keywords of a class
/// occur, the longest wins.
#[derive(Debug, Default)]
pub struct KeywordMatcher {
    classes: RwLock<HashMap<EntityClass, BTreeMap<String, Keyword>>>,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds keywords to `class`; returns how many were new.
    ///
    /// Blank keywords are ignored; duplicates (after case and whitespace folding) keep
    /// their first spelling.
    pub fn register<I, S>(&self, class: EntityClass, keywords: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes = self.classes.write();
        let registry = classes.entry(class).or_default();

        let mut added = 0;
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            let kw_words = words(keyword);
            if kw_words.is_empty() {
                continue;
            }
            let key = kw_words.join(" ");
            if registry.contains_key(&key) {
                continue;
            }
            registry.insert(
                key,
                Keyword {
                    words: kw_words,
                    display: keyword.to_string(),
                },
            );
            added += 1;
        }

        if added > 0 {
            debug!(class = %class, added, total = registry.len(), "Registered keywords");
        }
        added
    }

    /// Number of keywords registered for `class`.
    pub fn keyword_count(&self, class: EntityClass) -> usize {
        self.classes.read().get(&class).map_or(0, BTreeMap::len)
    }

    /// Removes every keyword.
    pub fn clear(&self) {
        self.classes.write().clear();
    }
}

impl EntityExtractor for KeywordMatcher {
    fn extract(&self, phrase: &str) -> Entities {
        let phrase_words = words(phrase);
        let mut entities = Entities::new();
        if phrase_words.is_empty() {
            return entities;
        }

        let classes = self.classes.read();
        for class in EntityClass::ALL {
            let Some(registry) = classes.get(&class) else {
                continue;
            };
            let best = registry
                .iter()
                .filter(|(_, kw)| find_words(&phrase_words, &kw.words).is_some())
                .max_by_key(|(key, _)| key.len());
            if let Some((_, kw)) = best {
                entities.insert(class, kw.display.clone());
            }
        }

        entities
    }
}
