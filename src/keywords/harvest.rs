//! Builds keyword lists from archived and freshly searched media.

use tracing::debug;

use super::matcher::{EntityClass, KeywordMatcher};
use super::vocabulary::ProviderVocabulary;
use crate::archive::MediaArchive;
use crate::media::{MediaResult, ResultEntry};

/// Cleans a display title into a speakable name.
///
/// Drops everything from the first `(`, `[` or `//`, turns `,` and `:` into `-`, and
/// trims.
pub fn normalize_name(title: &str) -> String {
    let cut = ["(", "[", "//"]
        .iter()
        .filter_map(|marker| title.find(marker))
        .min()
        .unwrap_or(title.len());
    title[..cut].replace([',', ':'], "-").trim().to_string()
}

/// Whether a provider-reported artist looks like a real artist name.
///
/// Channel names with dashes, long descriptions and names carrying numbers
/// are rejected.
pub fn is_plausible_artist(artist: &str) -> bool {
    let words: Vec<&str> = artist.split_whitespace().collect();
    !words.is_empty()
        && !artist.contains('-')
        && words.len() < 5
        && !words.iter().any(|w| w.chars().all(char::is_numeric))
}

/// Keyword candidates collected before registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    pub artists: Vec<String>,
    pub songs: Vec<String>,
    pub playlists: Vec<String>,
}

impl Harvest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects names from everything already archived.
    pub fn from_archive(archive: &MediaArchive) -> Self {
        let mut harvest = Self::new();
        for entry in archive.tracks() {
            harvest.artists.push(entry.artist.clone());
            harvest.songs.push(normalize_name(&entry.title));
        }
        harvest.playlists = archive.playlist_titles();
        harvest
    }

    /// Collects names from one live search result.
    pub fn add_result(&mut self, result: &MediaResult) {
        match result {
            MediaResult::Playlist(playlist) => {
                self.playlists.push(normalize_name(&playlist.title));
                for child in &playlist.playlist {
                    self.add_track(child);
                }
            }
            MediaResult::Track(entry) => self.add_track(entry),
        }
    }

    fn add_track(&mut self, entry: &ResultEntry) {
        let last_segment = entry.title.rsplit('-').next().unwrap_or_default();
        self.songs.push(normalize_name(last_segment));

        if is_plausible_artist(&entry.artist) {
            let name = normalize_name(&entry.artist);
            let first = name.split('-').next().unwrap_or_default().trim();
            self.artists.push(first.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.songs.is_empty() && self.playlists.is_empty()
    }

    /// Registers the harvested names, plus the provider names and `genres`.
    ///
    /// Returns how many keywords were new.
    pub fn register(
        &self,
        matcher: &KeywordMatcher,
        vocabulary: &ProviderVocabulary,
        genres: &[String],
    ) -> usize {
        let added = matcher.register(EntityClass::ArtistName, &self.artists)
            + matcher.register(EntityClass::SongName, &self.songs)
            + matcher.register(EntityClass::PlaylistName, &self.playlists)
            + matcher.register(EntityClass::StreamingProvider, vocabulary.names())
            + matcher.register(EntityClass::Genre, genres);

        debug!(
            artists = self.artists.len(),
            songs = self.songs.len(),
            playlists = self.playlists.len(),
            added,
            "Registered harvested keywords"
        );
        added
    }
}
