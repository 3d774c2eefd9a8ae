//! Scored, presentation-ready records.
//!
//! Field names are a wire contract with the playback negotiation layer and are kept
//! verbatim. Every field tolerates being absent or `null` in stored JSON so archives
//! written by older releases still load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use super::candidate::{CollectionInfo, CollectionKind, TrackInfo};
use super::types::{MediaType, PlaybackType};
use crate::constants::MAX_CONFIDENCE;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads any JSON number (or `null`) as whole milliseconds.
///
/// Older archives stored lengths as floats; fractions are truncated and negative
/// values read as `0`.
fn lenient_length<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.map_or(0, |n| {
        n.as_u64()
            .unwrap_or_else(|| n.as_f64().map_or(0, |f| f.max(0.0) as u64))
    }))
}

/// Who produced a result, and how its URIs are prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillIdentity {
    /// URI prefix, e.g. `youtube` in `youtube//<url>`.
    pub provider_id: String,
    /// Display name used in generated titles.
    pub provider_name: String,
    pub skill_id: String,
    pub skill_icon: String,
}

impl SkillIdentity {
    /// Builds the provider-prefixed URI for a watch URL.
    #[inline]
    pub fn uri_for(&self, watch_url: &str) -> String {
        format!("{}//{}", self.provider_id, watch_url)
    }
}

/// One playable item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    /// Milliseconds; `0` when unknown.
    #[serde(default, deserialize_with = "lenient_length")]
    pub length: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playback: PlaybackType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bg_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_id: String,
}

impl ResultEntry {
    /// Builds an entry for a flat track or video.
    pub fn from_track(
        track: &TrackInfo,
        media_type: MediaType,
        score: f64,
        identity: &SkillIdentity,
    ) -> Self {
        let thumbnail = track.thumbnail_url.clone().unwrap_or_default();
        Self {
            match_confidence: score.min(MAX_CONFIDENCE),
            media_type,
            length: track.length_ms(),
            uri: identity.uri_for(&track.watch_url),
            playback: PlaybackType::Audio,
            image: thumbnail.clone(),
            bg_image: thumbnail,
            skill_icon: identity.skill_icon.clone(),
            title: track.title.clone().unwrap_or_default(),
            album: None,
            artist: track.artist.clone().unwrap_or_default(),
            skill_id: identity.skill_id.clone(),
        }
    }

    /// Builds an entry for a track inside a collection.
    ///
    /// Children show the collection artwork and name the collection as their album.
    pub fn from_collection_track(
        track: &TrackInfo,
        collection: &CollectionInfo,
        score: f64,
        identity: &SkillIdentity,
    ) -> Self {
        let thumbnail = collection.thumbnail_url.clone().unwrap_or_default();
        Self {
            image: thumbnail.clone(),
            bg_image: thumbnail,
            album: Some(collection.title.clone().unwrap_or_default()),
            ..Self::from_track(track, MediaType::Music, score, identity)
        }
    }
}

/// A playable group of entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaylistEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playlist: Vec<ResultEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playback: PlaybackType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bg_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_id: String,
}

impl PlaylistEntry {
    /// Display title for a collection: its name followed by the kind suffix.
    ///
    /// Artist pages are named after the artist rather than the page title.
    pub fn collection_title(kind: CollectionKind, info: &CollectionInfo) -> String {
        let name = match kind {
            CollectionKind::Artist => info.artist.as_deref().or(info.title.as_deref()),
            CollectionKind::Album | CollectionKind::Playlist => info.title.as_deref(),
        };
        format!("{} {}", name.unwrap_or_default(), kind.title_suffix())
            .trim()
            .to_string()
    }

    /// Builds a playlist entry; `None` when the collection has no tracks.
    ///
    /// Every child inherits the collection-level `score`.
    pub fn from_collection(
        kind: CollectionKind,
        info: &CollectionInfo,
        score: f64,
        identity: &SkillIdentity,
    ) -> Option<Self> {
        if info.tracks.is_empty() {
            return None;
        }

        let score = score.min(MAX_CONFIDENCE);
        let playlist = info
            .tracks
            .iter()
            .map(|track| ResultEntry::from_collection_track(track, info, score, identity))
            .collect();
        let thumbnail = info.thumbnail_url.clone().unwrap_or_default();

        Some(Self {
            match_confidence: score,
            media_type: MediaType::Music,
            playlist,
            playback: PlaybackType::Audio,
            skill_icon: identity.skill_icon.clone(),
            image: thumbnail.clone(),
            bg_image: thumbnail,
            artist: info.artist.clone().unwrap_or_default(),
            title: Self::collection_title(kind, info),
            author: None,
            skill_id: identity.skill_id.clone(),
        })
    }
}

/// Either shape of result, serialized without a tag.
///
/// On the way back in, a record with a `playlist` key is a playlist and anything else
/// is a track. Both shapes tolerate missing fields, so the key decides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaResult {
    Playlist(PlaylistEntry),
    Track(ResultEntry),
}

impl<'de> Deserialize<'de> for MediaResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let result = if value.get("playlist").is_some() {
            serde_json::from_value(value).map(MediaResult::Playlist)
        } else {
            serde_json::from_value(value).map(MediaResult::Track)
        };
        result.map_err(serde::de::Error::custom)
    }
}

impl MediaResult {
    #[inline]
    pub fn match_confidence(&self) -> f64 {
        match self {
            MediaResult::Playlist(p) => p.match_confidence,
            MediaResult::Track(t) => t.match_confidence,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        match self {
            MediaResult::Playlist(p) => &p.title,
            MediaResult::Track(t) => &t.title,
        }
    }

    #[inline]
    pub fn artist(&self) -> &str {
        match self {
            MediaResult::Playlist(p) => &p.artist,
            MediaResult::Track(t) => &t.artist,
        }
    }

    /// URI of a single track; playlists have none.
    #[inline]
    pub fn uri(&self) -> Option<&str> {
        match self {
            MediaResult::Playlist(_) => None,
            MediaResult::Track(t) => Some(&t.uri),
        }
    }

    #[inline]
    pub fn is_playlist(&self) -> bool {
        matches!(self, MediaResult::Playlist(_))
    }

    pub fn as_track(&self) -> Option<&ResultEntry> {
        match self {
            MediaResult::Track(t) => Some(t),
            MediaResult::Playlist(_) => None,
        }
    }

    pub fn as_playlist(&self) -> Option<&PlaylistEntry> {
        match self {
            MediaResult::Playlist(p) => Some(p),
            MediaResult::Track(_) => None,
        }
    }
}

impl From<ResultEntry> for MediaResult {
    fn from(entry: ResultEntry) -> Self {
        MediaResult::Track(entry)
    }
}

impl From<PlaylistEntry> for MediaResult {
    fn from(entry: PlaylistEntry) -> Self {
        MediaResult::Playlist(entry)
    }
}
