//! Shared builders for the search unit tests.

use std::sync::Arc;

use crate::archive::MediaArchive;
use crate::media::{Candidate, CollectionInfo, MediaType, ResultEntry, SkillIdentity, TrackInfo};
use crate::scoring::{FuzzyMatcher, Ranker};
use crate::storage::MemoryStore;

/// Returns the same similarity for every pair.
pub(crate) struct FixedMatcher(pub f64);

impl FuzzyMatcher for FixedMatcher {
    fn ratio(&self, _a: &str, _b: &str) -> f64 {
        self.0
    }

    fn token_set_ratio(&self, _a: &str, _b: &str) -> f64 {
        self.0
    }
}

/// Ranker whose similarity terms are always zero, so scores are pure arithmetic.
pub(crate) fn flat_ranker() -> Ranker {
    Ranker::with_matcher(Arc::new(FixedMatcher(0.0)))
}

pub(crate) fn identity() -> SkillIdentity {
    SkillIdentity {
        provider_id: "youtube".to_string(),
        provider_name: "YoutubeMusic".to_string(),
        skill_id: "skill.test".to_string(),
        skill_icon: "icon.png".to_string(),
    }
}

pub(crate) fn track(url: &str, title: &str, artist: &str) -> Candidate {
    Candidate::Track(
        TrackInfo::new(url)
            .with_title(title)
            .with_artist(artist)
            .with_length_secs(200)
            .with_thumbnail(format!("{url}.jpg")),
    )
}

pub(crate) fn video(url: &str, title: &str) -> Candidate {
    Candidate::Video(TrackInfo::new(url).with_title(title))
}

pub(crate) fn playlist(title: &str, urls: &[&str]) -> Candidate {
    Candidate::playlist(
        CollectionInfo::new(title)
            .with_thumbnail("cover.jpg")
            .with_tracks(
                urls.iter()
                    .map(|u| TrackInfo::new(*u).with_title(format!("Track {u}")))
                    .collect(),
            ),
    )
}

/// Archived record as a live pass would have stored it.
pub(crate) fn stored(uri: &str, title: &str, artist: &str, media_type: MediaType) -> ResultEntry {
    ResultEntry {
        match_confidence: 0.0,
        media_type,
        uri: uri.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        image: format!("{uri}.jpg"),
        bg_image: format!("{uri}.jpg"),
        ..Default::default()
    }
}

/// In-memory archive plus its flush counters (tracks, playlists).
pub(crate) fn counted_archive() -> (
    MediaArchive,
    Arc<std::sync::atomic::AtomicUsize>,
    Arc<std::sync::atomic::AtomicUsize>,
) {
    let tracks: MemoryStore<ResultEntry> = MemoryStore::new();
    let playlists: MemoryStore<crate::media::PlaylistEntry> = MemoryStore::new();
    let track_flushes = tracks.flush_counter();
    let playlist_flushes = playlists.flush_counter();
    (
        MediaArchive::new(tracks, playlists),
        track_flushes,
        playlist_flushes,
    )
}
