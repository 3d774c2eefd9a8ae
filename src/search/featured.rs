use std::sync::Arc;

use crate::archive::MediaArchive;
use crate::constants::{FEATURED_ENTRY_CONFIDENCE, MAX_CONFIDENCE};
use crate::media::{MediaType, PlaybackType, PlaylistEntry, ResultEntry, SkillIdentity};

/// The archive presented as a browsable catalogue.
#[derive(Debug, Clone)]
pub struct FeaturedMedia {
    archive: MediaArchive,
    identity: Arc<SkillIdentity>,
}

impl FeaturedMedia {
    pub fn new(archive: MediaArchive, identity: Arc<SkillIdentity>) -> Self {
        Self { archive, identity }
    }

    /// Every archived track, in archive order, as a playable music entry.
    pub fn entries(&self) -> Vec<ResultEntry> {
        self.archive.with_stores(|stores| {
            stores
                .tracks
                .iter()
                .map(|(uri, stored)| ResultEntry {
                    match_confidence: FEATURED_ENTRY_CONFIDENCE,
                    media_type: MediaType::Music,
                    length: stored.length,
                    uri: uri.to_string(),
                    playback: PlaybackType::Audio,
                    image: stored.image.clone(),
                    bg_image: stored.image.clone(),
                    skill_icon: self.identity.skill_icon.clone(),
                    title: stored.title.clone(),
                    album: None,
                    artist: stored.artist.clone(),
                    skill_id: self.identity.skill_id.clone(),
                })
                .collect()
        })
    }

    /// A playlist of the first `count` featured entries, at confidence `score`.
    pub fn playlist(&self, score: f64, count: usize) -> PlaylistEntry {
        let mut playlist = self.entries();
        playlist.truncate(count);

        let name = &self.identity.provider_name;
        PlaylistEntry {
            match_confidence: score.min(MAX_CONFIDENCE),
            media_type: MediaType::Music,
            playlist,
            playback: PlaybackType::Audio,
            skill_icon: self.identity.skill_icon.clone(),
            image: self.identity.skill_icon.clone(),
            bg_image: String::new(),
            artist: String::new(),
            title: format!("{name} Featured Media (Playlist)"),
            author: Some(name.clone()),
            skill_id: self.identity.skill_id.clone(),
        }
    }
}
