//! Test fixtures for integration tests.
#![allow(dead_code)]

use std::path::Path;

use playcache::config::Config;
use playcache::media::{Candidate, CollectionInfo, TrackInfo};

pub const ZZ_TOP_URL: &str = "watch?v=b76kjd5nvMg";

/// Default settings with the archive rooted at `dir`.
pub fn config_in(dir: &Path) -> Config {
    Config {
        storage_path: dir.to_path_buf(),
        ..Default::default()
    }
}

pub fn track(url: &str, title: &str, artist: &str) -> Candidate {
    Candidate::Track(
        TrackInfo::new(url)
            .with_title(title)
            .with_artist(artist)
            .with_length_secs(180)
            .with_thumbnail(format!("https://img.test/{url}.jpg")),
    )
}

pub fn video(url: &str, title: &str) -> Candidate {
    Candidate::Video(TrackInfo::new(url).with_title(title))
}

fn album_track(url: &str, artist: &str) -> TrackInfo {
    TrackInfo::new(url)
        .with_title(format!("Track {url}"))
        .with_artist(artist)
}

pub fn album(title: &str, artist: &str, urls: &[&str]) -> Candidate {
    let tracks = urls.iter().map(|u| album_track(u, artist)).collect();
    Candidate::album(
        CollectionInfo::new(title)
            .with_artist(artist)
            .with_thumbnail("https://img.test/cover.jpg")
            .with_tracks(tracks),
    )
}

/// The provider results used by most scenarios.
pub fn johnny_cash_results() -> Vec<Candidate> {
    vec![
        track("hurt", "Hurt", "Johnny Cash"),
        album("American IV", "Johnny Cash", &["t1", "t2"]),
        video("v", "Johnny Cash live"),
    ]
}

pub fn zz_top_track() -> Candidate {
    track(ZZ_TOP_URL, "ZZ TOP - Blue Jean Blues", "Tomi_C")
}
