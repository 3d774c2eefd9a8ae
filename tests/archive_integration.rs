//! Integration tests for the on-disk archive.

mod common;

use std::fs;
use std::sync::Arc;

use common::fixtures::{config_in, johnny_cash_results, track};
use playcache::archive::MediaArchive;
use playcache::constants::{ARCHIVE_FILENAME, PLAYLISTS_FILENAME};
use playcache::keywords::{Harvest, KeywordMatcher};
use playcache::media::{MediaType, PlaybackType};
use playcache::provider::MockSearchProvider;
use playcache::search::{CacheSearch, FeaturedMedia, LiveSearch};
use tempfile::TempDir;

fn live_search(
    provider: MockSearchProvider,
    archive: &MediaArchive,
) -> LiveSearch<MockSearchProvider> {
    let config = playcache::config::Config::default();
    LiveSearch::new(Arc::new(provider), archive.clone(), config.identity())
}

#[tokio::test]
async fn test_live_pass_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let archive = MediaArchive::open(dir.path()).unwrap();

    let results = live_search(MockSearchProvider::new(johnny_cash_results()), &archive)
        .collect("johnny cash", MediaType::Music)
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(dir.path().join(ARCHIVE_FILENAME).exists());
    assert!(dir.path().join(PLAYLISTS_FILENAME).exists());

    let reopened = MediaArchive::open(dir.path()).unwrap();
    let uris: Vec<_> = reopened.tracks().into_iter().map(|t| t.uri).collect();
    assert_eq!(
        uris,
        vec!["youtube//hurt", "youtube//t1", "youtube//t2", "youtube//v"]
    );
    assert_eq!(reopened.playlist_titles(), vec!["American IV (Full Album)"]);

    let album = reopened.get_playlist("American IV (Full Album)").unwrap();
    assert_eq!(album.playlist.len(), 2);
    assert_eq!(album.playlist[0].album.as_deref(), Some("American IV"));
    assert_eq!(reopened.get_track("youtube//hurt").unwrap().length, 180_000);
}

#[tokio::test]
async fn test_failed_pass_is_not_flushed() {
    let dir = TempDir::new().unwrap();
    let archive = MediaArchive::open(dir.path()).unwrap();
    let provider = MockSearchProvider::new(johnny_cash_results()).failing_after(1);

    let outcome = live_search(provider, &archive)
        .collect("johnny cash", MediaType::Music)
        .await;

    assert!(outcome.is_err());
    assert_eq!(archive.track_count(), 1);
    assert!(!dir.path().join(ARCHIVE_FILENAME).exists());
    assert_eq!(MediaArchive::open(dir.path()).unwrap().track_count(), 0);
}

#[tokio::test]
async fn test_reopened_archive_answers_cache_search() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    {
        let archive = MediaArchive::open(&config.storage_path).unwrap();
        live_search(MockSearchProvider::new(johnny_cash_results()), &archive)
            .collect("johnny cash", MediaType::Music)
            .await
            .unwrap();
    }

    let archive = MediaArchive::open(&config.storage_path).unwrap();
    let keywords = Arc::new(KeywordMatcher::new());
    Harvest::from_archive(&archive).register(&keywords, &config.vocabulary(), &config.genres);
    let featured = FeaturedMedia::new(archive.clone(), Arc::new(config.identity()));
    let search = CacheSearch::new(archive.clone(), keywords, featured);

    let results = search.search("play hurt by johnny cash", MediaType::Music);
    assert_eq!(results[0].uri(), Some("youtube//hurt"));
    assert!(results.iter().all(|r| r.match_confidence() <= 100.0));

    let albums = search.search("american iv full album", MediaType::Music);
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].title(), "American IV (Full Album)");
}

#[test]
fn test_legacy_records_load_with_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(ARCHIVE_FILENAME),
        r#"{
            "youtube//a": {"title": "Song A", "artist": null, "media_type": 2, "uri": "youtube//a"},
            "youtube//b": {"title": "Song B", "playback": null, "length": null},
            "broken": "not a record"
        }"#,
    )
    .unwrap();

    let archive = MediaArchive::open(dir.path()).unwrap();

    assert_eq!(archive.track_count(), 2);
    let a = archive.get_track("youtube//a").unwrap();
    assert_eq!(a.artist, "");
    assert_eq!(a.media_type, MediaType::Music);
    let b = archive.get_track("youtube//b").unwrap();
    assert_eq!(b.playback, PlaybackType::Audio);
    assert_eq!(b.length, 0);
    assert_eq!(b.media_type, MediaType::Generic);
}

#[test]
fn test_legacy_records_survive_flush_and_reopen() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(ARCHIVE_FILENAME),
        r#"{
            "youtube//hurt": {"uri": "youtube//hurt", "title": "Hurt", "length": 218000.0},
            "youtube//odd": {"uri": "youtube//odd", "title": "Odd", "media_type": 7},
            "broken": "not a record"
        }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(PLAYLISTS_FILENAME),
        r#"{"Old Mix (Playlist)": {"title": "Old Mix (Playlist)", "match_confidence": 40}}"#,
    )
    .unwrap();

    let archive = MediaArchive::open(dir.path()).unwrap();
    assert_eq!(archive.track_count(), 2);
    assert_eq!(archive.playlist_count(), 1);
    archive.flush().unwrap();

    let reopened = MediaArchive::open(dir.path()).unwrap();
    assert_eq!(reopened.track_count(), 2);
    assert_eq!(reopened.get_track("youtube//hurt").unwrap().length, 218_000);
    assert_eq!(
        reopened.get_track("youtube//odd").unwrap().media_type,
        MediaType::Generic
    );

    let mix = reopened.get_playlist("Old Mix (Playlist)").unwrap();
    assert!(mix.playlist.is_empty());
    assert_eq!(mix.match_confidence, 40.0);

    let text = fs::read_to_string(dir.path().join(ARCHIVE_FILENAME)).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw["broken"], "not a record");
}

#[test]
fn test_flush_writes_insertion_order() {
    let dir = TempDir::new().unwrap();
    let archive = MediaArchive::open(dir.path()).unwrap();
    let config = playcache::config::Config::default();
    let identity = config.identity();

    for url in ["z", "a", "m"] {
        let playcache::media::Candidate::Track(info) = track(url, url, "X") else {
            unreachable!();
        };
        archive.insert_track(playcache::media::ResultEntry::from_track(
            &info,
            MediaType::Music,
            50.0,
            &identity,
        ));
    }
    archive.flush().unwrap();

    let text = fs::read_to_string(dir.path().join(ARCHIVE_FILENAME)).unwrap();
    let z = text.find("youtube//z").unwrap();
    let a = text.find("youtube//a").unwrap();
    let m = text.find("youtube//m").unwrap();
    assert!(z < a && a < m);
}
