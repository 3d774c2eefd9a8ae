//! Integration tests for tiered lookup over an on-disk archive.

mod common;

use common::fixtures::{ZZ_TOP_URL, config_in, johnny_cash_results, zz_top_track};
use playcache::archive::MediaArchive;
use playcache::config::Config;
use playcache::media::MediaType;
use playcache::provider::MockSearchProvider;
use playcache::search::MediaSearch;
use tempfile::TempDir;

fn open(provider: &MockSearchProvider, config: &Config) -> MediaSearch<MockSearchProvider> {
    let archive = MediaArchive::open(&config.storage_path).unwrap();
    MediaSearch::new(provider.clone(), archive, config)
}

#[tokio::test]
async fn test_second_lookup_served_from_archive() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let provider = MockSearchProvider::new(johnny_cash_results());
    let search = open(&provider, &config);

    let first = search.lookup("hurt by johnny cash", MediaType::Music).await.unwrap();
    assert!(first.is_live_hit());
    assert_eq!(provider.call_count(), 1);

    search.precache(false).await.unwrap();
    let second = search.lookup("play hurt by johnny cash", MediaType::Music).await.unwrap();

    assert!(second.is_cache_hit());
    assert_eq!(second.results()[0].uri(), Some("youtube//hurt"));
    assert!(second.results()[0].match_confidence() >= config.cache_accept_threshold);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_archive_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let provider = MockSearchProvider::new(johnny_cash_results());

    {
        let search = open(&provider, &config);
        search.lookup("johnny cash", MediaType::Music).await.unwrap();
    }

    let restarted = open(&provider, &config);
    restarted.precache(false).await.unwrap();
    let outcome = restarted
        .lookup("play hurt by johnny cash", MediaType::Music)
        .await
        .unwrap();

    assert!(outcome.is_cache_hit());
    assert_eq!(restarted.archive().track_count(), 4);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_precache_refresh_learns_featured_queries() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        featured_queries: vec!["zz top".to_string()],
        ..config_in(dir.path())
    };
    let provider = MockSearchProvider::default().with_response("zz top", vec![zz_top_track()]);
    let search = open(&provider, &config);

    search.precache(true).await.unwrap();
    let outcome = search.lookup("blue jean blues", MediaType::Music).await.unwrap();

    assert!(outcome.is_cache_hit(), "got {}", outcome.as_str());
    let results = outcome.into_results();
    assert_eq!(
        results[0].uri(),
        Some(format!("youtube//{ZZ_TOP_URL}").as_str())
    );
    assert_eq!(provider.phrases(), vec!["zz top"]);
}

#[tokio::test]
async fn test_provider_named_alone_returns_featured_playlist() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let provider = MockSearchProvider::new(johnny_cash_results());
    let search = open(&provider, &config);
    search.lookup("johnny cash", MediaType::Music).await.unwrap();
    search.precache(false).await.unwrap();

    let outcome = search.lookup("youtube", MediaType::Music).await.unwrap();

    assert!(outcome.is_cache_hit());
    let results = outcome.into_results();
    assert_eq!(results.len(), 1);
    let featured = results[0].as_playlist().unwrap();
    assert_eq!(featured.title, "YoutubeMusic Featured Media (Playlist)");
    assert_eq!(featured.playlist.len(), 4);
}

#[tokio::test]
async fn test_provider_name_stripped_before_live_search() {
    let dir = TempDir::new().unwrap();
    let provider = MockSearchProvider::new(johnny_cash_results());
    let search = open(&provider, &config_in(dir.path()));

    let outcome = search.lookup("play it on youtube", MediaType::Music).await.unwrap();

    assert!(outcome.is_live_hit());
    assert_eq!(provider.phrases(), vec!["play it on"]);
}
