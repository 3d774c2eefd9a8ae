use super::*;
use crate::media::TrackInfo;
use futures_util::StreamExt;
use std::time::Duration;

fn track(url: &str) -> Candidate {
    Candidate::Track(TrackInfo::new(url).with_title(url))
}

async fn collect(stream: CandidateStream) -> Vec<ProviderResult<Candidate>> {
    stream.collect().await
}

#[tokio::test]
async fn test_mock_yields_candidates_in_order() {
    let provider = MockSearchProvider::new(vec![track("a"), track("b")]);

    let items = collect(provider.search("anything").await.unwrap()).await;

    assert_eq!(items, vec![Ok(track("a")), Ok(track("b"))]);
    assert_eq!(provider.call_count(), 1);
    assert_eq!(provider.phrases(), vec!["anything"]);
}

#[tokio::test]
async fn test_mock_per_phrase_response() {
    let provider =
        MockSearchProvider::new(vec![track("default")]).with_response("special", vec![track("s")]);

    let special = collect(provider.search("special").await.unwrap()).await;
    let other = collect(provider.search("other").await.unwrap()).await;

    assert_eq!(special, vec![Ok(track("s"))]);
    assert_eq!(other, vec![Ok(track("default"))]);
}

#[tokio::test]
async fn test_mock_failing_open() {
    let provider = MockSearchProvider::new(vec![track("a")]).failing_open(
        ProviderError::Unavailable {
            reason: "offline".to_string(),
        },
    );

    let err = provider.search("x").await.err().unwrap();
    assert!(matches!(err, ProviderError::Unavailable { .. }));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_mock_failing_after() {
    let provider =
        MockSearchProvider::new(vec![track("a"), track("b"), track("c")]).failing_after(1);

    let items = collect(provider.search("x").await.unwrap()).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok(track("a")));
    assert!(matches!(items[1], Err(ProviderError::Network { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_mock_item_delay() {
    let provider =
        MockSearchProvider::new(vec![track("a")]).with_item_delay(Duration::from_secs(5));

    let start = tokio::time::Instant::now();
    let items = collect(provider.search("x").await.unwrap()).await;

    assert_eq!(items.len(), 1);
    assert!(start.elapsed() >= Duration::from_secs(5));
}

#[tokio::test]
async fn test_clones_share_call_log() {
    let provider = MockSearchProvider::new(vec![]);
    let observer = provider.clone();

    let _ = provider.search("one").await.unwrap();
    let _ = provider.search("two").await.unwrap();

    assert_eq!(observer.call_count(), 2);
    assert_eq!(observer.phrases(), vec!["one", "two"]);
}

#[test]
fn test_provider_error_display() {
    let err = ProviderError::InvalidResponse {
        reason: "bad json".to_string(),
    };
    assert_eq!(err.to_string(), "invalid provider response: bad json");
}
