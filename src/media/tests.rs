use super::*;
use serde_json::json;

fn identity() -> SkillIdentity {
    SkillIdentity {
        provider_id: "youtube".to_string(),
        provider_name: "YoutubeMusic".to_string(),
        skill_id: "skill.test".to_string(),
        skill_icon: "icon.png".to_string(),
    }
}

fn track(url: &str, title: &str, artist: &str) -> TrackInfo {
    TrackInfo::new(url)
        .with_title(title)
        .with_artist(artist)
        .with_length_secs(200)
        .with_thumbnail("thumb.jpg")
}

#[test]
fn test_media_type_codes() {
    assert_eq!(MediaType::Generic.code(), 0);
    assert_eq!(MediaType::Music.code(), 2);
    assert_eq!(MediaType::Video.code(), 3);
    assert_eq!(MediaType::from(2), MediaType::Music);
    assert_eq!(MediaType::from(42), MediaType::Generic);
}

#[test]
fn test_media_type_from_str() {
    assert_eq!("music".parse::<MediaType>(), Ok(MediaType::Music));
    assert_eq!(" VIDEO ".parse::<MediaType>(), Ok(MediaType::Video));
    assert_eq!("generic".parse::<MediaType>(), Ok(MediaType::Generic));
    assert!("podcast".parse::<MediaType>().is_err());
}

#[test]
fn test_playback_type_codes() {
    assert_eq!(PlaybackType::Audio.code(), 2);
    assert_eq!(PlaybackType::from(1), PlaybackType::Video);
    assert_eq!(PlaybackType::default(), PlaybackType::Audio);
}

#[test]
fn test_collection_kind_suffixes() {
    assert_eq!(CollectionKind::Artist.title_suffix(), "(Featured Tracks)");
    assert_eq!(CollectionKind::Album.title_suffix(), "(Full Album)");
    assert_eq!(CollectionKind::Playlist.title_suffix(), "(Playlist)");
}

#[test]
fn test_candidate_accessors() {
    let video = Candidate::Video(track("v1", "Hurt", "Johnny Cash"));
    assert!(video.is_bare_video());
    assert!(!video.is_collection());
    assert_eq!(video.title(), Some("Hurt"));
    assert_eq!(video.artist_name(), Some("Johnny Cash"));

    let album = Candidate::album(CollectionInfo::new("At Folsom Prison"));
    assert!(album.is_collection());
    assert!(!album.is_bare_video());
    assert_eq!(album.artist_name(), None);
}

#[test]
fn test_track_length_ms() {
    assert_eq!(TrackInfo::new("x").with_length_secs(3).length_ms(), 3000);
    assert_eq!(TrackInfo::new("x").length_ms(), 0);
    assert_eq!(
        TrackInfo::new("x").with_length_secs(u64::MAX).length_ms(),
        u64::MAX
    );
}

#[test]
fn test_result_entry_from_track() {
    let entry = ResultEntry::from_track(
        &track("watch?v=abc", "Hurt", "Johnny Cash"),
        MediaType::Music,
        72.0,
        &identity(),
    );

    assert_eq!(entry.uri, "youtube//watch?v=abc");
    assert_eq!(entry.length, 200_000);
    assert_eq!(entry.image, "thumb.jpg");
    assert_eq!(entry.bg_image, "thumb.jpg");
    assert_eq!(entry.skill_id, "skill.test");
    assert_eq!(entry.playback, PlaybackType::Audio);
    assert_eq!(entry.album, None);
}

#[test]
fn test_result_entry_clamps_confidence() {
    let entry = ResultEntry::from_track(&TrackInfo::new("x"), MediaType::Music, 180.0, &identity());
    assert_eq!(entry.match_confidence, 100.0);
}

#[test]
fn test_result_entry_missing_fields_are_empty() {
    let entry = ResultEntry::from_track(&TrackInfo::new("x"), MediaType::Video, 1.0, &identity());
    assert_eq!(entry.title, "");
    assert_eq!(entry.artist, "");
    assert_eq!(entry.image, "");
    assert_eq!(entry.media_type, MediaType::Video);
}

#[test]
fn test_playlist_entry_titles() {
    let info = CollectionInfo::new("Greatest Hits")
        .with_artist("Johnny Cash")
        .with_tracks(vec![track("a", "Hurt", "Johnny Cash")]);

    let artist = PlaylistEntry::from_collection(CollectionKind::Artist, &info, 50.0, &identity())
        .expect("has tracks");
    let album = PlaylistEntry::from_collection(CollectionKind::Album, &info, 50.0, &identity())
        .expect("has tracks");
    let playlist =
        PlaylistEntry::from_collection(CollectionKind::Playlist, &info, 50.0, &identity())
            .expect("has tracks");

    assert_eq!(artist.title, "Johnny Cash (Featured Tracks)");
    assert_eq!(album.title, "Greatest Hits (Full Album)");
    assert_eq!(playlist.title, "Greatest Hits (Playlist)");
}

#[test]
fn test_playlist_entry_children_inherit_score() {
    let info = CollectionInfo::new("Mix")
        .with_thumbnail("cover.jpg")
        .with_tracks(vec![track("a", "One", "X"), track("b", "Two", "Y")]);

    let entry = PlaylistEntry::from_collection(CollectionKind::Playlist, &info, 64.0, &identity())
        .expect("has tracks");

    assert_eq!(entry.playlist.len(), 2);
    for child in &entry.playlist {
        assert_eq!(child.match_confidence, 64.0);
        assert_eq!(child.album.as_deref(), Some("Mix"));
        assert_eq!(child.image, "cover.jpg");
        assert_eq!(child.media_type, MediaType::Music);
    }
    assert_eq!(entry.playlist[0].uri, "youtube//a");
}

#[test]
fn test_playlist_entry_empty_collection_is_dropped() {
    let info = CollectionInfo::new("Empty");
    assert!(
        PlaylistEntry::from_collection(CollectionKind::Album, &info, 90.0, &identity()).is_none()
    );
}

#[test]
fn test_result_entry_wire_field_names() {
    let entry = ResultEntry::from_track(
        &track("watch?v=abc", "Hurt", "Johnny Cash"),
        MediaType::Music,
        70.0,
        &identity(),
    );
    let value = serde_json::to_value(&entry).expect("serialize");

    assert_eq!(value["uri"], "youtube//watch?v=abc");
    assert_eq!(value["media_type"], 2);
    assert_eq!(value["playback"], 2);
    assert_eq!(value["length"], 200_000);
    assert_eq!(value["match_confidence"], 70.0);
    assert!(value.get("album").is_none());
}

#[test]
fn test_result_entry_tolerates_legacy_record() {
    let legacy = json!({
        "title": "ZZ TOP - Blue Jean Blues",
        "uri": "youtube//watch?v=b76kjd5nvMg",
        "media_type": 2,
        "artist": null,
        "image": null
    });

    let entry: ResultEntry = serde_json::from_value(legacy).expect("legacy record loads");

    assert_eq!(entry.artist, "");
    assert_eq!(entry.image, "");
    assert_eq!(entry.length, 0);
    assert_eq!(entry.media_type, MediaType::Music);
    assert_eq!(entry.playback, PlaybackType::Audio);
}

#[test]
fn test_media_result_untagged_round_trip() {
    let id = identity();
    let info = CollectionInfo::new("Mix").with_tracks(vec![track("a", "One", "X")]);
    let playlist = PlaylistEntry::from_collection(CollectionKind::Playlist, &info, 40.0, &id)
        .expect("has tracks");
    let single = ResultEntry::from_track(&track("b", "Two", "Y"), MediaType::Music, 30.0, &id);

    let results = vec![MediaResult::from(playlist), MediaResult::from(single)];
    let text = serde_json::to_string(&results).expect("serialize");
    let back: Vec<MediaResult> = serde_json::from_str(&text).expect("deserialize");

    assert!(back[0].is_playlist());
    assert!(!back[1].is_playlist());
    assert_eq!(back[1].uri(), Some("youtube//b"));
    assert_eq!(back, results);
}

#[test]
fn test_result_entry_reads_any_numeric_length() {
    let read = |length: serde_json::Value| {
        serde_json::from_value::<ResultEntry>(json!({ "title": "T", "length": length }))
            .expect("record loads")
            .length
    };

    assert_eq!(read(json!(218000)), 218_000);
    assert_eq!(read(json!(218000.0)), 218_000);
    assert_eq!(read(json!(1500.9)), 1500);
    assert_eq!(read(json!(-5)), 0);
    assert_eq!(read(json!(null)), 0);
}

#[test]
fn test_unknown_media_type_code_reads_generic() {
    let entry: ResultEntry =
        serde_json::from_value(json!({ "title": "T", "media_type": 7 })).expect("record loads");

    assert_eq!(entry.media_type, MediaType::Generic);
}

#[test]
fn test_playlist_entry_without_children_loads() {
    let legacy = json!({ "title": "Old Mix (Playlist)", "match_confidence": 40 });

    let entry: PlaylistEntry = serde_json::from_value(legacy).expect("legacy playlist loads");

    assert_eq!(entry.title, "Old Mix (Playlist)");
    assert_eq!(entry.match_confidence, 40.0);
    assert!(entry.playlist.is_empty());
}

#[test]
fn test_media_result_shape_follows_playlist_key() {
    let track: MediaResult =
        serde_json::from_value(json!({ "title": "Hurt", "uri": "youtube//a" })).expect("track");
    let empty: MediaResult =
        serde_json::from_value(json!({ "title": "Mix", "playlist": [] })).expect("playlist");
    let null_children: MediaResult =
        serde_json::from_value(json!({ "title": "Mix", "playlist": null })).expect("playlist");

    assert_eq!(track.uri(), Some("youtube//a"));
    assert!(empty.is_playlist());
    assert!(null_children.is_playlist());
    assert!(serde_json::from_value::<MediaResult>(json!("not a record")).is_err());
}
