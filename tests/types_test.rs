use plimport::types::*;

fn playlist_json() -> &'static str {
    r#"{
        "name": "Chill",
        "images": [{"url": "http://img/c.jpg"}, {"url": "http://img/small.jpg"}],
        "tracks": {
            "items": [
                {"track": {"name": "Song A", "artists": [{"name": "Artist X"}, {"name": "Artist Y"}]}},
                {"track": {"name": "Song B", "artists": []}},
                {"track": null},
                {"track": {"name": "Song C"}}
            ]
        }
    }"#
}

#[test]
fn test_playlist_response_cover_uses_first_image() {
    let playlist: PlaylistResponse = serde_json::from_str(playlist_json()).unwrap();
    assert_eq!(playlist.name, "Chill");
    assert_eq!(playlist.cover(), "http://img/c.jpg");
}

#[test]
fn test_playlist_response_cover_empty_without_images() {
    for images in [r#""images": [],"#, r#""images": null,"#, ""] {
        let json = format!(r#"{{"name": "x", {} "tracks": {{"items": []}}}}"#, images);
        let playlist: PlaylistResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(playlist.cover(), "");
    }
}

#[test]
fn test_remote_tracks_keep_order_and_first_artist() {
    let playlist: PlaylistResponse = serde_json::from_str(playlist_json()).unwrap();
    let tracks = playlist.remote_tracks();

    assert_eq!(
        tracks,
        vec![
            RemoteTrack {
                title: "Song A".to_string(),
                artist: "Artist X".to_string()
            },
            RemoteTrack {
                title: "Song B".to_string(),
                artist: String::new()
            },
            RemoteTrack {
                title: "Song C".to_string(),
                artist: String::new()
            },
        ]
    );
}

#[test]
fn test_malformed_playlist_is_rejected() {
    let result = serde_json::from_str::<PlaylistResponse>(r#"{"name": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn test_search_response_accepts_string_and_numeric_ids() {
    let response: SearchResponse = serde_json::from_str(
        r#"{"tracks": [
            {"id": "t1", "title": "x"},
            {"id": 42},
            {"id": -3},
            {"id": 18446744073709551615},
            {"id": 7.0},
            {"id": 2.5}
        ]}"#,
    )
    .unwrap();
    let ids: Vec<Option<LocalTrackId>> = response
        .into_tracks()
        .iter()
        .map(LocalTrack::track_id)
        .collect();

    assert_eq!(
        ids,
        vec![
            Some(LocalTrackId::new("t1")),
            Some(LocalTrackId::new("42")),
            Some(LocalTrackId::new("-3")),
            Some(LocalTrackId::new("18446744073709551615")),
            Some(LocalTrackId::new("7")),
            Some(LocalTrackId::new("2.5")),
        ]
    );
}

#[test]
fn test_search_response_tolerates_malformed_later_entries() {
    let response: SearchResponse = serde_json::from_str(
        r#"{"tracks": [{"id": "t1"}, {"id": null}, {"title": "no id"}, null, {"id": [1]}]}"#,
    )
    .unwrap();
    let tracks = response.into_tracks();

    assert_eq!(tracks.len(), 5);
    assert_eq!(tracks[0].track_id(), Some(LocalTrackId::new("t1")));
    assert!(tracks[1..].iter().all(|t| t.track_id().is_none()));
}

#[test]
fn test_search_response_without_tracks() {
    let response: SearchResponse = serde_json::from_str("{}").unwrap();
    assert!(response.tracks.is_none());

    let response: SearchResponse = serde_json::from_str(r#"{"tracks": null}"#).unwrap();
    assert!(response.tracks.is_none());
}

#[test]
fn test_local_track_id_serializes_as_plain_string() {
    let draft = PlaylistDraft {
        name: "Chill".to_string(),
        cover: String::new(),
        track_ids: vec![LocalTrackId::new("t1"), LocalTrackId::new("t2")],
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["track_ids"], serde_json::json!(["t1", "t2"]));
}

#[test]
fn test_search_query_tracks() {
    let query = SearchQuery::tracks("Song A Artist X");
    assert_eq!(query.query, "Song A Artist X");
    assert_eq!(query.result_type.as_str(), "track");
}
