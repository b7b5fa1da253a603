//! Tests for the media module

use super::*;
use crate::api::{ApiAlbum, ApiTrack, ArtistResponse, LibraryItem};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn api_track() -> ApiTrack {
    serde_json::from_value(json!({
        "id": 42,
        "title": "One More Time",
        "artist": "Daft Punk",
        "artistId": 36819,
        "albumTitle": "Discovery",
        "albumCover": "https://img.example.com/cover.jpg",
        "albumId": "0724384960650",
        "releaseDate": "2001-03-07",
        "genre": "Electronic  Dance ",
        "duration": 320,
        "audioQuality": {"isHiRes": false},
        "parental_warning": true,
        "isrc": "GBDUW0000053"
    }))
    .unwrap()
}

#[test]
fn test_track_mapping() {
    let track = Track::from(api_track());

    assert_eq!(track.id, "42");
    assert_eq!(track.title, "One More Time");
    assert_eq!(track.artists.len(), 1);
    assert_eq!(track.artists[0].id, "36819");
    assert_eq!(track.artists[0].name, "Daft Punk");
    assert_eq!(track.album_id(), Some("0724384960650"));
    assert_eq!(track.album.as_ref().unwrap().title, "Discovery");
    assert_eq!(track.cover.as_deref(), Some("https://img.example.com/cover.jpg"));
    assert_eq!(track.duration_ms, Some(320_000));
    assert_eq!(track.release_date, NaiveDate::from_ymd_opt(2001, 3, 7));
    assert!(track.is_explicit);
    assert_eq!(track.isrc.as_deref(), Some("GBDUW0000053"));
    assert_eq!(track.genres, vec!["Electronic", "Dance"]);
    assert_eq!(
        track.streamables,
        vec![Streamable {
            id: "42".to_string(),
            quality: 0,
            title: "Lossy".to_string()
        }]
    );
}

#[test]
fn test_track_prefers_high_image_and_hi_res() {
    let mut raw = api_track();
    raw.images = Some(crate::api::Images {
        high: Some("https://img.example.com/high.jpg".into()),
        ..Default::default()
    });
    raw.audio_quality.is_hi_res = true;

    let track = Track::from(raw);
    assert_eq!(track.cover.as_deref(), Some("https://img.example.com/high.jpg"));
    assert_eq!(track.streamables[0].title, "Lossless");
}

#[test]
fn test_track_mapping_is_idempotent() {
    assert_eq!(Track::from(api_track()), Track::from(api_track()));
}

#[test]
fn test_album_mapping() {
    let raw: ApiAlbum = serde_json::from_value(json!({
        "id": 99,
        "title": "Discovery",
        "artist": "Daft Punk",
        "artistId": 36819,
        "images": {"large": "https://img.example.com/l.jpg"},
        "releaseDate": "2001-03-12T00:00:00Z",
        "trackCount": 14,
        "tracks": [serde_json::to_value(api_track()).unwrap()]
    }))
    .unwrap();

    let album = Album::from(raw);
    assert_eq!(album.id, "99");
    assert_eq!(album.cover.as_deref(), Some("https://img.example.com/l.jpg"));
    assert_eq!(album.release_date, NaiveDate::from_ymd_opt(2001, 3, 12));
    assert_eq!(album.track_count, Some(14));
    assert_eq!(album.tracks.len(), 1);
    assert_eq!(album.artists[0].name, "Daft Punk");
    assert!(!album.is_loaded);
}

#[test]
fn test_artist_mapping_is_loaded_with_discography() {
    let raw: ArtistResponse = serde_json::from_value(json!({
        "artist": {
            "id": 36819,
            "name": "Daft Punk",
            "slug": "daft-punk",
            "image": {"small": "s.jpg", "large": "l.jpg"},
            "biography": {"summary": "French duo"},
            "similarArtistIds": [1, 2]
        },
        "albums": [{"id": 1, "title": "Homework"}, {"id": 2, "title": "Discovery"}]
    }))
    .unwrap();

    let artist = Artist::from(raw);
    assert!(artist.is_loaded);
    assert_eq!(artist.slug.as_deref(), Some("daft-punk"));
    assert_eq!(artist.cover.as_deref(), Some("l.jpg"));
    assert_eq!(artist.bio.as_deref(), Some("French duo"));
    assert_eq!(artist.albums.len(), 2);
    assert_eq!(artist.similar_artist_ids, vec!["1", "2"]);
}

#[test]
fn test_playlist_mapping() {
    let raw: LibraryItem = serde_json::from_value(json!({
        "id": 5,
        "name": "Road trip",
        "description": "",
        "isPublic": false,
        "createdAt": "2024-05-01T10:00:00Z",
        "trackCount": 0
    }))
    .unwrap();

    let playlist = Playlist::from(raw);
    assert_eq!(playlist.title, "Road trip");
    assert!(playlist.description.is_none());
    assert!(playlist.is_private);
    assert!(!playlist.is_shareable);
    assert!(playlist.is_editable);
    assert_eq!(playlist.creation_date, NaiveDate::from_ymd_opt(2024, 5, 1));
}

#[test]
fn test_favourite_record_round_trips_key_fields() {
    let track = Track::from(api_track());
    let record = favourite_record(&track);

    assert_eq!(record.id, "42");
    assert_eq!(record.artist_id, "36819");
    assert_eq!(record.album_id, "0724384960650");
    assert_eq!(record.duration, 320);
    assert_eq!(record.release_date, "2001-03-07");
    assert!(record.parental_warning);
    assert_eq!(Track::from(record), track);
}

#[test_case("2001-03-07", NaiveDate::from_ymd_opt(2001, 3, 7) ; "plain date")]
#[test_case("2024-05-01T10:00:00+02:00", NaiveDate::from_ymd_opt(2024, 5, 1) ; "rfc3339")]
#[test_case("2024-05-01 10:00:00", NaiveDate::from_ymd_opt(2024, 5, 1) ; "date prefix")]
#[test_case("", None ; "empty")]
#[test_case("yesterday", None ; "garbage")]
fn test_parse_date(raw: &str, expected: Option<NaiveDate>) {
    assert_eq!(parse_date(raw), expected);
}

#[test]
fn test_media_item_dispatch() {
    let items: Vec<MediaItem> = vec![
        Track::from(api_track()).into(),
        Album {
            id: "a".into(),
            title: "Album".into(),
            ..Default::default()
        }
        .into(),
        Radio {
            id: "r".into(),
            title: "Radio".into(),
        }
        .into(),
    ];

    let kinds: Vec<_> = items.iter().map(MediaItem::kind).collect();
    assert_eq!(kinds, vec!["track", "album", "radio"]);
    assert_eq!(items[1].title(), "Album");
    assert!(!items[1].is_loaded());
    assert!(!items[2].is_loaded());
}

#[test]
fn test_media_item_serializes_tagged() {
    let item = MediaItem::Radio(Radio {
        id: "r".into(),
        title: "Radio".into(),
    });
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "radio");
    assert_eq!(value["id"], "r");
}
