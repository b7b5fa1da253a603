//! API record -> media item mapping
//!
//! All conversions are pure and total over anything the API schema decodes.

use super::types::{Album, Artist, Playlist, Streamable, Track};
use crate::api::{ApiAlbum, ApiTrack, ArtistResponse, AudioQuality, Images, LibraryItem};
use chrono::{DateTime, NaiveDate};

const LOSSLESS: &str = "Lossless";
const LOSSY: &str = "Lossy";

impl From<ApiTrack> for Track {
    fn from(raw: ApiTrack) -> Self {
        let cover = raw
            .images
            .as_ref()
            .and_then(|i| i.high.clone())
            .or_else(|| non_empty(raw.album_cover.clone()));

        let album = non_empty(raw.album_id.clone()).map(|id| Album {
            id,
            title: raw.album_title.clone(),
            cover: non_empty(raw.album_cover.clone()),
            ..Default::default()
        });

        let quality = if raw.audio_quality.is_hi_res {
            LOSSLESS
        } else {
            LOSSY
        };

        Track {
            streamables: vec![Streamable {
                id: raw.id.clone(),
                quality: 0,
                title: quality.to_string(),
            }],
            id: raw.id,
            title: raw.title,
            artists: vec![artist_ref(raw.artist_id, raw.artist)],
            album,
            cover,
            duration_ms: Some(u64::from(raw.duration) * 1000),
            release_date: parse_date(&raw.release_date),
            is_explicit: raw.parental_warning,
            isrc: raw.isrc,
            genres: split_genres(&raw.genre),
        }
    }
}

impl From<ApiAlbum> for Album {
    fn from(raw: ApiAlbum) -> Self {
        let cover = raw
            .cover
            .and_then(non_empty)
            .or_else(|| raw.images.as_ref().and_then(|i| i.best().map(str::to_string)));
        let artists = if raw.artist.is_empty() {
            Vec::new()
        } else {
            vec![artist_ref(raw.artist_id, raw.artist)]
        };

        Album {
            id: raw.id,
            title: raw.title,
            artists,
            cover,
            release_date: parse_date(&raw.release_date),
            track_count: raw.track_count,
            label: raw.label,
            genres: split_genres(&raw.genre),
            tracks: raw
                .tracks
                .unwrap_or_default()
                .into_iter()
                .map(Track::from)
                .collect(),
            is_loaded: false,
        }
    }
}

/// A fully loaded artist with discography
impl From<ArtistResponse> for Artist {
    fn from(raw: ArtistResponse) -> Self {
        let artist = raw.artist;
        let bio = artist
            .biography
            .and_then(|b| b.summary.or(b.content))
            .and_then(non_empty);

        Artist {
            id: artist.id,
            name: artist.name,
            cover: artist.image.as_ref().and_then(|i| i.best().map(str::to_string)),
            slug: artist.slug.and_then(non_empty),
            bio,
            albums: raw.albums.into_iter().map(Album::from).collect(),
            similar_artist_ids: artist.similar_artist_ids,
            is_loaded: true,
        }
    }
}

impl From<LibraryItem> for Playlist {
    fn from(raw: LibraryItem) -> Self {
        Playlist {
            id: raw.id,
            title: raw.name,
            description: non_empty(raw.description),
            is_editable: true,
            is_private: !raw.is_public,
            is_shareable: raw.is_public,
            creation_date: parse_date(&raw.created_at),
            track_count: Some(raw.track_count),
            tracks: raw.tracks.into_iter().map(Track::from).collect(),
            is_loaded: true,
        }
    }
}

/// Rebuild the wire record the favourites endpoint expects from a track
pub fn favourite_record(track: &Track) -> ApiTrack {
    let artist = track.artists.first();
    let album = track.album.as_ref();
    let album_cover = album
        .and_then(|a| a.cover.clone())
        .or_else(|| track.cover.clone())
        .unwrap_or_default();

    ApiTrack {
        id: track.id.clone(),
        title: track.title.clone(),
        artist: artist.map(|a| a.name.clone()).unwrap_or_default(),
        artist_id: artist.map(|a| a.id.clone()).unwrap_or_default(),
        album_title: album.map(|a| a.title.clone()).unwrap_or_default(),
        album_cover,
        album_id: album.map(|a| a.id.clone()).unwrap_or_default(),
        release_date: track
            .release_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        genre: track.genres.join(" "),
        duration: track.duration_ms.map_or(0, |ms| (ms / 1000) as u32),
        audio_quality: AudioQuality {
            is_hi_res: track.streamables.iter().any(|s| s.title == LOSSLESS),
            ..Default::default()
        },
        version: None,
        label: None,
        parental_warning: track.is_explicit,
        isrc: track.isrc.clone(),
        images: track.cover.clone().map(|high| Images {
            high: Some(high),
            ..Default::default()
        }),
    }
}

/// Parse the API's date strings: `YYYY-MM-DD` or RFC 3339
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// Whitespace-separated genre string into a list
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

fn artist_ref(id: String, name: String) -> Artist {
    Artist {
        id,
        name,
        ..Default::default()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
