//! Canonical media items
//!
//! What the host displays. Every item kind is a variant of the closed
//! [`MediaItem`] enum so per-kind operations stay exhaustive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A playable source for a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streamable {
    /// Id passed to the stream endpoint
    pub id: String,
    pub quality: u32,
    /// "Lossless" or "Lossy"
    pub title: String,
}

/// Resolved stream location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    pub cover: Option<String>,
    pub duration_ms: Option<u64>,
    pub release_date: Option<NaiveDate>,
    pub is_explicit: bool,
    pub isrc: Option<String>,
    pub genres: Vec<String>,
    pub streamables: Vec<Streamable>,
}

impl Track {
    /// Id of the album the track belongs to
    pub fn album_id(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artists: Vec<Artist>,
    pub cover: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub track_count: Option<u32>,
    pub label: Option<String>,
    pub genres: Vec<String>,
    pub tracks: Vec<Track>,
    /// Whether full details (including tracks) were fetched
    pub is_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub cover: Option<String>,
    /// Url slug used for share links
    pub slug: Option<String>,
    pub bio: Option<String>,
    /// Discography, filled when loaded
    pub albums: Vec<Album>,
    pub similar_artist_ids: Vec<String>,
    pub is_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_editable: bool,
    pub is_private: bool,
    pub is_shareable: bool,
    pub creation_date: Option<NaiveDate>,
    pub track_count: Option<u32>,
    pub tracks: Vec<Track>,
    pub is_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Radio {
    pub id: String,
    pub title: String,
}

/// Any item the host can display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaItem {
    Track(Track),
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    Radio(Radio),
}

impl MediaItem {
    pub fn id(&self) -> &str {
        match self {
            MediaItem::Track(t) => &t.id,
            MediaItem::Album(a) => &a.id,
            MediaItem::Artist(a) => &a.id,
            MediaItem::Playlist(p) => &p.id,
            MediaItem::Radio(r) => &r.id,
        }
    }

    /// Display title
    pub fn title(&self) -> &str {
        match self {
            MediaItem::Track(t) => &t.title,
            MediaItem::Album(a) => &a.title,
            MediaItem::Artist(a) => &a.name,
            MediaItem::Playlist(p) => &p.title,
            MediaItem::Radio(r) => &r.title,
        }
    }

    /// Short kind name
    pub fn kind(&self) -> &'static str {
        match self {
            MediaItem::Track(_) => "track",
            MediaItem::Album(_) => "album",
            MediaItem::Artist(_) => "artist",
            MediaItem::Playlist(_) => "playlist",
            MediaItem::Radio(_) => "radio",
        }
    }

    /// Whether full details were fetched; radios are never loadable
    pub fn is_loaded(&self) -> bool {
        match self {
            MediaItem::Track(_) => true,
            MediaItem::Album(a) => a.is_loaded,
            MediaItem::Artist(a) => a.is_loaded,
            MediaItem::Playlist(p) => p.is_loaded,
            MediaItem::Radio(_) => false,
        }
    }
}

impl From<Track> for MediaItem {
    fn from(track: Track) -> Self {
        MediaItem::Track(track)
    }
}

impl From<Album> for MediaItem {
    fn from(album: Album) -> Self {
        MediaItem::Album(album)
    }
}

impl From<Artist> for MediaItem {
    fn from(artist: Artist) -> Self {
        MediaItem::Artist(artist)
    }
}

impl From<Playlist> for MediaItem {
    fn from(playlist: Playlist) -> Self {
        MediaItem::Playlist(playlist)
    }
}

impl From<Radio> for MediaItem {
    fn from(radio: Radio) -> Self {
        MediaItem::Radio(radio)
    }
}
