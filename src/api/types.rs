//! Wire records of the remote catalog API
//!
//! These mirror the JSON the API returns. Unknown keys are ignored, and id
//! fields accept either numbers or strings.

use crate::pagination::PaginationDescriptor;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Listing
// ============================================================================

/// Category selector for the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Tracks
    Track,
    /// Albums
    Album,
    /// Artists
    Artist,
}

impl MediaType {
    /// Value of the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Track => "track",
            MediaType::Album => "album",
            MediaType::Artist => "artist",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Vec<ApiTrack>>,
    #[serde(default)]
    pub albums: Option<Vec<ApiAlbum>>,
    #[serde(default)]
    pub pagination: Option<PaginationDescriptor>,
}

// ============================================================================
// Catalog records
// ============================================================================

/// Cover art in several sizes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
}

impl Images {
    /// Largest available image
    pub fn best(&self) -> Option<&str> {
        self.high
            .as_deref()
            .or(self.large.as_deref())
            .or(self.thumbnail.as_deref())
            .or(self.small.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioQuality {
    #[serde(default)]
    pub maximum_bit_depth: Option<u32>,
    #[serde(default)]
    pub maximum_sampling_rate: Option<f64>,
    #[serde(default)]
    pub is_hi_res: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrack {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub artist_id: String,
    #[serde(default)]
    pub album_title: String,
    #[serde(default)]
    pub album_cover: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub album_id: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre: String,
    /// Seconds
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub audio_quality: AudioQuality,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "parental_warning", default)]
    pub parental_warning: bool,
    #[serde(default)]
    pub isrc: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAlbum {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub artist_id: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub track_count: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub audio_quality: Option<AudioQuality>,
    #[serde(default)]
    pub tracks: Option<Vec<ApiTrack>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Biography {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArtist {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub albums_count: u32,
    #[serde(default)]
    pub albums_as_primary_artist_count: u32,
    #[serde(default)]
    pub albums_as_primary_composer_count: u32,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<Images>,
    #[serde(default)]
    pub biography: Option<Biography>,
    #[serde(default, deserialize_with = "lenient_id_list")]
    pub similar_artist_ids: Vec<String>,
    #[serde(default)]
    pub information: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlbumResponse {
    pub album: ApiAlbum,
}

/// Artist plus discography
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtistResponse {
    pub artist: ApiArtist,
    #[serde(default)]
    pub albums: Vec<ApiAlbum>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StreamResponse {
    pub url: String,
}

// ============================================================================
// Account
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user: ApiUser,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiUser {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "created_at", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FavouriteResponse {
    #[serde(rename = "favorites", default)]
    pub tracks: Vec<ApiTrack>,
}

/// User playlists ("libraries" upstream)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LibraryResponse {
    #[serde(default)]
    pub libraries: Vec<LibraryItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub tracks: Vec<ApiTrack>,
}

// ============================================================================
// Lenient ids
// ============================================================================

fn id_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Accept `"123"` or `123`; anything non-primitive becomes `""`
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(&value))
}

fn lenient_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .iter()
        .map(id_from_value)
        .filter(|id| !id.is_empty())
        .collect())
}
