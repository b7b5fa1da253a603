//! Client traits
//!
//! One trait per host capability. All of them are object safe so a host can
//! hold `Arc<dyn SearchFeedClient>` and friends.

use crate::auth::{LoginForm, User};
use crate::error::Result;
use crate::feed::Feed;
use crate::media::{Album, Artist, MediaItem, StreamMedia, Streamable, Track};
use async_trait::async_trait;
use std::collections::HashMap;

/// Catalog search
#[async_trait]
pub trait SearchFeedClient: Send + Sync {
    /// One shelf per result category; a blank query returns an empty feed
    /// without calling the API
    async fn load_search_feed(&self, query: &str) -> Result<Feed>;
}

#[async_trait]
pub trait TrackClient: Send + Sync {
    /// Fill in track details
    async fn load_track(&self, track: Track) -> Result<Track>;

    /// Resolve a streamable into a playable location
    async fn load_streamable_media(&self, streamable: &Streamable) -> Result<StreamMedia>;
}

#[async_trait]
pub trait AlbumClient: Send + Sync {
    /// The album with full details, fetched only when not already loaded
    async fn load_album(&self, album: Album) -> Result<Album>;

    /// Tracks of the album, `None` when it has none
    async fn load_album_tracks(&self, album: &Album) -> Result<Option<Vec<Track>>>;
}

#[async_trait]
pub trait ArtistClient: Send + Sync {
    /// The artist with discography, fetched only when not already loaded
    async fn load_artist(&self, artist: Artist) -> Result<Artist>;

    /// Shelves shown on the artist page
    async fn load_artist_feed(&self, artist: &Artist) -> Result<Feed>;
}

/// Form-based login
#[async_trait]
pub trait LoginClient: Send + Sync {
    fn login_forms(&self) -> Vec<LoginForm>;

    /// Submit the form `key` with the collected `data`.
    ///
    /// Returned users carry the session in their extras. The session is not
    /// activated until the host passes the user to `set_login_user`.
    async fn on_login(&self, key: &str, data: &HashMap<String, String>) -> Result<Vec<User>>;

    /// Activate a user's session, or log out with `None`
    async fn set_login_user(&self, user: Option<&User>);

    async fn current_user(&self) -> Result<Option<User>>;
}

/// The logged-in user's library
#[async_trait]
pub trait LibraryFeedClient: Send + Sync {
    /// Library shelves; fails with `AuthenticationRequired` when logged out
    async fn load_library_feed(&self) -> Result<Feed>;

    async fn add_favourite(&self, track: &Track) -> Result<()>;

    async fn remove_favourite(&self, track: &Track) -> Result<()>;
}

#[async_trait]
pub trait ShareClient: Send + Sync {
    /// Public web link for an item
    async fn share(&self, item: &MediaItem) -> Result<String>;
}
