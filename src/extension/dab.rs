//! Catalog extension
//!
//! [`DabExtension`] wires the API service, the session store and the feed
//! machinery together behind the client traits.

use super::traits::{
    AlbumClient, ArtistClient, LibraryFeedClient, LoginClient, SearchFeedClient, ShareClient,
    TrackClient,
};
use crate::api::{
    ApiAlbum, ApiService, ApiTrack, FavouriteResponse, LibraryItem, LibraryResponse, MediaType,
    SearchResponse,
};
use crate::auth::{extract_session, login_forms, LoginForm, SessionStore, User, LOGIN_FORM, REGISTER_FORM};
use crate::config::DabConfig;
use crate::error::{Error, Result};
use crate::feed::{Feed, FeedAssembler, Shelf, ShelfLayout};
use crate::http::HttpClient;
use crate::media::{
    favourite_record, Album, Artist, MediaItem, Playlist, StreamMedia, Streamable, Track,
};
use crate::pagination::{MappedPage, PagedFeedBuilder};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Search shelf of albums
pub const ALBUMS_SHELF: &str = "0";

/// Search shelf of tracks
pub const TRACKS_SHELF: &str = "1";

/// Library shelf of favourite tracks
pub const FAVOURITES_SHELF: &str = "fav";

/// Library shelf of playlists
pub const PLAYLISTS_SHELF: &str = "playlists";

// ============================================================================
// Extension
// ============================================================================

/// The catalog adapter
#[derive(Debug, Clone)]
pub struct DabExtension {
    api: Arc<ApiService>,
    session: SessionStore,
    share_root: String,
}

impl DabExtension {
    /// Build the adapter and its HTTP client from configuration
    pub fn new(config: DabConfig) -> Result<Self> {
        let http = HttpClient::with_config(config.to_http_config())?;
        Ok(Self::with_service(
            Arc::new(ApiService::new(http)),
            config.share_root(),
        ))
    }

    /// Build the adapter over an existing service
    pub fn with_service(api: Arc<ApiService>, share_root: impl Into<String>) -> Self {
        Self {
            api,
            session: SessionStore::new(),
            share_root: share_root.into(),
        }
    }

    pub fn api(&self) -> &ApiService {
        &self.api
    }

    /// The active session holder
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Paged search listing of one category
    fn search_listing<I, E, M>(
        &self,
        query: &str,
        kind: MediaType,
        extract: E,
        map: M,
    ) -> PagedFeedBuilder<SearchResponse, I, MediaItem>
    where
        I: Send + 'static,
        E: Fn(SearchResponse) -> Vec<I> + Send + Sync + 'static,
        M: Fn(I) -> MediaItem + Send + Sync + 'static,
    {
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        PagedFeedBuilder::new(
            move |offset| {
                let api = Arc::clone(&api);
                let query = query.clone();
                async move { api.search(&query, offset, kind).await }
            },
            extract,
            |page: &SearchResponse| page.pagination,
            map,
        )
    }

    async fn fetch_album(&self, id: &str) -> Result<Album> {
        let mut album = Album::from(self.api.album(id).await?.album);
        album.is_loaded = true;
        Ok(album)
    }
}

fn required<'a>(data: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    data.get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::missing_field(key))
}

fn session_from(set_cookies: &[String]) -> Result<String> {
    extract_session(set_cookies)
        .ok_or_else(|| Error::auth("Failed to extract session from response"))
}

// ============================================================================
// Search
// ============================================================================

#[async_trait]
impl SearchFeedClient for DabExtension {
    async fn load_search_feed(&self, query: &str) -> Result<Feed> {
        info!(query, "Loading search feed");

        Ok(FeedAssembler::for_query(query)
            .category(ALBUMS_SHELF, "Albums", ShelfLayout::Linear, self.album_search(query))
            .category(TRACKS_SHELF, "Tracks", ShelfLayout::Grid, self.track_search(query))
            .assemble()
            .await)
    }
}

impl DabExtension {
    fn album_search(&self, query: &str) -> PagedFeedBuilder<SearchResponse, ApiAlbum, MediaItem> {
        self.search_listing(
            query,
            MediaType::Album,
            |page: SearchResponse| page.albums.unwrap_or_default(),
            |album: ApiAlbum| Album::from(album).into(),
        )
    }

    fn track_search(&self, query: &str) -> PagedFeedBuilder<SearchResponse, ApiTrack, MediaItem> {
        self.search_listing(
            query,
            MediaType::Track,
            |page: SearchResponse| page.tracks.unwrap_or_default(),
            |track: ApiTrack| Track::from(track).into(),
        )
    }

    /// Continue one search shelf from its cursor without reloading the feed.
    ///
    /// Only the requested shelf is queried, and only once the cursor has
    /// decoded.
    pub async fn resume_search(
        &self,
        shelf_id: &str,
        query: &str,
        cursor: &str,
    ) -> Result<MappedPage<MediaItem>> {
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("Blank query has no pages"));
        }
        match shelf_id {
            ALBUMS_SHELF => self.album_search(query).resume(cursor).await,
            TRACKS_SHELF => self.track_search(query).resume(cursor).await,
            other => Err(Error::invalid_argument(format!("Unknown search shelf: {other}"))),
        }
    }
}

// ============================================================================
// Tracks, albums, artists
// ============================================================================

#[async_trait]
impl TrackClient for DabExtension {
    async fn load_track(&self, track: Track) -> Result<Track> {
        Ok(track)
    }

    async fn load_streamable_media(&self, streamable: &Streamable) -> Result<StreamMedia> {
        debug!(id = %streamable.id, "Resolving stream");
        let stream = self.api.stream(&streamable.id).await?;
        if stream.url.trim().is_empty() {
            return Err(Error::decode(format!(
                "Stream response for track {} has no url",
                streamable.id
            )));
        }
        Ok(StreamMedia { url: stream.url })
    }
}

#[async_trait]
impl AlbumClient for DabExtension {
    async fn load_album(&self, album: Album) -> Result<Album> {
        if album.is_loaded {
            return Ok(album);
        }
        self.fetch_album(&album.id).await
    }

    async fn load_album_tracks(&self, album: &Album) -> Result<Option<Vec<Track>>> {
        let tracks = if album.is_loaded {
            album.tracks.clone()
        } else {
            self.fetch_album(&album.id).await?.tracks
        };
        Ok((!tracks.is_empty()).then_some(tracks))
    }
}

#[async_trait]
impl ArtistClient for DabExtension {
    async fn load_artist(&self, artist: Artist) -> Result<Artist> {
        if artist.is_loaded {
            return Ok(artist);
        }
        Ok(Artist::from(self.api.discography(&artist.id).await?))
    }

    async fn load_artist_feed(&self, artist: &Artist) -> Result<Feed> {
        let loaded = self.load_artist(artist.clone()).await?;
        let title = format!("More from {}", loaded.name);
        let albums = loaded.albums.into_iter().map(MediaItem::from).collect();
        Ok(Feed::from_shelves(vec![Shelf::fixed(
            "0",
            title,
            ShelfLayout::Linear,
            albums,
        )]))
    }
}

// ============================================================================
// Login
// ============================================================================

#[async_trait]
impl LoginClient for DabExtension {
    fn login_forms(&self) -> Vec<LoginForm> {
        login_forms()
    }

    async fn on_login(&self, key: &str, data: &HashMap<String, String>) -> Result<Vec<User>> {
        match key {
            LOGIN_FORM => {
                let email = required(data, "email")?;
                let password = required(data, "password")?;
                let outcome = self.api.login(email, password).await?;
                let session = session_from(&outcome.set_cookies)?;
                let user = outcome.response.user;
                info!(user = %user.username, "Logged in");
                Ok(vec![User::with_session(user.id, user.username, session)])
            }
            REGISTER_FORM => {
                let username = required(data, "username")?;
                let email = required(data, "email")?;
                let password = required(data, "password")?;
                let set_cookies = self.api.register(username, email, password).await?;
                let session = session_from(&set_cookies)?;
                info!(user = username, "Registered");
                Ok(vec![User::with_session(email, username, session)])
            }
            other => Err(Error::invalid_argument(format!(
                "Invalid login form key: {other}"
            ))),
        }
    }

    async fn set_login_user(&self, user: Option<&User>) {
        let session = user.and_then(User::session).map(str::to_string);
        self.session.set(session).await;
    }

    async fn current_user(&self) -> Result<Option<User>> {
        Ok(None)
    }
}

// ============================================================================
// Library
// ============================================================================

#[async_trait]
impl LibraryFeedClient for DabExtension {
    async fn load_library_feed(&self) -> Result<Feed> {
        let session = self.session.require().await?;

        let favourites = {
            let api = Arc::clone(&self.api);
            let session = session.clone();
            PagedFeedBuilder::new(
                move |_offset| {
                    let api = Arc::clone(&api);
                    let session = session.clone();
                    async move { api.favourites(&session).await }
                },
                |page: FavouriteResponse| page.tracks,
                |_: &FavouriteResponse| None,
                |track: ApiTrack| Track::from(track).into(),
            )
        };

        let playlists = {
            let api = Arc::clone(&self.api);
            PagedFeedBuilder::new(
                move |_offset| {
                    let api = Arc::clone(&api);
                    let session = session.clone();
                    async move { api.libraries(&session).await }
                },
                |page: LibraryResponse| page.libraries,
                |_: &LibraryResponse| None,
                |item: LibraryItem| Playlist::from(item).into(),
            )
        };

        Ok(FeedAssembler::new()
            .category(FAVOURITES_SHELF, "Favourites", ShelfLayout::Linear, favourites)
            .category(PLAYLISTS_SHELF, "Playlists", ShelfLayout::Linear, playlists)
            .assemble()
            .await)
    }

    async fn add_favourite(&self, track: &Track) -> Result<()> {
        let session = self.session.require().await?;
        self.api
            .add_favourite(&favourite_record(track), &session)
            .await?;
        info!(track = %track.id, "Added favourite");
        Ok(())
    }

    async fn remove_favourite(&self, track: &Track) -> Result<()> {
        let session = self.session.require().await?;
        self.api.remove_favourite(&track.id, &session).await?;
        info!(track = %track.id, "Removed favourite");
        Ok(())
    }
}

// ============================================================================
// Share
// ============================================================================

#[async_trait]
impl ShareClient for DabExtension {
    async fn share(&self, item: &MediaItem) -> Result<String> {
        let root = &self.share_root;
        match item {
            MediaItem::Track(track) => {
                let album_id = track
                    .album_id()
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| Error::missing_field("album_id"))?;
                Ok(format!("{root}album/{album_id}"))
            }
            MediaItem::Album(album) => Ok(format!("{root}album/{}", album.id)),
            MediaItem::Artist(artist) => {
                let slug = artist
                    .slug
                    .as_deref()
                    .ok_or_else(|| Error::missing_field("slug"))?;
                Ok(format!("{root}interpreter/{slug}/{}", artist.id))
            }
            MediaItem::Playlist(_) => Err(Error::unsupported("Playlist sharing")),
            MediaItem::Radio(_) => Err(Error::unsupported("Radio sharing")),
        }
    }
}
