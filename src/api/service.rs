//! Remote catalog endpoints
//!
//! Thin typed wrappers over the shared [`HttpClient`]. Every call is a single
//! request; nothing here retries or caches.

use super::types::{
    AlbumResponse, ApiTrack, ArtistResponse, FavouriteResponse, LibraryResponse, LoginRequest,
    LoginResponse, MediaType, RegisterRequest, SearchResponse, StreamResponse,
};
use crate::error::Result;
use crate::http::{decode_json, set_cookie_values, HttpClient, RequestConfig};
use serde_json::json;
use tracing::debug;

/// Login outcome: decoded body plus the raw `Set-Cookie` values
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub response: LoginResponse,
    pub set_cookies: Vec<String>,
}

/// Typed access to the catalog API
#[derive(Debug, Clone)]
pub struct ApiService {
    http: HttpClient,
}

impl ApiService {
    /// Create a service on top of a shared HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// One page of search results for a category, starting at `offset`
    pub async fn search(&self, query: &str, offset: u32, kind: MediaType) -> Result<SearchResponse> {
        debug!(query, offset, kind = %kind, "search");
        let config = RequestConfig::new()
            .query("q", query)
            .query("offset", offset)
            .query("type", kind.as_str());
        self.http.get_json("search", config).await
    }

    pub async fn album(&self, album_id: &str) -> Result<AlbumResponse> {
        let config = RequestConfig::new().query("albumId", album_id);
        self.http.get_json("album", config).await
    }

    /// Artist details and discography
    pub async fn discography(&self, artist_id: &str) -> Result<ArtistResponse> {
        let config = RequestConfig::new().query("artistId", artist_id);
        self.http.get_json("discography", config).await
    }

    pub async fn stream(&self, track_id: &str) -> Result<StreamResponse> {
        let config = RequestConfig::new().query("trackId", track_id);
        self.http.get_json("stream", config).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .http
            .post("auth/login", RequestConfig::new().json(body))
            .await?;
        let set_cookies = set_cookie_values(response.headers());
        let response = decode_json(response).await?;
        Ok(LoginOutcome {
            response,
            set_cookies,
        })
    }

    /// Register a new account, returning the `Set-Cookie` values
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Vec<String>> {
        let body = serde_json::to_value(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .http
            .post("auth/register", RequestConfig::new().json(body))
            .await?;
        Ok(set_cookie_values(response.headers()))
    }

    pub async fn favourites(&self, session: &str) -> Result<FavouriteResponse> {
        self.http
            .get_json("favorites", RequestConfig::new().session(session))
            .await
    }

    pub async fn add_favourite(&self, track: &ApiTrack, session: &str) -> Result<()> {
        let config = RequestConfig::new()
            .json(json!({ "track": track }))
            .session(session);
        self.http.post("favorites", config).await?;
        Ok(())
    }

    pub async fn remove_favourite(&self, track_id: &str, session: &str) -> Result<()> {
        let config = RequestConfig::new()
            .query("trackId", track_id)
            .session(session);
        self.http.delete("favorites", config).await?;
        Ok(())
    }

    /// The user's playlists
    pub async fn libraries(&self, session: &str) -> Result<LibraryResponse> {
        self.http
            .get_json("libraries", RequestConfig::new().session(session))
            .await
    }
}
