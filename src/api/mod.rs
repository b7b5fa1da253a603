//! Remote catalog API module
//!
//! Wire records and endpoint wrappers for the upstream music catalog:
//! search, album, discography, stream, auth, favorites and libraries.

mod service;
mod types;

pub use service::{ApiService, LoginOutcome};
pub use types::{
    AlbumResponse, ApiAlbum, ApiArtist, ApiTrack, ApiUser, ArtistResponse, AudioQuality,
    Biography, FavouriteResponse, Images, LibraryItem, LibraryResponse, LoginRequest,
    LoginResponse, MediaType, RegisterRequest, SearchResponse, StreamResponse,
};
