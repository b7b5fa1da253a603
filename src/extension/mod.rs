//! Extension module
//!
//! The host-facing surface of the adapter. Each capability the host can use
//! is its own client trait; [`DabExtension`] implements all of them over one
//! shared [`ApiService`](crate::api::ApiService).
//!
//! ```rust,ignore
//! use dab_feed::extension::{DabExtension, SearchFeedClient};
//!
//! let ext = DabExtension::new(DabConfig::default())?;
//! let feed = ext.load_search_feed("daft punk").await?;
//! for shelf in &feed.shelves {
//!     println!("{} ({} items)", shelf.title, shelf.items.len());
//! }
//! ```

mod dab;
mod traits;

pub use dab::{DabExtension, ALBUMS_SHELF, FAVOURITES_SHELF, PLAYLISTS_SHELF, TRACKS_SHELF};
pub use traits::{
    AlbumClient, ArtistClient, LibraryFeedClient, LoginClient, SearchFeedClient, ShareClient,
    TrackClient,
};
