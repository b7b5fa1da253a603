// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # dab-feed
//!
//! Adapter exposing a music catalog API (search, albums, artists, streams,
//! favourites, accounts) as feeds a host application can render.
//!
//! ## Features
//!
//! - **Paged feeds**: offset listings become a first page plus on-demand
//!   continuation, addressed by opaque cursors
//! - **Isolated categories**: one failing category never hides the others
//! - **Session auth**: session cookie captured at login and replayed
//! - **Typed media model**: tracks, albums, artists, playlists and radios as
//!   one closed enum
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dab_feed::extension::{DabExtension, SearchFeedClient};
//! use dab_feed::{DabConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ext = DabExtension::new(DabConfig::default())?;
//!     let feed = ext.load_search_feed("daft punk").await?;
//!
//!     for shelf in &feed.shelves {
//!         let mut cursor = shelf.next.clone();
//!         while let Some(c) = cursor {
//!             let page = shelf.load_more(Some(&c)).await?;
//!             cursor = page.next;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Extension (client traits)                   │
//! │  search  track  album  artist  login  library  share            │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Feed   │ Paginate  │    Media      │   Auth    │    API      │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Shelves  │ Builder   │ Track/Album   │ Session   │ Endpoints   │
//! │ Assembler│ Cursor    │ Artist/...    │ Forms     │ HTTP client │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Adapter configuration
pub mod config;

/// HTTP client with session cookies and rate limiting
pub mod http;

/// Catalog API wire records and endpoints
pub mod api;

/// Canonical media items
pub mod media;

/// Cursors and paged feeds
pub mod pagination;

/// Feeds, shelves and the feed assembler
pub mod feed;

/// Session capture and login forms
pub mod auth;

/// Host-facing client traits and their implementation
pub mod extension;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::DabConfig;
pub use error::{Error, Result};
pub use extension::DabExtension;
pub use feed::{Feed, Shelf};
pub use media::MediaItem;
pub use pagination::{MappedPage, PagedFeed};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
