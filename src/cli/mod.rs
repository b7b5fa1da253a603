//! CLI module
//!
//! Command-line host for the adapter.
//!
//! # Commands
//!
//! - `search` - Search albums and tracks
//! - `more` - Next page of a search category
//! - `album` / `artist` - Item details
//! - `stream` - Resolve a track's stream URL
//! - `login` / `register` - Obtain a session
//! - `library` - Favourites and playlists (needs `--session`)
//! - `favorite-add` / `favorite-remove` - Edit favourites (needs `--session`)
//! - `share` - Public link for an item
//! - `forms` - Login form definitions

mod commands;
mod runner;

pub use commands::{Category, Cli, Commands, OutputFormat, ShareKind};
pub use runner::Runner;
