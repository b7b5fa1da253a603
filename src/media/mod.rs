//! Media model module
//!
//! Canonical display items and their mapping from API records.

mod mapping;
mod types;

pub use mapping::{favourite_record, parse_date, split_genres};
pub use types::{Album, Artist, MediaItem, Playlist, Radio, StreamMedia, Streamable, Track};

#[cfg(test)]
mod tests;
