//! Feed module
//!
//! A [`Feed`] is what the host renders: an ordered list of shelves, each
//! showing a first page of items and, when the listing has more, a
//! continuation the host can page through.
//!
//! [`FeedAssembler`] builds one shelf per category concurrently. A category
//! whose first fetch fails is reported in [`Feed::failures`] without
//! affecting its siblings.

mod assembler;
mod types;

pub use assembler::FeedAssembler;
pub use types::{CategoryFailure, Feed, Shelf, ShelfLayout};
