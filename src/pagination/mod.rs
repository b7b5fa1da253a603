//! Pagination module
//!
//! Turns the upstream offset/limit listing into a cursor-driven feed.
//!
//! # Overview
//!
//! - [`PaginationDescriptor`]: `{offset, limit, total, returned, hasMore}` as
//!   reported per page by the listing endpoint
//! - Cursor codec: [`encode_cursor`] / [`decode_cursor`] map a descriptor to an
//!   opaque string and back
//! - [`PagedFeedBuilder`]: wraps a listing call plus extraction and mapping
//!   functions; [`PagedFeedBuilder::build`] fetches the first page eagerly and
//!   yields a [`PagedFeed`] whose [`PagedFeed::next`] serves continuations

mod builder;
mod cursor;
mod types;

pub use builder::{PagedFeed, PagedFeedBuilder};
pub use cursor::{decode_cursor, encode_cursor, next_cursor};
pub use types::{MappedPage, PaginationDescriptor};
