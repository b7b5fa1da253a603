//! Feed assembler
//!
//! Composes per-category paged listings into one [`Feed`].

use super::types::{CategoryFailure, Feed, Shelf, ShelfLayout};
use crate::error::Result;
use crate::media::MediaItem;
use crate::pagination::{PagedFeed, PagedFeedBuilder};
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use tracing::{debug, info, warn};

struct Category {
    id: String,
    title: String,
    layout: ShelfLayout,
    load: BoxFuture<'static, Result<PagedFeed<MediaItem>>>,
}

/// Builds a [`Feed`] from independent categories.
///
/// Categories are loaded concurrently when [`assemble`](Self::assemble) is
/// awaited. Nothing is fetched before that, and nothing at all when the
/// assembler was created for a blank query.
///
/// ```rust,ignore
/// let feed = FeedAssembler::for_query(query)
///     .category("0", "Albums", ShelfLayout::Linear, albums)
///     .category("1", "Tracks", ShelfLayout::Grid, tracks)
///     .assemble()
///     .await;
/// ```
pub struct FeedAssembler {
    query: Option<String>,
    categories: Vec<Category>,
}

impl FeedAssembler {
    /// An assembler that always loads its categories
    pub fn new() -> Self {
        Self {
            query: None,
            categories: Vec::new(),
        }
    }

    /// An assembler for a search query; a blank query yields an empty feed
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            categories: Vec::new(),
        }
    }

    /// Add a category backed by a paged listing
    pub fn category<R, I>(
        mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        layout: ShelfLayout,
        builder: PagedFeedBuilder<R, I, MediaItem>,
    ) -> Self
    where
        R: Send + 'static,
        I: Send + 'static,
    {
        self.categories.push(Category {
            id: id.into(),
            title: title.into(),
            layout,
            load: builder.build().boxed(),
        });
        self
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn is_blank(&self) -> bool {
        self.query.as_deref().is_some_and(|q| q.trim().is_empty())
    }

    /// Load every category and collect the results in registration order
    pub async fn assemble(self) -> Feed {
        if self.is_blank() {
            debug!("Blank query, returning empty feed");
            return Feed::empty();
        }

        let (meta, loads): (Vec<_>, Vec<_>) = self
            .categories
            .into_iter()
            .map(|c| ((c.id, c.title, c.layout), c.load))
            .unzip();

        let results = join_all(loads).await;

        let mut feed = Feed::empty();
        for ((id, title, layout), result) in meta.into_iter().zip(results) {
            match result {
                Ok(paged) => feed.shelves.push(Shelf::paged(id, title, layout, paged)),
                Err(error) => {
                    warn!(category = %id, error = %error, "Category failed to load");
                    feed.failures.push(CategoryFailure { id, title, error });
                }
            }
        }

        info!(
            shelves = feed.shelves.len(),
            failures = feed.failures.len(),
            "Assembled feed"
        );
        feed
    }
}

impl Default for FeedAssembler {
    fn default() -> Self {
        Self::new()
    }
}
