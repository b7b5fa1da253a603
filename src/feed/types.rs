//! Feed and shelf types

use crate::error::{Error, Result};
use crate::media::MediaItem;
use crate::pagination::{MappedPage, PagedFeed};
use serde::{Deserialize, Serialize};

/// How the host should lay out a shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelfLayout {
    #[default]
    Linear,
    Grid,
}

/// One named category of a feed
#[derive(Debug, Clone, Serialize)]
pub struct Shelf {
    pub id: String,
    pub title: String,
    pub layout: ShelfLayout,
    /// Items of the first page
    pub items: Vec<MediaItem>,
    /// Cursor of the page after `items`, `None` when exhausted
    pub next: Option<String>,
    #[serde(skip)]
    more: Option<PagedFeed<MediaItem>>,
}

impl Shelf {
    /// A shelf backed by a paged listing; its items are the feed's first page
    pub fn paged(
        id: impl Into<String>,
        title: impl Into<String>,
        layout: ShelfLayout,
        feed: PagedFeed<MediaItem>,
    ) -> Self {
        let first = feed.first_page();
        Self {
            id: id.into(),
            title: title.into(),
            layout,
            items: first.items.clone(),
            next: first.next.clone(),
            more: Some(feed),
        }
    }

    /// A shelf whose items are all known up front
    pub fn fixed(
        id: impl Into<String>,
        title: impl Into<String>,
        layout: ShelfLayout,
        items: Vec<MediaItem>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            layout,
            items,
            next: None,
            more: None,
        }
    }

    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// The paged listing behind this shelf, if any
    pub fn feed(&self) -> Option<&PagedFeed<MediaItem>> {
        self.more.as_ref()
    }

    /// Load a page of this shelf.
    ///
    /// `None` returns the items already shown. Fixed shelves have nothing
    /// beyond their items, so any cursor is rejected.
    pub async fn load_more(&self, cursor: Option<&str>) -> Result<MappedPage<MediaItem>> {
        match (&self.more, cursor) {
            (Some(feed), cursor) => feed.next(cursor).await,
            (None, None) => Ok(MappedPage::new(self.items.clone(), None)),
            (None, Some(_)) => Err(Error::malformed_cursor(format!(
                "shelf '{}' has no further pages",
                self.id
            ))),
        }
    }
}

/// A category whose first page could not be fetched
#[derive(Debug)]
pub struct CategoryFailure {
    pub id: String,
    pub title: String,
    pub error: Error,
}

/// Top-level feed returned to the host
#[derive(Debug, Default)]
pub struct Feed {
    pub shelves: Vec<Shelf>,
    pub failures: Vec<CategoryFailure>,
}

impl Feed {
    /// A feed with no categories
    pub fn empty() -> Self {
        Self::default()
    }

    /// A feed made of already built shelves
    pub fn from_shelves(shelves: Vec<Shelf>) -> Self {
        Self {
            shelves,
            failures: Vec::new(),
        }
    }

    /// True when there is nothing to show and nothing failed
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty() && self.failures.is_empty()
    }

    /// Look up a shelf by category id
    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == id)
    }

    /// Look up the failure of a category by id
    pub fn failure(&self, id: &str) -> Option<&CategoryFailure> {
        self.failures.iter().find(|f| f.id == id)
    }
}
