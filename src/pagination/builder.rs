//! Paginated feed builder
//!
//! Turns an offset-based listing call into a [`PagedFeed`]: the first page is
//! fetched and mapped eagerly, later pages are fetched on demand from the
//! cursor of the page before them.

use super::cursor::{decode_cursor, next_cursor};
use super::types::{MappedPage, PaginationDescriptor};
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

type FetchFn<R> = Arc<dyn Fn(u32) -> BoxFuture<'static, Result<R>> + Send + Sync>;
type ExtractItemsFn<R, I> = Arc<dyn Fn(R) -> Vec<I> + Send + Sync>;
type ExtractPaginationFn<R> = Arc<dyn Fn(&R) -> Option<PaginationDescriptor> + Send + Sync>;
type MapItemFn<I, T> = Arc<dyn Fn(I) -> T + Send + Sync>;

/// Loads and maps the page starting at a given offset
#[async_trait]
trait PageLoader<T>: Send + Sync {
    async fn load(&self, offset: u32) -> Result<MappedPage<T>>;
}

/// Wires a listing call to its extraction and mapping functions.
///
/// - `R`: raw page returned by the listing call
/// - `I`: raw item extracted from a page
/// - `T`: display item produced by the mapper
pub struct PagedFeedBuilder<R, I, T> {
    fetch: FetchFn<R>,
    extract_items: ExtractItemsFn<R, I>,
    extract_pagination: ExtractPaginationFn<R>,
    map_item: MapItemFn<I, T>,
}

impl<R, I, T> PagedFeedBuilder<R, I, T>
where
    R: Send + 'static,
    I: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Create a builder from its four collaborators:
    /// the listing call `offset -> raw page`, the item extractor, the
    /// pagination extractor and the item mapper.
    pub fn new<F, Fut, E, P, M>(fetch: F, extract_items: E, extract_pagination: P, map_item: M) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
        E: Fn(R) -> Vec<I> + Send + Sync + 'static,
        P: Fn(&R) -> Option<PaginationDescriptor> + Send + Sync + 'static,
        M: Fn(I) -> T + Send + Sync + 'static,
    {
        Self {
            fetch: Arc::new(move |offset| fetch(offset).boxed()),
            extract_items: Arc::new(extract_items),
            extract_pagination: Arc::new(extract_pagination),
            map_item: Arc::new(map_item),
        }
    }

    /// Map a raw page into display items and the cursor of the next page.
    ///
    /// Pure: mapping the same raw page twice yields equal results.
    pub fn map_page(&self, raw: R) -> MappedPage<T> {
        let pagination = (self.extract_pagination)(&raw);
        let items = (self.extract_items)(raw)
            .into_iter()
            .map(|item| (self.map_item)(item))
            .collect();
        MappedPage::new(items, next_cursor(pagination.as_ref()))
    }

    /// Fetch and map the first page (offset 0), producing the feed.
    pub async fn build(self) -> Result<PagedFeed<T>> {
        let raw = (self.fetch)(0).await?;
        let first_page = self.map_page(raw);
        debug!(
            items = first_page.len(),
            has_next = !first_page.is_last(),
            "Fetched first page"
        );
        Ok(PagedFeed {
            first_page,
            loader: Arc::new(self),
        })
    }

    /// Fetch the page following `cursor` without building a feed.
    ///
    /// For hosts that keep only the cursor between calls. The cursor is
    /// decoded before the listing call, so a malformed one costs nothing.
    pub async fn resume(&self, cursor: &str) -> Result<MappedPage<T>> {
        let offset = continuation_offset(cursor)?;
        debug!(offset, "Resuming from cursor");
        self.load(offset).await
    }
}

fn continuation_offset(cursor: &str) -> Result<u32> {
    decode_cursor(cursor)?
        .next_offset()
        .ok_or_else(|| Error::malformed_cursor("offset + limit overflows"))
}

#[async_trait]
impl<R, I, T> PageLoader<T> for PagedFeedBuilder<R, I, T>
where
    R: Send + 'static,
    I: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self, offset: u32) -> Result<MappedPage<T>> {
        let raw = (self.fetch)(offset).await?;
        Ok(self.map_page(raw))
    }
}

/// A lazily continuable sequence of mapped pages.
///
/// The first page is fetched once, at build time, and kept read-only for the
/// life of the feed. Continuations must be requested in cursor order: each
/// cursor only makes sense coming from the page immediately before it.
pub struct PagedFeed<T> {
    first_page: MappedPage<T>,
    loader: Arc<dyn PageLoader<T>>,
}

impl<T: Clone> Clone for PagedFeed<T> {
    fn clone(&self) -> Self {
        Self {
            first_page: self.first_page.clone(),
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> PagedFeed<T> {
    /// The eagerly fetched first page
    pub fn first_page(&self) -> &MappedPage<T> {
        &self.first_page
    }

    /// Load the page identified by `cursor`.
    ///
    /// `None` returns the cached first page without another listing call.
    /// Otherwise the cursor is decoded and the page at `offset + limit` is
    /// fetched; an undecodable cursor fails with `MalformedCursor` before any
    /// call is made.
    pub async fn next(&self, cursor: Option<&str>) -> Result<MappedPage<T>> {
        let Some(cursor) = cursor else {
            debug!("Serving cached first page");
            return Ok(self.first_page.clone());
        };

        let offset = continuation_offset(cursor)?;
        debug!(offset, "Fetching continuation page");
        self.loader.load(offset).await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PagedFeed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedFeed")
            .field("first_page", &self.first_page)
            .finish_non_exhaustive()
    }
}
