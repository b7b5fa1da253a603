//! Pagination types
//!
//! The descriptor the listing endpoint reports for each page, and the mapped
//! page handed to the host.

use serde::{Deserialize, Serialize};

/// Offset-based pagination metadata reported by the listing endpoint.
///
/// `has_more` is authoritative; `total` alone is never used to decide whether
/// another page exists. An absent `hasMore` means there are no more pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDescriptor {
    /// Offset of the first item of this page
    pub offset: u32,
    /// Page size the endpoint used
    pub limit: u32,
    /// Total number of matching items
    pub total: u32,
    /// Number of items actually returned in this page
    pub returned: u32,
    /// Whether items exist beyond `offset + returned`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl PaginationDescriptor {
    /// Create a descriptor
    pub fn new(offset: u32, limit: u32, total: u32, returned: u32, has_more: Option<bool>) -> Self {
        Self {
            offset,
            limit,
            total,
            returned,
            has_more,
        }
    }

    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.has_more.unwrap_or(false)
    }

    /// Offset of the page following this one, `None` on overflow
    pub fn next_offset(&self) -> Option<u32> {
        self.offset.checked_add(self.limit)
    }
}

/// One page of mapped items plus the cursor for the page after it.
///
/// `next == None` means the sequence is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedPage<T> {
    /// Items in upstream order
    pub items: Vec<T>,
    /// Cursor for the following page
    pub next: Option<String>,
}

impl<T> MappedPage<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self { items, next }
    }

    /// Whether this is the last page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page carries no items; it may still have a next cursor
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
