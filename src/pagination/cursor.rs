//! Cursor codec
//!
//! A cursor is the URL-safe base64 of the descriptor's canonical JSON. It is
//! opaque to the host and not stable across upstream schema changes.

use super::types::PaginationDescriptor;
use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

/// Serialize a descriptor into a cursor string
pub fn encode_cursor(descriptor: &PaginationDescriptor) -> String {
    // Serializing a plain struct of integers cannot fail.
    let json = serde_json::to_vec(descriptor).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Parse a cursor string back into a descriptor.
///
/// Fails with `MalformedCursor` on anything that did not come out of
/// [`encode_cursor`] for a usable descriptor. Never falls back to offset 0.
pub fn decode_cursor(cursor: &str) -> Result<PaginationDescriptor> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|e| Error::malformed_cursor(format!("not base64: {e}")))?;

    let descriptor: PaginationDescriptor = serde_json::from_slice(&bytes)
        .map_err(|e| Error::malformed_cursor(format!("not a pagination descriptor: {e}")))?;

    if descriptor.limit == 0 {
        return Err(Error::malformed_cursor("limit must be positive"));
    }
    if descriptor.next_offset().is_none() {
        return Err(Error::malformed_cursor("offset + limit overflows"));
    }

    Ok(descriptor)
}

/// Cursor for the page after `descriptor`, or `None` when the sequence ends.
///
/// A missing descriptor or an absent/false `hasMore` ends the sequence, as
/// does a descriptor that could not be advanced (zero limit, offset overflow).
pub fn next_cursor(descriptor: Option<&PaginationDescriptor>) -> Option<String> {
    descriptor
        .filter(|d| d.has_more() && d.limit > 0 && d.next_offset().is_some())
        .map(encode_cursor)
}
