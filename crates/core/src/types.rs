//! Identifier types
//!
//! Two identifiers flow through the store:
//! - `LogKey` is supplied by the caller and names a logical log entry.
//!   Re-adding the same key replaces its content.
//! - `DocId` is minted internally, once per insertion, and is strictly
//!   increasing for the lifetime of a store. It doubles as the recency
//!   sort key for search results (larger = more recent).

use std::fmt;

/// Caller-facing identifier for a log entry.
///
/// Not unique over time from the caller's perspective: re-adding a key
/// retires the previous content and mints a fresh [`DocId`] for it.
pub type LogKey = i64;

/// Internally minted document identifier.
///
/// Constructed from a monotonic elapsed-nanoseconds component plus a
/// per-insertion sequence number, so two insertions in the same instant
/// still yield distinct, order-preserving ids. Every minted `DocId` is
/// strictly greater than all earlier ones from the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(u64);

impl DocId {
    /// Wrap a raw identifier value.
    pub fn new(raw: u64) -> Self {
        DocId(raw)
    }

    /// The raw identifier value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
