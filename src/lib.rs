//! boundlog - bounded-capacity searchable in-memory log store
//!
//! Retains only the most recently touched `capacity` entries and
//! answers which retained entries contain a given word, most recent
//! first. Eviction, re-insertion, and index staleness are reconciled
//! internally; callers only see `add` and `search`.
//!
//! # Quick Start
//!
//! ```
//! use boundlog::LogStore;
//!
//! let store = LogStore::new(2)?;
//! store.add(1, "We need to manage logs on a system with limited memory.");
//! store.add(2, "We need to query which of the logs contain a given word.");
//!
//! assert_eq!(store.search("logs", 2), vec![2, 1]);
//! # Ok::<(), boundlog::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`LogStore`] orchestrates a recency cache, an inverted index, and
//!   the authoritative key↔document mapping.
//! - [`InvertedIndex`] and [`analyze`] provide the token search layer.
//! - [`Session`] drives a store from a line-based command stream
//!   (`ADD` / `SEARCH` / `END`); it is a pure caller of the core.

pub use boundlog_core::{
    DocId, Error, LogKey, ManualClock, MonotonicClock, Result, TickSource,
};
pub use boundlog_engine::{LogStore, RecencyCache};
pub use boundlog_search::{analyze, InvertedIndex};
pub use boundlog_wire::{Command, ProtocolError, Session};
