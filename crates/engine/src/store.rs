//! LogStore: bounded, searchable log store
//!
//! ## Design
//!
//! The store owns three structures that must stay mutually consistent:
//! the recency cache (which keys are live), the key↔document bijection
//! (the authoritative mapping), and the inverted index (which documents
//! contain which tokens). Every insertion mints a strictly increasing
//! document id, so the id doubles as the recency sort key for search
//! results.
//!
//! The inverted index is allowed to lag behind retirements: shedding a
//! retired document's associations eagerly would require keeping its
//! text around. Instead, `search` filters candidates against the
//! bijection and prunes the stale entries it happens to discover.
//!
//! ## Thread Safety
//!
//! `LogStore` is `Send + Sync`. An outer reader/writer lock guards the
//! cache and the bijection; the index carries its own lock. Lock order
//! is fixed everywhere: outer lock first, index lock second. `add`
//! holds the outer lock exclusively for its whole sequence, so no reader
//! ever observes a partially retired key.

use crate::recency::RecencyCache;
use boundlog_core::{DocId, LogKey, MonotonicClock, Result, TickSource};
use boundlog_search::InvertedIndex;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// State guarded by the store's outer lock: the recency tracker plus
/// both directions of the key↔document bijection. Kept in one struct so
/// a single lock acquisition covers all of it.
struct StoreInner {
    recency: RecencyCache,
    key_to_doc: FxHashMap<LogKey, DocId>,
    doc_to_key: FxHashMap<DocId, LogKey>,
}

/// Bounded-capacity, searchable in-memory log store.
///
/// Retains only the most recently touched `capacity` keys. `add` and
/// `search` are total over their input domains; the only error a store
/// can produce is a zero capacity at construction.
///
/// # Example
///
/// ```
/// use boundlog_engine::LogStore;
///
/// let store = LogStore::new(2)?;
/// store.add(1, "We need to manage logs on a system with limited memory.");
/// store.add(2, "We need to query which of the logs contain a given word.");
///
/// assert_eq!(store.search("We", 2), vec![2, 1]);
/// # Ok::<(), boundlog_core::Error>(())
/// ```
pub struct LogStore {
    /// Elapsed-time component of minted document ids. Injected so tests
    /// can pin it.
    clock: Arc<dyn TickSource>,

    /// Per-insertion sequence component of minted document ids. Breaks
    /// ties between insertions in the same clock instant.
    seq: AtomicU64,

    /// Token → document-id sets. Internally locked; may hold stale ids.
    index: InvertedIndex,

    /// Recency tracker + bijection, under the outer lock.
    inner: RwLock<StoreInner>,
}

impl LogStore {
    /// Create a store retaining at most `capacity` entries, timed by a
    /// real monotonic clock starting now.
    ///
    /// # Errors
    ///
    /// Returns [`boundlog_core::Error::InvalidCapacity`] when
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_clock(capacity, Arc::new(MonotonicClock::new()))
    }

    /// Create a store with an explicit tick source.
    ///
    /// Intended for tests that need deterministic document ids; see
    /// [`boundlog_core::ManualClock`].
    pub fn with_clock(capacity: usize, clock: Arc<dyn TickSource>) -> Result<Self> {
        Ok(LogStore {
            clock,
            seq: AtomicU64::new(0),
            index: InvertedIndex::new(),
            inner: RwLock::new(StoreInner {
                recency: RecencyCache::new(capacity)?,
                key_to_doc: FxHashMap::default(),
                doc_to_key: FxHashMap::default(),
            }),
        })
    }

    /// Insert or replace the entry for `key`.
    ///
    /// Re-adding an existing key retires its previous document and
    /// promotes the key to most-recently-used. Adding a new key at
    /// capacity evicts the least-recently-used key and retires that
    /// key's document. Either way the entry receives a fresh document
    /// id, strictly greater than every id minted before it.
    ///
    /// Total for any `key` and any `text`; text producing no tokens is
    /// simply unfindable.
    pub fn add(&self, key: LogKey, text: &str) {
        let mut inner = self.inner.write();

        let evicted = inner.recency.touch(key);

        // A re-add retires this key's own document; otherwise an
        // eviction retires the evicted key's. At most one applies,
        // since touching an existing key never evicts.
        let retired = match inner.key_to_doc.get(&key).copied() {
            Some(doc) => Some((key, doc)),
            None => evicted.and_then(|k| inner.key_to_doc.get(&k).copied().map(|doc| (k, doc))),
        };

        if let Some((old_key, old_doc)) = retired {
            inner.key_to_doc.remove(&old_key);
            inner.doc_to_key.remove(&old_doc);
            debug!(key = old_key, doc = %old_doc, "retired document");
        }

        let id = self.mint_doc_id();
        inner.key_to_doc.insert(key, id);
        inner.doc_to_key.insert(id, key);

        // Outer lock still held: index insertion is part of the atomic
        // unit, and the lock order stays outer-then-index.
        self.index.insert(text, id);
    }

    /// Keys whose current text contains `word`, most recent first.
    ///
    /// Returns at most `limit` keys; `limit == 0` yields an empty vec.
    /// Only live keys appear, each at most once. Stale index entries
    /// discovered along the way are shed as a side effect.
    pub fn search(&self, word: &str, limit: usize) -> Vec<LogKey> {
        // Candidate lookup under the index's own lock, before the outer
        // lock is taken.
        let candidates = self.index.search(word);

        let inner = self.inner.read();
        let mut live: Vec<DocId> = Vec::with_capacity(candidates.len());
        for id in candidates {
            if inner.doc_to_key.contains_key(&id) {
                live.push(id);
            } else {
                // Stale association; shed it while we are here. Index
                // lock nested inside the outer read lock, same order as
                // `add`.
                trace!(doc = %id, word, "pruning stale index association");
                self.index.remove_association(word, id);
            }
        }

        // Most recent first. Ids are unique, so ties cannot occur.
        live.sort_unstable_by(|a, b| b.cmp(a));
        live.truncate(limit);

        live.iter()
            .filter_map(|id| inner.doc_to_key.get(id).copied())
            .collect()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.read().recency.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().recency.is_empty()
    }

    /// Maximum number of entries the store retains.
    pub fn capacity(&self) -> usize {
        self.inner.read().recency.capacity()
    }

    /// Mint the next document id: elapsed nanoseconds plus the
    /// insertion sequence number. Both components are non-decreasing
    /// and the sequence is strictly increasing, so every id is strictly
    /// greater than the previous one. Called only under the outer write
    /// lock.
    fn mint_doc_id(&self) -> DocId {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        DocId::new(self.clock.elapsed_nanos() + seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundlog_core::{Error, ManualClock};

    #[test]
    fn rejects_zero_capacity() {
        assert!(matches!(LogStore::new(0), Err(Error::InvalidCapacity)));
    }

    #[test]
    fn add_then_search_round_trip() {
        let store = LogStore::new(4).unwrap();
        store.add(7, "a quick brown fox");

        assert_eq!(store.search("quick", 10), vec![7]);
        assert_eq!(store.search("Fox", 10), vec![7]);
        assert!(store.search("hound", 10).is_empty());
    }

    #[test]
    fn doc_ids_stay_strictly_increasing_with_frozen_clock() {
        // With the clock pinned, ordering rests entirely on the
        // sequence component.
        let clock = Arc::new(ManualClock::new());
        let store = LogStore::with_clock(3, clock).unwrap();

        store.add(1, "same instant");
        store.add(2, "same instant");
        store.add(3, "same instant");

        assert_eq!(store.search("instant", 3), vec![3, 2, 1]);
    }

    #[test]
    fn re_add_retires_old_content() {
        let store = LogStore::new(2).unwrap();
        store.add(1, "original wording");
        store.add(1, "replacement text");

        assert!(store.search("original", 10).is_empty());
        assert!(store.search("wording", 10).is_empty());
        assert_eq!(store.search("replacement", 10), vec![1]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn eviction_makes_old_key_unfindable() {
        let store = LogStore::new(2).unwrap();
        store.add(1, "first entry");
        store.add(2, "second entry");
        store.add(3, "third entry");

        assert!(store.search("first", 10).is_empty());
        assert_eq!(store.search("entry", 10), vec![3, 2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn zero_limit_yields_empty() {
        let store = LogStore::new(2).unwrap();
        store.add(1, "anything");

        assert!(store.search("anything", 0).is_empty());
    }

    #[test]
    fn stale_entries_are_pruned_on_discovery() {
        let store = LogStore::new(1).unwrap();
        store.add(1, "stale marker");
        store.add(2, "fresh content");

        // Key 1 was evicted but its association lingers until a search
        // for its token walks over it.
        assert!(store.search("marker", 10).is_empty());
        // Second search finds no candidates at all.
        assert!(store.search("marker", 10).is_empty());
    }

    #[test]
    fn empty_text_is_accepted_and_unfindable() {
        let store = LogStore::new(2).unwrap();
        store.add(1, "");
        store.add(2, "   ...   ");

        assert_eq!(store.len(), 2);
        assert!(store.search("", 10).is_empty());
    }

    #[test]
    fn concurrent_adds_and_searches_do_not_deadlock() {
        use std::thread;

        let store = Arc::new(LogStore::new(64).unwrap());
        let mut handles = Vec::new();

        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..500i64 {
                    let key = t * 1000 + i;
                    store.add(key, "shared payload token");
                    let found = store.search("payload", 8);
                    assert!(found.len() <= 8);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(store.len() <= 64);
        assert_eq!(store.search("payload", 64).len(), 64);
    }
}
