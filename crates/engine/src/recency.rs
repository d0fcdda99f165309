//! Bounded LRU recency tracker with O(1) operations
//!
//! Uses a hash map for key→slot lookup and an arena-based doubly-linked
//! list for recency ordering. Links are `usize` indices into a `Vec` of
//! fixed slots rather than pointers, so there are no ownership cycles
//! and no unsafe code. Freed slots are recycled through a free list.
//!
//! The tracker stores keys only; the owning store keeps whatever data
//! hangs off them. It is not internally synchronized — the store guards
//! it with its outer lock.

use boundlog_core::{Error, LogKey, Result};
use rustc_hash::FxHashMap;

/// Null link in the slot arena.
const SENTINEL: usize = usize::MAX;

/// A slot in the arena-based doubly-linked list.
#[derive(Debug)]
struct Slot {
    key: LogKey,
    prev: usize,
    next: usize,
}

/// Bounded least-recently-used tracker over log keys.
///
/// Recency order runs head (most recently used) to tail (least recently
/// used). [`RecencyCache::touch`] is the only mutation: it promotes an
/// existing key or inserts a new one, evicting the tail when capacity
/// would be exceeded.
#[derive(Debug)]
pub struct RecencyCache {
    capacity: usize,
    map: FxHashMap<LogKey, usize>,
    slots: Vec<Slot>,
    head: usize,
    tail: usize,
    free_head: usize,
}

impl RecencyCache {
    /// Create a tracker holding at most `capacity` keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero; a
    /// tracker that can hold nothing has no valid degraded mode.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(RecencyCache {
            capacity,
            map: FxHashMap::default(),
            slots: Vec::with_capacity(capacity),
            head: SENTINEL,
            tail: SENTINEL,
            free_head: SENTINEL,
        })
    }

    /// Touch `key`, returning the key evicted to make room, if any.
    ///
    /// An existing key is relinked to the most-recently-used end and no
    /// eviction occurs. A new key is linked at the most-recently-used
    /// end; if that would push the tracker past capacity, the
    /// least-recently-used key is removed and returned.
    pub fn touch(&mut self, key: LogKey) -> Option<LogKey> {
        if let Some(&idx) = self.map.get(&key) {
            self.unlink(idx);
            self.push_head(idx);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict_tail()
        } else {
            None
        };

        let idx = self.alloc_slot(key);
        self.push_head(idx);
        self.map.insert(key, idx);

        evicted
    }

    /// Maximum number of keys the tracker holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True when `key` is currently tracked. Does not promote it.
    pub fn contains(&self, key: LogKey) -> bool {
        self.map.contains_key(&key)
    }

    // --- Internal linked-list operations ---

    /// Allocate a slot, reusing a freed one when available.
    fn alloc_slot(&mut self, key: LogKey) -> usize {
        if self.free_head != SENTINEL {
            let idx = self.free_head;
            self.free_head = self.slots[idx].next;
            self.slots[idx] = Slot {
                key,
                prev: SENTINEL,
                next: SENTINEL,
            };
            idx
        } else {
            self.slots.push(Slot {
                key,
                prev: SENTINEL,
                next: SENTINEL,
            });
            self.slots.len() - 1
        }
    }

    /// Remove slot `idx` from the recency list. Does not free the slot.
    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        if prev != SENTINEL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != SENTINEL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[idx].prev = SENTINEL;
        self.slots[idx].next = SENTINEL;
    }

    /// Link slot `idx` at the most-recently-used end.
    fn push_head(&mut self, idx: usize) {
        self.slots[idx].prev = SENTINEL;
        self.slots[idx].next = self.head;

        if self.head != SENTINEL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == SENTINEL {
            self.tail = idx;
        }
    }

    /// Unlink the least-recently-used slot and return its key.
    fn evict_tail(&mut self) -> Option<LogKey> {
        if self.tail == SENTINEL {
            return None;
        }
        let idx = self.tail;
        let key = self.slots[idx].key;

        self.unlink(idx);
        self.map.remove(&key);

        // Chain the freed slot for reuse.
        self.slots[idx].next = self.free_head;
        self.free_head = idx;

        Some(key)
    }
}
