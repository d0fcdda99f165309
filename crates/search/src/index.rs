//! Inverted index over document ids
//!
//! Maps each token to the set of [`DocId`]s whose text produced it.
//!
//! # Staleness
//!
//! Posting sets may reference documents that have since been retired.
//! Removal is best-effort and silent; the owning store filters stale ids
//! at read time and calls [`InvertedIndex::remove_association`] for the
//! ones it discovers. Nothing here distinguishes "never indexed" from
//! "indexed, then shed".
//!
//! # Thread Safety
//!
//! A single reader/writer lock guards the token map. `insert` and
//! `remove_association` take exclusive access, `search` takes shared
//! access. Callers that hold their own lock must acquire it before
//! touching the index (outer lock first, index lock second).

use crate::tokenizer::analyze;
use boundlog_core::DocId;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Inverted index: token → set of document ids
pub struct InvertedIndex {
    postings: RwLock<FxHashMap<String, FxHashSet<DocId>>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex {
            postings: RwLock::new(FxHashMap::default()),
        }
    }

    /// Index `text` under document `id`.
    ///
    /// Every distinct token of `text` gains an association with `id`.
    /// Idempotent per (token, id) pair; text producing no tokens is a
    /// no-op.
    pub fn insert(&self, text: &str, id: DocId) {
        let tokens = analyze(text);
        if tokens.is_empty() {
            return;
        }
        let mut postings = self.postings.write();
        for token in tokens {
            postings.entry(token).or_default().insert(id);
        }
    }

    /// Remove the association between the tokens of `text` and `id`.
    ///
    /// Silent no-op for tokens or ids that are not present. A posting
    /// set emptied by the removal is dropped so the token map does not
    /// accumulate dead terms.
    pub fn remove_association(&self, text: &str, id: DocId) {
        let mut postings = self.postings.write();
        for token in analyze(text) {
            if let Some(ids) = postings.get_mut(&token) {
                if ids.remove(&id) && ids.is_empty() {
                    trace!(%token, "dropping empty posting set");
                    postings.remove(&token);
                }
            }
        }
    }

    /// Document ids associated with any token of `query`.
    ///
    /// Multi-token queries union their per-token result sets. Returns an
    /// empty set when nothing matches. May include stale ids; the caller
    /// owns liveness filtering.
    pub fn search(&self, query: &str) -> FxHashSet<DocId> {
        let postings = self.postings.read();
        let mut result = FxHashSet::default();
        for token in analyze(query) {
            if let Some(ids) = postings.get(&token) {
                result.extend(ids.iter().copied());
            }
        }
        result
    }

    /// Number of distinct tokens currently indexed.
    pub fn term_count(&self) -> usize {
        self.postings.read().len()
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> FxHashSet<DocId> {
        raw.iter().copied().map(DocId::new).collect()
    }

    #[test]
    fn test_search_single_token() {
        let index = InvertedIndex::new();
        index.insert("We need to manage logs on a system with limited memory.", DocId::new(1));
        index.insert("We need to query which of the logs contain a given word.", DocId::new(2));

        assert_eq!(index.search("We"), ids(&[1, 2]));
        assert_eq!(index.search("memory"), ids(&[1]));
        assert_eq!(index.search("word"), ids(&[2]));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = InvertedIndex::new();
        index.insert("Logs contain WORDS", DocId::new(1));

        assert_eq!(index.search("logs"), ids(&[1]));
        assert_eq!(index.search("Words"), ids(&[1]));
    }

    #[test]
    fn test_search_multi_token_query_unions() {
        let index = InvertedIndex::new();
        index.insert("alpha one", DocId::new(1));
        index.insert("beta two", DocId::new(2));

        assert_eq!(index.search("alpha beta"), ids(&[1, 2]));
    }

    #[test]
    fn test_search_unknown_token_is_empty() {
        let index = InvertedIndex::new();
        index.insert("some text", DocId::new(1));

        assert!(index.search("absent").is_empty());
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let index = InvertedIndex::new();
        index.insert("repeat repeat repeat", DocId::new(1));
        index.insert("repeat", DocId::new(1));

        assert_eq!(index.search("repeat"), ids(&[1]));
    }

    #[test]
    fn test_insert_empty_text_is_noop() {
        let index = InvertedIndex::new();
        index.insert("", DocId::new(1));
        index.insert("...", DocId::new(2));

        assert_eq!(index.term_count(), 0);
    }

    #[test]
    fn test_remove_association() {
        let index = InvertedIndex::new();
        index.insert("shared token", DocId::new(1));
        index.insert("shared other", DocId::new(2));

        index.remove_association("shared token", DocId::new(1));

        assert_eq!(index.search("shared"), ids(&[2]));
        assert!(index.search("token").is_empty());
    }

    #[test]
    fn test_remove_absent_association_is_silent() {
        let index = InvertedIndex::new();
        index.insert("present", DocId::new(1));

        // Neither the unknown token nor the unknown id should disturb
        // anything.
        index.remove_association("absent", DocId::new(1));
        index.remove_association("present", DocId::new(99));

        assert_eq!(index.search("present"), ids(&[1]));
    }

    #[test]
    fn test_empty_posting_sets_are_dropped() {
        let index = InvertedIndex::new();
        index.insert("solo", DocId::new(1));
        assert_eq!(index.term_count(), 1);

        index.remove_association("solo", DocId::new(1));
        assert_eq!(index.term_count(), 0);
    }
}
