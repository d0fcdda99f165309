//! Text search infrastructure for boundlog
//!
//! This crate provides:
//! - a basic tokenizer (lowercase, split on non-alphanumeric)
//! - an inverted index mapping tokens to document-id sets
//!
//! The index tolerates stale document ids: entries for documents that
//! have since been retired stay in the posting sets until the owning
//! store discovers and sheds them during a search. The index itself
//! never decides what is live — that is the store's job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod tokenizer;

pub use index::InvertedIndex;
pub use tokenizer::analyze;
