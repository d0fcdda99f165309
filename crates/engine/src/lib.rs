//! Store engine for boundlog
//!
//! This crate provides:
//! - `RecencyCache`: bounded least-recently-used tracker over log keys
//! - `LogStore`: the orchestrator that keeps the recency cache, the
//!   inverted index, and the key↔document bijection mutually consistent
//!   under eviction and re-insertion

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod recency;
pub mod store;

pub use recency::RecencyCache;
pub use store::LogStore;
