//! Core types for boundlog
//!
//! This crate defines the foundational pieces shared by the rest of the
//! workspace:
//! - `LogKey`: caller-facing identifier for a log entry
//! - `DocId`: internally minted, strictly increasing document identifier
//! - `Error` / `Result`: error hierarchy
//! - `TickSource`: injectable monotonic clock seam used to mint `DocId`s

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod types;

pub use clock::{ManualClock, MonotonicClock, TickSource};
pub use error::{Error, Result};
pub use types::{DocId, LogKey};
