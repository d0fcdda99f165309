//! Error types for boundlog
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. The core store surfaces exactly one error: a
//! non-positive capacity at construction. `add` and `search` are total
//! over their input domains; empty text, empty results, and repeated
//! keys are all normal outcomes, not errors.

use thiserror::Error;

/// Result type alias for boundlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the log store
#[derive(Debug, Error)]
pub enum Error {
    /// Store constructed with a capacity of zero. There is no valid
    /// degraded mode for a store that can hold nothing.
    #[error("invalid capacity: store capacity must be positive")]
    InvalidCapacity,
}
