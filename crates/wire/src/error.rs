//! Protocol-layer errors
//!
//! The core store is total once constructed; everything that can go
//! wrong at this layer is either I/O, a malformed command stream, or a
//! rejected capacity header.

use std::io;
use thiserror::Error;

/// Errors produced while driving a store from a command stream
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Reading the input or writing a result failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The store rejected its configuration (zero capacity header).
    #[error(transparent)]
    Store(#[from] boundlog_core::Error),

    /// The first significant line was not a single integer capacity.
    #[error("invalid header {0:?}: expected a single positive integer")]
    InvalidHeader(String),

    /// A numeric field (key or limit) failed to parse.
    #[error("invalid number {0:?} in command")]
    InvalidNumber(String),

    /// A line did not form a recognizable command.
    #[error("malformed command: {0:?}")]
    InvalidCommand(String),
}
