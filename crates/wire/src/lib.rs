//! Line protocol driver for boundlog
//!
//! Translates a text command stream into store operations and formats
//! the results back out. The store itself never sees malformed input:
//! this layer owns all parsing and user-visible error reporting.
//!
//! # Protocol
//!
//! ```text
//! <capacity>                  first significant line, positive integer
//! ADD <key> <text...>         insert or replace the entry for <key>
//! SEARCH <word> <limit>       print matching keys, most recent first
//! END                         echo END and stop
//! ```
//!
//! `SEARCH` prints the keys space-separated on one line, or `NONE` when
//! nothing matches. Blank lines are skipped. A limit of zero or less
//! yields `NONE`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod parse;
pub mod session;

pub use error::ProtocolError;
pub use parse::Command;
pub use session::Session;
