//! Protocol session: drive a store from a reader, write results out
//!
//! A session reads the capacity header, constructs the store, then
//! executes commands line by line until `END` or end of input. The
//! store outlives the stream: callers can keep querying it after the
//! session finishes.

use crate::error::ProtocolError;
use crate::parse::{parse_line, Command};
use boundlog_engine::LogStore;
use std::io::{BufRead, Write};
use tracing::debug;

/// A completed (or running) protocol session over a `LogStore`.
pub struct Session {
    store: LogStore,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Run a full protocol session: read the capacity header, execute
    /// commands from `reader`, write results to `writer`, stop at `END`
    /// or end of input. Returns the session so the store remains
    /// inspectable.
    ///
    /// # Errors
    ///
    /// Any I/O failure, a malformed header or command, or a zero
    /// capacity header. The first error aborts the session.
    pub fn serve<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<Self, ProtocolError> {
        let mut lines = reader.lines();

        let capacity = read_header(&mut lines)?;
        let store = LogStore::new(capacity)?;
        debug!(capacity, "session started");

        for line in lines {
            let line = line?;
            match parse_line(&line)? {
                None => continue,
                Some(Command::End) => {
                    writer.write_all(b"END")?;
                    writer.flush()?;
                    break;
                }
                Some(Command::Add { key, text }) => store.add(key, &text),
                Some(Command::Search { word, limit }) => {
                    // The protocol allows negative limits; the core API
                    // does not, so clamp here at the boundary.
                    let limit = usize::try_from(limit).unwrap_or(0);
                    let keys = store.search(&word, limit);
                    write_search_result(&mut writer, &keys)?;
                }
            }
        }

        Ok(Session { store })
    }

    /// The store driven by this session.
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Consume the session, keeping the store.
    pub fn into_store(self) -> LogStore {
        self.store
    }
}

/// Read the capacity header: the first line carrying any non-whitespace
/// content must be a single integer.
fn read_header<R: BufRead>(
    lines: &mut std::io::Lines<R>,
) -> Result<usize, ProtocolError> {
    for line in lines {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue; // blank line before the header
        };
        if words.next().is_some() {
            return Err(ProtocolError::InvalidHeader(line.clone()));
        }
        return first
            .parse()
            .map_err(|_| ProtocolError::InvalidHeader(line.clone()));
    }
    Err(ProtocolError::InvalidHeader(String::new()))
}

/// Print matched keys space-separated, or `NONE` when empty.
fn write_search_result<W: Write>(writer: &mut W, keys: &[i64]) -> Result<(), ProtocolError> {
    if keys.is_empty() {
        writer.write_all(b"NONE\n")?;
        return Ok(());
    }
    let joined = keys
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{joined}")?;
    Ok(())
}
