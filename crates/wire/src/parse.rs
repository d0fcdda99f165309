//! Line → `Command` conversion
//!
//! One command per line. Fields are whitespace-separated; the `ADD`
//! text is everything after the key, rejoined with single spaces (the
//! tokenizer strips separators anyway, so the original spacing carries
//! no information).

use crate::error::ProtocolError;
use boundlog_core::LogKey;

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert or replace the entry for `key`.
    Add {
        /// Caller-facing entry key.
        key: LogKey,
        /// Free text to index under the key.
        text: String,
    },
    /// Query for entries containing `word`.
    Search {
        /// Word to look up.
        word: String,
        /// Maximum number of keys to print. Zero or negative prints
        /// `NONE`.
        limit: i64,
    },
    /// Echo `END` and stop the session.
    End,
}

/// Parse one line into a command.
///
/// Returns `Ok(None)` for blank or whitespace-only lines, which the
/// session skips.
///
/// # Errors
///
/// [`ProtocolError::InvalidCommand`] for unknown verbs or missing
/// fields, [`ProtocolError::InvalidNumber`] for unparseable numeric
/// fields.
pub fn parse_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Ok(None);
    };

    match verb {
        "END" => Ok(Some(Command::End)),
        "ADD" => {
            let [raw_key, text @ ..] = rest else {
                return Err(ProtocolError::InvalidCommand(line.to_string()));
            };
            let key = parse_number(raw_key)?;
            Ok(Some(Command::Add {
                key,
                text: text.join(" "),
            }))
        }
        "SEARCH" => {
            let [word, raw_limit] = rest else {
                return Err(ProtocolError::InvalidCommand(line.to_string()));
            };
            let limit = parse_number(raw_limit)?;
            Ok(Some(Command::Search {
                word: (*word).to_string(),
                limit,
            }))
        }
        _ => Err(ProtocolError::InvalidCommand(line.to_string())),
    }
}

fn parse_number(raw: &str) -> Result<i64, ProtocolError> {
    raw.parse()
        .map_err(|_| ProtocolError::InvalidNumber(raw.to_string()))
}
