//! Error types for the ledger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Problems with a single record: a roster, a hand or a date stamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Wrong seat count, duplicate or malformed player name
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// Outcome codes that do not describe a legal hand
    #[error("invalid hand: {0}")]
    InvalidHand(String),

    /// Token that is not one of `<faan>`, `d`, `t`, `f`, `-`
    #[error("invalid outcome code `{0}`")]
    InvalidOutcome(String),

    /// Date stamp that is not a run of digits
    #[error("invalid date stamp `{0}`")]
    InvalidDate(String),

    /// A hand was given before any roster
    #[error("players must be specified before a hand")]
    MissingRoster,

    /// Line that is none of date, roster or hand
    #[error("does not properly specify one of date, players or hand")]
    UnrecognizedLine,

    /// Faan ceiling outside the supported range
    #[error("maximum faan must be between 1 and {max}, got {value}")]
    InvalidMaxFaan { value: u32, max: u32 },
}

/// Errors that can occur while processing a ledger file.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to open a named file
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Line that could not be read (e.g. not UTF-8)
    #[error("Line {line} unreadable: {source}")]
    UnreadableLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// Invalid line in the ledger file
    #[error("Line {line} invalid: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Invalid record outside of any particular line (e.g. configuration)
    #[error("{0}")]
    Record(#[from] RecordError),
}
