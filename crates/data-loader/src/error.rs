//! Error types for the data-loader crate.
//!
//! Loading a snapshot can fail at three layers: the file system, the JSON
//! decoding, and the store invariants (unique ids). Each layer gets its own
//! variant so callers can tell a missing file from a corrupt one.

use thiserror::Error;

use crate::types::RestaurantId;

/// Errors that can occur while loading restaurant and prediction snapshots
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot contents are not valid JSON for the expected shape
    ///
    /// `line` and `column` come straight from serde_json and point at the
    /// offending token.
    #[error("Parse error in {file} at line {line}, column {column}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two restaurants in one snapshot share an id
    #[error("Duplicate restaurant id {id}")]
    DuplicateId { id: RestaurantId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
