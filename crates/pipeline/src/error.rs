//! Errors raised when turning user input into a filter selection.
//!
//! The pipeline itself never fails; only parsing of labels coming from the
//! outside (CLI flags, decoded events) can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Rating band label is not of the form `min-max` with `min < max`
    #[error("Invalid rating range '{0}', expected 'min-max' such as '3-4'")]
    InvalidRatingRange(String),

    #[error("Unknown sort key '{0}', expected one of: alphabetical, rating, cuisine, zone, price")]
    UnknownSortKey(String),
}
