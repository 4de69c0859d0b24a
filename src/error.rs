//! Error types for event-log operations.
//!
//! # Error Categories
//!
//! - [`Validation`](Error::Validation): the caller supplied structurally
//!   invalid input, such as a missing required field, a negative pagination
//!   parameter, or an unparsable timestamp. Always recoverable locally.
//! - [`Storage`](Error::Storage): the underlying log file could not be read
//!   or written. Fatal to the single operation and never retried
//!   internally, since a blind retry of a write can duplicate data if the
//!   prior attempt partially succeeded.
//! - [`Encoding`](Error::Encoding): a row could not be rendered for
//!   storage.
//!
//! A persisted row that fails to decode is not an `Error`: it is excluded
//! from the working set and reported in the warning list of the load (see
//! [`DecodeFailure`](crate::DecodeFailure)).

use thiserror::Error;

/// Error type for event-log operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller provided invalid input.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The log file could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A row could not be encoded for storage.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

/// Result type alias for event-log operations.
pub type Result<T> = std::result::Result<T, Error>;
