//! Truncation Error Types
//!
//! Truncating never fails; malformed markup is repaired by the parser. The
//! only fallible operation is building a [`Truncator`](crate::Truncator) from
//! caller-supplied options.

use derive_more::{Display, Error};

/// A truncation error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for truncation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The ellipsis marker is empty or contains markup-significant characters.
    #[display("invalid ellipsis marker: {_0:?}")]
    InvalidEllipsis(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Options are either valid or they're not.
        false
    }
}
