//! Error types for the Xyston library.
//!
//! All errors are represented by the [`XystonError`] enum. Two conditions
//! are deliberately *not* errors: a malformed location token is silently
//! skipped wherever it is decoded, and a query term absent from the index
//! yields [`SearchResult::Unsatisfiable`] rather than an error.
//!
//! [`SearchResult::Unsatisfiable`]: crate::query::SearchResult::Unsatisfiable

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Xyston operations.
#[derive(Error, Debug)]
pub enum XystonError {
    /// I/O errors (partition files, input documents).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors (malformed partition records, bad frequency files).
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        XystonError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        XystonError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XystonError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XystonError::index("duplicate term");
        assert_eq!(error.to_string(), "Index error: duplicate term");

        let error = XystonError::query("empty expression");
        assert_eq!(error.to_string(), "Query error: empty expression");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = XystonError::from(io_error);

        match error {
            XystonError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
