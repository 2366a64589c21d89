//! Error types for STL I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL operations.
pub type StlResult<T> = std::result::Result<T, StlError>;

/// Errors that can occur while reading or writing STL files.
#[derive(Debug, Error)]
pub enum StlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// File content is not valid STL.
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Binary STL body ends before the declared facet count.
    #[error("truncated binary STL: header declares {expected} facets, found {got}")]
    TruncatedFacets {
        /// Facet count from the header.
        expected: u32,
        /// Facets actually present.
        got: u32,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error in an ASCII facet.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl StlError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
