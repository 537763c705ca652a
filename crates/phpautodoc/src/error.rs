//! Error types for documentation extraction.
//!
//! All fallible operations return [`Result<T>`]. A failed extraction produces
//! no output at all; there is no partial-result mode.

use phpautodoc_api::ParserError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for phpautodoc operations.
pub type Result<T> = std::result::Result<T, AutodocError>;

/// Error type for extraction and caching.
#[derive(Error, Debug)]
pub enum AutodocError {
    /// Source file could not be read or inspected
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser rejected the source file
    #[error(transparent)]
    Parse(#[from] ParserError),

    /// Cache entry could not be written
    #[error("Cache error for {path}: {message}")]
    Cache { path: PathBuf, message: String },
}

impl AutodocError {
    /// Create an Io error from a path and io::Error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AutodocError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a Cache error
    pub fn cache(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AutodocError::Cache {
            path: path.into(),
            message: message.into(),
        }
    }
}
