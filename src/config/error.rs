//! Storage error types for the configuration document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the configuration document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the document file
    #[error("Failed to read configuration document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the document file
    #[error("Failed to write configuration document '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("Failed to parse configuration document '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the document
    #[error("Failed to serialize configuration document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Valid JSON, but not the shape the resolver expects
    #[error("Invalid configuration document '{path}': {message}")]
    InvalidDocument { path: PathBuf, message: String },
}

impl StoreError {
    /// Create an invalid document error
    pub fn invalid<P: Into<PathBuf>, M: Into<String>>(path: P, message: M) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for document storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
