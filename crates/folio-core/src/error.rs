//! Error types for folio.
//!
//! The front-matter parser has no error channel. These errors belong to the
//! collaborators around it: fetching content, reading config, watching files.

use thiserror::Error;

/// Top-level result type for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for folio.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("failed to fetch '{path}': {reason}")]
    Fetch { path: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("watch error: {0}")]
    Watch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
