//! Error types for the goodreads CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so a
//! failed sync is visible to the calling script or CI job.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Mode token was not one of the known shelves.
    #[error("invalid mode '{0}': expected 'read' or 'want'")]
    InvalidMode(String),

    /// No usable configuration could be resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// A directory or file could not be accessed.
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed request itself failed.
    #[error("failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    /// The feed body could not be parsed.
    #[error("failed to parse feed: {0}")]
    Feed(String),

    /// Cache or note content could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::InvalidMode(_) => exit_codes::INVALID_MODE,
            SyncError::Config(_) => exit_codes::CONFIG_FAILURE,
            SyncError::Io { .. } => exit_codes::IO_FAILURE,
            SyncError::Fetch { .. } => exit_codes::FETCH_FAILURE,
            SyncError::Feed(_) => exit_codes::FETCH_FAILURE,
            SyncError::Serialization(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Wrap an I/O error with the path it happened on.
pub fn io_err(path: &Path, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
