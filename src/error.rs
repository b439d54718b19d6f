//! Error types for ansible-preflight
//!
//! Library code returns `PreflightResult`; the binaries wrap these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for preflight operations
pub type PreflightResult<T> = Result<T, PreflightError>;

/// Main error type for preflight operations
#[derive(Error, Debug)]
pub enum PreflightError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid preflight configuration file
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// External tool could not be started at all
    #[error("failed to run '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be written
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}
