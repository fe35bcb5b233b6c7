//! Error types for texwatch
//!
//! Only startup can fail. Once the rebuild loop is running every error is
//! reported as an event and swallowed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for texwatch operations
pub type TexwatchResult<T> = Result<T, TexwatchError>;

/// Main error type for texwatch operations
#[derive(Error, Debug)]
pub enum TexwatchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Source argument is not a readable file
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source has no file stem to derive artifact names from
    #[error("cannot derive a base name from {path}")]
    InvalidSourceName { path: PathBuf },

    /// A configured command line is empty
    #[error("empty command configured for {what}")]
    EmptyCommand { what: &'static str },

    /// External program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
