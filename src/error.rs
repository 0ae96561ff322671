//! Error types for the curation library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by model construction and loading.
///
/// The engine itself (`matches`/`apply`/`apply_all`) is infallible on
/// well-formed inputs; malformed data is rejected here, at construction
/// or load time.
#[derive(Debug, Error)]
pub enum CurationError {
    /// A value violated a model invariant at construction time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a curations TOML file.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error parsing scanner output JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for curation operations.
pub type Result<T> = std::result::Result<T, CurationError>;
