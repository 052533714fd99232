//! Error types for the taglens tagging pipeline.
//!
//! Errors are organized by concern: construction-time configuration,
//! tag-store I/O (recoverable by caller fallback), and per-call tagging
//! failures. Upstream API failures of any kind collapse into a single
//! `Generation` variant and are never retried.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for taglens operations.
#[derive(Error, Debug)]
pub enum TaglensError {
    /// Construction-time configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tag store I/O errors
    #[error("Tag store error: {0}")]
    Store(#[from] StoreError),

    /// Per-call tagging errors
    #[error("Tagging error: {0}")]
    Tagger(#[from] TaggerError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that make a tagger unusable. Construction either fully succeeds
/// or fails with one of these; there is no partially-initialized state.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required environment variables are unset.
    ///
    /// Every missing name is collected before failing so the operator can
    /// fix them in one pass.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    /// The tag vocabulary could not be read at construction time.
    #[error("Error loading tags configuration: {0}")]
    TagConfig(#[from] StoreError),
}

/// Tag store I/O errors. Recoverable: callers may fall back to an empty
/// tag set instead of surfacing these.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing file, malformed JSON, or missing expected keys
    #[error("Failed to load tag config from {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Write or serialization failure
    #[error("Failed to save tag config to {path}: {message}")]
    Save { path: PathBuf, message: String },
}

/// Per-call tag generation errors. Each aborts only its own call.
#[derive(Error, Debug)]
pub enum TaggerError {
    /// The image path does not exist
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    /// Reading or encoding the image file failed
    #[error("Error encoding image {path}: {message}")]
    ImageEncoding { path: PathBuf, message: String },

    /// Upstream completion failure of any kind: network, auth, rate limit,
    /// or a malformed response
    #[error("Tag generation failed: {message}")]
    Generation {
        message: String,
        status_code: Option<u16>,
    },
}

/// Convenience type alias for taglens results.
pub type Result<T> = std::result::Result<T, TaglensError>;
