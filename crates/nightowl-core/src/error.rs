//! Core error types for nightowl-core.
//!
//! Normal operation has no fatal paths: corrupt preferences fall back to
//! defaults and share-link decoding clamps instead of failing. These types
//! cover the remaining genuinely reportable failures (I/O, serialization,
//! unusable URLs, unknown config keys).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nightowl-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Share-link errors
    #[error("Share link error: {0}")]
    Share(#[from] ShareError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be created or resolved
    #[error("Failed to prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Failed to persist a document
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown preferences key in get/set
    #[error("Unknown preferences key: {0}")]
    UnknownKey(String),

    /// Value could not be coerced into the key's type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Share-link specific errors.
#[derive(Error, Debug)]
pub enum ShareError {
    /// The string is not a URL at all
    #[error("Not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
