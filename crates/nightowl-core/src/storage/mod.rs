pub mod prefs;
pub mod session;

pub use prefs::Preferences;
pub use session::SessionStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/nightowl[-dev]/` based on NIGHTOWL_ENV.
///
/// Set NIGHTOWL_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("NIGHTOWL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("nightowl-dev")
    } else {
        base_dir.join("nightowl")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
