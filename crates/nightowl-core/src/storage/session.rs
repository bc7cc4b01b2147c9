//! Planner session persistence.
//!
//! The CLI is stateless between invocations, so the planner session lives
//! as a JSON document in the data directory and is reloaded on every
//! command, the same way the desktop shell would hold it in memory.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::planner::Planner;

const SESSION_FILE: &str = "session.json";

/// Loads and saves the planner session document.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(SESSION_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session, falling back to a fresh planner on missing or
    /// unreadable content. Never fails.
    pub fn load_or_default(&self) -> Planner {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                eprintln!(
                    "warning: ignoring corrupt session at {}: {e}",
                    self.path.display()
                );
                Planner::default()
            }),
            Err(_) => Planner::default(),
        }
    }

    pub fn save(&self, planner: &Planner) -> Result<()> {
        let json = serde_json::to_string_pretty(planner)?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
