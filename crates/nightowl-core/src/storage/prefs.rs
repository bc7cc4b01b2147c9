//! Persisted user preferences.
//!
//! One JSON blob at `~/.config/nightowl/settings.json`, camelCase keys.
//! Every field is optional on load (missing means default) and the whole
//! blob is rewritten on save -- merging happens in memory, never at the
//! storage layer. Corrupt content falls back to defaults; out-of-range
//! numbers are clamped silently.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::clock::{TimeFormat, TimeOfDay};
use crate::error::{Result, StorageError};
use crate::plan::PlanSettings;

/// Application preferences.
///
/// Serialized to/from JSON at `~/.config/nightowl/settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_latency")]
    pub latency: u16,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u16,
    #[serde(default = "default_wake_window")]
    pub wake_window: u16,
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Presentation-only flag, persisted pass-through.
    #[serde(default)]
    pub meme_mode: bool,
    #[serde(default)]
    pub social_jet_lag_enabled: bool,
    /// Usual weekday wake time, minutes since midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_wake: Option<TimeOfDay>,
    /// Usual weekend wake time, minutes since midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_wake: Option<TimeOfDay>,
}

fn default_latency() -> u16 {
    15
}
fn default_cycle_length() -> u16 {
    90
}
fn default_wake_window() -> u16 {
    15
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            latency: default_latency(),
            cycle_length: default_cycle_length(),
            wake_window: default_wake_window(),
            time_format: TimeFormat::default(),
            meme_mode: false,
            social_jet_lag_enabled: false,
            weekday_wake: None,
            weekend_wake: None,
        }
    }
}

impl Preferences {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("settings.json"))
    }

    /// Load from the default location, falling back to defaults on any
    /// missing or corrupt content. Never fails.
    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit path. Parse failures are logged and swallowed.
    pub fn load_from(path: &Path) -> Self {
        let mut prefs = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Preferences>(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    eprintln!("warning: ignoring corrupt preferences at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };
        prefs.clamp();
        prefs
    }

    /// Persist to the default location, replacing the whole blob.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| StorageError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Clamp the numeric plan fields into their valid ranges.
    pub fn clamp(&mut self) {
        let clamped = PlanSettings::new(self.latency, self.cycle_length, self.wake_window);
        self.latency = clamped.latency_min;
        self.cycle_length = clamped.cycle_len_min;
        self.wake_window = clamped.wake_window_min;
    }

    /// The plan-relevant slice of the preferences.
    pub fn plan_settings(&self) -> PlanSettings {
        PlanSettings::new(self.latency, self.cycle_length, self.wake_window)
    }

    /// Get a preference value as string by its JSON key. Unset optional
    /// wake times read as `"null"`.
    pub fn get(&self, key: &str) -> Option<String> {
        // The optional wake-time keys are absent from the serialized map
        // while unset, so the untyped surface handles them by name.
        match key {
            "weekdayWake" => return Some(format_wake(self.weekday_wake)),
            "weekendWake" => return Some(format_wake(self.weekend_wake)),
            _ => {}
        }
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a preference by JSON key, coercing the string to the field's
    /// type. Numeric fields re-clamp afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the existing field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "weekdayWake" => {
                self.weekday_wake = parse_wake(key, value)?;
                return Ok(());
            }
            "weekendWake" => {
                self.weekend_wake = parse_wake(key, value)?;
                return Ok(());
            }
            _ => {}
        }
        let mut json = serde_json::to_value(&*self)?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| StorageError::UnknownKey(key.to_string()))?;
        let existing = obj
            .get(key)
            .ok_or_else(|| StorageError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>().map_err(
                |_| StorageError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as bool"),
                },
            )?),
            serde_json::Value::Number(_) => {
                let n: u64 = value.parse().map_err(|_| StorageError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as number"),
                })?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.to_string()),
        };

        obj.insert(key.to_string(), new_value);
        *self = serde_json::from_value(json).map_err(|e| StorageError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.clamp();
        Ok(())
    }
}

fn format_wake(value: Option<TimeOfDay>) -> String {
    match value {
        Some(t) => t.minutes().to_string(),
        None => "null".to_string(),
    }
}

fn parse_wake(key: &str, value: &str) -> Result<Option<TimeOfDay>> {
    if value == "null" {
        return Ok(None);
    }
    let minutes: i32 = value.parse().map_err(|_| StorageError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as minutes since midnight"),
    })?;
    Ok(Some(TimeOfDay::from_minutes(minutes)))
}
