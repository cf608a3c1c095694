//! Settings storage
//!
//! Persists the theme preference under the `theme` key of `settings.json`.
//! It is read once at startup and written on every toggle.

use crate::storage::{get_data_dir, StorageError};
use crate::types::session::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI theme: "light" or "dark"
    #[serde(default)]
    pub theme: Theme,
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let settings: AppSettings = serde_json::from_str(&json)?;

    tracing::debug!(theme = %settings.theme, "Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to a specific file
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
