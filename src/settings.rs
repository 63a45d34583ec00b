//! Persistent user settings.
//!
//! A small JSON file holding the one free-form setting. Missing files and
//! missing fields fall back to defaults; every change is written straight
//! back to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::settings::{APP_DIR, DEFAULT_MY_SETTING, FILE_NAME};
use crate::error::{Error, Result};

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Free-form string setting.
    pub my_setting: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: DEFAULT_MY_SETTING.to_string(),
        }
    }
}

/// Settings bound to the file they are persisted in.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Default settings path under the platform config dir.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or_else(|| {
                Error::config(
                    "Cannot find a config directory",
                    "Set KORBIBLE_SETTINGS_PATH to choose a settings file",
                )
            })
    }

    /// Open the store named by `config`, or the default location.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = match &config.settings_path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };
        Self::load(path)
    }

    /// Load settings from `path`, using defaults when the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self { path, settings: Settings::default() });
        }

        let content = fs_err::read_to_string(&path).map_err(|e| Error::io(e, path.clone()))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| Error::settings(format!("Invalid JSON: {e}"), path.clone()))?;
        Ok(Self { path, settings })
    }

    /// Write the current settings to disk, creating parent directories.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| Error::settings(format!("Failed to serialize: {e}"), self.path.clone()))?;
        fs_err::write(&self.path, json).map_err(|e| Error::io(e, self.path.clone()))
    }

    /// Current settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// File the settings are persisted in.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Update the free-form setting, persisting only when it changed.
    pub fn set_my_setting(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if self.settings.my_setting == value {
            return Ok(());
        }
        self.settings.my_setting = value;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.settings().my_setting, "default");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_change_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::load(&path).unwrap();
        store.set_my_setting("개역한글").unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.settings().my_setting, "개역한글");
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"mySetting\""));
    }

    #[test]
    fn test_unchanged_value_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = SettingsStore::load(&path).unwrap();
        store.set_my_setting("default").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_fields_merge_onto_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(SettingsStore::load(&path).unwrap().settings(), &Settings::default());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(SettingsStore::load(&path), Err(Error::Settings { .. })));
    }
}
