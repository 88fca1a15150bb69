//! Settings management
//!
//! Reads settings from `config.toml` in the config directory. Settings list
//! the extra package index URLs to load on top of the default index.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::urls;
use crate::error::SettingsError;
use crate::infra::dirs::CoreDirs;

/// Settings for corepm
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Package index settings
    #[serde(default)]
    pub index: IndexSettings,
}

/// Package index settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexSettings {
    /// Additional package index URLs (third-party boards)
    #[serde(default)]
    pub additional_urls: Vec<String>,

    /// Skip the default package index
    #[serde(default)]
    pub skip_default: bool,
}

impl Settings {
    /// Load settings from the config directory
    ///
    /// If the config file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &CoreDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// All package index URLs to load, default first
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn index_urls(&self) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        let default = (!self.index.skip_default).then(|| urls::DEFAULT_PACKAGE_INDEX.to_string());
        for url in default.into_iter().chain(self.index.additional_urls.iter().cloned()) {
            if !result.contains(&url) {
                result.push(url);
            }
        }
        result
    }
}
