//! Where corepm keeps its files
//!
//! Settings live in the config directory and cached package indexes in the
//! data directory. Each location comes from `dirs` unless overridden:
//! - `COREPM_CACHE_DIR`
//! - `COREPM_CONFIG_DIR`
//! - `COREPM_DATA_DIR`

use std::env;
use std::path::{Path, PathBuf};

use crate::config::defaults::{APP_NAME, SETTINGS_FILE};
use crate::error::IndexError;

/// Overrides the cache directory
pub const ENV_CACHE_DIR: &str = "COREPM_CACHE_DIR";
/// Overrides the config directory
pub const ENV_CONFIG_DIR: &str = "COREPM_CONFIG_DIR";
/// Overrides the data directory
pub const ENV_DATA_DIR: &str = "COREPM_DATA_DIR";

/// Resolved corepm directories
///
/// Downloaded package indexes live directly in the data directory, named
/// after the last path segment of their URL.
#[derive(Debug, Clone)]
pub struct CoreDirs {
    cache_dir: PathBuf,
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl CoreDirs {
    /// Resolve directories from the environment, falling back to `dirs`
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: resolve(ENV_CACHE_DIR, dirs::cache_dir, &[".cache"]),
            config_dir: resolve(ENV_CONFIG_DIR, dirs::config_dir, &[".config"]),
            data_dir: resolve(ENV_DATA_DIR, dirs::data_dir, &[".local", "share"]),
        }
    }

    /// Create a `CoreDirs` rooted at a single directory
    ///
    /// Used by tests and by callers that keep everything in one place.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            cache_dir: root.join("cache"),
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    /// Scratch space for downloads
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Directory holding `config.toml`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Directory holding cached package indexes
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Get the settings file path
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Map a package index URL to its cached file
    ///
    /// `https://host/path/package_foo_index.json?x=1` maps to
    /// `<data dir>/package_foo_index.json`.
    pub fn index_path_from_url(&self, url: &str) -> Result<PathBuf, IndexError> {
        let invalid = |reason: &str| IndexError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let (_, rest) = url
            .split_once("://")
            .ok_or_else(|| invalid("missing scheme"))?;
        let path = rest
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let (_, path) = path.split_once('/').ok_or_else(|| invalid("missing path"))?;
        let file_name = path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .ok_or_else(|| invalid("no file name in path"))?;

        Ok(self.data_dir.join(file_name))
    }
}

impl Default for CoreDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a directory from an env override, the platform default, or a
/// home-relative fallback
fn resolve(env_var: &str, platform: fn() -> Option<PathBuf>, home_fallback: &[&str]) -> PathBuf {
    if let Ok(path) = env::var(env_var) {
        return PathBuf::from(path);
    }

    platform().map(|p| p.join(APP_NAME)).unwrap_or_else(|| {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home_fallback
            .iter()
            .fold(base, |acc, part| acc.join(part))
            .join(APP_NAME)
    })
}
