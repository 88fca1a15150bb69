//! Default configuration values

/// Application name used in directory paths
pub const APP_NAME: &str = "corepm";

/// Name of the settings file in the config directory
pub const SETTINGS_FILE: &str = "config.toml";

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log filter directive used while debug output is enabled
pub const DEBUG_LOG_LEVEL: &str = "corepm=debug";
