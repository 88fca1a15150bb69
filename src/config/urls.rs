//! Package index URLs

/// Default package index, always loaded before configured extras
pub const DEFAULT_PACKAGE_INDEX: &str =
    "https://downloads.arduino.cc/packages/package_index.json";
