//! Error types for corepm
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Lookup errors raised by the resolution chain
///
/// Latched by the chain handles and forwarded unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Package not found in the registry
    #[error("package '{name}' not found")]
    PackageNotFound { name: String },

    /// Tool not found in a package
    #[error("tool '{tool}' not found in package '{package}'")]
    ToolNotFound { package: String, tool: String },

    /// Tool release not found
    #[error("release '{version}' not found for tool '{packager}:{tool}'")]
    ReleaseNotFound {
        packager: String,
        tool: String,
        version: String,
    },
}

/// Board lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// FQBN does not have the `packager:arch:board[:menu]` shape
    #[error("incorrect format for fqbn '{fqbn}'")]
    MalformedFqbn { fqbn: String },

    /// Packager named by the FQBN is not in the registry
    #[error("package '{packager}' not found")]
    PackageNotFound { packager: String },

    /// Platform exists but has no installed release
    #[error("platform '{packager}:{architecture}' not installed")]
    PlatformNotInstalled {
        packager: String,
        architecture: String,
    },

    /// No board matches the FQBN
    #[error("board not found: '{fqbn}'")]
    BoardNotFound { fqbn: String },
}

/// Tool dependency resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The board points at a platform release the registry doesn't know
    #[error("platform release '{packager}:{architecture}@{version}' not found")]
    PlatformReleaseNotFound {
        packager: String,
        architecture: String,
        version: String,
    },

    /// A declared tool dependency has no matching release
    #[error("tool release not found: {dependency}: {source}")]
    UnresolvedDependency {
        dependency: String,
        source: LookupError,
    },

    /// A declared tool dependency is known but not installed
    #[error("tool release not installed: {dependency}")]
    DependencyNotInstalled { dependency: String },
}

/// Event sink registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventSinkError {
    /// A sink has already been registered
    #[error("an event sink is already registered")]
    AlreadyRegistered,
}

/// Package index loading errors
#[derive(Error, Debug)]
pub enum IndexError {
    /// URL has no usable file name to map to the cache
    #[error("retrieving json index path for '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to read the index file
    #[error("loading json index file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse the index file
    #[error("parsing json index file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Top-level corepm error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Lookup error
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Board error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Resolver error
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Event sink error
    #[error("Configuration error: {0}")]
    EventSink(#[from] EventSinkError),

    /// Index error
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
