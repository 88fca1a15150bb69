//! Package, platform and tool entities
//!
//! The registry's data model. Entities are created and updated only by index
//! merges and installation events; lookups borrow them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::board::Board;
use super::version;

/// The full package collection, keyed by package name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packages {
    packages: HashMap<String, Package>,
}

impl Packages {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a package by name
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Look up a package by name for mutation
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Package> {
        self.packages.get_mut(name)
    }

    /// Get the named package, creating an empty one if absent
    pub fn get_or_create(&mut self, name: &str) -> &mut Package {
        self.packages
            .entry(name.to_string())
            .or_insert_with(|| Package::new(name))
    }

    /// Iterate over all packages (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Number of packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check if there are no packages
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// A vendor's collection of platforms and tools
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Package (packager) name
    pub name: String,
    /// Maintainer, as advertised by the index
    pub maintainer: Option<String>,
    /// Website URL
    pub website_url: Option<String>,
    /// Contact email
    pub email: Option<String>,
    platforms: HashMap<String, Platform>,
    tools: HashMap<String, Tool>,
}

impl Package {
    /// Create an empty package
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            maintainer: None,
            website_url: None,
            email: None,
            platforms: HashMap::new(),
            tools: HashMap::new(),
        }
    }

    /// Look up a platform by architecture
    pub fn platform(&self, architecture: &str) -> Option<&Platform> {
        self.platforms.get(architecture)
    }

    /// Look up a platform by architecture for mutation
    pub fn platform_mut(&mut self, architecture: &str) -> Option<&mut Platform> {
        self.platforms.get_mut(architecture)
    }

    /// Get the platform for an architecture, creating it if absent
    pub fn get_or_create_platform(&mut self, architecture: &str) -> &mut Platform {
        let packager = self.name.clone();
        self.platforms
            .entry(architecture.to_string())
            .or_insert_with(|| Platform::new(&packager, architecture))
    }

    /// Iterate over platforms (unordered)
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// Look up a tool by name
    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Look up a tool by name for mutation
    pub fn tool_mut(&mut self, name: &str) -> Option<&mut Tool> {
        self.tools.get_mut(name)
    }

    /// Get the named tool, creating it if absent
    pub fn get_or_create_tool(&mut self, name: &str) -> &mut Tool {
        let packager = self.name.clone();
        self.tools
            .entry(name.to_string())
            .or_insert_with(|| Tool::new(&packager, name))
    }

    /// Iterate over tools (unordered)
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }
}

/// An architecture-specific board family within a package
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    /// Owning package name
    pub packager: String,
    /// Architecture identifier (e.g. "avr")
    pub architecture: String,
    /// Display name
    pub name: Option<String>,
    /// Category from the index
    pub category: Option<String>,
    releases: HashMap<String, PlatformRelease>,
}

impl Platform {
    fn new(packager: &str, architecture: &str) -> Self {
        Self {
            packager: packager.to_string(),
            architecture: architecture.to_string(),
            name: None,
            category: None,
            releases: HashMap::new(),
        }
    }

    /// Look up a release by version
    pub fn release(&self, version: &str) -> Option<&PlatformRelease> {
        self.releases.get(version)
    }

    /// Look up a release by version for mutation
    pub fn release_mut(&mut self, version: &str) -> Option<&mut PlatformRelease> {
        self.releases.get_mut(version)
    }

    /// Get the release for a version, creating it if absent
    pub fn get_or_create_release(&mut self, version: &str) -> &mut PlatformRelease {
        let reference = PlatformRef {
            packager: self.packager.clone(),
            architecture: self.architecture.clone(),
            version: version.to_string(),
        };
        self.releases
            .entry(version.to_string())
            .or_insert_with(|| PlatformRelease::new(reference))
    }

    /// Iterate over releases (unordered)
    pub fn releases(&self) -> impl Iterator<Item = &PlatformRelease> {
        self.releases.values()
    }

    /// Get the installed release, if any
    pub fn installed(&self) -> Option<&PlatformRelease> {
        self.releases.values().find(|r| r.is_installed())
    }

    /// Get the latest available release, installed or not
    pub fn latest_release(&self) -> Option<&PlatformRelease> {
        let latest = version::latest(self.releases.keys().map(String::as_str))?;
        self.releases.get(latest)
    }

    /// Mark a release as installed with the given boards
    ///
    /// Any other installed release of this platform is uninstalled, so at
    /// most one release is installed at a time. The release is created if
    /// the index didn't list it (e.g. a manually added platform).
    pub fn install_release(
        &mut self,
        version: &str,
        install_dir: impl Into<PathBuf>,
        boards: Vec<Board>,
    ) -> &mut PlatformRelease {
        for release in self.releases.values_mut() {
            if release.reference.version != version {
                release.uninstall();
            }
        }

        let release = self.get_or_create_release(version);
        release.install_dir = Some(install_dir.into());
        let reference = release.reference.clone();
        release.boards = boards
            .into_iter()
            .map(|board| board.with_platform(reference.clone()))
            .collect();
        release
    }
}

/// Value reference from a board to its platform release
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PlatformRef {
    /// Package name
    pub packager: String,
    /// Platform architecture
    pub architecture: String,
    /// Release version
    pub version: String,
}

impl fmt::Display for PlatformRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.packager, self.architecture, self.version)
    }
}

/// Archive metadata for a downloadable release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveInfo {
    /// Download URL
    pub url: String,
    /// Archive file name
    #[serde(rename = "archiveFileName")]
    pub archive_file_name: String,
    /// Checksum in `ALGO:hex` form
    pub checksum: String,
    /// Size in bytes, as a string (index format)
    pub size: String,
}

/// One versioned release of a platform
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRelease {
    reference: PlatformRef,
    install_dir: Option<PathBuf>,
    boards: Vec<Board>,
    /// Tool versions required to build with this release
    pub dependencies: Vec<ToolDependency>,
    /// Archive metadata from the index
    pub archive: Option<ArchiveInfo>,
    /// Board names advertised by the index
    pub advertised_boards: Vec<String>,
}

impl PlatformRelease {
    fn new(reference: PlatformRef) -> Self {
        Self {
            reference,
            install_dir: None,
            boards: Vec::new(),
            dependencies: Vec::new(),
            archive: None,
            advertised_boards: Vec::new(),
        }
    }

    /// Reference identifying this release
    pub fn reference(&self) -> &PlatformRef {
        &self.reference
    }

    /// Release version
    pub fn version(&self) -> &str {
        &self.reference.version
    }

    /// Check whether the release is installed
    pub fn is_installed(&self) -> bool {
        self.install_dir.is_some()
    }

    /// Install location, when installed
    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Boards defined by the installed release
    ///
    /// Only [`Platform::install_release`] fills this, so every board points
    /// back at this release.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Uninstall the release, dropping its boards
    pub fn uninstall(&mut self) {
        self.install_dir = None;
        self.boards.clear();
    }
}

/// A named toolchain component with versioned releases
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    /// Owning package name
    pub packager: String,
    /// Tool name
    pub name: String,
    releases: HashMap<String, ToolRelease>,
}

impl Tool {
    fn new(packager: &str, name: &str) -> Self {
        Self {
            packager: packager.to_string(),
            name: name.to_string(),
            releases: HashMap::new(),
        }
    }

    /// Identity string `packager:tool`
    pub fn identity(&self) -> String {
        format!("{}:{}", self.packager, self.name)
    }

    /// Look up a release by exact version
    pub fn release(&self, version: &str) -> Option<&ToolRelease> {
        self.releases.get(version)
    }

    /// Look up a release by exact version for mutation
    pub fn release_mut(&mut self, version: &str) -> Option<&mut ToolRelease> {
        self.releases.get_mut(version)
    }

    /// Get the release for a version, creating it if absent
    pub fn get_or_create_release(&mut self, version: &str) -> &mut ToolRelease {
        let (packager, name) = (self.packager.clone(), self.name.clone());
        self.releases
            .entry(version.to_string())
            .or_insert_with(|| ToolRelease::new(&packager, &name, version))
    }

    /// Iterate over releases (unordered)
    pub fn releases(&self) -> impl Iterator<Item = &ToolRelease> {
        self.releases.values()
    }

    /// Get the latest installed release
    pub fn latest_installed(&self) -> Option<&ToolRelease> {
        let latest = version::latest(
            self.releases
                .values()
                .filter(|r| r.is_installed())
                .map(ToolRelease::version),
        )?;
        self.releases.get(latest)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.packager, self.name)
    }
}

/// Per-host download entry of a tool release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSystem {
    /// Host triple pattern (e.g. "x86_64-linux-gnu")
    pub host: String,
    /// Archive for this host
    #[serde(flatten)]
    pub archive: ArchiveInfo,
}

/// One installable version of a tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRelease {
    packager: String,
    tool: String,
    version: String,
    install_dir: Option<PathBuf>,
    /// Per-host archives from the index
    pub systems: Vec<HostSystem>,
}

impl ToolRelease {
    fn new(packager: &str, tool: &str, version: &str) -> Self {
        Self {
            packager: packager.to_string(),
            tool: tool.to_string(),
            version: version.to_string(),
            install_dir: None,
            systems: Vec::new(),
        }
    }

    /// Owning package name
    pub fn packager(&self) -> &str {
        &self.packager
    }

    /// Tool name
    pub fn tool_name(&self) -> &str {
        &self.tool
    }

    /// Release version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Deduplication identity `packager:tool`
    pub fn identity(&self) -> String {
        format!("{}:{}", self.packager, self.tool)
    }

    /// Check whether the release is installed
    pub fn is_installed(&self) -> bool {
        self.install_dir.is_some()
    }

    /// Install location, when installed
    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Record the release as installed at `dir`
    pub fn mark_installed(&mut self, dir: impl Into<PathBuf>) {
        self.install_dir = Some(dir.into());
    }
}

impl fmt::Display for ToolRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.packager, self.tool, self.version)
    }
}

/// A platform's requirement on an exact tool version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolDependency {
    /// Package providing the tool
    pub packager: String,
    /// Tool name
    pub name: String,
    /// Exact version required
    pub version: String,
}

impl ToolDependency {
    /// Create a dependency
    pub fn new(packager: &str, name: &str, version: &str) -> Self {
        Self {
            packager: packager.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

impl fmt::Display for ToolDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.packager, self.name, self.version)
    }
}
