//! Package index files
//!
//! Reads `package_index.json` manifests and merges the packages, platforms
//! and tools they describe into a [`Packages`] collection.
//!
//! Merging upserts by key (package name, architecture, platform version,
//! tool name, tool version). Index metadata is replaced in place while
//! install state and installed boards are left alone, so merging the same
//! index twice leaves the collection unchanged.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::package::{ArchiveInfo, HostSystem, Packages, ToolDependency};
use crate::error::IndexError;

/// Something that can merge entities into a package collection
pub trait IndexMerger {
    /// Merge into `packages`
    ///
    /// Implementations must be idempotent.
    fn merge_into(&self, packages: &mut Packages);
}

/// Parsed package index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageIndex {
    /// Packages listed by the index
    #[serde(default)]
    pub packages: Vec<IndexPackage>,
}

/// A package entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPackage {
    /// Package name
    pub name: String,
    /// Maintainer
    #[serde(default)]
    pub maintainer: Option<String>,
    /// Website URL
    #[serde(default, rename = "websiteURL")]
    pub website_url: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Platform releases
    #[serde(default)]
    pub platforms: Vec<IndexPlatformRelease>,
    /// Tool releases
    #[serde(default)]
    pub tools: Vec<IndexToolRelease>,
}

/// A platform release entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPlatformRelease {
    /// Display name
    pub name: String,
    /// Architecture
    pub architecture: String,
    /// Release version
    pub version: String,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Download archive
    #[serde(flatten)]
    pub archive: ArchiveInfo,
    /// Boards advertised by this release
    #[serde(default)]
    pub boards: Vec<IndexBoard>,
    /// Tool versions this release builds with
    #[serde(default, rename = "toolsDependencies")]
    pub tools_dependencies: Vec<ToolDependency>,
}

/// A board advertised by a platform release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexBoard {
    /// Board display name
    pub name: String,
}

/// A tool release entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexToolRelease {
    /// Tool name
    pub name: String,
    /// Release version
    pub version: String,
    /// Per-host archives
    #[serde(default)]
    pub systems: Vec<HostSystem>,
}

impl PackageIndex {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load an index file
    ///
    /// The whole file is parsed before anything is returned, so a broken
    /// index never reaches a registry.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = fs::read_to_string(path).map_err(|e| IndexError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| IndexError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}

impl IndexMerger for PackageIndex {
    fn merge_into(&self, packages: &mut Packages) {
        for entry in &self.packages {
            let package = packages.get_or_create(&entry.name);
            package.maintainer.clone_from(&entry.maintainer);
            package.website_url.clone_from(&entry.website_url);
            package.email.clone_from(&entry.email);

            for platform_entry in &entry.platforms {
                let platform = package.get_or_create_platform(&platform_entry.architecture);
                platform.name = Some(platform_entry.name.clone());
                platform.category.clone_from(&platform_entry.category);

                let release = platform.get_or_create_release(&platform_entry.version);
                release.archive = Some(platform_entry.archive.clone());
                release.dependencies.clone_from(&platform_entry.tools_dependencies);
                release.advertised_boards = platform_entry
                    .boards
                    .iter()
                    .map(|b| b.name.clone())
                    .collect();
            }

            for tool_entry in &entry.tools {
                let tool = package.get_or_create_tool(&tool_entry.name);
                let release = tool.get_or_create_release(&tool_entry.version);
                release.systems.clone_from(&tool_entry.systems);
            }

            tracing::debug!(
                "Merged package '{}' ({} platform releases, {} tool releases)",
                entry.name,
                entry.platforms.len(),
                entry.tools.len()
            );
        }
    }
}
