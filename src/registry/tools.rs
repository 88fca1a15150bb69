//! Tool dependency resolution
//!
//! Picks the tool releases needed to build for a board. Every tool starts at
//! its latest installed release; the board's platform then pins the tools it
//! declares to exact versions. Pins always win over defaults, and a pin that
//! can't be satisfied fails the whole resolution.

use std::collections::HashMap;

use super::Registry;
use crate::core::board::Board;
use crate::core::package::{PlatformRelease, ToolRelease};
use crate::error::ResolverError;

impl Registry {
    /// Compute the tool releases required to build for `board`
    ///
    /// The result holds one release per `packager:tool` identity, sorted by
    /// identity.
    pub fn find_tools_required_for_board(
        &self,
        board: &Board,
    ) -> Result<Vec<&ToolRelease>, ResolverError> {
        let platform = self.platform_release_of(board)?;

        // A platform without declared dependencies (e.g. added by hand,
        // without an index) still gets every installed tool
        let mut found: HashMap<String, &ToolRelease> = self
            .packages()
            .iter()
            .flat_map(|package| package.tools())
            .filter_map(|tool| tool.latest_installed())
            .map(|release| (release.identity(), release))
            .collect();

        for dep in &platform.dependencies {
            let release =
                self.find_tool_dependency(dep)
                    .map_err(|source| ResolverError::UnresolvedDependency {
                        dependency: dep.to_string(),
                        source,
                    })?;
            if !release.is_installed() {
                return Err(ResolverError::DependencyNotInstalled {
                    dependency: dep.to_string(),
                });
            }

            if let Some(previous) = found.insert(release.identity(), release) {
                if previous.version() != release.version() {
                    tracing::debug!(
                        "Platform {} pins {} over default {}",
                        platform.reference(),
                        release,
                        previous.version()
                    );
                }
            }
        }

        let mut required: Vec<&ToolRelease> = found.into_values().collect();
        required.sort_by_cached_key(|release| release.identity());
        Ok(required)
    }

    /// Follow a board's back-reference to its platform release
    fn platform_release_of(&self, board: &Board) -> Result<&PlatformRelease, ResolverError> {
        let reference = board.platform();
        self.packages()
            .get(&reference.packager)
            .and_then(|package| package.platform(&reference.architecture))
            .and_then(|platform| platform.release(&reference.version))
            .ok_or_else(|| ResolverError::PlatformReleaseNotFound {
                packager: reference.packager.clone(),
                architecture: reference.architecture.clone(),
                version: reference.version.clone(),
            })
    }
}
