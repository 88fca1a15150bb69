//! Fluent resolution chain
//!
//! ```text
//! registry.package("arduino").tool("avrdude").release("6.3.0").get()
//! ```
//!
//! Every stage returns a handle holding either the resolved entity or the
//! first lookup error. Later stages on an errored handle do nothing but pass
//! the error along, so the chain can be written without intermediate checks
//! and the caller still sees the original failure at `get()`.

use super::Registry;
use crate::core::package::{Package, Tool, ToolDependency, ToolRelease};
use crate::error::LookupError;

impl Registry {
    /// Start a resolution chain at the named package
    pub fn package(&self, name: &str) -> PackageHandle<'_> {
        let result = self
            .packages()
            .get(name)
            .ok_or_else(|| LookupError::PackageNotFound {
                name: name.to_string(),
            });
        PackageHandle { result }
    }

    /// Resolve a tool dependency to its exact release
    pub fn find_tool_dependency(&self, dep: &ToolDependency) -> Result<&ToolRelease, LookupError> {
        self.package(&dep.packager)
            .tool(&dep.name)
            .release(&dep.version)
            .get()
    }
}

/// Chain stage holding a package or a latched error
#[derive(Debug, Clone)]
pub struct PackageHandle<'a> {
    result: Result<&'a Package, LookupError>,
}

impl<'a> PackageHandle<'a> {
    /// Move to the named tool of this package
    pub fn tool(self, name: &str) -> ToolHandle<'a> {
        let result = self.result.and_then(|package| {
            package.tool(name).ok_or_else(|| LookupError::ToolNotFound {
                package: package.name.clone(),
                tool: name.to_string(),
            })
        });
        ToolHandle { result }
    }

    /// Finish the chain
    pub fn get(self) -> Result<&'a Package, LookupError> {
        self.result
    }
}

/// Chain stage holding a tool or a latched error
#[derive(Debug, Clone)]
pub struct ToolHandle<'a> {
    result: Result<&'a Tool, LookupError>,
}

impl<'a> ToolHandle<'a> {
    /// Move to the given release of this tool
    pub fn release(self, version: &str) -> ReleaseHandle<'a> {
        let result = self.result.and_then(|tool| {
            tool.release(version)
                .ok_or_else(|| LookupError::ReleaseNotFound {
                    packager: tool.packager.clone(),
                    tool: tool.name.clone(),
                    version: version.to_string(),
                })
        });
        ReleaseHandle { result }
    }

    /// Check whether any release of the tool is installed
    ///
    /// `Ok(false)` when the tool exists but nothing is installed; the latched
    /// error otherwise.
    pub fn is_installed(&self) -> Result<bool, LookupError> {
        let tool = self.result.as_ref().map_err(LookupError::clone)?;
        Ok(tool.releases().any(ToolRelease::is_installed))
    }

    /// Finish the chain
    pub fn get(self) -> Result<&'a Tool, LookupError> {
        self.result
    }
}

/// Chain stage holding a tool release or a latched error
#[derive(Debug, Clone)]
pub struct ReleaseHandle<'a> {
    result: Result<&'a ToolRelease, LookupError>,
}

impl<'a> ReleaseHandle<'a> {
    /// Finish the chain
    pub fn get(self) -> Result<&'a ToolRelease, LookupError> {
        self.result
    }
}
