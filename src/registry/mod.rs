//! Package registry
//!
//! The [`Registry`] owns every known package, platform and tool. It is
//! mutated only by index merges and installation events (through
//! [`Registry::packages_mut`]); everything else borrows it.
//!
//! - [`actions`] - Fluent Package → Tool → Release resolution chain
//! - [`boards`] - Board lookup by USB id, id and FQBN
//! - [`tools`] - Tool dependency resolution for a board
//! - [`events`] - Event sink contract for progress reporting
//! - [`progress`] - Terminal progress bar event sink

pub mod actions;
pub mod boards;
pub mod events;
pub mod progress;
pub mod tools;

pub use actions::{PackageHandle, ReleaseHandle, ToolHandle};
pub use events::{DownloadProgress, EventSink};
pub use progress::ProgressBarSink;

use std::fmt;

use crate::core::index::{IndexMerger, PackageIndex};
use crate::core::package::{Packages, ToolRelease};
use crate::core::settings::Settings;
use crate::error::{EventSinkError, IndexError};
use crate::infra::dirs::CoreDirs;

/// In-memory registry of packages
///
/// Registries are plain values: create as many as needed, pass them by
/// reference. Readers borrow `&Registry`; merges and installation events
/// need `&mut Registry`, so no lookup can observe a half-merged index.
#[derive(Default)]
pub struct Registry {
    packages: Packages,
    event_sink: Option<Box<dyn EventSink>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all package state
    ///
    /// A registered event sink stays registered.
    pub fn clear(&mut self) {
        self.packages = Packages::new();
    }

    /// The package collection
    pub fn packages(&self) -> &Packages {
        &self.packages
    }

    /// The package collection, for installation events
    pub fn packages_mut(&mut self) -> &mut Packages {
        &mut self.packages
    }

    /// Register the event sink
    ///
    /// Only one sink can be registered; a second registration is rejected
    /// and the first sink stays in place.
    pub fn register_event_sink(&mut self, sink: Box<dyn EventSink>) -> Result<(), EventSinkError> {
        if self.event_sink.is_some() {
            tracing::warn!("Rejected a second event sink registration");
            return Err(EventSinkError::AlreadyRegistered);
        }
        self.event_sink = Some(sink);
        Ok(())
    }

    /// Registered event sinks (zero or one)
    pub fn event_sinks(&self) -> Vec<&dyn EventSink> {
        match &self.event_sink {
            Some(sink) => vec![sink.as_ref()],
            None => Vec::new(),
        }
    }

    /// Get a download progress handle from the registered sink, if any
    pub fn download_progress(&self) -> Option<Box<dyn DownloadProgress>> {
        self.event_sink
            .as_ref()
            .map(|sink| sink.on_downloading_something())
    }

    /// Merge an index into the registry
    pub fn merge_index(&mut self, index: &impl IndexMerger) {
        index.merge_into(&mut self.packages);
    }

    /// Load the cached copy of the index published at `url` and merge it
    ///
    /// The index must already be downloaded to the path
    /// [`CoreDirs::index_path_from_url`] maps the URL to. Nothing is merged
    /// unless the whole file parses.
    pub fn load_package_index(&mut self, url: &str, dirs: &CoreDirs) -> Result<(), IndexError> {
        let path = dirs.index_path_from_url(url)?;
        tracing::info!("Loading package index {} from {}", url, path.display());

        let index = PackageIndex::load(&path)?;
        self.merge_index(&index);
        Ok(())
    }

    /// Load every index URL listed by `settings`
    ///
    /// A failing index doesn't stop the others from loading; failures are
    /// returned in URL order.
    pub fn load_configured_indexes(&mut self, settings: &Settings, dirs: &CoreDirs) -> Vec<IndexError> {
        let mut failures = Vec::new();
        for url in settings.index_urls() {
            if let Err(e) = self.load_package_index(&url, dirs) {
                tracing::warn!("Skipping package index {url}: {e}");
                failures.push(e);
            }
        }
        failures
    }

    /// Every installed tool release, sorted by identity then version
    pub fn installed_tool_releases(&self) -> Vec<&ToolRelease> {
        let mut releases: Vec<&ToolRelease> = self
            .packages
            .iter()
            .flat_map(|package| package.tools())
            .flat_map(|tool| tool.releases())
            .filter(|release| release.is_installed())
            .collect();
        releases.sort_by(|a, b| {
            a.identity().cmp(&b.identity()).then_with(|| {
                crate::core::version::compare_release_versions(a.version(), b.version())
            })
        });
        releases
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("packages", &self.packages.len())
            .field("event_sink", &self.event_sink.is_some())
            .finish()
    }
}
