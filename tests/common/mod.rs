//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

use corepm::core::board::Board;
use corepm::core::package::ToolDependency;
use corepm::infra::dirs::CoreDirs;
use corepm::Registry;

/// Test workspace context
///
/// Creates a temporary directory laid out like the corepm directories.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary root directory
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Directory provider rooted at the workspace
    pub fn dirs(&self) -> CoreDirs {
        CoreDirs::with_root(self.dir.path())
    }

    /// Write a cached package index for `url`
    pub fn cache_index(&self, url: &str, content: &str) -> PathBuf {
        let path = self
            .dirs()
            .index_path_from_url(url)
            .expect("Failed to map index url");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write index");
        path
    }

    /// Write the settings file
    pub fn write_settings(&self, content: &str) {
        let path = self.dirs().settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write settings");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with tools `a` and `b` in package `pkg`, and platform `pkg:arch`
/// installed with one board `boardX`
///
/// `a` has 1.0.0 and 2.0.0 installed, `b` has 1.0.0 installed. The platform
/// declares `dependencies`.
#[allow(dead_code)]
pub fn two_tool_registry(dependencies: Vec<ToolDependency>) -> Registry {
    let mut registry = Registry::new();
    let package = registry.packages_mut().get_or_create("pkg");

    let a = package.get_or_create_tool("a");
    a.get_or_create_release("1.0.0").mark_installed("/tools/a/1.0.0");
    a.get_or_create_release("2.0.0").mark_installed("/tools/a/2.0.0");
    a.get_or_create_release("3.0.0");

    package
        .get_or_create_tool("b")
        .get_or_create_release("1.0.0")
        .mark_installed("/tools/b/1.0.0");

    let release = package.get_or_create_platform("arch").install_release(
        "1.0.0",
        "/hardware/pkg/arch",
        vec![Board::new("boardX", "Board X").with_usb_id("0x1234", "0xABCD")],
    );
    release.dependencies = dependencies;

    registry
}

/// Sample package index JSON: one package, two platform releases, two tools
#[allow(dead_code)]
pub const SAMPLE_INDEX: &str = r#"{
  "packages": [
    {
      "name": "arduino",
      "maintainer": "Arduino",
      "websiteURL": "http://www.arduino.cc/",
      "email": "packages@arduino.cc",
      "platforms": [
        {
          "name": "Arduino AVR Boards",
          "architecture": "avr",
          "version": "1.6.20",
          "category": "Arduino",
          "url": "http://downloads.arduino.cc/cores/avr-1.6.20.tar.bz2",
          "archiveFileName": "avr-1.6.20.tar.bz2",
          "checksum": "SHA-256:aaaa",
          "size": "4897949",
          "boards": [{"name": "Arduino Uno"}],
          "toolsDependencies": [
            {"packager": "arduino", "name": "avr-gcc", "version": "4.9.2-atmel3.5.4-arduino2"},
            {"packager": "arduino", "name": "avrdude", "version": "6.3.0-arduino9"}
          ]
        },
        {
          "name": "Arduino AVR Boards",
          "architecture": "avr",
          "version": "1.6.21",
          "category": "Arduino",
          "url": "http://downloads.arduino.cc/cores/avr-1.6.21.tar.bz2",
          "archiveFileName": "avr-1.6.21.tar.bz2",
          "checksum": "SHA-256:bbbb",
          "size": "4897950",
          "boards": [{"name": "Arduino Uno"}],
          "toolsDependencies": []
        }
      ],
      "tools": [
        {
          "name": "avr-gcc",
          "version": "4.9.2-atmel3.5.4-arduino2",
          "systems": [
            {
              "host": "x86_64-linux-gnu",
              "url": "http://downloads.arduino.cc/tools/avr-gcc-x86_64.tar.bz2",
              "archiveFileName": "avr-gcc-x86_64.tar.bz2",
              "checksum": "SHA-256:cccc",
              "size": "27400001"
            }
          ]
        },
        {
          "name": "avrdude",
          "version": "6.3.0-arduino9",
          "systems": []
        }
      ]
    }
  ]
}"#;
