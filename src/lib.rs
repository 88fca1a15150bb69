//! Corepm - package manager core for hardware toolchains
//!
//! Resolves package, board and tool identifiers against an in-memory
//! registry of installed packages, and computes the toolchain needed to
//! build for a board.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`] - Data model and file formats (no registry logic)
//! - [`registry`] - The registry, resolution chain, board lookup and tool
//!   dependency resolution
//! - [`infra`] - Infrastructure layer (directories, logging)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```
//! use corepm::core::board::Board;
//! use corepm::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry
//!     .packages_mut()
//!     .get_or_create("arduino")
//!     .get_or_create_platform("avr")
//!     .install_release("1.6.20", "/opt/arduino/avr", vec![Board::new("uno", "Arduino Uno")]);
//!
//! let board = registry.find_board_by_fqbn("arduino:avr:uno").unwrap();
//! assert_eq!(board.name, "Arduino Uno");
//! assert!(registry.find_tools_required_for_board(board).unwrap().is_empty());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod registry;

pub use registry::Registry;

#[cfg(test)]
pub mod test_utils;
