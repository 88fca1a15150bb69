//! Core data model
//!
//! Entities, value types and file formats. No registry logic lives here;
//! that belongs in [`crate::registry`].
//!
//! # Submodules
//!
//! - [`package`] - Packages, platforms, tools and their releases
//! - [`board`] - Board definitions and USB ids
//! - [`fqbn`] - Fully-qualified board name parsing
//! - [`version`] - Total order over release version strings
//! - [`index`] - Package index parsing and merging
//! - [`settings`] - Settings file handling

pub mod board;
pub mod fqbn;
pub mod index;
pub mod package;
pub mod settings;
pub mod version;
