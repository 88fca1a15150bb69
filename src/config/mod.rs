//! Configuration constants
//!
//! - [`defaults`] - Default values and file names
//! - [`urls`] - Package index URLs

pub mod defaults;
pub mod urls;
