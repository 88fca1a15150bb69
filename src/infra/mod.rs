//! Infrastructure layer
//!
//! Directory layout and process-wide logging setup.

pub mod dirs;
pub mod logging;
