//! Logging setup
//!
//! Installs a `tracing` subscriber whose filter can be switched to debug
//! output and back at runtime.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::defaults::{DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL};

/// Handle for changing the log filter after initialization
#[derive(Clone)]
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    base: String,
}

impl LogControl {
    /// Switch corepm's own logs to debug level
    pub fn enable_debug_output(&self) {
        self.apply(&format!("{},{DEBUG_LOG_LEVEL}", self.base));
    }

    /// Restore the filter the subscriber was installed with
    pub fn disable_debug_output(&self) {
        self.apply(&self.base);
    }

    fn apply(&self, directives: &str) {
        if let Err(e) = self.handle.reload(EnvFilter::new(directives)) {
            tracing::warn!("Failed to change log filter: {e}");
        }
    }
}

impl std::fmt::Debug for LogControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogControl").field("base", &self.base).finish_non_exhaustive()
    }
}

/// Filter directives for a verbosity count (-v info, -vv debug)
///
/// `RUST_LOG` takes precedence when set.
pub fn filter_directives(verbose: u8) -> String {
    if let Ok(from_env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !from_env.is_empty() {
            return from_env;
        }
    }

    match verbose {
        0 => DEFAULT_LOG_LEVEL.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Install the global tracing subscriber
///
/// Returns `None` if a global subscriber is already installed.
pub fn init_logging(verbose: u8) -> Option<LogControl> {
    let base = filter_directives(verbose);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(&base));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok()?;

    Some(LogControl { handle, base })
}
