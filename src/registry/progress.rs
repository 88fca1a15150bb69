//! Terminal progress bars
//!
//! An [`EventSink`] that draws one progress bar per downloaded file.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::events::{DownloadProgress, EventSink};

/// Create a progress bar for downloads
pub fn create_download_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Event sink backed by `indicatif` progress bars
#[derive(Debug, Clone)]
pub struct ProgressBarSink {
    multi: MultiProgress,
}

impl ProgressBarSink {
    /// Draw to stderr
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
        }
    }

    /// Draw nowhere (tests, quiet mode)
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ProgressBarSink {
    fn on_downloading_something(&self) -> Box<dyn DownloadProgress> {
        Box::new(ProgressBars {
            multi: self.multi.clone(),
            bars: Mutex::new(HashMap::new()),
        })
    }
}

/// Progress handle for one operation, one bar per file
#[derive(Debug)]
pub struct ProgressBars {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressBars {
    fn with_bar(&self, file: &str, f: impl FnOnce(&ProgressBar)) {
        let bars = self.bars.lock().unwrap_or_else(PoisonError::into_inner);
        match bars.get(file) {
            Some(bar) => f(bar),
            None => tracing::debug!("Progress reported for unknown download '{file}'"),
        }
    }

    /// Position of the bar for `file`, if it exists
    pub fn position(&self, file: &str) -> Option<u64> {
        let bars = self.bars.lock().unwrap_or_else(PoisonError::into_inner);
        bars.get(file).map(ProgressBar::position)
    }
}

impl DownloadProgress for ProgressBars {
    fn on_download_started(&self, file: &str, total_bytes: u64) {
        let bar = self.multi.add(create_download_bar(total_bytes));
        bar.set_message(file.to_string());
        self.bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(file.to_string(), bar);
    }

    fn on_progress(&self, file: &str, downloaded: u64) {
        self.with_bar(file, |bar| bar.set_position(downloaded));
    }

    fn on_download_finished(&self, file: &str) {
        let finished = self
            .bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(file);
        match finished {
            Some(bar) => bar.finish(),
            None => tracing::debug!("Finish reported for unknown download '{file}'"),
        }
    }
}
