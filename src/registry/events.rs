//! Event notification
//!
//! The registry's owner exposes one [`EventSink`] so a download/install layer
//! can get progress handles without knowing how progress is displayed.

/// Receives download progress for one operation
///
/// Downloads may run in parallel, so handles are shared across threads and
/// every call names the file it reports on.
pub trait DownloadProgress: Send + Sync {
    /// A download of `file` started; `total_bytes` is 0 when unknown
    fn on_download_started(&self, file: &str, total_bytes: u64);

    /// `downloaded` bytes of `file` have arrived so far
    fn on_progress(&self, file: &str, downloaded: u64);

    /// The download of `file` completed
    fn on_download_finished(&self, file: &str);
}

/// Capability for obtaining progress handles
pub trait EventSink: Send + Sync {
    /// Get a progress handle for the operation about to start
    fn on_downloading_something(&self) -> Box<dyn DownloadProgress>;
}
