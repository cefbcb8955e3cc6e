//! Progress side-channel for long-running stage runs
//!
//! Both stages publish a monotonically non-decreasing percentage plus a
//! human-readable label while they work. Reporting is decoupled from the
//! traversal via the [`ProgressObserver`] trait: the controller calls
//! `on_progress` and the observer decides where the update goes. Publishing
//! must never block the main loop, and consumers may only rely on the last
//! published value.

use serde::Serialize;

/// A single progress update published by a stage run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Overall completion percentage, 0-100, non-decreasing within a run
    pub progress: u8,

    /// Human-readable description of the current step
    pub label: String,

    /// Number of pages found/processed so far
    pub pages_found: usize,

    /// Caller-supplied correlation token, echoed back verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<String>,

    /// Most recent per-item error message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Observer for stage progress updates
///
/// Implementations must not block: the stages invoke this synchronously from
/// their main loop.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, update: ProgressUpdate);
}

/// Observer that discards all updates
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _update: ProgressUpdate) {}
}

/// Observer that logs updates via tracing
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_progress(&self, update: ProgressUpdate) {
        tracing::info!(
            progress = update.progress,
            pages_found = update.pages_found,
            "{}",
            update.label
        );
    }
}

/// Observer that publishes updates onto a tokio watch channel
///
/// A watch channel keeps only the latest value, which matches the
/// side-channel contract: intermediate updates may be dropped, the last one
/// is authoritative, and `send_replace` never blocks.
pub struct WatchObserver {
    sender: tokio::sync::watch::Sender<ProgressUpdate>,
}

impl WatchObserver {
    /// Creates an observer and the receiver half for the external consumer
    pub fn new() -> (Self, tokio::sync::watch::Receiver<ProgressUpdate>) {
        let (sender, receiver) = tokio::sync::watch::channel(ProgressUpdate::default());
        (Self { sender }, receiver)
    }
}

impl ProgressObserver for WatchObserver {
    fn on_progress(&self, update: ProgressUpdate) {
        self.sender.send_replace(update);
    }
}

/// Wraps an observer and clamps the published percentage to be non-decreasing
///
/// The stages compute percentages that are already monotone in the normal
/// case; the clamp holds the invariant even when a run revisits an earlier
/// phase label (e.g. an error update re-publishing the current percentage).
pub struct MonotonicProgress<'a> {
    observer: &'a dyn ProgressObserver,
    last: u8,
}

impl<'a> MonotonicProgress<'a> {
    pub fn new(observer: &'a dyn ProgressObserver) -> Self {
        Self { observer, last: 0 }
    }

    /// Publishes an update, raising `progress` to the high-water mark
    pub fn publish(&mut self, mut update: ProgressUpdate) {
        if update.progress < self.last {
            update.progress = self.last;
        }
        self.last = update.progress;
        self.observer.on_progress(update);
    }
}

/// Truncates a URL for display in progress labels
pub fn display_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() <= max_chars {
        url.to_string()
    } else {
        let truncated: String = url.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
