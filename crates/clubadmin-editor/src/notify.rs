//! Transient user notifications.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::messages::{DISMISS_LABEL, NOTICE_DURATION};

/// Fire-and-forget notification surface (a snackbar, a toast, a log line).
pub trait Notifier: Send + Sync {
    /// Shows `message` with a dismiss action for `duration`.
    fn show(&self, message: &str, dismiss_label: &str, duration: Duration);

    /// Shows `message` with the standard dismiss label and duration.
    fn notify(&self, message: &str) {
        self.show(message, DISMISS_LABEL, NOTICE_DURATION);
    }
}

/// Writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, message: &str, dismiss_label: &str, duration: Duration) {
        tracing::info!(
            dismiss = dismiss_label,
            duration_ms = duration.as_millis() as u64,
            "{message}"
        );
    }
}

/// A notification as it was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text
    pub message: String,
    /// Dismiss action label
    pub dismiss_label: String,
    /// Display duration
    pub duration: Duration,
}

/// Keeps every notification for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices shown so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages shown so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    /// Most recent notice.
    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, dismiss_label: &str, duration: Duration) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                message: message.to_string(),
                dismiss_label: dismiss_label.to_string(),
                duration,
            });
    }
}
