//! Route navigation.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Moves the user between views.
pub trait Navigator: Send + Sync {
    /// Goes to `route`, e.g. `/club`.
    fn navigate(&self, route: &str);

    /// Returns to the previous view.
    fn back(&self);
}

/// In-memory history stack.
///
/// `back` from the first entry stays put, like a browser.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    stack: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    /// Creates a history with the given entries, oldest first.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stack: Mutex::new(entries.into_iter().map(Into::into).collect()),
        }
    }

    /// Route currently shown.
    pub fn current(&self) -> Option<String> {
        self.stack().last().cloned()
    }

    /// Full history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.stack().clone()
    }

    fn stack(&self) -> MutexGuard<'_, Vec<String>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str) {
        tracing::debug!(route, "Navigating");
        self.stack().push(route.to_string());
    }

    fn back(&self) {
        let mut stack = self.stack();
        if stack.len() > 1 {
            stack.pop();
        }
        tracing::debug!(route = ?stack.last(), "Navigated back");
    }
}
