//! Observable state holder.
//!
//! A [`Signal`] holds the current value of one piece of controller state and
//! broadcasts every change to subscribers via a watch channel, so a rendering
//! layer can follow `loading`, `submitting`, `error` and friends without the
//! controllers knowing about it.
//!
//! # Usage
//!
//! ```rust
//! use clubadmin_core::Signal;
//!
//! let submitting = Signal::new(false);
//! let rx = submitting.subscribe();
//!
//! submitting.set(true);
//! assert!(submitting.get());
//! assert!(*rx.borrow());
//! ```

use std::fmt;
use tokio::sync::watch;

/// Current value plus change notification for one piece of state.
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T> Signal<T> {
    /// Creates a signal holding `value`.
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Mutates the value in place, notifying subscribers only when `f`
    /// returns `true`. Returns what `f` returned.
    ///
    /// The check and the write happen under one lock, which makes this the
    /// primitive for test-and-set guards:
    ///
    /// ```rust
    /// use clubadmin_core::Signal;
    ///
    /// let busy = Signal::new(false);
    /// assert!(busy.update_if(|b| !std::mem::replace(b, true)));
    /// assert!(!busy.update_if(|b| !std::mem::replace(b, true)));
    /// ```
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Reads the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Subscribe to changes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Signal<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&*self.tx.borrow()).finish()
    }
}
