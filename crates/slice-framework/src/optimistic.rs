//! # Optimistic Values
//!
//! An `OptimisticValue` shows a change to observers before the backend has confirmed it.
//! If the sync fails the visible value goes back to the last confirmed snapshot and the
//! error is kept for display.

use std::fmt::Display;
use std::future::Future;
use tokio::sync::watch;
use tracing::{debug, warn};

/// A locally edited value with an explicit rollback contract.
///
/// * `committed` is the last value the backend confirmed.
/// * the visible value (published on a `watch` channel) is either `committed` or the
///   change currently being synced.
pub struct OptimisticValue<T> {
    committed: T,
    visible: watch::Sender<T>,
    last_error: Option<String>,
}

impl<T: Clone + Send + Sync> OptimisticValue<T> {
    pub fn new(initial: T) -> Self {
        let (visible, _) = watch::channel(initial.clone());
        Self {
            committed: initial,
            visible,
            last_error: None,
        }
    }

    /// The value observers currently see.
    pub fn current(&self) -> T {
        self.visible.borrow().clone()
    }

    /// The last confirmed value.
    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.visible.subscribe()
    }

    /// Error from the most recent failed sync, if the last attempt failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces both the committed and the visible value, e.g. after a fresh fetch.
    pub fn reset(&mut self, value: T) {
        self.committed = value.clone();
        self.visible.send_replace(value);
        self.last_error = None;
    }

    /// Shows `next` immediately, then syncs it.
    ///
    /// On success the value returned by `sync` becomes both committed and visible. On
    /// failure the visible value is rolled back to the committed snapshot, the error
    /// message is recorded, and the error is returned.
    pub async fn apply_with<F, Fut, E>(&mut self, next: T, sync: F) -> Result<T, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.last_error = None;
        self.visible.send_replace(next.clone());
        debug!("Optimistic change applied");

        match sync(next).await {
            Ok(confirmed) => {
                self.committed = confirmed.clone();
                self.visible.send_replace(confirmed.clone());
                Ok(confirmed)
            }
            Err(e) => {
                warn!(error = %e, "Sync failed, rolling back");
                self.last_error = Some(e.to_string());
                self.visible.send_replace(self.committed.clone());
                Err(e)
            }
        }
    }
}
