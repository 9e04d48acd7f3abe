use super::storage::{KeyValueStore, StorageError};
use super::{default_notifications, Notification};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key of the notification list.
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// The durable notification list.
///
/// Loaded once; every mutation that changes the list writes the whole list back. A
/// failed write is returned to the caller, and the in-memory change is kept so the
/// page stays consistent with what the user just did.
pub struct NotificationCenter {
    store: Arc<dyn KeyValueStore>,
    items: Vec<Notification>,
}

impl NotificationCenter {
    /// Reads the stored list. Missing, unreadable or corrupt data falls back to the
    /// default list without writing anything.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match store.read(NOTIFICATIONS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Notification>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Stored notifications are corrupt, using defaults");
                    default_notifications()
                }
            },
            Ok(None) => default_notifications(),
            Err(e) => {
                warn!(error = %e, "Failed to read notifications, using defaults");
                default_notifications()
            }
        };
        debug!(count = items.len(), "Notifications loaded");
        Self { store, items }
    }

    /// Newest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks one entry read. Returns `false` (and writes nothing) for an unknown id.
    pub fn mark_read(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(item) = self.items.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        item.read = true;
        self.persist()?;
        Ok(true)
    }

    /// Marks every entry read. Returns how many entries changed.
    pub fn mark_all_read(&mut self) -> Result<usize, StorageError> {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|n| !n.read) {
            item.read = true;
            changed += 1;
        }
        self.persist()?;
        Ok(changed)
    }

    /// Adds an entry at the top.
    pub fn push(&mut self, notification: Notification) -> Result<(), StorageError> {
        self.items.insert(0, notification);
        self.persist()
    }

    /// Removes one entry. Returns `false` (and writes nothing) for an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&self.items)?;
        self.store.write(NOTIFICATIONS_KEY, &encoded).inspect_err(|e| {
            warn!(error = %e, "Failed to save notifications");
        })
    }
}
