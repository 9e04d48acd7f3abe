//! # Notifications
//!
//! The notification list in the header survives restarts: it is kept in a small
//! key-value store and rewritten in full after every change.
//!
//! - [`storage`] - the [`KeyValueStore`] seam with a JSON-file and an in-memory backend
//! - [`center`] - [`NotificationCenter`], the list and its mutations

pub mod center;
pub mod storage;

pub use center::*;
pub use storage::*;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the notification list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// RFC 3339 timestamp.
    pub date: String,
    #[serde(default)]
    pub read: bool,
    /// Where clicking the entry leads.
    #[serde(default)]
    pub url: Option<String>,
}

impl Notification {
    /// An unread entry stamped now, with a fresh id.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            subtitle: subtitle.into(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            read: false,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// The list shown before anything has been stored.
pub fn default_notifications() -> Vec<Notification> {
    vec![Notification {
        id: "welcome".to_string(),
        title: "Welcome to the job board".to_string(),
        subtitle: "Complete your profile to get better job matches".to_string(),
        date: "2024-01-01T00:00:00Z".to_string(),
        read: false,
        url: Some("/profile".to_string()),
    }]
}
