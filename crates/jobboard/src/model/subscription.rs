use serde::{Deserialize, Serialize};

/// How often matching jobs are emailed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Instant,
    Daily,
    #[default]
    Weekly,
}

/// What a user wants to be notified about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionPreferences {
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
    pub frequency: Frequency,
}

/// The current user's job-notification subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub subscribed: bool,
    pub email: Option<String>,
    #[serde(flatten)]
    pub preferences: SubscriptionPreferences,
}

impl Subscription {
    /// The state after an unsubscribe: preferences are kept so a later
    /// re-subscribe can start from them.
    pub fn unsubscribed(mut self) -> Self {
        self.subscribed = false;
        self
    }
}
