use crate::model::SubscriptionPreferences;

pub const SUBSCRIPTION_PATH: &str = "/job-notifications/subscription";

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionOperation {
    /// `GET /job-notifications/subscription`
    Load,
    /// `POST /job-notifications/subscription`, creating or replacing the preferences.
    Subscribe { preferences: SubscriptionPreferences },
    /// `DELETE /job-notifications/subscription`
    Unsubscribe,
}
