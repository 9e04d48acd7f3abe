//! # Subscription Client

use crate::model::{Subscription, SubscriptionPreferences};
use crate::subscription_slice::{SubscriptionError, SubscriptionOperation, SubscriptionSlice};
use async_trait::async_trait;
use slice_framework::{FrameworkError, SliceClient, SliceHandle};
use tracing::instrument;

/// Client for the job-notification subscription slice.
#[derive(Clone)]
pub struct SubscriptionClient {
    inner: SliceClient<SubscriptionSlice>,
}

impl SubscriptionClient {
    pub fn new(inner: SliceClient<SubscriptionSlice>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Subscription, SubscriptionError> {
        self.run(SubscriptionOperation::Load).await
    }

    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        preferences: SubscriptionPreferences,
    ) -> Result<Subscription, SubscriptionError> {
        self.run(SubscriptionOperation::Subscribe { preferences })
            .await
    }

    #[instrument(skip(self))]
    pub async fn unsubscribe(&self) -> Result<Subscription, SubscriptionError> {
        self.run(SubscriptionOperation::Unsubscribe).await
    }

    /// Whether the stored subscription is active.
    pub fn is_subscribed(&self) -> bool {
        self.state().data.is_some_and(|s| s.subscribed)
    }
}

#[async_trait]
impl SliceHandle<SubscriptionSlice> for SubscriptionClient {
    type Error = SubscriptionError;

    fn inner(&self) -> &SliceClient<SubscriptionSlice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Request(message) => SubscriptionError::Request(message),
            other => SubscriptionError::SliceCommunicationError(other.to_string()),
        }
    }
}
