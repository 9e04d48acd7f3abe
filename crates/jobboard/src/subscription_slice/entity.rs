use super::error::SubscriptionError;
use super::operations::{SubscriptionOperation, SUBSCRIPTION_PATH};
use crate::http::{fetch_envelope, ApiRequest, SharedTransport};
use crate::model::{Subscription, SubscriptionPreferences};
use async_trait::async_trait;
use slice_framework::{Envelope, Outcome, RequestState, SliceResource};

/// Marker type for the subscription slice.
#[derive(Debug)]
pub struct SubscriptionSlice;

#[async_trait]
impl SliceResource for SubscriptionSlice {
    const NAME: &'static str = "subscription";
    type Operation = SubscriptionOperation;
    type Data = Subscription;
    type Context = SharedTransport;
    type Error = SubscriptionError;

    async fn execute(
        operation: SubscriptionOperation,
        _current: RequestState<Subscription>,
        transport: &SharedTransport,
    ) -> Result<Outcome<Subscription>, SubscriptionError> {
        match operation {
            SubscriptionOperation::Load => {
                match fetch_envelope::<Subscription>(transport, ApiRequest::get(SUBSCRIPTION_PATH))
                    .await
                {
                    Ok(envelope) => Ok(Envelope::bare(envelope.data).into()),
                    Err(e) if e.is_not_found() => {
                        Ok(Envelope::bare(Subscription::default()).into())
                    }
                    Err(e) => Err(e.into()),
                }
            }
            SubscriptionOperation::Subscribe { preferences } => {
                validate(&preferences)?;
                let request = ApiRequest::post(SUBSCRIPTION_PATH).json(&preferences);
                let saved: Envelope<Subscription> = fetch_envelope(transport, request).await?;
                Ok(Envelope::bare(saved.data).into())
            }
            SubscriptionOperation::Unsubscribe => {
                transport.send(ApiRequest::delete(SUBSCRIPTION_PATH)).await?;
                Ok(Outcome::patch(|state: &RequestState<Subscription>| {
                    Envelope::bare(state.data.clone().unwrap_or_default().unsubscribed())
                }))
            }
        }
    }
}

fn validate(preferences: &SubscriptionPreferences) -> Result<(), SubscriptionError> {
    let blank = |values: &[String]| values.iter().all(|v| v.trim().is_empty());
    if blank(&preferences.keywords) && blank(&preferences.locations) && blank(&preferences.job_types)
    {
        return Err(SubscriptionError::ValidationError(
            "Choose at least one keyword, location or job type".to_string(),
        ));
    }
    Ok(())
}
