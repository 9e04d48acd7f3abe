//! # Subscription Slice
//!
//! The signed-in user's job-alert subscription. A user who never subscribed gets a
//! `404` from the API; the slice stores that as an unsubscribed [`Subscription`]
//! rather than an error.
//!
//! [`Subscription`]: crate::model::Subscription

pub mod entity;
pub mod error;
pub mod operations;

pub use entity::SubscriptionSlice;
pub use error::*;
pub use operations::*;

use crate::clients::SubscriptionClient;
use slice_framework::SliceActor;

/// Creates a new subscription slice actor and its client.
pub fn new(buffer: usize) -> (SliceActor<SubscriptionSlice>, SubscriptionClient) {
    let (actor, generic_client) = SliceActor::new(buffer);
    (actor, SubscriptionClient::new(generic_client))
}
