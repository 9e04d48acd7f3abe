//! # Slice Messages
//!
//! Messages sent from a [`SliceClient`](crate::SliceClient) to its
//! [`SliceActor`](crate::SliceActor).
//!
//! Reads do not go through this channel: the actor publishes every state transition on a
//! `watch` channel, and clients read the latest value from there. The channel only carries
//! commands.

use crate::entity::SliceResource;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by slices.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Command sent to a slice actor.
#[derive(Debug)]
pub enum SliceRequest<T: SliceResource> {
    /// Run an operation.
    ///
    /// `accepted` receives the request's generation once the slice has moved to
    /// `Loading`; `respond_to` receives the outcome once the request settles.
    Dispatch {
        operation: T::Operation,
        accepted: oneshot::Sender<u64>,
        respond_to: Response<T::Data>,
    },
}
