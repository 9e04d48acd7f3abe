//! # SliceHandle Trait
//!
//! Common read interface for resource-specific clients, built on top of a generic
//! `SliceClient`.
use crate::{FrameworkError, RequestState, SliceClient, SliceResource};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for resource-specific clients to inherit the standard read and dispatch
/// operations.
///
/// # Example
///
/// ```rust
/// use slice_framework::{Envelope, FrameworkError, Outcome, RequestState, SliceClient, SliceHandle, SliceResource};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct Tags;
/// #[derive(Debug)]
/// enum TagOperation { List }
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TagError(String);
///
/// impl From<String> for TagError {
///     fn from(s: String) -> Self { TagError(s) }
/// }
///
/// #[async_trait]
/// impl SliceResource for Tags {
///     const NAME: &'static str = "tags";
///     type Operation = TagOperation;
///     type Data = Vec<String>;
///     type Context = ();
///     type Error = TagError;
///
///     async fn execute(_: TagOperation, _: RequestState<Vec<String>>, _: &()) -> Result<Outcome<Vec<String>>, TagError> {
///         Ok(Envelope::bare(vec!["rust".to_string()]).into())
///     }
/// }
///
/// struct TagClient {
///     inner: SliceClient<Tags>,
/// }
///
/// #[async_trait]
/// impl SliceHandle<Tags> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &SliceClient<Tags> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // state(), subscribe() and run() are provided automatically
///     let _ = client.run(TagOperation::List).await;
///     let _ = client.state().status;
/// }
/// ```
#[async_trait]
pub trait SliceHandle<T: SliceResource>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic SliceClient.
    fn inner(&self) -> &SliceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Latest state of the slice.
    fn state(&self) -> RequestState<T::Data> {
        self.inner().snapshot()
    }

    /// Receiver notified on every state transition.
    fn subscribe(&self) -> watch::Receiver<RequestState<T::Data>> {
        self.inner().subscribe()
    }

    /// Message of the last failure. Cleared when the next request starts.
    fn error_message(&self) -> Option<String> {
        self.inner().snapshot().error
    }

    /// Dispatch an operation and wait for it.
    #[tracing::instrument(skip(self))]
    async fn run(&self, operation: T::Operation) -> Result<T::Data, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch(operation).await.map_err(Self::map_error)
    }
}
