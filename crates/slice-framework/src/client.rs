//! # Slice Client
//!
//! The command and read interface of a slice.

use crate::entity::SliceResource;
use crate::error::FrameworkError;
use crate::message::SliceRequest;
use crate::state::{RequestState, Status};
use tokio::sync::{mpsc, oneshot, watch};

/// A request that has been accepted by the slice and is now in flight.
#[derive(Debug)]
pub struct FetchTicket<T: SliceResource> {
    generation: u64,
    response: oneshot::Receiver<Result<T::Data, FrameworkError>>,
}

impl<T: SliceResource> FetchTicket<T> {
    /// Generation number the slice assigned to this request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the request to settle.
    pub async fn wait(self) -> Result<T::Data, FrameworkError> {
        self.response
            .await
            .map_err(|_| FrameworkError::SliceDropped)?
    }
}

/// A type-safe client for a `SliceActor`.
///
/// Holds the command sender and a `watch` receiver for the slice's state, so reads are
/// synchronous and never queue behind commands. Cheap to clone.
pub struct SliceClient<T: SliceResource> {
    sender: mpsc::Sender<SliceRequest<T>>,
    state: watch::Receiver<RequestState<T::Data>>,
}

impl<T: SliceResource> Clone for SliceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: SliceResource> SliceClient<T> {
    pub fn new(
        sender: mpsc::Sender<SliceRequest<T>>,
        state: watch::Receiver<RequestState<T::Data>>,
    ) -> Self {
        Self { sender, state }
    }

    /// Sends an operation and returns once the slice has moved to `Loading`.
    pub async fn dispatch(&self, operation: T::Operation) -> Result<FetchTicket<T>, FrameworkError> {
        let (accepted, accepted_rx) = oneshot::channel();
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Dispatch {
                operation,
                accepted,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::SliceClosed)?;
        let generation = accepted_rx.await.map_err(|_| FrameworkError::SliceDropped)?;
        Ok(FetchTicket {
            generation,
            response,
        })
    }

    /// Sends an operation and waits for it to settle.
    pub async fn fetch(&self, operation: T::Operation) -> Result<T::Data, FrameworkError> {
        self.dispatch(operation).await?.wait().await
    }

    /// The latest published state.
    pub fn snapshot(&self) -> RequestState<T::Data> {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> Status {
        self.state.borrow().status
    }

    /// A receiver that is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T::Data>> {
        self.state.clone()
    }
}
