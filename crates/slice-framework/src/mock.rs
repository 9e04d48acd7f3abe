//! # Mock Slices & Testing Guide
//!
//! `MockClient<T>` hands out a real `SliceClient<T>` whose requests are answered from a
//! queue of expectations instead of a network call. It publishes the same
//! `Loading → Succeeded/Failed` transitions a real slice would, so code observing state
//! can be tested too.
//!
//! ## When to use Mocks vs Real Slices
//!
//! | Feature | MockClient | Real slice + stub transport |
//! |---------|------------|-----------------------------|
//! | **Speed** | Instant | Fast (spawned request task) |
//! | **Scope** | Client wrappers only | `execute` logic and the HTTP mapping |
//! | **Error Injection** | `return_err` | scripted error responses |
//!
//! ## Example
//!
//! ```rust
//! use slice_framework::mock::MockClient;
//! use slice_framework::{Outcome, RequestState, SliceResource, Status};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct Counter;
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl SliceResource for Counter {
//!     const NAME: &'static str = "counter";
//!     type Operation = ();
//!     type Data = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!     async fn execute(_: (), _: RequestState<u32>, _: &()) -> Result<Outcome<u32>, CounterError> {
//!         unreachable!("mocked")
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_dispatch().return_ok(7);
//!
//!     let client = mock.client();
//!     assert_eq!(client.fetch(()).await.unwrap(), 7);
//!     assert_eq!(client.status(), Status::Succeeded);
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] and [`expect_dispatch`] give direct access to the request
//! channel, for tests that need to control exactly when a request settles.

use crate::client::SliceClient;
use crate::entity::SliceResource;
use crate::envelope::Envelope;
use crate::error::FrameworkError;
use crate::message::{Response, SliceRequest};
use crate::state::RequestState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type Expectations<T> = Arc<Mutex<VecDeque<Result<Envelope<<T as SliceResource>::Data>, FrameworkError>>>>;

/// A mock slice with expectation tracking for fluent testing.
pub struct MockClient<T: SliceResource> {
    client: SliceClient<T>,
    expectations: Expectations<T>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SliceResource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SliceResource> MockClient<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SliceRequest<T>>(100);
        let (state, watcher) = watch::channel(RequestState::default());
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            let mut generation = 0;
            while let Some(request) = receiver.recv().await {
                let SliceRequest::Dispatch {
                    operation,
                    accepted,
                    respond_to,
                } = request;
                generation += 1;
                received_clone.lock().unwrap().push(format!("{operation:?}"));

                let expectation = expectations_clone.lock().unwrap().pop_front();
                let Some(response) = expectation else {
                    panic!("Unexpected dispatch of {operation:?}");
                };

                state.send_modify(|s| s.begin());
                let _ = accepted.send(generation);
                match response {
                    Ok(envelope) => {
                        let data = envelope.data.clone();
                        state.send_modify(|s| s.succeed(envelope));
                        let _ = respond_to.send(Ok(data));
                    }
                    Err(e) => {
                        state.send_modify(|s| s.fail(e.to_string()));
                        let _ = respond_to.send(Err(e));
                    }
                }
            }
        });

        Self {
            client: SliceClient::new(sender, watcher),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> SliceClient<T> {
        self.client.clone()
    }

    /// Expects one more dispatch.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<T> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Debug renderings of every operation received so far, in order.
    pub fn received_operations(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for dispatch expectations.
pub struct DispatchExpectationBuilder<T: SliceResource> {
    expectations: Expectations<T>,
}

impl<T: SliceResource> DispatchExpectationBuilder<T> {
    /// Settles the request successfully with a bare payload.
    pub fn return_ok(self, data: T::Data) {
        self.return_envelope(Envelope::bare(data));
    }

    /// Settles the request successfully with a full envelope.
    pub fn return_envelope(self, envelope: Envelope<T::Data>) {
        self.expectations.lock().unwrap().push_back(Ok(envelope));
    }

    /// Settles the request with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client together with the receiving end of its request channel and the
/// sender of its state channel.
///
/// Nothing answers requests on its own: pull them with [`expect_dispatch`], acknowledge
/// the generation, and respond when the test is ready.
pub fn create_mock_client<T: SliceResource>(
    buffer_size: usize,
) -> (
    SliceClient<T>,
    mpsc::Receiver<SliceRequest<T>>,
    watch::Sender<RequestState<T::Data>>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (state, watcher) = watch::channel(RequestState::default());
    (SliceClient::new(sender, watcher), receiver, state)
}

/// Helper to take the next dispatch from a mock request channel.
pub async fn expect_dispatch<T: SliceResource>(
    receiver: &mut mpsc::Receiver<SliceRequest<T>>,
) -> Option<(T::Operation, oneshot::Sender<u64>, Response<T::Data>)> {
    match receiver.recv().await {
        Some(SliceRequest::Dispatch {
            operation,
            accepted,
            respond_to,
        }) => Some((operation, accepted, respond_to)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::state::Status;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Labels;

    #[derive(Debug, PartialEq)]
    enum LabelOperation {
        List,
        Add(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("label error")]
    struct LabelError;

    #[async_trait]
    impl SliceResource for Labels {
        const NAME: &'static str = "labels";
        type Operation = LabelOperation;
        type Data = Vec<String>;
        type Context = ();
        type Error = LabelError;

        async fn execute(
            _operation: LabelOperation,
            _current: RequestState<Vec<String>>,
            _ctx: &(),
        ) -> Result<Outcome<Vec<String>>, LabelError> {
            Err(LabelError)
        }
    }

    #[tokio::test]
    async fn test_mock_channel_helpers() {
        let (client, mut receiver, _state) = create_mock_client::<Labels>(10);

        let task = tokio::spawn(async move { client.fetch(LabelOperation::Add("new".into())).await });

        let (operation, accepted, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(operation, LabelOperation::Add("new".into()));
        accepted.send(1).unwrap();
        responder.send(Ok(vec!["new".to_string()])).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result.unwrap(), vec!["new".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Labels>::new();
        mock.expect_dispatch().return_ok(vec!["a".to_string()]);
        mock.expect_dispatch()
            .return_err(FrameworkError::Request("Network error".into()));

        let client = mock.client();
        let labels = client.fetch(LabelOperation::List).await.unwrap();
        assert_eq!(labels, vec!["a".to_string()]);

        let err = client.fetch(LabelOperation::List).await.unwrap_err();
        assert_eq!(err, FrameworkError::Request("Network error".into()));

        let state = client.snapshot();
        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.data, Some(vec!["a".to_string()]));
        assert_eq!(mock.received_operations(), vec!["List", "List"]);
        mock.verify();
    }
}
