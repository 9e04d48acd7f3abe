//! # Slice Actor
//!
//! This module defines the `SliceActor`, the server half of a slice. It owns the
//! [`RequestState`] for one resource kind, drives it through its three transitions and
//! publishes each transition to observers.

use crate::client::SliceClient;
use crate::entity::SliceResource;
use crate::error::FrameworkError;
use crate::message::{Response, SliceRequest};
use crate::outcome::Outcome;
use crate::state::RequestState;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// Outcome of a spawned request, fed back into the actor loop.
struct Settled<T: SliceResource> {
    generation: u64,
    outcome: Result<Outcome<T::Data>, String>,
    respond_to: Response<T::Data>,
}

/// The generic actor that owns the request state of one resource kind.
///
/// # Architecture Note
/// The actor processes commands and completions sequentially, so the state has a single
/// writer and needs no lock. Requests themselves run on spawned tasks; the loop never
/// awaits the network, which keeps `Loading` observable while a request is in flight.
///
/// # Stale responses
/// Each dispatch gets a generation number, and only the most recently dispatched request
/// may set the status. For earlier completions:
///
/// - a fetched payload ([`Outcome::Replace`]) is dropped and the caller receives
///   [`FrameworkError::Superseded`] (last-issued-wins);
/// - a change the server accepted ([`Outcome::Patch`]) is folded into the live data and
///   the caller receives it, so overlapping mutations are never lost;
/// - a failure leaves the state alone and the caller receives its error.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `SliceActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run(context)` on the runtime, injecting the transport.
/// 3.  **Use**: Dispatch operations and observe state through the client.
pub struct SliceActor<T: SliceResource> {
    receiver: mpsc::Receiver<SliceRequest<T>>,
    state: watch::Sender<RequestState<T::Data>>,
    generation: u64,
    settled_tx: mpsc::UnboundedSender<Settled<T>>,
    settled_rx: mpsc::UnboundedReceiver<Settled<T>>,
}

impl<T: SliceResource> SliceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, SliceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state, watcher) = watch::channel(RequestState::default());
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            state,
            generation: 0,
            settled_tx,
            settled_rx,
        };
        (actor, SliceClient::new(sender, watcher))
    }

    /// Runs the slice's event loop until every client has been dropped.
    ///
    /// Requests still in flight at shutdown are abandoned; their callers see
    /// [`FrameworkError::SliceDropped`].
    pub async fn run(mut self, context: T::Context) {
        let slice = T::NAME;
        info!(slice, "Slice started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(SliceRequest::Dispatch { operation, accepted, respond_to }) => {
                        self.dispatch(operation, accepted, respond_to, &context);
                    }
                    None => break,
                },
                Some(settled) = self.settled_rx.recv() => self.settle(settled),
            }
        }

        let status = self.state.borrow().status;
        info!(slice, %status, generation = self.generation, "Shutdown");
    }

    fn dispatch(
        &mut self,
        operation: T::Operation,
        accepted: oneshot::Sender<u64>,
        respond_to: Response<T::Data>,
        context: &T::Context,
    ) {
        let slice = T::NAME;
        self.generation += 1;
        let generation = self.generation;
        debug!(slice, generation, ?operation, "Dispatch");

        let current = self.state.borrow().clone();
        self.state.send_modify(|state| state.begin());
        let _ = accepted.send(generation);

        let ctx = context.clone();
        let settled = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = T::execute(operation, current, &ctx)
                .await
                .map_err(|e| e.to_string());
            let _ = settled.send(Settled {
                generation,
                outcome,
                respond_to,
            });
        });
    }

    fn settle(&mut self, settled: Settled<T>) {
        let slice = T::NAME;
        let Settled {
            generation,
            outcome,
            respond_to,
        } = settled;
        let latest = generation == self.generation;

        match outcome {
            Ok(Outcome::Replace(envelope)) if latest => {
                let data = envelope.data.clone();
                self.state.send_modify(|state| state.succeed(envelope));
                info!(slice, generation, "Succeeded");
                let _ = respond_to.send(Ok(data));
            }
            Ok(Outcome::Replace(_)) => {
                debug!(slice, generation, latest = self.generation, "Discarding stale response");
                let _ = respond_to.send(Err(FrameworkError::Superseded { generation }));
            }
            Ok(Outcome::Patch(patch)) => {
                let envelope = {
                    let current = self.state.borrow();
                    patch(&*current)
                };
                let data = envelope.data.clone();
                if latest {
                    self.state.send_modify(|state| state.succeed(envelope));
                    info!(slice, generation, "Succeeded");
                } else {
                    self.state.send_modify(|state| state.fold(envelope));
                    debug!(slice, generation, latest = self.generation, "Folded superseded change");
                }
                let _ = respond_to.send(Ok(data));
            }
            Err(message) if latest => {
                warn!(slice, generation, error = %message, "Failed");
                self.state.send_modify(|state| state.fail(message.clone()));
                let _ = respond_to.send(Err(FrameworkError::Request(message)));
            }
            Err(message) => {
                debug!(slice, generation, error = %message, "Stale request failed");
                let _ = respond_to.send(Err(FrameworkError::Request(message)));
            }
        }
    }
}
