//! # Slice Framework
//!
//! Building blocks for keeping client-side state about remote resources: one
//! **slice** per resource kind, holding the status of the latest request, the last
//! successful payload and the last error.
//!
//! ## Why actors for UI state?
//!
//! A slice has exactly one writer, its [`SliceActor`], which processes commands and request
//! completions in order on its own Tokio task. Consumers never mutate state directly; they
//! dispatch operations through a [`SliceClient`] and observe the result through a `watch`
//! channel. That gives:
//!
//! - **Three transitions only**: `begin`, `succeed`, `fail` on [`RequestState`]
//! - **No prop drilling**: any holder of a client can subscribe
//! - **No torn reads**: observers see whole states, never a half-applied response
//!
//! ## Architecture Overview
//!
//! 1. **Resource Layer** ([`SliceResource`]) - what to call and how to derive the next payload
//! 2. **Runtime Layer** ([`SliceActor`]) - status tracking, error capture, stale-response handling
//! 3. **Interface Layer** ([`SliceClient`], [`SliceHandle`]) - dispatch and observation
//!
//! ```rust
//! use slice_framework::{Envelope, Outcome, RequestState, SliceActor, SliceResource, Status};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct Greetings;
//! #[derive(Debug)]
//! enum GreetingOperation { Load }
//! #[derive(Debug, thiserror::Error)]
//! #[error("greeting unavailable")]
//! struct GreetingError;
//!
//! #[async_trait]
//! impl SliceResource for Greetings {
//!     const NAME: &'static str = "greetings";
//!     type Operation = GreetingOperation;
//!     type Data = Vec<String>;
//!     type Context = ();
//!     type Error = GreetingError;
//!
//!     async fn execute(
//!         _op: GreetingOperation,
//!         _current: RequestState<Vec<String>>,
//!         _ctx: &(),
//!     ) -> Result<Outcome<Vec<String>>, GreetingError> {
//!         Ok(Envelope::bare(vec!["hello".to_string()]).into())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SliceActor::<Greetings>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let data = client.fetch(GreetingOperation::Load).await.unwrap();
//!     assert_eq!(data, vec!["hello".to_string()]);
//!     assert_eq!(client.status(), Status::Succeeded);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - One Tokio task per slice; requests run on their own spawned tasks
//! - A slice never waits on the network, so reads are always served
//! - Only the most recently dispatched request may replace the payload (last-issued-wins);
//!   a create, update or delete that the server accepted is applied regardless, on top
//!   of the live state (see [`Outcome`])
//!
//! ## Testing
//!
//! See the [`mock`] module for a `MockClient` that answers requests from scripted
//! expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod message;
pub mod mock;
pub mod optimistic;
pub mod outcome;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::SliceActor;
pub use client::{FetchTicket, SliceClient};
pub use client_trait::SliceHandle;
pub use entity::SliceResource;
pub use envelope::{Envelope, EnvelopeError};
pub use error::FrameworkError;
pub use message::{Response, SliceRequest};
pub use optimistic::OptimisticValue;
pub use outcome::{Outcome, Patch};
pub use state::{Pagination, RequestState, Status};
