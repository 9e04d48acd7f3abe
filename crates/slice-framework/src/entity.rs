//! # SliceResource Trait
//!
//! The `SliceResource` trait is the contract every remote resource kind (students, company
//! types, the admin dashboard, …) implements to be served by the generic [`SliceActor`].
//! It names the commands the resource accepts, the payload the slice stores and the
//! dependencies each request needs, and performs the single outbound call behind each
//! command.
//!
//! # Architecture Note
//! The request lifecycle (status tracking, error capture, stale-response handling) is
//! written once in the actor. A resource only describes *what* to call and *how* the next
//! payload is derived from the response, so five slices share one state machine.
//!
//! [`SliceActor`]: crate::actor::SliceActor

use crate::outcome::Outcome;
use crate::state::RequestState;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any remote resource must implement to be managed by `SliceActor`.
///
/// # Async & Context
/// `execute` runs on a task spawned by the actor, so the context is cloned into it. Use a
/// cheap handle (an `Arc` around a transport) rather than the transport itself.
#[async_trait]
pub trait SliceResource: Send + Sync + 'static {
    /// Short name used in logs (e.g. `"students"`).
    const NAME: &'static str;

    /// Commands the slice accepts (list, get, create, update, delete, …).
    type Operation: Send + Sync + Debug + 'static;

    /// The payload stored in the slice after a successful request.
    type Data: Clone + Send + Sync + Debug + 'static;

    /// Dependencies injected into every request (usually the HTTP transport).
    type Context: Clone + Send + Sync + 'static;

    /// The error type for this resource.
    ///
    /// Its `Display` output is the message stored on the slice when a request fails, so
    /// it should read well to an end user.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Performs one outbound request and says how it changes the payload.
    ///
    /// `current` is the slice state when the command was dispatched, for checks made
    /// before anything is sent (e.g. duplicate names). Commands that change part of a
    /// collection return [`Outcome::Patch`], which is applied to the live state when
    /// the request settles rather than to this snapshot.
    async fn execute(
        operation: Self::Operation,
        current: RequestState<Self::Data>,
        ctx: &Self::Context,
    ) -> Result<Outcome<Self::Data>, Self::Error>;
}
