//! # Request Outcomes
//!
//! What a successful request does to its slice. A fetch hands back the whole next
//! payload; a create, update or delete only changes part of it, so it hands back a
//! [`Patch`] that the actor applies to the state as it is when the request settles.

use crate::envelope::Envelope;
use crate::state::RequestState;
use std::fmt;

/// Derives the next payload from the slice's live state.
pub type Patch<T> = Box<dyn FnOnce(&RequestState<T>) -> Envelope<T> + Send>;

pub enum Outcome<T> {
    /// The response is the complete payload (a list, a load, the dashboard).
    ///
    /// Only the most recently dispatched request may store one.
    Replace(Envelope<T>),
    /// The response changed part of the payload on the server.
    ///
    /// Always applied, even when a newer request was dispatched in the meantime.
    Patch(Patch<T>),
}

impl<T> Outcome<T> {
    pub fn replace(envelope: Envelope<T>) -> Self {
        Outcome::Replace(envelope)
    }

    pub fn patch<F>(f: F) -> Self
    where
        F: FnOnce(&RequestState<T>) -> Envelope<T> + Send + 'static,
    {
        Outcome::Patch(Box::new(f))
    }
}

impl<T> From<Envelope<T>> for Outcome<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Outcome::Replace(envelope)
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Replace(envelope) => f.debug_tuple("Replace").field(envelope).finish(),
            Outcome::Patch(_) => f.write_str("Patch(..)"),
        }
    }
}
