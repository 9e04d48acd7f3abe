//! # Framework Errors
//!
//! Errors raised by the slice machinery itself, as opposed to the resource-specific
//! errors each [`SliceResource`](crate::SliceResource) defines.

/// Errors that can occur while talking to a slice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Slice closed")]
    SliceClosed,
    #[error("Slice dropped response channel")]
    SliceDropped,
    /// The request failed; carries the message stored on the slice.
    #[error("{0}")]
    Request(String),
    /// A newer request was dispatched before this one completed, so the payload it
    /// fetched was discarded.
    #[error("Request {generation} superseded by a newer request")]
    Superseded { generation: u64 },
}
