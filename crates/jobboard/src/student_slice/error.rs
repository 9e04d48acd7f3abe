//! Error types for the student slice.

use crate::http::ApiError;
use thiserror::Error;

/// Errors that can occur during student operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudentError {
    /// The requested student was not found.
    #[error("Student not found: {0}")]
    NotFound(String),

    /// The request was rejected before it was sent.
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request failed; carries the message stored on the slice.
    #[error("{0}")]
    Request(String),

    /// An error occurred while communicating with the slice.
    #[error("Slice communication error: {0}")]
    SliceCommunicationError(String),
}

impl From<String> for StudentError {
    fn from(msg: String) -> Self {
        StudentError::SliceCommunicationError(msg)
    }
}
