//! Error types for the subscription slice.

use crate::http::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubscriptionError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Request(String),

    #[error("Slice communication error: {0}")]
    SliceCommunicationError(String),
}

impl From<String> for SubscriptionError {
    fn from(msg: String) -> Self {
        SubscriptionError::SliceCommunicationError(msg)
    }
}
