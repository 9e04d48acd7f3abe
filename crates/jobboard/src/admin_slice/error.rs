//! Error types for the admin slice.

use crate::http::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Request(String),

    #[error("Slice communication error: {0}")]
    SliceCommunicationError(String),
}

impl From<String> for AdminError {
    fn from(msg: String) -> Self {
        AdminError::SliceCommunicationError(msg)
    }
}
