//! Error types for the company slice.

use crate::http::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompanyError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Request(String),

    #[error("Slice communication error: {0}")]
    SliceCommunicationError(String),
}

impl From<String> for CompanyError {
    fn from(msg: String) -> Self {
        CompanyError::SliceCommunicationError(msg)
    }
}
