//! Error types for the company types slice.

use crate::http::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompanyTypeError {
    #[error("Company type not found: {0}")]
    NotFound(String),

    /// A company type with the same name (ignoring case) already exists.
    #[error("Company type already exists: {0}")]
    AlreadyExists(String),

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Request(String),

    #[error("Slice communication error: {0}")]
    SliceCommunicationError(String),
}

impl From<String> for CompanyTypeError {
    fn from(msg: String) -> Self {
        CompanyTypeError::SliceCommunicationError(msg)
    }
}
