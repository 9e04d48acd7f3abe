//! Error types for API calls.

use thiserror::Error;

/// Shown when the server rejects a request without saying why.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur while calling the API.
///
/// `Display` is meant for end users: it is what a slice stores as its error message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Extracts the user-facing message from an error response body.
///
/// Uses `message` (or `error`) when the body is a JSON object carrying a non-empty
/// string there, and [`GENERIC_ERROR_MESSAGE`] otherwise.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .find(|msg| !msg.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}
