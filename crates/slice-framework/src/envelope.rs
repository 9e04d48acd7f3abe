//! # Response Envelopes
//!
//! Backends answer either with `{ "data": ..., "pagination": {...} }` or with the bare
//! payload. [`Envelope::from_value`] is the only place that tells the two apart; everything
//! downstream works with one canonical `Envelope<T>`.

use crate::state::Pagination;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors raised while decoding a response payload.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// A normalized response payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Wraps a payload that came without pagination.
    pub fn bare(data: T) -> Self {
        Self {
            data,
            pagination: None,
        }
    }

    pub fn with_pagination(data: T, pagination: Pagination) -> Self {
        Self {
            data,
            pagination: Some(pagination),
        }
    }

    /// Transforms the payload, keeping pagination.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            pagination: self.pagination,
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decodes a JSON response in either the wrapped or the bare form.
    ///
    /// A value is treated as wrapped only if it is an object with a `data` key.
    /// Malformed pagination is dropped rather than failing the whole response.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let data = map.remove("data").unwrap_or(Value::Null);
                let pagination = match map.remove("pagination") {
                    None | Some(Value::Null) => None,
                    Some(raw) => match serde_json::from_value::<Pagination>(raw) {
                        Ok(p) => Some(p),
                        Err(e) => {
                            tracing::debug!(error = %e, "Ignoring malformed pagination");
                            None
                        }
                    },
                };
                Ok(Self {
                    data: serde_json::from_value(data)?,
                    pagination,
                })
            }
            other => Ok(Self::bare(serde_json::from_value(other)?)),
        }
    }
}
