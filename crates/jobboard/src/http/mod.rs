//! # HTTP Transport
//!
//! Everything that leaves the process goes through a [`Transport`]. Slices receive a
//! [`SharedTransport`] as their context, so tests and the offline demo swap the real
//! [`HttpTransport`] for a scripted [`StubTransport`] without touching slice code.
//!
//! Responses are decoded in exactly one place: [`fetch_envelope`] accepts payloads
//! that may or may not come wrapped in `{ data, pagination }`.

pub mod error;
pub mod request;
pub mod stub;
pub mod transport;

pub use error::*;
pub use request::*;
pub use stub::StubTransport;
pub use transport::*;

use serde::de::DeserializeOwned;
use slice_framework::Envelope;

/// Sends a request and normalizes the response into an [`Envelope`].
pub async fn fetch_envelope<T: DeserializeOwned>(
    transport: &SharedTransport,
    request: ApiRequest,
) -> Result<Envelope<T>, ApiError> {
    let value = transport.send(request).await?;
    Envelope::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fetch_envelope_accepts_both_shapes() {
        let stub = StubTransport::new();
        stub.respond(Method::Get, "/wrapped", json!({"data": [1, 2], "pagination": {"page": 1}}));
        stub.respond(Method::Get, "/bare", json!([3]));
        let transport: SharedTransport = Arc::new(stub);

        let wrapped: Envelope<Vec<u32>> = fetch_envelope(&transport, ApiRequest::get("/wrapped"))
            .await
            .unwrap();
        assert_eq!(wrapped.data, vec![1, 2]);
        assert_eq!(wrapped.pagination.and_then(|p| p.page), Some(1));

        let bare: Envelope<Vec<u32>> = fetch_envelope(&transport, ApiRequest::get("/bare"))
            .await
            .unwrap();
        assert_eq!(bare.data, vec![3]);
        assert!(bare.pagination.is_none());
    }

    #[tokio::test]
    async fn test_decode_failure_is_reported() {
        let stub = StubTransport::new();
        stub.respond(Method::Get, "/numbers", json!({"data": "not a list"}));
        let transport: SharedTransport = Arc::new(stub);

        let result: Result<Envelope<Vec<u32>>, _> =
            fetch_envelope(&transport, ApiRequest::get("/numbers")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
