use super::error::{error_message, ApiError};
use super::request::ApiRequest;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends API requests and returns the decoded JSON body.
///
/// Implementations must map every failure into an [`ApiError`] whose `Display` can be
/// shown to a user as-is.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// The transport handle slices carry as their context.
pub type SharedTransport = Arc<dyn Transport>;

/// [`Transport`] backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        debug!(method = %request.method, %url, "Request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(method = %request.method, %url, status = status.as_u16(), %message, "Request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        decode_body(&body)
    }
}

/// Parses a success body. An empty body (e.g. `204 No Content`) decodes to `null`.
pub fn decode_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
