//! Scripted [`Transport`] for tests and the offline demo.

use super::error::ApiError;
use super::request::{ApiRequest, Method};
use super::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    result: Result<Value, ApiError>,
}

type Routes = HashMap<(Method, String), VecDeque<Scripted>>;

/// Answers requests from per-route queues of scripted responses.
///
/// Routes are keyed by method and path; the query string is not part of the key.
/// Responses for a route are served in the order they were added, and the last one
/// repeats once the queue is down to it. A request to a route with no script fails
/// with a `404` status error. Every request is logged.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<Routes>,
    log: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn respond(&self, method: Method, path: &str, body: Value) -> &Self {
        self.push(method, path, Duration::ZERO, Ok(body))
    }

    /// Queues a successful response that arrives after `delay`.
    pub fn respond_after(&self, method: Method, path: &str, delay: Duration, body: Value) -> &Self {
        self.push(method, path, delay, Ok(body))
    }

    /// Queues a failure.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.push(method, path, Duration::ZERO, Err(error))
    }

    /// Queues a failure that arrives after `delay`.
    pub fn fail_after(&self, method: Method, path: &str, delay: Duration, error: ApiError) -> &Self {
        self.push(method, path, delay, Err(error))
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// How many requests hit the given route.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn push(
        &self,
        method: Method,
        path: &str,
        delay: Duration,
        result: Result<Value, ApiError>,
    ) -> &Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes
                .entry((method, path.to_string()))
                .or_default()
                .push_back(Scripted { delay, result });
        }
        self
    }

    fn next(&self, method: Method, path: &str) -> Option<Scripted> {
        let mut routes = self.routes.lock().ok()?;
        let queue = routes.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let scripted = self.next(request.method, &request.path);
        if let Ok(mut log) = self.log.lock() {
            log.push(request.clone());
        }

        let Some(scripted) = scripted else {
            return Err(ApiError::status(
                404,
                format!("No route for {} {}", request.method, request.path),
            ));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}
