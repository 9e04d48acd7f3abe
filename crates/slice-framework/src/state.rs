//! # Request State
//!
//! The value a slice publishes to its observers. A `RequestState` only ever changes
//! through [`RequestState::begin`], [`RequestState::succeed`] and [`RequestState::fail`];
//! the actor calls exactly one of them per request phase. A change that settles after
//! a newer request was dispatched goes through [`RequestState::fold`] instead.

use crate::envelope::Envelope;
use serde::{Deserialize, Serialize};

/// Lifecycle of the most recent request issued to a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Page metadata returned alongside list payloads.
///
/// Every field is optional; an envelope without pagination stores the empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub total: Option<u64>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.limit.is_none() && self.total.is_none()
    }

    /// Number of pages implied by `total` and `limit`, when both are known.
    pub fn page_count(&self) -> Option<u64> {
        match (self.total, self.limit) {
            (Some(total), Some(limit)) if limit > 0 => Some(total.div_ceil(limit)),
            _ => None,
        }
    }
}

/// Status, payload and error for one resource kind.
///
/// Invariants:
/// - `status == Loading` implies `error.is_none()`.
/// - a failure never touches `data` or `pagination`; they keep the last success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestState<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            data: None,
            error: None,
            pagination: Pagination::default(),
        }
    }
}

impl<T> RequestState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request went out.
    pub fn begin(&mut self) {
        self.status = Status::Loading;
        self.error = None;
    }

    /// The request resolved with a payload.
    pub fn succeed(&mut self, envelope: Envelope<T>) {
        self.status = Status::Succeeded;
        self.data = Some(envelope.data);
        self.pagination = envelope.pagination.unwrap_or_default();
        self.error = None;
    }

    /// Stores the payload of a superseded change. Status and error belong to the newer
    /// request and are left alone.
    pub fn fold(&mut self, envelope: Envelope<T>) {
        self.data = Some(envelope.data);
        self.pagination = envelope.pagination.unwrap_or_default();
    }

    /// The request was rejected.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = Status::Failed;
        self.error = Some(message.into());
    }

    pub fn is_idle(&self) -> bool {
        self.status == Status::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_error() {
        let mut state: RequestState<Vec<u32>> = RequestState::new();
        state.fail("boom");
        state.begin();
        assert_eq!(state.status, Status::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_keeps_last_success() {
        let mut state = RequestState::new();
        state.begin();
        state.succeed(Envelope {
            data: vec![1, 2],
            pagination: Some(Pagination {
                page: Some(1),
                limit: Some(10),
                total: Some(2),
            }),
        });
        state.begin();
        state.fail("Network error");

        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.data, Some(vec![1, 2]));
        assert_eq!(state.pagination.total, Some(2));
        assert_eq!(state.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn success_without_pagination_stores_empty() {
        let mut state = RequestState::new();
        state.succeed(Envelope {
            data: "x",
            pagination: Some(Pagination {
                page: Some(3),
                ..Default::default()
            }),
        });
        state.succeed(Envelope::bare("y"));
        assert!(state.pagination.is_empty());
    }

    #[test]
    fn fold_keeps_status_and_error() {
        let mut state = RequestState::new();
        state.succeed(Envelope::bare(vec![1]));
        state.begin();
        state.fold(Envelope::bare(vec![1, 2]));
        assert_eq!(state.status, Status::Loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, Some(vec![1, 2]));
    }

    #[test]
    fn page_count_rounds_up() {
        let p = Pagination {
            page: Some(1),
            limit: Some(10),
            total: Some(21),
        };
        assert_eq!(p.page_count(), Some(3));
        assert_eq!(Pagination::default().page_count(), None);
    }
}
