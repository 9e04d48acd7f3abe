//! # Company Client
//!
//! Loads raw company records and derives the visible list from them.

use crate::company_slice::{CompaniesSlice, CompanyError, CompanyOperation};
use crate::listing::{CompanyListView, FilterCriteria, FilterOptions, SortKey};
use crate::model::CompanyRecord;
use async_trait::async_trait;
use serde_json::Value;
use slice_framework::{FrameworkError, SliceClient, SliceHandle};
use std::sync::Arc;
use tracing::instrument;

/// Client for the company slice.
#[derive(Clone)]
pub struct CompanyClient {
    inner: SliceClient<CompaniesSlice>,
}

impl CompanyClient {
    pub fn new(inner: SliceClient<CompaniesSlice>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Arc<Vec<Value>>, CompanyError> {
        self.run(CompanyOperation::List { page, limit }).await
    }

    /// Raw records currently held by the slice.
    pub fn raw(&self) -> Arc<Vec<Value>> {
        self.state().data.unwrap_or_default()
    }

    /// The visible list for the stored records, memoized in `view`.
    pub fn view(
        &self,
        view: &mut CompanyListView,
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> Arc<Vec<CompanyRecord>> {
        view.get(&self.raw(), criteria, sort)
    }

    /// Filter choices for the stored records.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(&crate::listing::normalize_all(&self.raw()))
    }
}

#[async_trait]
impl SliceHandle<CompaniesSlice> for CompanyClient {
    type Error = CompanyError;

    fn inner(&self) -> &SliceClient<CompaniesSlice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Request(message) => CompanyError::Request(message),
            other => CompanyError::SliceCommunicationError(other.to_string()),
        }
    }
}
