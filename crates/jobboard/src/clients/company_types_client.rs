//! # Company Types Client

use crate::company_types_slice::{CompanyTypeError, CompanyTypeOperation, CompanyTypesSlice};
use crate::model::CompanyType;
use async_trait::async_trait;
use slice_framework::{FrameworkError, SliceClient, SliceHandle};
use tracing::instrument;

/// Client for the company types slice. Every method returns the full list after the
/// change.
#[derive(Clone)]
pub struct CompanyTypesClient {
    inner: SliceClient<CompanyTypesSlice>,
}

impl CompanyTypesClient {
    pub fn new(inner: SliceClient<CompanyTypesSlice>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CompanyType>, CompanyTypeError> {
        self.run(CompanyTypeOperation::List).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Vec<CompanyType>, CompanyTypeError> {
        self.run(CompanyTypeOperation::Create {
            name: name.to_string(),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, id: &str, name: &str) -> Result<Vec<CompanyType>, CompanyTypeError> {
        self.run(CompanyTypeOperation::Rename {
            id: id.to_string(),
            name: name.to_string(),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Vec<CompanyType>, CompanyTypeError> {
        self.run(CompanyTypeOperation::Delete { id: id.to_string() })
            .await
    }
}

#[async_trait]
impl SliceHandle<CompanyTypesSlice> for CompanyTypesClient {
    type Error = CompanyTypeError;

    fn inner(&self) -> &SliceClient<CompanyTypesSlice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Request(message) => CompanyTypeError::Request(message),
            other => CompanyTypeError::SliceCommunicationError(other.to_string()),
        }
    }
}
