//! # Admin Client
//!
//! High-level API for the admin dashboard slice.

use crate::admin_slice::{AdminError, AdminOperation, AdminSlice};
use crate::model::{AdminDashboard, DashboardStats};
use async_trait::async_trait;
use slice_framework::{FrameworkError, SliceClient, SliceHandle};
use tracing::instrument;

/// Client for the admin slice.
#[derive(Clone)]
pub struct AdminClient {
    inner: SliceClient<AdminSlice>,
}

impl AdminClient {
    pub fn new(inner: SliceClient<AdminSlice>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn load_dashboard(&self) -> Result<AdminDashboard, AdminError> {
        self.run(AdminOperation::Dashboard).await
    }

    #[instrument(skip(self))]
    pub async fn set_user_active(&self, id: &str, active: bool) -> Result<AdminDashboard, AdminError> {
        self.run(AdminOperation::SetUserActive {
            id: id.to_string(),
            active,
        })
        .await
    }

    /// Counters of the stored dashboard, or zeros before the first load.
    pub fn stats(&self) -> DashboardStats {
        self.state().data.map(|d| d.stats).unwrap_or_default()
    }
}

#[async_trait]
impl SliceHandle<AdminSlice> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &SliceClient<AdminSlice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Request(message) => AdminError::Request(message),
            other => AdminError::SliceCommunicationError(other.to_string()),
        }
    }
}
