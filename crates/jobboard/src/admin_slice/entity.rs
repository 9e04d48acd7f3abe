use super::error::AdminError;
use super::operations::AdminOperation;
use crate::http::{fetch_envelope, ApiRequest, SharedTransport};
use crate::model::AdminDashboard;
use async_trait::async_trait;
use serde_json::json;
use slice_framework::{Envelope, Outcome, RequestState, SliceResource};

/// Marker type for the admin dashboard slice.
#[derive(Debug)]
pub struct AdminSlice;

#[async_trait]
impl SliceResource for AdminSlice {
    const NAME: &'static str = "admin";
    type Operation = AdminOperation;
    type Data = AdminDashboard;
    type Context = SharedTransport;
    type Error = AdminError;

    async fn execute(
        operation: AdminOperation,
        current: RequestState<AdminDashboard>,
        transport: &SharedTransport,
    ) -> Result<Outcome<AdminDashboard>, AdminError> {
        match operation {
            AdminOperation::Dashboard => Ok(load_dashboard(transport).await?.into()),
            AdminOperation::SetUserActive { id, active } => {
                let request = ApiRequest::put(format!("/admin/users/{id}/status"))
                    .json(&json!({ "isActive": active }));
                transport.send(request).await.map_err(|e| {
                    if e.is_not_found() {
                        AdminError::UserNotFound(id.clone())
                    } else {
                        AdminError::Api(e)
                    }
                })?;

                if current.data.is_none() {
                    // Nothing to patch yet; the fresh dashboard already reflects the change.
                    return Ok(load_dashboard(transport).await?.into());
                }
                Ok(Outcome::patch(move |state: &RequestState<AdminDashboard>| {
                    let mut dashboard = state.data.clone().unwrap_or_default();
                    if !dashboard.set_user_active(&id, active) {
                        tracing::debug!(%id, "User not in recent list, dashboard unchanged");
                    }
                    Envelope::bare(dashboard)
                }))
            }
        }
    }
}

async fn load_dashboard(
    transport: &SharedTransport,
) -> Result<Envelope<AdminDashboard>, AdminError> {
    let dashboard: Envelope<AdminDashboard> =
        fetch_envelope(transport, ApiRequest::get("/admin/dashboard")).await?;
    // The dashboard is not paginated.
    Ok(Envelope::bare(dashboard.data))
}
