use super::error::CompanyError;
use super::operations::CompanyOperation;
use crate::http::{fetch_envelope, ApiRequest, SharedTransport};
use async_trait::async_trait;
use serde_json::Value;
use slice_framework::{Envelope, Outcome, RequestState, SliceResource};
use std::sync::Arc;

/// Marker type for the company slice.
#[derive(Debug)]
pub struct CompaniesSlice;

#[async_trait]
impl SliceResource for CompaniesSlice {
    const NAME: &'static str = "companies";
    type Operation = CompanyOperation;
    type Data = Arc<Vec<Value>>;
    type Context = SharedTransport;
    type Error = CompanyError;

    async fn execute(
        operation: CompanyOperation,
        _current: RequestState<Arc<Vec<Value>>>,
        transport: &SharedTransport,
    ) -> Result<Outcome<Arc<Vec<Value>>>, CompanyError> {
        let CompanyOperation::List { page, limit } = operation;
        let request = ApiRequest::get("/companies")
            .query_opt("page", page)
            .query_opt("limit", limit);
        let envelope: Envelope<Vec<Value>> = fetch_envelope(transport, request).await?;
        Ok(envelope.map(Arc::new).into())
    }
}
