use super::error::CompanyTypeError;
use super::operations::CompanyTypeOperation;
use crate::http::{fetch_envelope, ApiError, ApiRequest, SharedTransport};
use crate::model::CompanyType;
use async_trait::async_trait;
use serde_json::json;
use slice_framework::{Envelope, Outcome, RequestState, SliceResource};

/// Marker type for the company types slice.
#[derive(Debug)]
pub struct CompanyTypesSlice;

#[async_trait]
impl SliceResource for CompanyTypesSlice {
    const NAME: &'static str = "company_types";
    type Operation = CompanyTypeOperation;
    type Data = Vec<CompanyType>;
    type Context = SharedTransport;
    type Error = CompanyTypeError;

    async fn execute(
        operation: CompanyTypeOperation,
        current: RequestState<Vec<CompanyType>>,
        transport: &SharedTransport,
    ) -> Result<Outcome<Vec<CompanyType>>, CompanyTypeError> {
        let known = current.data.unwrap_or_default();
        match operation {
            CompanyTypeOperation::List => {
                let types: Envelope<Vec<CompanyType>> =
                    fetch_envelope(transport, ApiRequest::get("/company-types")).await?;
                Ok(types.into())
            }
            CompanyTypeOperation::Create { name } => {
                let name = validate_name(&name)?;
                if known.iter().any(|t| t.name.eq_ignore_ascii_case(&name)) {
                    return Err(CompanyTypeError::AlreadyExists(name));
                }
                let request = ApiRequest::post("/company-types").json(&json!({ "name": name }));
                let created: Envelope<CompanyType> = fetch_envelope(transport, request).await?;
                Ok(Outcome::patch(move |state| upsert(state, created.data)))
            }
            CompanyTypeOperation::Rename { id, name } => {
                let name = validate_name(&name)?;
                if known
                    .iter()
                    .any(|t| t.id != id && t.name.eq_ignore_ascii_case(&name))
                {
                    return Err(CompanyTypeError::AlreadyExists(name));
                }
                let request =
                    ApiRequest::put(format!("/company-types/{id}")).json(&json!({ "name": name }));
                let renamed: Envelope<CompanyType> = fetch_envelope(transport, request)
                    .await
                    .map_err(|e| not_found(e, &id))?;
                Ok(Outcome::patch(move |state| upsert(state, renamed.data)))
            }
            CompanyTypeOperation::Delete { id } => {
                transport
                    .send(ApiRequest::delete(format!("/company-types/{id}")))
                    .await
                    .map_err(|e| not_found(e, &id))?;
                Ok(Outcome::patch(move |state: &RequestState<Vec<CompanyType>>| {
                    let mut types = state.data.clone().unwrap_or_default();
                    types.retain(|t| t.id != id);
                    Envelope::bare(types)
                }))
            }
        }
    }
}

/// Replaces the type with the same id, or appends it.
fn upsert(
    current: &RequestState<Vec<CompanyType>>,
    item: CompanyType,
) -> Envelope<Vec<CompanyType>> {
    let mut types = current.data.clone().unwrap_or_default();
    match types.iter_mut().find(|t| t.id == item.id) {
        Some(existing) => *existing = item,
        None => types.push(item),
    }
    Envelope::bare(types)
}

fn validate_name(name: &str) -> Result<String, CompanyTypeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CompanyTypeError::ValidationError(
            "Company type name is required".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn not_found(error: ApiError, id: &str) -> CompanyTypeError {
    if error.is_not_found() {
        CompanyTypeError::NotFound(id.to_string())
    } else {
        CompanyTypeError::Api(error)
    }
}
