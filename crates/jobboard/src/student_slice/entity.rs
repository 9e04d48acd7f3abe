//! [`SliceResource`] implementation for the student directory.

use super::error::StudentError;
use super::operations::StudentOperation;
use crate::http::{fetch_envelope, ApiError, ApiRequest, SharedTransport};
use crate::model::Student;
use async_trait::async_trait;
use slice_framework::{Envelope, Outcome, Pagination, RequestState, SliceResource};

/// Marker type for the student slice.
#[derive(Debug)]
pub struct StudentsSlice;

#[async_trait]
impl SliceResource for StudentsSlice {
    const NAME: &'static str = "students";
    type Operation = StudentOperation;
    type Data = Vec<Student>;
    type Context = SharedTransport;
    type Error = StudentError;

    async fn execute(
        operation: StudentOperation,
        _current: RequestState<Vec<Student>>,
        transport: &SharedTransport,
    ) -> Result<Outcome<Vec<Student>>, StudentError> {
        match operation {
            StudentOperation::List {
                page,
                limit,
                search,
            } => {
                let request = ApiRequest::get("/students")
                    .query_opt("page", page)
                    .query_opt("limit", limit)
                    .query_opt("search", search.filter(|s| !s.trim().is_empty()));
                let page: Envelope<Vec<Student>> = fetch_envelope(transport, request).await?;
                Ok(page.into())
            }
            StudentOperation::Get { id } => {
                let id = require_id(id)?;
                let student: Envelope<Student> =
                    fetch_envelope(transport, ApiRequest::get(format!("/students/{id}")))
                        .await
                        .map_err(|e| not_found(e, &id))?;
                Ok(Outcome::patch(move |state| upsert(state, student.data)))
            }
            StudentOperation::Update { id, patch } => {
                let id = require_id(id)?;
                if patch.is_empty() {
                    return Err(StudentError::ValidationError("Nothing to update".to_string()));
                }
                let request = ApiRequest::put(format!("/students/{id}")).json(&patch);
                let student: Envelope<Student> = fetch_envelope(transport, request)
                    .await
                    .map_err(|e| not_found(e, &id))?;
                Ok(Outcome::patch(move |state| upsert(state, student.data)))
            }
            StudentOperation::Delete { id } => {
                let id = require_id(id)?;
                transport
                    .send(ApiRequest::delete(format!("/students/{id}")))
                    .await
                    .map_err(|e| not_found(e, &id))?;
                Ok(Outcome::patch(move |state| remove(state, &id)))
            }
        }
    }
}

fn require_id(id: String) -> Result<String, StudentError> {
    let id = id.trim().to_string();
    if id.is_empty() {
        return Err(StudentError::ValidationError("Student id is required".to_string()));
    }
    Ok(id)
}

fn not_found(error: ApiError, id: &str) -> StudentError {
    if error.is_not_found() {
        StudentError::NotFound(id.to_string())
    } else {
        StudentError::Api(error)
    }
}

fn carried(pagination: Pagination) -> Option<Pagination> {
    (!pagination.is_empty()).then_some(pagination)
}

/// Replaces the student with the same id, or appends it.
fn upsert(current: &RequestState<Vec<Student>>, student: Student) -> Envelope<Vec<Student>> {
    let mut students = current.data.clone().unwrap_or_default();
    match students.iter_mut().find(|s| s.id == student.id) {
        Some(existing) => *existing = student,
        None => students.push(student),
    }
    Envelope {
        data: students,
        pagination: carried(current.pagination.clone()),
    }
}

fn remove(current: &RequestState<Vec<Student>>, id: &str) -> Envelope<Vec<Student>> {
    let mut students = current.data.clone().unwrap_or_default();
    let before = students.len();
    students.retain(|s| s.id != id);
    let mut pagination = current.pagination.clone();
    if students.len() < before {
        pagination.total = pagination.total.map(|t| t.saturating_sub(1));
    }
    Envelope {
        data: students,
        pagination: carried(pagination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(students: Vec<Student>, total: Option<u64>) -> RequestState<Vec<Student>> {
        let mut state = RequestState::default();
        state.succeed(Envelope {
            data: students,
            pagination: Some(Pagination {
                page: Some(1),
                limit: Some(10),
                total,
            }),
        });
        state
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let current = state(
            vec![Student::new("1", "A", "a@x.io"), Student::new("2", "B", "b@x.io")],
            Some(2),
        );
        let next = upsert(&current, Student::new("1", "A2", "a@x.io"));
        assert_eq!(next.data.len(), 2);
        assert_eq!(next.data[0].name, "A2");
        assert_eq!(next.pagination.and_then(|p| p.total), Some(2));
    }

    #[test]
    fn test_upsert_into_empty_state_has_no_pagination() {
        let next = upsert(&RequestState::default(), Student::new("9", "Z", "z@x.io"));
        assert_eq!(next.data.len(), 1);
        assert!(next.pagination.is_none());
    }

    #[test]
    fn test_remove_decrements_total_only_when_present() {
        let current = state(vec![Student::new("1", "A", "a@x.io")], Some(5));
        let next = remove(&current, "1");
        assert!(next.data.is_empty());
        assert_eq!(next.pagination.and_then(|p| p.total), Some(4));

        let next = remove(&current, "missing");
        assert_eq!(next.pagination.and_then(|p| p.total), Some(5));
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(" 7 ".into()).unwrap(), "7");
        assert!(matches!(require_id("  ".into()), Err(StudentError::ValidationError(_))));
    }
}
