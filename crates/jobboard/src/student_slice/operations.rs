//! Commands accepted by the student slice.

use crate::model::StudentPatch;

#[derive(Debug, Clone, PartialEq)]
pub enum StudentOperation {
    /// `GET /students`, replacing the stored list and pagination.
    List {
        page: Option<u64>,
        limit: Option<u64>,
        search: Option<String>,
    },
    /// `GET /students/{id}`, upserted into the stored list.
    Get { id: String },
    /// `PUT /students/{id}` with the patch as body, upserting the returned student.
    Update { id: String, patch: StudentPatch },
    /// `DELETE /students/{id}`, removing the student from the stored list.
    Delete { id: String },
}
