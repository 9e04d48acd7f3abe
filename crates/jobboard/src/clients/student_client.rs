//! # Student Client
//!
//! Provides a high-level API for the student slice, including the optimistic profile
//! edit used by the profile page.

use crate::model::{Student, StudentPatch};
use crate::student_slice::{StudentError, StudentOperation, StudentsSlice};
use async_trait::async_trait;
use slice_framework::{FrameworkError, OptimisticValue, Pagination, SliceClient, SliceHandle};
use tracing::{debug, instrument};

/// Client for the student slice.
#[derive(Clone)]
pub struct StudentClient {
    inner: SliceClient<StudentsSlice>,
}

impl StudentClient {
    pub fn new(inner: SliceClient<StudentsSlice>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SliceHandle<StudentsSlice> for StudentClient {
    type Error = StudentError;

    fn inner(&self) -> &SliceClient<StudentsSlice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Request(message) => StudentError::Request(message),
            other => StudentError::SliceCommunicationError(other.to_string()),
        }
    }
}

impl StudentClient {
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: Option<u64>,
        limit: Option<u64>,
        search: Option<String>,
    ) -> Result<Vec<Student>, StudentError> {
        self.run(StudentOperation::List {
            page,
            limit,
            search,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Student, StudentError> {
        let students = self.run(StudentOperation::Get { id: id.to_string() }).await?;
        find(students, id)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, patch: StudentPatch) -> Result<Student, StudentError> {
        let students = self
            .run(StudentOperation::Update {
                id: id.to_string(),
                patch,
            })
            .await?;
        find(students, id)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), StudentError> {
        self.run(StudentOperation::Delete { id: id.to_string() })
            .await
            .map(|_| ())
    }

    /// Students currently held by the slice.
    pub fn students(&self) -> Vec<Student> {
        self.state().data.unwrap_or_default()
    }

    pub fn pagination(&self) -> Pagination {
        self.state().pagination
    }

    /// Edits a profile optimistically.
    ///
    /// The patched profile is visible in `profile` at once; if the server rejects the
    /// update the profile rolls back to its last confirmed value and the error is
    /// returned (and kept in `profile.last_error()`).
    #[instrument(skip(self, profile))]
    pub async fn update_profile_optimistic(
        &self,
        profile: &mut OptimisticValue<Student>,
        patch: StudentPatch,
    ) -> Result<Student, StudentError> {
        let next = profile.current().apply(&patch);
        debug!(id = %next.id, "Applying profile change");
        profile
            .apply_with(next, |next| async move { self.update(&next.id, patch).await })
            .await
    }
}

fn find(students: Vec<Student>, id: &str) -> Result<Student, StudentError> {
    students
        .into_iter()
        .find(|s| s.id == id.trim())
        .ok_or_else(|| StudentError::NotFound(id.to_string()))
}
