use jobboard::clients::StudentClient;
use jobboard::http::{Method, SharedTransport, StubTransport};
use jobboard::model::{Student, StudentPatch};
use jobboard::student_slice::{self, StudentError, StudentsSlice};
use serde_json::json;
use slice_framework::mock::MockClient;
use slice_framework::{FrameworkError, OptimisticValue, SliceHandle, Status};
use std::sync::Arc;
use std::time::Duration;

/// Most of these tests mock the slice, so they cover the client's mapping of slice
/// results and errors. The last one runs a real slice over a `StubTransport` to check
/// how an optimistic edit behaves when another request overtakes it.
#[tokio::test]
async fn test_get_finds_student_in_returned_list() {
    let mut mock = MockClient::<StudentsSlice>::new();
    mock.expect_dispatch().return_ok(vec![
        Student::new("s1", "Asha", "asha@example.com"),
        Student::new("s2", "Ben", "ben@example.com"),
    ]);
    let client = StudentClient::new(mock.client());

    let student = client.get("s2").await.unwrap();
    assert_eq!(student.name, "Ben");
    assert_eq!(mock.received_operations(), vec![r#"Get { id: "s2" }"#]);
    mock.verify();
}

#[tokio::test]
async fn test_framework_errors_are_mapped() {
    let mut mock = MockClient::<StudentsSlice>::new();
    mock.expect_dispatch()
        .return_err(FrameworkError::Request("Server unavailable".into()));
    mock.expect_dispatch().return_err(FrameworkError::SliceDropped);
    let client = StudentClient::new(mock.client());

    let err = client.list(None, None, None).await.unwrap_err();
    assert_eq!(err, StudentError::Request("Server unavailable".into()));
    assert_eq!(client.state().status, Status::Failed);
    assert_eq!(client.error_message().as_deref(), Some("Server unavailable"));

    let err = client.delete("s1").await.unwrap_err();
    assert!(matches!(err, StudentError::SliceCommunicationError(_)));
    mock.verify();
}

#[tokio::test]
async fn test_optimistic_profile_edit_commits_on_success() {
    let mut mock = MockClient::<StudentsSlice>::new();
    let mut confirmed = Student::new("s1", "Asha Rao", "asha@example.com");
    confirmed.university = Some("IIT Delhi".into());
    mock.expect_dispatch().return_ok(vec![confirmed.clone()]);
    let client = StudentClient::new(mock.client());

    let mut profile = OptimisticValue::new(Student::new("s1", "Asha", "asha@example.com"));
    let watcher = profile.subscribe();
    let patch = StudentPatch {
        name: Some("Asha Rao".into()),
        university: Some("IIT Delhi".into()),
        ..Default::default()
    };

    let saved = client
        .update_profile_optimistic(&mut profile, patch)
        .await
        .unwrap();
    assert_eq!(saved, confirmed);
    assert_eq!(profile.committed(), &confirmed);
    assert_eq!(*watcher.borrow(), confirmed);
}

#[tokio::test]
async fn test_optimistic_profile_edit_rolls_back_on_failure() {
    let mut mock = MockClient::<StudentsSlice>::new();
    mock.expect_dispatch()
        .return_err(FrameworkError::Request("Phone number is invalid".into()));
    let client = StudentClient::new(mock.client());

    let original = Student::new("s1", "Asha", "asha@example.com");
    let mut profile = OptimisticValue::new(original.clone());
    let patch = StudentPatch {
        phone: Some("12".into()),
        ..Default::default()
    };

    let err = client
        .update_profile_optimistic(&mut profile, patch)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Phone number is invalid");
    assert_eq!(profile.current(), original);
    assert_eq!(profile.last_error(), Some("Phone number is invalid"));
}

#[tokio::test]
async fn test_optimistic_edit_survives_an_overlapping_list() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(
        Method::Get,
        "/students",
        json!({
            "data": [{"_id": "s1", "name": "Asha", "email": "asha@example.com"}],
            "pagination": {"page": 1, "total": 1}
        }),
    );
    stub.respond_after(
        Method::Put,
        "/students/s1",
        Duration::from_millis(50),
        json!({"data": {"_id": "s1", "name": "Asha Rao", "email": "asha@example.com"}}),
    );

    let transport: SharedTransport = stub.clone();
    let (actor, client) = student_slice::new(8);
    tokio::spawn(actor.run(transport));

    let mut profile = OptimisticValue::new(Student::new("s1", "Asha", "asha@example.com"));
    let patch = StudentPatch {
        name: Some("Asha Rao".into()),
        ..Default::default()
    };

    // The list is dispatched while the update is still in flight.
    let (updated, listed) = tokio::join!(
        client.update_profile_optimistic(&mut profile, patch),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            client.list(None, None, None).await
        }
    );

    assert_eq!(updated.unwrap().name, "Asha Rao");
    assert_eq!(listed.unwrap()[0].name, "Asha");
    assert_eq!(profile.current().name, "Asha Rao");
    assert_eq!(profile.committed().name, "Asha Rao");
    assert_eq!(profile.last_error(), None);
    assert_eq!(client.students()[0].name, "Asha Rao");
    assert_eq!(client.state().status, Status::Succeeded);
}
