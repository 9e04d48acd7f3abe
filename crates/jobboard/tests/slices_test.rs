use jobboard::admin_slice;
use jobboard::company_types_slice::{self, CompanyTypeError};
use jobboard::http::{ApiError, Method, SharedTransport, StubTransport, GENERIC_ERROR_MESSAGE};
use jobboard::model::{Frequency, StudentPatch, SubscriptionPreferences};
use jobboard::student_slice::{self, StudentError};
use jobboard::subscription_slice::{self, SUBSCRIPTION_PATH};
use serde_json::json;
use slice_framework::{SliceHandle, Status};
use std::sync::Arc;
use std::time::Duration;

fn transport(stub: &Arc<StubTransport>) -> SharedTransport {
    stub.clone()
}

fn student_page() -> serde_json::Value {
    json!({
        "data": [
            {"_id": "s1", "name": "Asha", "email": "asha@example.com"},
            {"_id": "s2", "name": "Ben", "email": "ben@example.com"}
        ],
        "pagination": {"page": 1, "limit": 2, "total": 7}
    })
}

#[tokio::test]
async fn test_student_list_then_patch_collection() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(Method::Get, "/students", student_page());
    stub.respond(
        Method::Put,
        "/students/s1",
        json!({"data": {"_id": "s1", "name": "Asha Rao", "email": "asha@example.com"}}),
    );
    stub.respond(Method::Delete, "/students/s2", json!(null));

    let (actor, client) = student_slice::new(8);
    let handle = tokio::spawn(actor.run(transport(&stub)));

    let students = client.list(Some(1), Some(2), Some("a".into())).await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(client.pagination().total, Some(7));
    assert_eq!(client.pagination().page_count(), Some(4));
    let request = &stub.requests()[0];
    assert!(request.query.contains(&("search".to_string(), "a".to_string())));

    let patch = StudentPatch {
        name: Some("Asha Rao".into()),
        ..Default::default()
    };
    let updated = client.update("s1", patch.clone()).await.unwrap();
    assert_eq!(updated.name, "Asha Rao");
    assert_eq!(stub.requests()[1].body, Some(json!({"name": "Asha Rao"})));
    assert_eq!(client.students()[0].name, "Asha Rao");
    assert_eq!(client.pagination().total, Some(7));

    client.delete("s2").await.unwrap();
    assert_eq!(client.students().len(), 1);
    assert_eq!(client.pagination().total, Some(6));
    assert_eq!(client.state().status, Status::Succeeded);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_overlapping_deletes_both_apply() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(Method::Get, "/students", student_page());
    stub.respond_after(
        Method::Delete,
        "/students/s1",
        Duration::from_millis(50),
        json!(null),
    );
    stub.respond(Method::Delete, "/students/s2", json!(null));

    let (actor, client) = student_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));
    client.list(None, None, None).await.unwrap();

    // The second delete is dispatched, and settles, while the first is in flight.
    let (first, second) = tokio::join!(client.delete("s1"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        client.delete("s2").await
    });

    assert_eq!(first, Ok(()));
    assert_eq!(second, Ok(()));
    assert!(client.students().is_empty());
    assert_eq!(client.pagination().total, Some(5));
    assert_eq!(client.state().status, Status::Succeeded);
    assert_eq!(stub.count(Method::Delete, "/students/s1"), 1);
}

#[tokio::test]
async fn test_student_failures_are_stored_and_keep_data() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(Method::Get, "/students", student_page());
    stub.fail(Method::Get, "/students/s9", ApiError::status(404, "Not found"));
    stub.fail(
        Method::Put,
        "/students/s1",
        ApiError::status(500, GENERIC_ERROR_MESSAGE),
    );

    let (actor, client) = student_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));
    client.list(None, None, None).await.unwrap();

    let err = client.get("s9").await.unwrap_err();
    assert_eq!(err, StudentError::Request("Student not found: s9".into()));
    assert_eq!(client.error_message().as_deref(), Some("Student not found: s9"));
    assert_eq!(client.students().len(), 2);

    let patch = StudentPatch {
        degree: Some("MSc".into()),
        ..Default::default()
    };
    let err = client.update("s1", patch).await.unwrap_err();
    assert_eq!(err.to_string(), "Something went wrong. Please try again.");
    assert_eq!(client.state().status, Status::Failed);

    // Validation happens before any request is sent.
    let sent = stub.requests().len();
    let err = client.update("s1", StudentPatch::default()).await.unwrap_err();
    assert_eq!(err, StudentError::Request("Nothing to update".into()));
    assert_eq!(stub.requests().len(), sent);
}

#[tokio::test]
async fn test_admin_dashboard_and_user_activation() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(
        Method::Get,
        "/admin/dashboard",
        json!({
            "stats": {"totalUsers": 3, "activeJobs": 1},
            "recentUsers": [{"_id": "u1", "name": "Ravi", "role": "employer"}]
        }),
    );
    stub.respond(Method::Put, "/admin/users/u1/status", json!({"success": true}));

    let (actor, client) = admin_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));

    assert_eq!(client.stats().total_users, 0);
    let dashboard = client.load_dashboard().await.unwrap();
    assert_eq!(dashboard.stats.total_users, 3);
    assert!(dashboard.recent_users[0].is_active);
    assert!(client.state().pagination.is_empty());

    let dashboard = client.set_user_active("u1", false).await.unwrap();
    assert!(!dashboard.recent_users[0].is_active);
    assert_eq!(stub.requests()[1].body, Some(json!({"isActive": false})));
}

#[tokio::test]
async fn test_user_activation_before_dashboard_loads_fetches_it() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(Method::Put, "/admin/users/u1/status", json!({"success": true}));
    stub.respond(
        Method::Get,
        "/admin/dashboard",
        json!({
            "stats": {"totalUsers": 3, "activeJobs": 1},
            "recentUsers": [{"_id": "u1", "name": "Ravi", "role": "employer", "isActive": false}]
        }),
    );

    let (actor, client) = admin_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));

    let dashboard = client.set_user_active("u1", false).await.unwrap();
    assert_eq!(stub.count(Method::Get, "/admin/dashboard"), 1);
    assert_eq!(dashboard.stats.total_users, 3);
    assert_eq!(client.stats().active_jobs, 1);
    assert!(!dashboard.recent_users[0].is_active);
    assert_eq!(stub.requests()[0].method, Method::Put);
}

#[tokio::test]
async fn test_company_types_crud() {
    let stub = Arc::new(StubTransport::new());
    stub.respond(Method::Get, "/company-types", json!([{"_id": 1, "name": "Startup"}]));
    stub.respond(Method::Post, "/company-types", json!({"_id": 2, "name": "MNC"}));
    stub.respond(Method::Put, "/company-types/2", json!({"_id": 2, "name": "Enterprise"}));
    stub.respond(Method::Delete, "/company-types/1", json!(""));

    let (actor, client) = company_types_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));

    assert_eq!(client.list().await.unwrap().len(), 1);
    let types = client.create("  MNC ").await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(stub.requests()[1].body, Some(json!({"name": "MNC"})));

    let err = client.create("startup").await.unwrap_err();
    assert_eq!(
        err,
        CompanyTypeError::Request("Company type already exists: startup".into())
    );
    let err = client.create(" ").await.unwrap_err();
    assert_eq!(err.to_string(), "Company type name is required");

    let types = client.rename("2", "Enterprise").await.unwrap();
    assert_eq!(types[1].name, "Enterprise");

    let types = client.delete("1").await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].id, "2");
    assert_eq!(stub.count(Method::Post, "/company-types"), 1);
}

#[tokio::test]
async fn test_subscription_lifecycle() {
    let stub = Arc::new(StubTransport::new());
    stub.fail(Method::Get, SUBSCRIPTION_PATH, ApiError::status(404, "No subscription"));
    stub.respond(
        Method::Post,
        SUBSCRIPTION_PATH,
        json!({"data": {"subscribed": true, "email": "a@example.com",
                         "keywords": ["rust"], "frequency": "daily"}}),
    );
    stub.respond(Method::Delete, SUBSCRIPTION_PATH, json!({"message": "Unsubscribed"}));

    let (actor, client) = subscription_slice::new(8);
    tokio::spawn(actor.run(transport(&stub)));

    let subscription = client.load().await.unwrap();
    assert!(!subscription.subscribed);
    assert_eq!(client.state().status, Status::Succeeded);

    let err = client
        .subscribe(SubscriptionPreferences::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at least one"));

    let preferences = SubscriptionPreferences {
        keywords: vec!["rust".into()],
        frequency: Frequency::Daily,
        ..Default::default()
    };
    let subscription = client.subscribe(preferences).await.unwrap();
    assert!(subscription.subscribed);
    assert!(client.is_subscribed());

    let subscription = client.unsubscribe().await.unwrap();
    assert!(!subscription.subscribed);
    assert_eq!(subscription.preferences.keywords, vec!["rust"]);
    assert!(!client.is_subscribed());
}
