use jobboard::config::AppConfig;
use jobboard::lifecycle::open_notifications;
use jobboard::notifications::{FileStore, KeyValueStore, Notification, NotificationCenter, NOTIFICATIONS_KEY};
use std::sync::Arc;

#[test]
fn test_notifications_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut center = NotificationCenter::load(Arc::new(FileStore::new(&path)));
    assert_eq!(center.items().len(), 1);
    assert!(!path.exists());

    center
        .push(Notification::new("Application viewed", "Acme Cloud viewed your application"))
        .unwrap();
    center.mark_read("welcome").unwrap();

    let reloaded = NotificationCenter::load(Arc::new(FileStore::new(&path)));
    assert_eq!(reloaded.items(), center.items());
    assert_eq!(reloaded.unread_count(), 1);
    assert_eq!(reloaded.items()[0].title, "Application viewed");
}

#[test]
fn test_corrupt_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "\u{0}garbage").unwrap();

    let center = NotificationCenter::load(Arc::new(FileStore::new(&path)));
    assert_eq!(center.items()[0].id, "welcome");
    // Loading never writes.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\u{0}garbage");
}

#[test]
fn test_stored_format_is_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_path: dir.path().join("jobboard.json"),
        ..AppConfig::default()
    };

    let mut center = open_notifications(&config);
    center.mark_all_read().unwrap();

    let store = FileStore::new(config.storage_path.clone());
    let raw = store.read(NOTIFICATIONS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "welcome");
    assert_eq!(value[0]["read"], true);
    assert_eq!(value[0]["url"], "/profile");
}

#[test]
fn test_missing_url_is_stored_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut center = NotificationCenter::load(Arc::new(FileStore::new(&path)));
    center
        .push(Notification::new("New job posted", "Rust Engineer at Acme Cloud"))
        .unwrap();

    let raw = FileStore::new(&path).read(NOTIFICATIONS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let newest = value[0].as_object().unwrap();
    assert_eq!(newest["title"], "New job posted");
    assert!(newest.contains_key("url"));
    assert!(newest["url"].is_null());
}
