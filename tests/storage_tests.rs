// tests/storage_tests.rs
use tempfile::tempdir;

use passvault::storage::{CredentialStore, NewCredential, SqliteStore};

mod common;

fn new_credential(service: &str, username: &str, secret: &str) -> NewCredential {
    NewCredential {
        service: service.to_string(),
        username: username.to_string(),
        secret: secret.to_string(),
        url: None,
        notes: None,
    }
}

#[test]
fn test_add_list_delete_roundtrip() {
    common::setup();
    let dir = tempdir().unwrap();
    let mut store = SqliteStore::open(dir.path().join("credentials.db")).unwrap();

    let github = store.add(new_credential("GitHub", "octocat", "S3cr3t!")).unwrap();
    store.add(new_credential("Mail", "oc@example.com", "hunter2")).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    // Listing is ordered by service
    assert_eq!(listed[0].service, "GitHub");
    assert_eq!(listed[0].secret, "S3cr3t!");
    assert_eq!(listed[1].service, "Mail");

    store.delete(github).unwrap();
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].service, "Mail");
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.db");

    let id = {
        let mut store = SqliteStore::open(&path).unwrap();
        store
            .add(NewCredential {
                service: "Bank".to_string(),
                username: "octo".to_string(),
                secret: "correct horse".to_string(),
                url: Some("https://bank.example".to_string()),
                notes: Some("savings".to_string()),
            })
            .unwrap()
    };

    let store = SqliteStore::open(&path).unwrap();
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].url.as_deref(), Some("https://bank.example"));
    assert_eq!(listed[0].notes.as_deref(), Some("savings"));
    assert!(!listed[0].created_at.is_empty());
}

#[test]
fn test_delete_of_missing_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = SqliteStore::open(dir.path().join("credentials.db")).unwrap();
    store.delete(999).unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("instance").join("credentials.db");
    let store = SqliteStore::open(&nested).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(nested.exists());
}
