//! Credential store against an on-disk database

use sellerhub::credentials::{
    CredentialDb, CredentialError, CredentialStore, NewCredential, SqliteCredentialStore,
};
use tempfile::TempDir;

fn input(seller: &str) -> NewCredential {
    NewCredential {
        seller_id: seller.to_string(),
        marketplace_id: "ATVPDKIKX0DER".to_string(),
        aws_access_key_id: "AKIAEXAMPLE".to_string(),
        aws_secret_key: "wJalrXUtnFEMI/K7MDENG".to_string(),
        role_arn: None,
    }
}

fn open_store(dir: &TempDir) -> SqliteCredentialStore {
    let db = CredentialDb::open(&dir.path().join("credentials.db")).unwrap();
    SqliteCredentialStore::new(db)
}

#[tokio::test]
async fn test_credentials_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let created = open_store(&dir).create("alice", input("SELLER1")).await.unwrap();

    let reopened = open_store(&dir);
    let listed = reopened.list("alice").await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_users_cannot_see_or_delete_each_others_credentials() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let alice = store.create("alice", input("SELLER1")).await.unwrap();

    assert!(store.list("bob").await.unwrap().is_empty());
    let err = store.delete("bob", &alice.id).await.unwrap_err();
    assert!(matches!(err, CredentialError::NotFound(_)));
    assert_eq!(store.list("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deactivate_then_delete() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let created = store.create("alice", input("SELLER1")).await.unwrap();

    let inactive = store.set_active("alice", &created.id, false).await.unwrap();
    assert!(!inactive.is_active);

    store.delete("alice", &created.id).await.unwrap();
    assert!(store.list("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let mut bad = input("SELLER1");
    bad.aws_secret_key = "   ".to_string();

    let err = store.create("alice", bad).await.unwrap_err();
    assert!(matches!(err, CredentialError::MissingField("aws_secret_key")));
    assert!(store.list("alice").await.unwrap().is_empty());
}
