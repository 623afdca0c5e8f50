#![cfg(feature = "sqlite-store")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `SqliteStore` as a `SettingsStore`.

use stun_admin_app::adapters::SqliteStore;
use stun_admin_core::traits::SettingsStore;
use stun_admin_core::types::SettingKey;

// ===== Helpers =====

async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = tmp.path().join("test.db");
    let store = SqliteStore::new(&db_path)
        .await
        .expect("failed to create SqliteStore");
    (store, tmp)
}

// ===== SettingsStore =====

#[tokio::test]
async fn get_missing_value_returns_none() {
    let (store, _tmp) = create_test_store().await;
    assert!(store
        .get_value(&SettingKey::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn set_then_get() {
    let (store, _tmp) = create_test_store().await;
    let key = SettingKey::default();

    store.set_value(&key, r#"["a:1","b:2"]"#).await.unwrap();

    assert_eq!(
        store.get_value(&key).await.unwrap().as_deref(),
        Some(r#"["a:1","b:2"]"#)
    );
}

#[tokio::test]
async fn set_overwrites_existing_value() {
    let (store, _tmp) = create_test_store().await;
    let key = SettingKey::default();

    store.set_value(&key, "first").await.unwrap();
    store.set_value(&key, "second").await.unwrap();

    assert_eq!(store.get_value(&key).await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn keys_are_scoped_by_namespace() {
    let (store, _tmp) = create_test_store().await;
    let ours = SettingKey::stun_servers("groupchat-app");
    let theirs = SettingKey::stun_servers("other-app");

    store.set_value(&ours, "ours").await.unwrap();

    assert_eq!(store.get_value(&ours).await.unwrap().as_deref(), Some("ours"));
    assert!(store.get_value(&theirs).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_value_is_idempotent() {
    let (store, _tmp) = create_test_store().await;
    let key = SettingKey::default();

    store.set_value(&key, "x").await.unwrap();
    store.delete_value(&key).await.unwrap();
    store.delete_value(&key).await.unwrap();

    assert!(store.get_value(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn reopening_keeps_values_and_reruns_migrations() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("data").join("test.db");
    let key = SettingKey::default();

    {
        let store = SqliteStore::new(&db_path).await.unwrap();
        store.set_value(&key, "kept").await.unwrap();
    }

    let store = SqliteStore::new(&db_path).await.unwrap();
    assert_eq!(store.get_value(&key).await.unwrap().as_deref(), Some("kept"));
}
