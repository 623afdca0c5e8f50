//! Key/value settings persistence abstract Trait

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::SettingKey;

/// Application settings store Trait
///
/// Values are opaque strings; callers encode structured values (such as the
/// STUN server list) as JSON.
///
/// Platform implementation:
/// - In-memory: `InMemorySettingsStore`
/// - File: `JsonFileSettingsStore` (`stun-admin-app`)
/// - `SQLite`: `SqliteStore` (`stun-admin-app`, feature `sqlite-store`)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value, `None` if it was never set
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>>;

    /// Write a value (insert or overwrite)
    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()>;

    /// Delete a value; deleting a missing key is not an error
    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()>;
}

/// Process-local settings store
#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<SettingKey, String>>,
}

impl InMemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `values`
    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = (SettingKey, String)>) -> Self {
        Self {
            values: RwLock::new(values.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.clone(), value.to_string());
        Ok(())
    }

    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let store = InMemorySettingsStore::new();
        let key = SettingKey::default();
        assert_eq!(store.get_value(&key).await.unwrap(), None);

        store.set_value(&key, r#"["a:1"]"#).await.unwrap();
        assert_eq!(
            store.get_value(&key).await.unwrap().as_deref(),
            Some(r#"["a:1"]"#)
        );

        store.delete_value(&key).await.unwrap();
        assert_eq!(store.get_value(&key).await.unwrap(), None);
        store.delete_value(&key).await.unwrap();
    }
}
