//! `SettingsStore` backed by a JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use stun_admin_core::error::{CoreError, CoreResult};
use stun_admin_core::traits::SettingsStore;
use stun_admin_core::types::SettingKey;

/// namespace -> name -> value
type SettingsMap = BTreeMap<String, BTreeMap<String, String>>;

/// Settings persisted as one JSON document, grouped by namespace:
///
/// ```json
/// { "groupchat-app": { "stun_servers": "[\"stun.example.com:443\"]" } }
/// ```
///
/// The file is read once and cached; writes go to a temporary file that is
/// renamed over the original.
pub struct JsonFileSettingsStore {
    path: PathBuf,
    cache: Mutex<Option<SettingsMap>>,
}

impl JsonFileSettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_from_file(&self) -> CoreResult<SettingsMap> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SettingsMap::new()),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(SettingsMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CoreError::SerializationError(format!("Invalid settings file {}: {e}", self.path.display()))
        })
    }

    async fn save_to_file(&self, settings: &SettingsMap) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
            }
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write settings: {e}")))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to replace settings file: {e}")))?;

        Ok(())
    }

    /// Run `f` against the cached settings, loading them first if needed.
    async fn with_settings<T>(
        &self,
        f: impl FnOnce(&mut SettingsMap) -> (T, bool),
    ) -> CoreResult<T> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        let Some(settings) = cache.as_mut() else {
            return Err(CoreError::StorageError("settings cache unavailable".to_string()));
        };

        // the cache only changes once the file write succeeded
        let mut next = settings.clone();
        let (value, dirty) = f(&mut next);
        if dirty {
            self.save_to_file(&next).await?;
            *settings = next;
        }
        Ok(value)
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>> {
        self.with_settings(|settings| {
            let value = settings
                .get(&key.namespace)
                .and_then(|ns| ns.get(&key.name))
                .cloned();
            (value, false)
        })
        .await
    }

    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()> {
        self.with_settings(|settings| {
            settings
                .entry(key.namespace.clone())
                .or_default()
                .insert(key.name.clone(), value.to_string());
            ((), true)
        })
        .await
    }

    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()> {
        self.with_settings(|settings| {
            let Some(ns) = settings.get_mut(&key.namespace) else {
                return ((), false);
            };
            let removed = ns.remove(&key.name).is_some();
            if ns.is_empty() {
                settings.remove(&key.namespace);
            }
            ((), removed)
        })
        .await
    }
}
