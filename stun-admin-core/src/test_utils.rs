//! Test helper module
//!
//! Provides mock implementations of the storage traits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{InitialStateSource, ServerListPersister, SettingsStore};
use crate::types::SettingKey;

// ===== MockSettingsStore =====

pub struct MockSettingsStore {
    values: RwLock<HashMap<SettingKey, String>>,
    /// If Some, every operation returns this error
    error: RwLock<Option<String>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            error: RwLock::new(None),
        }
    }

    pub fn insert(&self, key: &SettingKey, value: &str) {
        self.values
            .try_write()
            .unwrap()
            .insert(key.clone(), value.to_string());
    }

    pub fn raw(&self, key: &SettingKey) -> Option<String> {
        self.values.try_read().unwrap().get(key).cloned()
    }

    pub fn set_error(&self, err: Option<String>) {
        *self.error.try_write().unwrap() = err;
    }

    async fn check(&self) -> CoreResult<()> {
        match *self.error.read().await {
            Some(ref msg) => Err(CoreError::StorageError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>> {
        self.check().await?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()> {
        self.check().await?;
        self.values
            .write()
            .await
            .insert(key.clone(), value.to_string());
        Ok(())
    }

    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()> {
        self.check().await?;
        self.values.write().await.remove(key);
        Ok(())
    }
}

// ===== StaticInitialState =====

pub struct StaticInitialState {
    result: Result<Option<Vec<String>>, String>,
}

impl StaticInitialState {
    pub fn new(servers: Option<Vec<String>>) -> Self {
        Self {
            result: Ok(servers),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(msg.to_string()),
        }
    }
}

#[async_trait]
impl InitialStateSource for StaticInitialState {
    async fn initial_servers(&self, _key: &SettingKey) -> CoreResult<Option<Vec<String>>> {
        self.result
            .clone()
            .map_err(CoreError::StorageError)
    }
}

// ===== RecordingPersister =====

/// Records every completed persist call; optionally slow or failing.
pub struct RecordingPersister {
    calls: RwLock<Vec<Vec<String>>>,
    delay: RwLock<Duration>,
    error: RwLock<Option<String>>,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl RecordingPersister {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            delay: RwLock::new(Duration::ZERO),
            error: RwLock::new(None),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }

    pub async fn set_error(&self, err: Option<String>) {
        *self.error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Highest number of persist calls observed running at once
    pub fn max_concurrency(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServerListPersister for RecordingPersister {
    async fn persist(&self, servers: &[String]) -> CoreResult<()> {
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.active.fetch_sub(1, Ordering::SeqCst);

        if let Some(ref msg) = *self.error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.calls.write().await.push(servers.to_vec());
        Ok(())
    }
}
