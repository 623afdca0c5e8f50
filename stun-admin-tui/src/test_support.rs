//! Shared helpers for unit tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use stun_admin_app::AppStateBuilder;
use stun_admin_core::error::CoreResult;
use stun_admin_core::traits::{InMemorySettingsStore, SettingsStore};
use stun_admin_core::types::SettingKey;

use crate::i18n::Language;
use crate::model::App;
use crate::view::theme::Theme;

/// In-memory store whose writes take `delay`
pub struct SlowSettingsStore {
    inner: InMemorySettingsStore,
    delay: Duration,
}

impl SlowSettingsStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemorySettingsStore::new(),
            delay,
        }
    }
}

#[async_trait]
impl SettingsStore for SlowSettingsStore {
    async fn get_value(&self, key: &SettingKey) -> CoreResult<Option<String>> {
        self.inner.get_value(key).await
    }

    async fn set_value(&self, key: &SettingKey, value: &str) -> CoreResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.set_value(key, value).await
    }

    async fn delete_value(&self, key: &SettingKey) -> CoreResult<()> {
        self.inner.delete_value(key).await
    }
}

/// English, dark-themed app over `store`, seeded with `initial` when given
pub async fn test_app_with_store(
    store: Arc<dyn SettingsStore>,
    initial: Option<&[&str]>,
) -> App {
    if let Some(initial) = initial {
        let encoded = serde_json::to_string(initial).unwrap();
        store
            .set_value(&SettingKey::default(), &encoded)
            .await
            .unwrap();
    }

    let state = AppStateBuilder::new()
        .settings_store(store)
        .build()
        .expect("app state");
    let editor = state.open_editor().await.expect("editor");

    App::new(
        editor,
        Language::EnUs.translations(),
        Theme::Dark.colors(),
    )
}

pub async fn test_app(initial: Option<&[&str]>) -> (App, Arc<InMemorySettingsStore>) {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = test_app_with_store(store.clone(), initial).await;
    (app, store)
}
