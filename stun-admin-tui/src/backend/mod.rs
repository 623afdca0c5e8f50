//! Backend layer: storage selection and service bootstrap

use std::sync::Arc;

use anyhow::{Context, Result};
use stun_admin_app::adapters::JsonFileSettingsStore;
use stun_admin_app::{AppState, AppStateBuilder};
use stun_admin_core::traits::{InMemorySettingsStore, SettingsStore};

use crate::config::{Config, StorageBackend};

/// Open the store the configuration names
pub async fn open_settings_store(config: &Config) -> Result<Arc<dyn SettingsStore>> {
    let store: Arc<dyn SettingsStore> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, changes are lost on exit");
            Arc::new(InMemorySettingsStore::new())
        }
        StorageBackend::Json => {
            let path = config.storage_path()?;
            tracing::info!("Using JSON settings file {}", path.display());
            Arc::new(JsonFileSettingsStore::new(path))
        }
        StorageBackend::Sqlite => open_sqlite(config).await?,
    };
    Ok(store)
}

#[cfg(feature = "sqlite-store")]
async fn open_sqlite(config: &Config) -> Result<Arc<dyn SettingsStore>> {
    let path = config.storage_path()?;
    tracing::info!("Using SQLite settings database {}", path.display());
    let store = stun_admin_app::adapters::SqliteStore::new(&path)
        .await
        .context("Failed to open SQLite settings database")?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "sqlite-store"))]
async fn open_sqlite(_config: &Config) -> Result<Arc<dyn SettingsStore>> {
    anyhow::bail!("SQLite storage needs a build with the `sqlite-store` feature")
}

/// Build the service container for `config`
pub async fn build_app_state(config: &Config) -> Result<AppState> {
    let store = open_settings_store(config).await?;
    AppStateBuilder::new()
        .settings_store(store)
        .stun_options(config.stun_options())
        .editor_options(config.editor_options())
        .build()
        .context("Failed to build application state")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use stun_admin_core::types::SettingKey;

    use super::*;

    #[tokio::test]
    async fn json_backend_uses_configured_path() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.path = Some(tmp.path().join("stun.json"));

        let state = build_app_state(&config).await.unwrap();
        state
            .stun_config_service
            .set_stun_servers(&["a:1".to_string()])
            .await
            .unwrap();

        assert!(tmp.path().join("stun.json").exists());
        assert_eq!(
            state
                .ctx
                .settings_store()
                .get_value(&SettingKey::default())
                .await
                .unwrap()
                .as_deref(),
            Some(r#"["a:1"]"#)
        );
    }

    #[tokio::test]
    async fn config_reaches_editor_options() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Memory;
        config.editor.debounce_ms = 42;

        let state = build_app_state(&config).await.unwrap();
        assert_eq!(
            state.editor_options().save_debounce,
            std::time::Duration::from_millis(42)
        );
    }

    #[cfg(not(feature = "sqlite-store"))]
    #[tokio::test]
    async fn sqlite_without_feature_is_an_error() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Sqlite;
        config.storage.path = Some(std::path::PathBuf::from("unused.db"));

        assert!(open_settings_store(&config).await.is_err());
    }
}
