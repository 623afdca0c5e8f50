//! Server-side STUN configuration service

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{InitialStateSource, ServerListPersister, SettingsStore};
use crate::types::{IceServer, SettingKey, DEFAULT_STUN_SERVER};

/// How the stored STUN list is interpreted
#[derive(Debug, Clone)]
pub struct StunConfigOptions {
    /// Setting holding the JSON-encoded list
    pub key: SettingKey,
    /// Used when nothing (or nothing usable) is stored
    pub default_server: String,
    /// When `false` the public default server is dropped from the effective list
    pub has_internet_connection: bool,
}

impl Default for StunConfigOptions {
    fn default() -> Self {
        Self {
            key: SettingKey::default(),
            default_server: DEFAULT_STUN_SERVER.to_string(),
            has_internet_connection: true,
        }
    }
}

/// Reads and writes the configured STUN servers.
pub struct StunConfigService {
    store: Arc<dyn SettingsStore>,
    options: StunConfigOptions,
}

impl StunConfigService {
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>, options: StunConfigOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &StunConfigOptions {
        &self.options
    }

    /// Effective server list.
    ///
    /// A missing, malformed or empty stored value yields the default server.
    /// Without an internet connection the default server is filtered out,
    /// which may leave the list empty.
    pub async fn get_stun_servers(&self) -> CoreResult<Vec<String>> {
        let raw = self.store.get_value(&self.options.key).await?;

        let mut servers = match raw {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                log::warn!(
                    "Ignoring malformed value for {}: {e}",
                    self.options.key
                );
                Vec::new()
            }),
            None => Vec::new(),
        };

        if servers.is_empty() {
            servers.push(self.options.default_server.clone());
        }

        if !self.options.has_internet_connection {
            servers.retain(|server| *server != self.options.default_server);
        }

        Ok(servers)
    }

    /// Store `servers` verbatim as a JSON array
    pub async fn set_stun_servers(&self, servers: &[String]) -> CoreResult<()> {
        let encoded = serde_json::to_string(servers)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store.set_value(&self.options.key, &encoded).await?;
        log::info!(
            "Stored {} STUN server(s) under {}",
            servers.len(),
            self.options.key
        );
        Ok(())
    }

    /// Drop the stored list so the default applies again
    pub async fn reset_stun_servers(&self) -> CoreResult<()> {
        self.store.delete_value(&self.options.key).await
    }

    /// ICE server configuration handed to WebRTC clients
    pub async fn ice_servers(&self) -> CoreResult<Vec<IceServer>> {
        let servers = self.get_stun_servers().await?;
        Ok(vec![IceServer::stun(&servers)])
    }
}

#[async_trait]
impl InitialStateSource for StunConfigService {
    async fn initial_servers(&self, key: &SettingKey) -> CoreResult<Option<Vec<String>>> {
        if *key != self.options.key {
            log::debug!("No initial state provided for {key}");
            return Ok(None);
        }
        self.get_stun_servers()
            .await
            .map(Some)
            .map_err(|e| CoreError::InitialStateUnavailable(e.to_string()))
    }
}

#[async_trait]
impl ServerListPersister for StunConfigService {
    async fn persist(&self, servers: &[String]) -> CoreResult<()> {
        self.set_stun_servers(servers).await
    }
}
