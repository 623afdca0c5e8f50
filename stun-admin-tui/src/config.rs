//! Configuration file handling
//!
//! The configuration lives in `<config_dir>/stun-admin/config.toml`; the
//! `STUN_ADMIN_CONFIG` environment variable points at another file. A missing
//! file means defaults, a broken one is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use stun_admin_core::services::{EditorOptions, StunConfigOptions};
use stun_admin_core::types::{SettingKey, DEFAULT_NAMESPACE, DEFAULT_STUN_SERVER};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "STUN_ADMIN_CONFIG";

const APP_DIR: &str = "stun-admin";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub debounce_ms: u64,
    pub saved_display_ms: u64,
    pub default_server: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub namespace: String,
    pub has_internet_connection: bool,
}

/// Where the STUN list is stored
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit
    Memory,
    #[default]
    Json,
    /// Needs the `sqlite-store` feature
    Sqlite,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Defaults to a file in the data directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// BCP 47 code, see `Language::from_code`
    pub language: String,
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            saved_display_ms: 3000,
            default_server: DEFAULT_STUN_SERVER.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            has_internet_connection: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn load_from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::load_from_str(&content)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `$STUN_ADMIN_CONFIG` or the default path.
    ///
    /// An explicitly named file must exist; a missing default file yields the
    /// defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from_file(Path::new(&path));
        }

        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn setting_key(&self) -> SettingKey {
        SettingKey::stun_servers(self.server.namespace.clone())
    }

    pub fn stun_options(&self) -> StunConfigOptions {
        StunConfigOptions {
            key: self.setting_key(),
            default_server: self.editor.default_server.clone(),
            has_internet_connection: self.server.has_internet_connection,
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            key: self.setting_key(),
            save_debounce: Duration::from_millis(self.editor.debounce_ms),
            saved_display: Duration::from_millis(self.editor.saved_display_ms),
            default_server: self.editor.default_server.clone(),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.ui.language).unwrap_or_else(|| {
            tracing::warn!("Unknown language {:?}, using default", self.ui.language);
            Language::default()
        })
    }

    /// Storage file for the configured backend
    pub fn storage_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().context("Failed to determine data directory")?;
        let file = match self.storage.backend {
            StorageBackend::Sqlite => "settings.db",
            StorageBackend::Memory | StorageBackend::Json => "settings.json",
        };
        Ok(data_dir.join(APP_DIR).join(file))
    }

    /// Directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("logs")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.editor.debounce_ms, 1000);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::load_from_str(
            r#"
[editor]
debounce_ms = 250

[server]
has_internet_connection = false

[storage]
backend = "memory"

[ui]
language = "zh-CN"
theme = "light"
"#,
        )
        .unwrap();

        assert_eq!(config.editor.debounce_ms, 250);
        assert_eq!(config.editor.saved_display_ms, 3000);
        assert_eq!(config.editor.default_server, DEFAULT_STUN_SERVER);
        assert!(!config.server.has_internet_connection);
        assert_eq!(config.server.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.language(), Language::ZhCn);
        assert_eq!(config.ui.theme, Theme::Light);
    }

    #[test]
    fn options_share_key_and_default_server() {
        let mut config = Config::default();
        config.server.namespace = "other-app".to_string();
        config.editor.default_server = "stun.internal:3478".to_string();
        config.editor.saved_display_ms = 500;

        let stun = config.stun_options();
        let editor = config.editor_options();
        assert_eq!(stun.key, editor.key);
        assert_eq!(stun.key, SettingKey::stun_servers("other-app"));
        assert_eq!(editor.default_server, "stun.internal:3478");
        assert_eq!(editor.saved_display, Duration::from_millis(500));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Config::load_from_str("[storage]\nbackend = \"redis\"").is_err());
    }

    #[test]
    fn unknown_language_falls_back() {
        let mut config = Config::default();
        config.ui.language = "tlh".to_string();
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn explicit_storage_path_wins() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/tmp/stun.json"));
        assert_eq!(config.storage_path().unwrap(), PathBuf::from("/tmp/stun.json"));
    }

    #[test]
    fn load_from_file_reads_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[editor]\ndefault_server = \"stun.lan:3478\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.editor.default_server, "stun.lan:3478");
    }
}
