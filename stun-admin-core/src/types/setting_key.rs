//! Setting key type definition

use serde::{Deserialize, Serialize};

/// Namespace the admin panel reads and writes its settings under
pub const DEFAULT_NAMESPACE: &str = "groupchat-app";

/// Setting name of the configured STUN server list
pub const STUN_SERVERS_KEY: &str = "stun_servers";

/// Setting key (composite of namespace and setting name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingKey {
    pub namespace: String,
    pub name: String,
}

impl SettingKey {
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Key of the STUN server list within `namespace`
    #[must_use]
    pub fn stun_servers(namespace: impl Into<String>) -> Self {
        Self::new(namespace, STUN_SERVERS_KEY)
    }

    /// Flat storage key (format: `namespace::name`)
    #[must_use]
    pub fn to_storage_key(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }

    /// Parse a flat storage key
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        let (namespace, name) = key.split_once("::")?;
        if namespace.is_empty() || name.is_empty() || name.contains("::") {
            return None;
        }
        Some(Self::new(namespace, name))
    }
}

impl Default for SettingKey {
    fn default() -> Self {
        Self::stun_servers(DEFAULT_NAMESPACE)
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
