//! Initial-state source abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::SettingKey;

/// Supplies the server-side state an admin view starts from.
///
/// Read once when the editor is initialized.
#[async_trait]
pub trait InitialStateSource: Send + Sync {
    /// Configured server addresses for `key`, `None` if nothing is configured
    async fn initial_servers(&self, key: &SettingKey) -> CoreResult<Option<Vec<String>>>;
}
