//! Server list persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Durably stores the full server list on behalf of the editor.
#[async_trait]
pub trait ServerListPersister: Send + Sync {
    /// Store `servers`, replacing whatever was stored before
    async fn persist(&self, servers: &[String]) -> CoreResult<()>;
}
