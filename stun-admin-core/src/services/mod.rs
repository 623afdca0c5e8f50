//! Business logic service layer

mod debounce;
mod server_list_editor;
mod stun_config_service;

pub use debounce::DebounceTimer;
pub use server_list_editor::{
    EditorOptions, StunServerListEditor, DEFAULT_SAVED_DISPLAY, DEFAULT_SAVE_DEBOUNCE,
};
pub use stun_config_service::{StunConfigOptions, StunConfigService};

use std::sync::Arc;

use crate::traits::SettingsStore;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its storage implementation.
pub struct ServiceContext {
    settings_store: Arc<dyn SettingsStore>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(settings_store: Arc<dyn SettingsStore>) -> Self {
        Self { settings_store }
    }

    pub fn settings_store(&self) -> &Arc<dyn SettingsStore> {
        &self.settings_store
    }

    /// STUN configuration service over this context's store
    #[must_use]
    pub fn stun_config_service(&self, options: StunConfigOptions) -> StunConfigService {
        StunConfigService::new(Arc::clone(&self.settings_store), options)
    }
}
