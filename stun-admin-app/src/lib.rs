//! Platform-agnostic application bootstrap for STUN server administration.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Storage adapters live in [`adapters`].

pub mod adapters;

use std::sync::Arc;

use stun_admin_core::error::{CoreError, CoreResult};
use stun_admin_core::services::{
    EditorOptions, ServiceContext, StunConfigOptions, StunConfigService, StunServerListEditor,
};
use stun_admin_core::traits::{InitialStateSource, ServerListPersister, SettingsStore};

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and the STUN configuration service. Every
/// frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the storage adapter)
    pub ctx: Arc<ServiceContext>,
    /// STUN configuration service
    pub stun_config_service: Arc<StunConfigService>,
    editor_options: EditorOptions,
}

impl AppState {
    /// Editor options every editor from [`new_editor`](Self::new_editor) uses
    pub fn editor_options(&self) -> &EditorOptions {
        &self.editor_options
    }

    /// Create an editor reading from and saving to the STUN configuration service.
    ///
    /// The editor still has to be initialized.
    #[must_use]
    pub fn new_editor(&self) -> StunServerListEditor {
        let source: Arc<dyn InitialStateSource> = self.stun_config_service.clone();
        let persister: Arc<dyn ServerListPersister> = self.stun_config_service.clone();
        StunServerListEditor::new(source, persister, self.editor_options.clone())
    }

    /// Create and initialize an editor.
    ///
    /// An unavailable initial state is logged and the editor starts from the
    /// placeholder row; any other error is returned.
    pub async fn open_editor(&self) -> CoreResult<StunServerListEditor> {
        let editor = self.new_editor();
        match editor.initialize().await {
            Ok(()) => {}
            Err(CoreError::InitialStateUnavailable(msg)) => {
                log::warn!("Starting with the default STUN server: {msg}");
            }
            Err(e) => return Err(e),
        }
        Ok(editor)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `settings_store`: where the STUN list is stored
///
/// # Optional
/// - `stun_options`: defaults to `StunConfigOptions::default()`
/// - `editor_options`: defaults to `EditorOptions::default()`
///
/// The editor reads the setting the STUN service writes and falls back to the
/// same default server, so `key` and `default_server` of the editor options
/// are taken from the STUN options.
pub struct AppStateBuilder {
    settings_store: Option<Arc<dyn SettingsStore>>,
    stun_options: Option<StunConfigOptions>,
    editor_options: Option<EditorOptions>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_store: None,
            stun_options: None,
            editor_options: None,
        }
    }

    #[must_use]
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    #[must_use]
    pub fn stun_options(mut self, options: StunConfigOptions) -> Self {
        self.stun_options = Some(options);
        self
    }

    #[must_use]
    pub fn editor_options(mut self, options: EditorOptions) -> Self {
        self.editor_options = Some(options);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let settings_store = self.settings_store.ok_or_else(|| {
            CoreError::ValidationError("settings_store is required".to_string())
        })?;
        let stun_options = self.stun_options.unwrap_or_default();
        let mut editor_options = self.editor_options.unwrap_or_default();

        editor_options.key = stun_options.key.clone();
        editor_options.default_server = stun_options.default_server.clone();

        let ctx = Arc::new(ServiceContext::new(settings_store));
        let stun_config_service = Arc::new(ctx.stun_config_service(stun_options));

        log::debug!(
            "App state ready: key={}, debounce={:?}",
            editor_options.key,
            editor_options.save_debounce
        );

        Ok(AppState {
            ctx,
            stun_config_service,
            editor_options,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
