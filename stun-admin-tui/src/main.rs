//! STUN admin TUI
//!
//! Terminal admin panel for the STUN servers handed to WebRTC clients.
//!
//! Follows the Elm architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: what the user asked for (`message/`)
//! - **Update**: the only place state changes (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: terminal input to messages (`event/`)
//! - **Backend**: storage and service bootstrap (`backend/`)
//!
//! Startup: load config, install logging, start the tokio runtime, open the
//! editor, then run the main loop on the terminal. On quit any pending edit is
//! saved before the process exits.

mod app;
mod backend;
mod config;
mod event;
mod i18n;
mod message;
mod model;
#[cfg(test)]
mod test_support;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use stun_admin_core::error::CoreError;

use config::Config;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let config = Config::load()?;
    let _log_guard = init_logging(&config.log_dir())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    // the editor schedules saves with tokio::spawn from this thread
    let _runtime_guard = runtime.enter();

    let state = runtime.block_on(backend::build_app_state(&config))?;
    let editor = state.new_editor();
    let load_error = match runtime.block_on(editor.initialize()) {
        Ok(()) => None,
        Err(CoreError::InitialStateUnavailable(msg)) => {
            tracing::warn!("Starting with the default STUN server: {msg}");
            Some(msg)
        }
        Err(e) => return Err(e).context("Failed to load STUN servers"),
    };

    let texts = config.language().translations();
    let mut app = model::App::new(editor.clone(), texts, config.ui.theme.colors());
    if load_error.is_some() {
        app.set_status(texts.status.initial_state_failed);
    }

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    runtime.block_on(app::save_before_exit(&editor, result))?;
    restored?;
    tracing::info!("Exiting");
    Ok(())
}
