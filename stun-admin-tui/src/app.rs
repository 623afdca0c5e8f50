//! Main loop
//!
//! Roughly every 100 ms (sooner on input):
//! refresh the model from the editor, draw, then turn at most one terminal
//! event into a message and apply it. Saves run on the tokio runtime in the
//! background, so the refresh is what makes their progress visible.

use std::time::Duration;

use anyhow::{Context, Result};
use stun_admin_core::services::StunServerListEditor;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.refresh();
        app.tick = app.tick.wrapping_add(1);

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// Save pending edits, then report how the main loop ended.
///
/// Runs even when the loop failed, so an edit still waiting for its debounce
/// window is not lost on a draw or input error.
pub async fn save_before_exit(
    editor: &StunServerListEditor,
    run_result: Result<()>,
) -> Result<()> {
    let flushed = editor.flush().await;
    if let Err(e) = &flushed {
        tracing::error!("Failed to save STUN servers on exit: {e}");
    }
    run_result?;
    flushed.context("Failed to save STUN servers")
}
