//! Row list updates

use crate::message::ListMessage;
use crate::model::{App, EditState, InputMode};

pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => {
            app.selected = app.selected.saturating_sub(1);
        }
        ListMessage::SelectNext => {
            if app.selected + 1 < app.rows.len() {
                app.selected += 1;
            }
        }
        ListMessage::SelectFirst => {
            app.selected = 0;
        }
        ListMessage::SelectLast => {
            app.selected = app.rows.len().saturating_sub(1);
        }
        ListMessage::AddRow => {
            let row = app.editor.add_row();
            app.refresh();
            app.selected = row;
            app.mode = InputMode::Editing(EditState::new(row, String::new()));
        }
        ListMessage::RemoveSelected => remove_selected(app),
        ListMessage::EditSelected => {
            if let Some(text) = app.editor.get(app.selected) {
                app.mode = InputMode::Editing(EditState::new(app.selected, text));
            }
        }
    }
}

/// The delete affordance is hidden while a save is running, so the key does
/// nothing then either.
fn remove_selected(app: &mut App) {
    if app.editor.save_state().loading {
        app.set_status(app.texts.status.delete_while_saving);
        return;
    }

    let was_last = app.editor.len() == 1;
    match app.editor.remove_row(app.selected) {
        Ok(()) if was_last => app.set_status(app.texts.status.default_restored),
        Ok(()) => app.clear_status(),
        Err(e) => {
            tracing::warn!("Failed to remove STUN server row {}: {e}", app.selected);
            let message = format!("{}: {e}", app.texts.common.error);
            app.set_status(message);
        }
    }
    app.refresh();
}
