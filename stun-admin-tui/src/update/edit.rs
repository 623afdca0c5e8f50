//! Inline editing updates
//!
//! Every keystroke that changes the text is written to the editor right
//! away; the editor's debounce turns a burst of keystrokes into one save.

use crate::message::EditMessage;
use crate::model::{App, InputMode};

pub fn update(app: &mut App, msg: EditMessage) {
    let InputMode::Editing(edit) = &mut app.mode else {
        return;
    };
    let row = edit.row;

    match msg {
        EditMessage::Input(c) => {
            edit.buffer.push(c);
            let text = edit.buffer.clone();
            write_row(app, row, text);
        }
        EditMessage::Backspace => {
            if edit.buffer.pop().is_some() {
                let text = edit.buffer.clone();
                write_row(app, row, text);
            }
        }
        EditMessage::Clear => {
            if !edit.buffer.is_empty() {
                edit.buffer.clear();
                write_row(app, row, String::new());
            }
        }
        EditMessage::Finish => {
            let changed = edit.is_changed();
            app.mode = InputMode::Normal;
            if changed {
                let message = (app.texts.status.row_edited)(row + 1);
                app.set_status(message);
            }
        }
        EditMessage::Revert => {
            let original = edit.is_changed().then(|| edit.original.clone());
            app.mode = InputMode::Normal;
            if let Some(original) = original {
                write_row(app, row, original);
            }
        }
    }

    app.refresh();
}

fn write_row(app: &mut App, row: usize, text: String) {
    if let Err(e) = app.editor.edit_row(row, text) {
        tracing::warn!("Failed to edit STUN server row {row}: {e}");
        let message = format!("{}: {e}", app.texts.common.error);
        app.set_status(message);
        app.mode = InputMode::Normal;
    }
}
