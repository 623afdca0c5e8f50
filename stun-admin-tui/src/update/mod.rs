//! Update layer
//!
//! The only place the model changes. Row operations go straight to the
//! editor, which schedules the debounced save on its own.

mod edit;
mod list;

use crate::message::AppMessage;
use crate::model::App;

/// Apply one message to the model
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::List(list_msg) => list::update(app, list_msg),
        AppMessage::Edit(edit_msg) => edit::update(app, edit_msg),
        AppMessage::ClearStatus => app.clear_status(),
        AppMessage::Noop => {}
    }
}
