//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, EditMessage, ListMessage};
use crate::model::{App, InputMode};

/// Wait up to `timeout` for a terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        // only presses; Windows also reports releases
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.mode {
        InputMode::Editing(_) => handle_edit_keys(key),
        InputMode::Normal => handle_list_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::BACK.matches(&key) {
        AppMessage::ClearStatus
    } else if DefaultKeymap::any(&DefaultKeymap::UP, &key) {
        AppMessage::List(ListMessage::SelectPrevious)
    } else if DefaultKeymap::any(&DefaultKeymap::DOWN, &key) {
        AppMessage::List(ListMessage::SelectNext)
    } else if DefaultKeymap::FIRST.matches(&key) {
        AppMessage::List(ListMessage::SelectFirst)
    } else if DefaultKeymap::LAST.matches(&key) {
        AppMessage::List(ListMessage::SelectLast)
    } else if DefaultKeymap::any(&DefaultKeymap::ADD, &key) {
        AppMessage::List(ListMessage::AddRow)
    } else if DefaultKeymap::any(&DefaultKeymap::DELETE, &key) {
        AppMessage::List(ListMessage::RemoveSelected)
    } else if DefaultKeymap::any(&DefaultKeymap::EDIT, &key) {
        AppMessage::List(ListMessage::EditSelected)
    } else {
        AppMessage::Noop
    }
}

fn handle_edit_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::FINISH.matches(&key) {
        EditMessage::Finish
    } else if DefaultKeymap::REVERT.matches(&key) {
        EditMessage::Revert
    } else if DefaultKeymap::BACKSPACE.matches(&key) {
        EditMessage::Backspace
    } else if DefaultKeymap::CLEAR.matches(&key) {
        EditMessage::Clear
    } else {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                EditMessage::Input(c)
            }
            _ => return AppMessage::Noop,
        }
    };
    AppMessage::Edit(msg)
}
