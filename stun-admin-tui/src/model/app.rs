//! Application state

use stun_admin_core::services::StunServerListEditor;
use stun_admin_core::types::SaveState;

use super::{EditState, InputMode};
use crate::i18n::Translations;
use crate::view::theme::ThemeColors;

/// Application state
pub struct App {
    pub should_quit: bool,

    /// Shared handle; saving happens on the runtime behind it
    pub editor: StunServerListEditor,

    /// Rows as of the last `refresh`
    pub rows: Vec<String>,

    /// Save state as of the last `refresh`
    pub save_state: SaveState,

    /// Selected row
    pub selected: usize,

    pub mode: InputMode,

    /// Status bar message
    pub status_message: Option<String>,

    /// Advances once per main loop iteration, drives the spinner
    pub tick: usize,

    pub texts: &'static Translations,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(
        editor: StunServerListEditor,
        texts: &'static Translations,
        colors: ThemeColors,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            rows: Vec::new(),
            save_state: SaveState::default(),
            editor,
            selected: 0,
            mode: InputMode::Normal,
            status_message: None,
            tick: 0,
            texts,
            colors,
        };
        app.refresh();
        app
    }

    /// Pull rows and save state from the editor and keep the selection valid.
    pub fn refresh(&mut self) {
        self.rows = self.editor.servers();
        self.save_state = self.editor.save_state();
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    pub fn editing(&self) -> Option<&EditState> {
        match &self.mode {
            InputMode::Editing(edit) => Some(edit),
            InputMode::Normal => None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
