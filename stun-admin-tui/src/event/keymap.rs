//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // list
    pub const UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const ADD: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Char('a')),
        KeyBinding::alt(KeyCode::Char('a')),
    ];
    pub const DELETE: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Char('d')),
        KeyBinding::key(KeyCode::Delete),
        KeyBinding::alt(KeyCode::Char('d')),
    ];
    pub const EDIT: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Enter),
        KeyBinding::key(KeyCode::Char('e')),
    ];

    // edit mode
    pub const FINISH: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const REVERT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const CLEAR: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    pub fn any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
        bindings.iter().any(|binding| binding.matches(key))
    }
}
