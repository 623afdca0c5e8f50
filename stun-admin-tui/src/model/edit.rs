//! Inline row editing state

/// What keystrokes currently act on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate and run list actions
    #[default]
    Normal,
    /// Keys go into the text of one row
    Editing(EditState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub row: usize,
    pub buffer: String,
    /// Text before editing started, restored on revert
    pub original: String,
}

impl EditState {
    pub fn new(row: usize, original: String) -> Self {
        Self {
            row,
            buffer: original.clone(),
            original,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.buffer != self.original
    }
}
