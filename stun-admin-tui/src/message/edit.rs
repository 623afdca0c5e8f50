//! Inline editing messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMessage {
    Input(char),
    Backspace,
    /// Empty the row
    Clear,
    /// Leave edit mode keeping the text
    Finish,
    /// Leave edit mode restoring the text from before editing
    Revert,
}
