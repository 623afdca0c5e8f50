//! Main application message

use super::{EditMessage, ListMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    /// Row list actions (normal mode)
    List(ListMessage),

    /// Inline editing (edit mode)
    Edit(EditMessage),

    ClearStatus,

    /// Ignored input
    Noop,
}
