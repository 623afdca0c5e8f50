//! Row list messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Append an empty row and start editing it
    AddRow,
    RemoveSelected,
    EditSelected,
}
