//! Message layer
//!
//! Bridges the Event layer and the Update layer: every user action is
//! translated into a message, and only `update` changes the model.

mod app;
mod edit;
mod list;

pub use app::AppMessage;
pub use edit::EditMessage;
pub use list::ListMessage;
