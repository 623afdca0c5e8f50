//! Model layer: application state
//!
//! `App` owns the editor handle plus everything the view needs to draw a
//! frame: selection, the row being edited, the latest save state and the
//! injected translations and colors.

mod app;
mod edit;

pub use app::App;
pub use edit::{EditState, InputMode};
