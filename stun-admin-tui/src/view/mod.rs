//! View layer
//!
//! Pure rendering from `App`; nothing here changes state.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
