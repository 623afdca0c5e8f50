//! Event layer
//!
//! Turns terminal input into messages. Which keys mean what depends on the
//! input mode: in normal mode keys run list actions, in edit mode printable
//! keys become text.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
