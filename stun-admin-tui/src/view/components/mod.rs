//! UI components

pub mod header;
pub mod help;
pub mod server_list;
pub mod statusbar;
