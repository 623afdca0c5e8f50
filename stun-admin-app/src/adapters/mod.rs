//! Storage adapters for frontends (TUI, CLI).

mod json_file_store;

pub use json_file_store::JsonFileSettingsStore;

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
