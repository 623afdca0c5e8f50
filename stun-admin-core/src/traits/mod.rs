//! Storage layer abstraction trait definition

mod initial_state_source;
mod server_list_persister;
mod settings_store;

pub use initial_state_source::InitialStateSource;
pub use server_list_persister::ServerListPersister;
pub use settings_store::{InMemorySettingsStore, SettingsStore};
