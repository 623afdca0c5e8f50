//! STUN Admin Core Library
//!
//! Provides the core logic behind the STUN server administration panel:
//! - the editable server list with debounced saving (`StunServerListEditor`)
//! - the server-side configuration service (`StunConfigService`)
//!
//! Storage is abstracted through traits so any frontend can plug in its own
//! persistence.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ServiceContext, StunConfigService, StunServerListEditor};
pub use traits::{InitialStateSource, ServerListPersister, SettingsStore};
