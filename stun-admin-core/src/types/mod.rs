//! Type definitions

mod ice;
mod save_state;
mod server_list;
mod setting_key;

pub use ice::IceServer;
pub use save_state::{EditorPhase, SaveState};
pub use server_list::{ServerList, DEFAULT_STUN_SERVER};
pub use setting_key::{SettingKey, DEFAULT_NAMESPACE, STUN_SERVERS_KEY};
