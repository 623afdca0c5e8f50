//! Translation key definitions
//!
//! One struct per UI area so missing strings are caught at compile time.
//! Count-dependent texts are plain `fn` pointers.

/// Root of all translated texts
pub struct Translations {
    pub common: CommonTexts,
    /// STUN server panel
    pub stun: StunTexts,
    /// Keyboard hints in the status bar
    pub hints: HintTexts,
    /// Status bar messages
    pub status: StatusTexts,
}

/// Texts reused in several places
pub struct CommonTexts {
    pub app_name: &'static str,
    pub add: &'static str,
    pub saving: &'static str,
    pub saved: &'static str,
    pub error: &'static str,
}

pub struct StunTexts {
    pub title: &'static str,
    pub help: &'static str,
    /// Shown in an empty row
    pub placeholder: &'static str,
    pub input_label: &'static str,
    /// "N STUN servers"
    pub server_count: fn(usize) -> String,
}

/// Key name + action pairs
pub struct HintTexts {
    pub select: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    /// Empty the row being edited
    pub clear: &'static str,
    pub finish: &'static str,
    pub revert: &'static str,
    pub quit: &'static str,
}

pub struct StatusTexts {
    /// The last row was removed and replaced by the default server
    pub default_restored: &'static str,
    pub delete_while_saving: &'static str,
    pub initial_state_failed: &'static str,
    /// "Edited row N"
    pub row_edited: fn(usize) -> String,
}
