//! Save progress shown next to the server list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transient save feedback for the editor.
///
/// `saved` is only set right after a successful save and is cleared again
/// once the display duration elapses; `loading` is only set while a save is
/// in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub loading: bool,
    pub saved: bool,
    /// A debounced save is waiting for the quiescence window to elapse
    pub pending: bool,
    /// Message of the last failed save, cleared by the next edit or success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_saved_at: Option<DateTime<Utc>>,
}

/// Editor state machine position derived from a [`SaveState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorPhase {
    Idle,
    EditingPending,
    Saving,
    Saved,
}

impl SaveState {
    /// A pending edit wins over an in-flight save, which wins over the saved indicator.
    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        if self.pending {
            EditorPhase::EditingPending
        } else if self.loading {
            EditorPhase::Saving
        } else if self.saved {
            EditorPhase::Saved
        } else {
            EditorPhase::Idle
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
