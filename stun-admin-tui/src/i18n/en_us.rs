//! English translations (en-US)

use super::keys::{CommonTexts, HintTexts, StatusTexts, StunTexts, Translations};

fn server_count(n: usize) -> String {
    if n == 1 {
        "1 STUN server".to_string()
    } else {
        format!("{n} STUN servers")
    }
}

fn row_edited(row: usize) -> String {
    format!("Edited row {row}")
}

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "STUN Admin",
        add: "Add",
        saving: "Saving...",
        saved: "Saved",
        error: "Error",
    },
    stun: StunTexts {
        title: "STUN servers",
        help: "A STUN server is used to determine the public IP address of participants behind a router.",
        placeholder: "stunserver:port",
        input_label: "STUN server URL",
        server_count,
    },
    hints: HintTexts {
        select: "Select",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        clear: "Clear",
        finish: "Done",
        revert: "Revert",
        quit: "Quit",
    },
    status: StatusTexts {
        default_restored: "You deleted all STUN servers. As it is almost always needed, a default STUN server was added.",
        delete_while_saving: "Wait for the save to finish before deleting",
        initial_state_failed: "Could not load the configured STUN servers",
        row_edited,
    },
};
