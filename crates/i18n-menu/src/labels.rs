//! Menu titles, item labels and mnemonics.
//!
//! Defaults are English. Every label can be overridden from the `[menu.labels]`
//! settings table; fields that are left out keep their default.

use serde::{Deserialize, Serialize};

/// Display text plus optional mnemonic character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<char>,
}

impl Label {
    pub fn new(text: impl Into<String>, mnemonic: char) -> Self {
        Self {
            text: text.into(),
            mnemonic: Some(mnemonic),
        }
    }
}

/// Labels for every menu and command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLabels {
    pub file: Label,
    pub open: Label,
    pub open_recent: Label,
    pub save: Label,
    pub reload: Label,
    pub exit: Label,
    pub edit: Label,
    pub add_locale: Label,
    pub add_locale_json: Label,
    pub add_locale_es6: Label,
    pub add_translation: Label,
    pub help: Label,
    pub about: Label,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            file: Label::new("File", 'F'),
            open: Label::new("Open Resources...", 'O'),
            open_recent: Label::new("Open Recent", 'R'),
            save: Label::new("Save", 'S'),
            reload: Label::new("Reload", 'L'),
            exit: Label::new("Exit", 'X'),
            edit: Label::new("Edit", 'E'),
            add_locale: Label::new("Add Locale", 'L'),
            add_locale_json: Label::new("JSON Format...", 'J'),
            add_locale_es6: Label::new("ES6 Format...", 'E'),
            add_translation: Label::new("Add Translation...", 'T'),
            help: Label::new("Help", 'H'),
            about: Label::new(format!("About {}", crate::about::PRODUCT_NAME), 'A'),
        }
    }
}
