//! Menu settings, stored in the `[menu]` table of the settings file.

use serde::{Deserialize, Serialize};

use crate::labels::MenuLabels;

/// Which key acts as the primary shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutModifier {
    /// Cmd on macOS, Ctrl elsewhere.
    #[default]
    Auto,
    Ctrl,
    /// Cmd / Super / Windows key.
    Meta,
}

impl ShortcutModifier {
    /// Resolve `Auto` for the current platform.
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto if cfg!(target_os = "macos") => Self::Meta,
            Self::Auto => Self::Ctrl,
            other => other,
        }
    }

    /// Name used in shortcut text.
    pub fn display_name(self) -> &'static str {
        match self.resolve() {
            Self::Meta if cfg!(target_os = "macos") => "Cmd",
            Self::Meta => "Super",
            _ => "Ctrl",
        }
    }
}

/// Settings that shape the rendered menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub shortcut_modifier: ShortcutModifier,
    pub labels: MenuLabels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_never_returns_auto() {
        assert_ne!(ShortcutModifier::Auto.resolve(), ShortcutModifier::Auto);
        assert_eq!(ShortcutModifier::Ctrl.resolve(), ShortcutModifier::Ctrl);
        assert_eq!(ShortcutModifier::Ctrl.display_name(), "Ctrl");
    }

    #[test]
    fn empty_table_is_default() {
        let settings: MenuSettings = toml::from_str("").unwrap();
        assert_eq!(settings, MenuSettings::default());
    }

    #[test]
    fn modifier_is_lowercase_in_toml() {
        let settings: MenuSettings = toml::from_str(r#"shortcut_modifier = "meta""#).unwrap();
        assert_eq!(settings.shortcut_modifier, ShortcutModifier::Meta);
    }
}
