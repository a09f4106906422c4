//! String identifiers for native menu items.
//!
//! Native toolkits such as muda report clicks by item id; these ids map
//! one-to-one onto [`CommandId`]s.

use std::str::FromStr;

use crate::command::CommandId;
use crate::error::MenuError;
use crate::resource::ResourceType;

pub const OPEN: &str = "open";
pub const SAVE: &str = "save";
pub const RELOAD: &str = "reload";
pub const EXIT: &str = "exit";
pub const ADD_TRANSLATION: &str = "add_translation";
pub const ABOUT: &str = "about";

/// Prefix for recent entries (followed by the zero-based index).
pub const RECENT_PREFIX: &str = "recent:";

/// Prefix for add-locale entries (followed by the resource type key).
pub const ADD_LOCALE_PREFIX: &str = "add_locale:";

impl CommandId {
    /// Native menu item id for this command.
    pub fn event_id(&self) -> String {
        match self {
            CommandId::Open => OPEN.to_string(),
            CommandId::OpenRecent(index) => format!("{RECENT_PREFIX}{index}"),
            CommandId::Save => SAVE.to_string(),
            CommandId::Reload => RELOAD.to_string(),
            CommandId::Exit => EXIT.to_string(),
            CommandId::AddLocale(ty) => format!("{ADD_LOCALE_PREFIX}{}", ty.key()),
            CommandId::AddTranslation => ADD_TRANSLATION.to_string(),
            CommandId::About => ABOUT.to_string(),
        }
    }
}

impl FromStr for CommandId {
    type Err = MenuError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if let Some(index) = id.strip_prefix(RECENT_PREFIX) {
            return index
                .parse()
                .map(CommandId::OpenRecent)
                .map_err(|_| MenuError::UnknownEventId(id.to_string()));
        }
        if let Some(key) = id.strip_prefix(ADD_LOCALE_PREFIX) {
            return ResourceType::from_key(key)
                .map(CommandId::AddLocale)
                .ok_or_else(|| MenuError::UnknownEventId(id.to_string()));
        }

        match id {
            OPEN => Ok(CommandId::Open),
            SAVE => Ok(CommandId::Save),
            RELOAD => Ok(CommandId::Reload),
            EXIT => Ok(CommandId::Exit),
            ADD_TRANSLATION => Ok(CommandId::AddTranslation),
            ABOUT => Ok(CommandId::About),
            _ => Err(MenuError::UnknownEventId(id.to_string())),
        }
    }
}
