//! Resource formats a locale can be added in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format of a translation resource bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Plain JSON file per locale.
    Json,
    /// ES6 module exporting the translations.
    Es6,
}

impl ResourceType {
    /// All formats, in menu order.
    pub const ALL: [ResourceType; 2] = [ResourceType::Json, ResourceType::Es6];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Es6 => "ES6",
        }
    }

    /// Stable lowercase key used in event ids and settings.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Es6 => "es6",
        }
    }

    /// Parse a key produced by [`ResourceType::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.key() == key)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
