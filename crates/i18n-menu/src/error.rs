//! Menu error types.

use thiserror::Error;

use crate::command::CommandId;

/// Errors reported by the command menu.
///
/// The menu has no failure states of its own; these only surface when an
/// adapter hands back something the current rendering does not contain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MenuError {
    /// A native menu event id that does not name any command.
    #[error("Unknown menu event id: {0}")]
    UnknownEventId(String),

    /// A command that is not part of the current rendering, typically an
    /// open-recent entry from before the list was replaced.
    #[error("Command is not in the current menu: {0:?}")]
    UnknownCommand(CommandId),
}

/// Result alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
