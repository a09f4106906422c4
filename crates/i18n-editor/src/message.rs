//! Application messages.

use std::path::PathBuf;

use i18n_menu::{CommandId, MenuId};
use iced::keyboard;
use iced::window;

/// All messages handled by [`crate::app::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A menu command was selected (in-app menu, native menu or accelerator).
    Menu(CommandId),

    /// Commands selected in the native menu since the last poll.
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    NativeMenu(Vec<CommandId>),

    /// Open or close an in-app dropdown.
    ToggleDropdown(MenuId),

    /// Close any open in-app dropdown.
    CloseDropdown,

    /// Result of the import folder picker.
    FolderPicked(Option<PathBuf>),

    /// Global key press.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// The window's close button was pressed.
    WindowCloseRequested(window::Id),

    /// Close the about panel.
    DismissAbout,

    /// Quit although there are unsaved changes.
    ConfirmClose,

    /// Keep the editor open after a close request.
    CancelClose,

    /// No operation.
    Noop,
}
