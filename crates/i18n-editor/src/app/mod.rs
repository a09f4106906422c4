//! Main application module for the i18n Editor.
//!
//! Iced application using the builder pattern. The architecture follows the
//! Elm pattern: State → Message → Update → View.
//!
//! The menu itself lives in [`i18n_menu::EditorMenu`]; this module owns it,
//! feeds it state changes and turns its controller requests into tasks.
//!
//! # Module Structure
//!
//! - `handler/` - menu command, controller request and keyboard handlers
//! - `subscription` - keyboard, window close and native menu events
//! - `view` - main window, about panel and close confirmation

mod handler;
mod subscription;
mod view;

use std::path::PathBuf;

use i18n_menu::{AboutInfo, ControllerRequest, EditorMenu, ShortcutModifier};
use iced::Task;

use crate::menu::MenuDropdownState;
use crate::message::Message;
use crate::settings::Settings;
use crate::shell::Shell;

/// Application state.
pub struct App {
    /// Menu view state and its rendering.
    pub menu: EditorMenu,

    /// Modifier used for primary accelerators.
    pub shortcut_modifier: ShortcutModifier,

    /// Open in-app dropdown (Windows/Linux).
    pub dropdown: MenuDropdownState,

    /// Open document, recent folders and status line.
    pub shell: Shell,

    /// About panel content while it is shown.
    pub about: Option<AboutInfo>,

    /// Unsaved-changes confirmation is shown.
    pub confirm_close: bool,
}

impl App {
    /// Create the application. A `dir` given on the command line is opened
    /// through the same path as a recent-item selection.
    pub fn new(settings: &Settings, dir: Option<PathBuf>) -> (Self, Task<Message>) {
        let mut app = Self {
            menu: EditorMenu::new(settings.menu.labels.clone()).with_about(about_info()),
            shortcut_modifier: settings.menu.shortcut_modifier.resolve(),
            dropdown: MenuDropdownState::default(),
            shell: Shell::default(),
            about: None,
            confirm_close: false,
        };

        let startup = match dir {
            Some(dir) => {
                app.handle_request(ControllerRequest::ImportFrom(dir.display().to_string()))
            }
            None => Task::none(),
        };
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Menu(id) => self.handle_command(id),

            Message::NativeMenu(ids) => {
                let tasks: Vec<_> = ids.into_iter().map(|id| self.handle_command(id)).collect();
                Task::batch(tasks)
            }

            Message::ToggleDropdown(id) => {
                self.dropdown.toggle(id);
                Task::none()
            }

            Message::CloseDropdown => {
                self.dropdown.close();
                Task::none()
            }

            Message::FolderPicked(Some(path)) => {
                self.handle_request(ControllerRequest::ImportFrom(path.display().to_string()))
            }

            Message::FolderPicked(None) => {
                tracing::debug!("Import cancelled");
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::WindowCloseRequested(id) => {
                tracing::debug!(window = ?id, "Window close requested");
                self.handle_request(ControllerRequest::Close)
            }

            Message::DismissAbout => {
                self.about = None;
                Task::none()
            }

            Message::ConfirmClose => {
                self.confirm_close = false;
                tracing::info!(
                    changes = self.shell.pending_changes.len(),
                    "Discarding unsaved changes"
                );
                handler::shutdown()
            }

            Message::CancelClose => {
                self.confirm_close = false;
                Task::none()
            }

            Message::Noop => Task::none(),
        };

        self.sync_native_menu();
        task
    }

    /// Window title, with `*` while there are unsaved changes.
    pub fn title(&self) -> String {
        let dirty_indicator = if self.shell.is_dirty() { " *" } else { "" };
        match self.shell.document_name() {
            Some(name) => format!(
                "{name}{dirty_indicator} - {}",
                i18n_menu::about::PRODUCT_NAME
            ),
            None => i18n_menu::about::PRODUCT_NAME.to_string(),
        }
    }

    /// Rebuild the native menu bar if the rendering changed. Runs from
    /// `update` because the menu can only be attached once the event loop
    /// is up.
    #[cfg(all(target_os = "macos", not(test)))]
    fn sync_native_menu(&self) {
        crate::menu::native::sync(self.menu.bar(), self.shortcut_modifier);
    }

    #[cfg(any(not(target_os = "macos"), test))]
    fn sync_native_menu(&self) {}
}

/// About panel content for this build of the editor.
fn about_info() -> AboutInfo {
    AboutInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        ..AboutInfo::default()
    }
}
