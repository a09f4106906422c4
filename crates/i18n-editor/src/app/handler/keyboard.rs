//! Keyboard handlers.
//!
//! Handles:
//! - Escape (cancel a close confirmation, or close the about panel or the
//!   open dropdown)
//! - Alt+letter (open a menu by mnemonic, Windows/Linux)
//! - letter while a dropdown is open (pick an entry by mnemonic)
//! - menu accelerators such as Ctrl+O or F5 (Windows/Linux)
//!
//! On macOS the native menu bar owns accelerators, so only Escape is
//! handled here.

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::Message;

impl App {
    /// Handle a global key press.
    #[allow(clippy::needless_pass_by_value)]
    pub(crate) fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        tracing::trace!(?key, ?modifiers, "Key pressed");

        if let keyboard::Key::Named(Named::Escape) = key.as_ref() {
            if self.confirm_close {
                self.confirm_close = false;
            } else if self.about.is_some() {
                self.about = None;
            } else {
                self.dropdown.close();
            }
            return Task::none();
        }

        // Both panels are modal.
        if self.about.is_some() || self.confirm_close {
            return Task::none();
        }

        self.handle_shortcut(&key, modifiers)
    }

    #[cfg(target_os = "macos")]
    #[allow(clippy::unused_self)]
    fn handle_shortcut(
        &mut self,
        _key: &keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        Task::none()
    }

    #[cfg(not(target_os = "macos"))]
    fn handle_shortcut(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        use crate::menu::keyboard::{accelerator_for, mnemonic_for, plain_char};

        if let Some(c) = mnemonic_for(key, modifiers) {
            if let Some(id) = self.menu.bar().menu_for_mnemonic(c) {
                self.dropdown.toggle(id);
            }
            return Task::none();
        }

        if let Some(open) = self.dropdown.open
            && let Some(c) = plain_char(key, modifiers)
        {
            let command = self
                .menu
                .bar()
                .menu(open)
                .and_then(|menu| menu.command_for_mnemonic(c));
            return match command {
                Some(id) => self.handle_command(id),
                None => Task::none(),
            };
        }

        let command = accelerator_for(key, modifiers, self.shortcut_modifier)
            .and_then(|accelerator| self.menu.bar().command_for_accelerator(accelerator));
        match command {
            Some(id) => self.handle_command(id),
            None => Task::none(),
        }
    }
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use i18n_menu::MenuId;

    use super::*;
    use crate::settings::Settings;

    fn app() -> App {
        App::new(&Settings::default(), None).0
    }

    fn char_key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    fn named(named: Named) -> keyboard::Key {
        keyboard::Key::Named(named)
    }

    #[test]
    fn alt_mnemonic_opens_menu() {
        let mut app = app();
        let _ = app.handle_key_press(char_key("h"), keyboard::Modifiers::ALT);
        assert!(app.dropdown.is_open(MenuId::Help));

        let _ = app.handle_key_press(named(Named::Escape), keyboard::Modifiers::empty());
        assert!(app.dropdown.open.is_none());
    }

    #[test]
    fn disabled_menu_ignores_mnemonic() {
        let mut app = app();
        let _ = app.handle_key_press(char_key("e"), keyboard::Modifiers::ALT);
        assert!(app.dropdown.open.is_none());
    }

    #[test]
    fn mnemonic_inside_open_dropdown_runs_command() {
        let mut app = app();
        let _ = app.handle_key_press(char_key("h"), keyboard::Modifiers::ALT);
        let _ = app.handle_key_press(char_key("a"), keyboard::Modifiers::empty());

        assert!(app.about.is_some());
        assert!(app.dropdown.open.is_none());
    }

    #[test]
    fn submenu_mnemonic_in_dropdown_runs_first_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        let _ = app.update(Message::FolderPicked(Some(dir.path().to_path_buf())));

        let _ = app.handle_key_press(char_key("e"), keyboard::Modifiers::ALT);
        assert!(app.dropdown.is_open(MenuId::Edit));
        let _ = app.handle_key_press(char_key("l"), keyboard::Modifiers::empty());

        assert_eq!(app.shell.pending_changes, ["Added locale (JSON)"]);
        assert!(app.dropdown.open.is_none());
    }

    #[test]
    fn disabled_accelerator_does_nothing() {
        let mut app = app();
        let _ = app.handle_key_press(named(Named::F5), keyboard::Modifiers::empty());
        assert_eq!(app.shell.status, crate::shell::Shell::default().status);
    }

    #[test]
    fn close_confirmation_blocks_shortcuts_until_escape() {
        let mut app = app();
        app.confirm_close = true;

        let _ = app.handle_key_press(char_key("h"), keyboard::Modifiers::ALT);
        assert!(app.dropdown.open.is_none());

        let _ = app.handle_key_press(named(Named::Escape), keyboard::Modifiers::empty());
        assert!(!app.confirm_close);
    }

    #[test]
    fn escape_dismisses_about_first() {
        let mut app = app();
        app.about = Some(i18n_menu::AboutInfo::default());
        app.dropdown.toggle(MenuId::File);

        let _ = app.handle_key_press(named(Named::Escape), keyboard::Modifiers::empty());
        assert!(app.about.is_none());
        assert!(app.dropdown.is_open(MenuId::File));
    }
}
