//! The editor's command menu: view state, rendering and dispatch.

use tracing::debug;

use crate::about::AboutInfo;
use crate::command::{CommandId, MenuBar};
use crate::controller::{ControllerRequest, EditorController};
use crate::error::{MenuError, Result};
use crate::labels::MenuLabels;
use crate::recent::path_from_label;
use crate::render::render;
use crate::state::MenuViewState;

/// What invoking a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Exactly one controller call was made.
    Forwarded(ControllerRequest),
    /// The adapter should show the about panel. No controller call.
    ShowAbout(AboutInfo),
}

/// Command menu bound to an [`EditorController`] at invocation time.
///
/// State is changed only through the setters, each of which re-renders the
/// menu bar. Invocation never checks enabled flags; a disabled command is
/// simply not offered by the adapter.
#[derive(Debug, Clone)]
pub struct EditorMenu {
    state: MenuViewState,
    labels: MenuLabels,
    about: AboutInfo,
    bar: MenuBar,
}

impl Default for EditorMenu {
    fn default() -> Self {
        Self::new(MenuLabels::default())
    }
}

impl EditorMenu {
    pub fn new(labels: MenuLabels) -> Self {
        let state = MenuViewState::default();
        let bar = render(&state, &labels);
        Self {
            state,
            labels,
            about: AboutInfo::default(),
            bar,
        }
    }

    /// Replace the about panel content.
    #[must_use]
    pub fn with_about(mut self, about: AboutInfo) -> Self {
        self.about = about;
        self
    }

    /// Current rendering.
    pub fn bar(&self) -> &MenuBar {
        &self.bar
    }

    /// Current view state.
    pub fn state(&self) -> &MenuViewState {
        &self.state
    }

    /// Enable or disable Save.
    pub fn set_saveable(&mut self, saveable: bool) {
        self.state.saveable = saveable;
        self.rerender();
    }

    /// Enable or disable Reload and the whole Edit menu together.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        self.rerender();
    }

    /// Enable or disable Add Translation.
    pub fn set_editable(&mut self, editable: bool) {
        self.state.editable = editable;
        self.rerender();
    }

    /// Replace the open-recent entries. An empty list disables the submenu.
    ///
    /// The items are copied; the caller keeps ownership of its list.
    pub fn set_recent_items<S: AsRef<str>>(&mut self, items: &[S]) {
        self.state.recent_items = items.iter().map(|item| item.as_ref().to_string()).collect();
        self.rerender();
    }

    fn rerender(&mut self) {
        self.bar = render(&self.state, &self.labels);
    }

    /// Forward a command to `controller`.
    ///
    /// Every command except About results in exactly one controller call.
    /// Fails only for an open-recent entry that is not in the current
    /// rendering.
    pub fn invoke<C>(&self, id: CommandId, controller: &mut C) -> Result<Invocation>
    where
        C: EditorController + ?Sized,
    {
        let request = match id {
            CommandId::Open => ControllerRequest::Import,
            CommandId::OpenRecent(_) => {
                let command = self.bar.command(id).ok_or(MenuError::UnknownCommand(id))?;
                ControllerRequest::ImportFrom(path_from_label(&command.label).to_string())
            }
            CommandId::Save => ControllerRequest::Save,
            CommandId::Reload => ControllerRequest::Reload,
            CommandId::Exit => ControllerRequest::Close,
            CommandId::AddLocale(format) => ControllerRequest::AddLocaleDialog(format),
            CommandId::AddTranslation => ControllerRequest::AddTranslationDialog,
            CommandId::About => {
                debug!(command = ?id, "Showing about panel");
                return Ok(Invocation::ShowAbout(self.about.clone()));
            }
        };

        debug!(command = ?id, request = ?request, "Forwarding menu command");
        request.clone().apply(controller);
        Ok(Invocation::Forwarded(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MenuId;
    use crate::resource::ResourceType;

    fn invoke(menu: &EditorMenu, id: CommandId) -> Vec<ControllerRequest> {
        let mut requests = Vec::new();
        menu.invoke(id, &mut requests).unwrap();
        requests
    }

    #[test]
    fn each_command_forwards_one_request() {
        let menu = EditorMenu::default();
        let cases = [
            (CommandId::Open, ControllerRequest::Import),
            (CommandId::Save, ControllerRequest::Save),
            (CommandId::Reload, ControllerRequest::Reload),
            (CommandId::Exit, ControllerRequest::Close),
            (
                CommandId::AddLocale(ResourceType::Json),
                ControllerRequest::AddLocaleDialog(ResourceType::Json),
            ),
            (
                CommandId::AddLocale(ResourceType::Es6),
                ControllerRequest::AddLocaleDialog(ResourceType::Es6),
            ),
            (
                CommandId::AddTranslation,
                ControllerRequest::AddTranslationDialog,
            ),
        ];
        for (id, expected) in cases {
            assert_eq!(invoke(&menu, id), vec![expected]);
        }
    }

    #[test]
    fn disabled_commands_still_forward() {
        // Gating is the adapter's job.
        let menu = EditorMenu::default();
        assert!(!menu.bar().is_reachable(CommandId::Save));
        assert_eq!(invoke(&menu, CommandId::Save), vec![ControllerRequest::Save]);
    }

    #[test]
    fn about_makes_no_controller_call() {
        let menu = EditorMenu::default();
        let mut requests: Vec<ControllerRequest> = Vec::new();
        let outcome = menu.invoke(CommandId::About, &mut requests).unwrap();

        assert!(requests.is_empty());
        assert_eq!(outcome, Invocation::ShowAbout(AboutInfo::default()));
    }

    #[test]
    fn recent_entry_forwards_path_from_label() {
        let mut menu = EditorMenu::default();
        menu.set_recent_items(&["/a", "/b", "/home/user/locales"]);

        assert_eq!(
            menu.bar().command(CommandId::OpenRecent(2)).unwrap().label,
            "3: /home/user/locales"
        );
        assert_eq!(
            invoke(&menu, CommandId::OpenRecent(2)),
            vec![ControllerRequest::ImportFrom("/home/user/locales".to_string())]
        );
    }

    #[test]
    fn stale_recent_entry_is_an_error() {
        let mut menu = EditorMenu::default();
        menu.set_recent_items(&["/a"]);
        menu.set_recent_items::<&str>(&[]);

        let mut requests: Vec<ControllerRequest> = Vec::new();
        let err = menu
            .invoke(CommandId::OpenRecent(0), &mut requests)
            .unwrap_err();

        assert_eq!(err, MenuError::UnknownCommand(CommandId::OpenRecent(0)));
        assert!(requests.is_empty());
    }

    #[test]
    fn set_enabled_toggles_reload_and_edit_menu() {
        let mut menu = EditorMenu::default();

        menu.set_enabled(true);
        assert!(menu.bar().command(CommandId::Reload).unwrap().enabled);
        assert!(menu.bar().menu(MenuId::Edit).unwrap().enabled);

        menu.set_enabled(false);
        assert!(!menu.bar().command(CommandId::Reload).unwrap().enabled);
        assert!(!menu.bar().menu(MenuId::Edit).unwrap().enabled);
    }

    #[test]
    fn set_editable_touches_only_add_translation() {
        let mut menu = EditorMenu::default();
        menu.set_enabled(true);
        let before = menu.bar().clone();

        menu.set_editable(true);
        for (command, _) in menu.bar().commands() {
            let previous = before.command(command.id).unwrap();
            if command.id == CommandId::AddTranslation {
                assert!(command.enabled);
            } else {
                assert_eq!(command, previous);
            }
        }
    }

    #[test]
    fn recent_items_are_copied() {
        let mut items = vec!["/one".to_string()];
        let mut menu = EditorMenu::default();
        menu.set_recent_items(&items);

        items.push("/two".to_string());
        items[0].push_str("-changed");

        assert_eq!(menu.bar().recent_labels(), vec!["1: /one"]);
    }

    #[test]
    fn about_shows_installed_info() {
        let about = AboutInfo {
            version: "9.9.9".to_string(),
            ..AboutInfo::default()
        };
        let menu = EditorMenu::default().with_about(about.clone());

        let mut requests: Vec<ControllerRequest> = Vec::new();
        let outcome = menu.invoke(CommandId::About, &mut requests).unwrap();

        assert_eq!(outcome, Invocation::ShowAbout(about));
        assert!(requests.is_empty());
    }
}
