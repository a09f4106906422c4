//! In-app menu bar for Windows and Linux, rendered with Iced from the
//! platform-neutral [`MenuBar`].

use i18n_menu::{Menu, MenuBar, MenuEntry, MenuId, ShortcutModifier};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Padding, Theme};

use super::components::{
    view_dropdown_container, view_menu_item, view_menu_label, view_separator,
};
use crate::message::Message;
use crate::theme::{
    GRAY_100, GRAY_200, GRAY_600, GRAY_800, MENU_BAR_HEIGHT, SPACING_SM, SPACING_XS,
};

/// Width of each top-level menu button; dropdowns are offset by it.
const MENU_BUTTON_WIDTH: f32 = 64.0;
const DROPDOWN_WIDTH: f32 = 280.0;

/// Which dropdown is open, if any.
#[derive(Debug, Clone, Default)]
pub struct MenuDropdownState {
    pub open: Option<MenuId>,
}

impl MenuDropdownState {
    /// Toggle a dropdown open/closed.
    pub fn toggle(&mut self, id: MenuId) {
        if self.open == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    /// Close all dropdowns.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Check if a specific dropdown is open.
    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }
}

/// Render the row of top-level menu buttons.
pub fn view_menu_bar<'a>(bar: &'a MenuBar, state: &MenuDropdownState) -> Element<'a, Message> {
    let buttons = bar
        .menus
        .iter()
        .map(|menu| view_menu_button(menu, state.is_open(menu.id)));

    let bar_row = row(buttons)
        .spacing(0.0)
        .align_y(Alignment::Center)
        .padding(Padding::from([0.0, SPACING_SM]));

    container(bar_row)
        .width(Length::Fill)
        .height(MENU_BAR_HEIGHT)
        .align_y(iced::alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(GRAY_100.into()),
            border: Border {
                color: GRAY_200,
                width: 0.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn view_menu_button(menu: &Menu, is_active: bool) -> Element<'_, Message> {
    let style = move |_theme: &Theme, _status: button::Status| {
        if is_active {
            button::Style {
                background: Some(GRAY_200.into()),
                text_color: GRAY_800,
                border: Border::default(),
                ..Default::default()
            }
        } else {
            button::Style {
                background: None,
                text_color: GRAY_600,
                border: Border::default(),
                ..Default::default()
            }
        }
    };

    // A disabled menu cannot be opened, like a disabled native menu.
    let on_press = menu.enabled.then_some(Message::ToggleDropdown(menu.id));
    let color = if menu.enabled { GRAY_800 } else { GRAY_600 };

    button(text(menu.title.as_str()).size(13).color(color))
        .width(MENU_BUTTON_WIDTH)
        .padding([SPACING_XS, SPACING_SM])
        .style(style)
        .on_press_maybe(on_press)
        .into()
}

/// Render the open dropdown, positioned below its menu button.
///
/// Returns `None` when no dropdown is open.
pub fn view_dropdown<'a>(
    bar: &'a MenuBar,
    state: &MenuDropdownState,
    shortcut_modifier: ShortcutModifier,
) -> Option<Element<'a, Message>> {
    let open = state.open?;
    let index = bar.menus.iter().position(|menu| menu.id == open)?;
    let menu = &bar.menus[index];

    let mut items = Vec::new();
    push_entries(
        &menu.entries,
        menu.enabled,
        shortcut_modifier.display_name(),
        &mut items,
    );
    let dropdown = view_dropdown_container(column(items).width(DROPDOWN_WIDTH));

    let offset = SPACING_SM + index as f32 * MENU_BUTTON_WIDTH;
    Some(
        column![
            Space::new().height(MENU_BAR_HEIGHT),
            row![Space::new().width(offset), dropdown],
        ]
        .into(),
    )
}

/// Flatten entries into dropdown rows. Submenus become a section label
/// followed by their entries.
fn push_entries<'a>(
    entries: &'a [MenuEntry],
    enabled: bool,
    modifier_name: &str,
    out: &mut Vec<Element<'a, Message>>,
) {
    for entry in entries {
        match entry {
            MenuEntry::Command(command) => {
                let on_press = (enabled && command.enabled).then_some(Message::Menu(command.id));
                let shortcut = command.accelerator.map(|a| a.label(modifier_name));
                out.push(view_menu_item(&command.label, shortcut, on_press));
            }
            MenuEntry::Submenu(sub) => {
                let sub_enabled = enabled && sub.enabled;
                out.push(view_menu_label(&sub.title, sub_enabled));
                push_entries(&sub.entries, sub_enabled, modifier_name, out);
            }
            MenuEntry::Separator => out.push(view_separator()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_state_toggles() {
        let mut state = MenuDropdownState::default();
        assert!(state.open.is_none());

        state.toggle(MenuId::File);
        assert!(state.is_open(MenuId::File));
        assert!(!state.is_open(MenuId::Edit));

        state.toggle(MenuId::File);
        assert!(!state.is_open(MenuId::File));

        state.toggle(MenuId::Help);
        assert!(state.is_open(MenuId::Help));

        state.close();
        assert!(state.open.is_none());
    }

    #[test]
    fn dropdown_only_renders_when_open() {
        let menu = i18n_menu::EditorMenu::default();
        let mut state = MenuDropdownState::default();
        assert!(view_dropdown(menu.bar(), &state, ShortcutModifier::Ctrl).is_none());

        state.toggle(MenuId::File);
        assert!(view_dropdown(menu.bar(), &state, ShortcutModifier::Ctrl).is_some());
    }
}
