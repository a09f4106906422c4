//! Main window view: menu bar (Windows/Linux), document summary, status line
//! and the modal panels (about, close confirmation).

use i18n_menu::AboutInfo;
use iced::widget::{Space, button, center, column, container, opaque, row, stack, text};
use iced::{Border, Element, Length, Shadow, Theme, Vector};

use crate::app::App;
use crate::message::Message;
use crate::shell::StatusKind;
use crate::theme::{
    BORDER_RADIUS_MD, ERROR, GRAY_200, GRAY_600, GRAY_800, SHADOW, SPACING_LG, SPACING_MD,
    SPACING_SM, WHITE,
};

const MODAL_WIDTH: f32 = 360.0;

impl App {
    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        let content = self.view_document();

        // On Windows/Linux, add the in-app menu bar and its dropdown
        #[cfg(not(target_os = "macos"))]
        let content: Element<'_, Message> = {
            use crate::menu::{view_dropdown, view_menu_bar};

            let with_bar = column![view_menu_bar(self.menu.bar(), &self.dropdown), content];
            match view_dropdown(self.menu.bar(), &self.dropdown, self.shortcut_modifier) {
                Some(dropdown) => stack![with_bar, dismiss_layer(), dropdown].into(),
                None => with_bar.into(),
            }
        };

        let content: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.confirm_close {
            return view_confirm_close(content, self.shell.pending_changes.len());
        }
        match &self.about {
            Some(info) => view_about(content, info),
            None => content,
        }
    }

    fn view_document(&self) -> Element<'_, Message> {
        let document = match self.shell.document_name() {
            Some(name) => text(name).size(16).color(GRAY_800),
            None => text("No resources open").size(16).color(GRAY_600),
        };

        let status_color = match self.shell.status_kind {
            StatusKind::Info => GRAY_600,
            StatusKind::Error => ERROR,
        };

        column![
            text(i18n_menu::about::PRODUCT_NAME).size(24).color(GRAY_800),
            document,
            text(self.shell.status.as_str()).size(13).color(status_color),
        ]
        .spacing(SPACING_SM)
        .padding(SPACING_LG)
        .into()
    }
}

/// Transparent layer under an open dropdown; a click outside closes it.
#[cfg(not(target_os = "macos"))]
fn dismiss_layer<'a>() -> Element<'a, Message> {
    iced::widget::mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::CloseDropdown)
        .into()
}

/// Text shown in the about panel.
pub(super) struct AboutPanelText {
    pub title: String,
    pub lines: Vec<String>,
}

pub(super) fn about_panel_text(info: &AboutInfo) -> AboutPanelText {
    AboutPanelText {
        title: info.title(),
        lines: info.lines(),
    }
}

fn view_about<'a>(base: Element<'a, Message>, info: &AboutInfo) -> Element<'a, Message> {
    let text_content = about_panel_text(info);
    let close = button(text("Close").size(13)).on_press(Message::DismissAbout);
    view_modal(base, text_content.title, text_content.lines, vec![close.into()])
}

fn view_confirm_close<'a>(base: Element<'a, Message>, changes: usize) -> Element<'a, Message> {
    let lines = vec![format!(
        "{changes} unsaved change(s) will be lost if you quit now."
    )];
    let actions = vec![
        button(text("Cancel").size(13))
            .on_press(Message::CancelClose)
            .into(),
        button(text("Quit").size(13))
            .on_press(Message::ConfirmClose)
            .into(),
    ];
    view_modal(base, "Unsaved Changes".to_string(), lines, actions)
}

/// Centered panel over a backdrop. Only its buttons dismiss it.
fn view_modal<'a>(
    base: Element<'a, Message>,
    title: String,
    lines: Vec<String>,
    actions: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let backdrop = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(SHADOW.into()),
            ..Default::default()
        });

    let mut body = column![text(title).size(18).color(GRAY_800)].spacing(SPACING_SM);
    for line in lines {
        body = body.push(text(line).size(13).color(GRAY_600));
    }

    let mut action_row = row![Space::new().width(Length::Fill)].spacing(SPACING_SM);
    for action in actions {
        action_row = action_row.push(action);
    }

    let dialog = container(column![body, action_row].spacing(SPACING_MD))
        .width(Length::Fixed(MODAL_WIDTH))
        .padding(SPACING_LG)
        .style(|_theme: &Theme| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 1.0,
                color: GRAY_200,
            },
            shadow: Shadow {
                color: SHADOW,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}
