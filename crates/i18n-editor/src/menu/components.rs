//! Reusable pieces of the in-app menu: items, separators, section labels and
//! the dropdown container.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Padding, Theme};

use crate::message::Message;
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, GRAY_200, GRAY_400, GRAY_600, GRAY_800, SHADOW,
    SPACING_SM, SPACING_XS, WHITE,
};

/// Render a menu item with an optional shortcut. Disabled when `on_press`
/// is `None`.
pub fn view_menu_item<'a>(
    label: &'a str,
    shortcut: Option<String>,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let text_color = if on_press.is_some() {
        GRAY_800
    } else {
        GRAY_400
    };

    let mut content = row![
        text(label).size(13).color(text_color),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    if let Some(shortcut) = shortcut {
        content = content.push(text(shortcut).size(11).color(GRAY_400));
    }

    button(content)
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(|_theme: &Theme, status: button::Status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => Some(GRAY_200.into()),
                _ => None,
            };
            button::Style {
                background,
                text_color: GRAY_800,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press_maybe(on_press)
        .into()
}

/// Render a non-clickable section header (submenu title).
pub fn view_menu_label<'a>(label: &'a str, enabled: bool) -> Element<'a, Message> {
    let color = if enabled { GRAY_600 } else { GRAY_400 };
    container(text(label).size(11).color(color))
        .padding([SPACING_XS, SPACING_SM])
        .into()
}

/// Render a menu separator line.
pub fn view_separator<'a>() -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(1))
        .style(|_theme: &Theme| container::Style {
            background: Some(GRAY_200.into()),
            ..Default::default()
        })
        .padding(Padding::from([SPACING_XS, 0.0]))
        .into()
}

/// Wrap dropdown content in a styled container with shadow.
pub fn view_dropdown_container<'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .style(|_theme: &Theme| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            shadow: iced::Shadow {
                color: SHADOW,
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .padding(SPACING_XS)
        .into()
}
