//! Spacing and colors shared by the editor views.

use iced::Color;

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Height of the in-app menu bar; dropdowns open right below it.
pub const MENU_BAR_HEIGHT: f32 = 32.0;

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub const GRAY_100: Color = rgb(0.95, 0.95, 0.96);
pub const GRAY_200: Color = rgb(0.89, 0.89, 0.91);
pub const GRAY_400: Color = rgb(0.63, 0.63, 0.67);
pub const GRAY_600: Color = rgb(0.38, 0.38, 0.42);
pub const GRAY_800: Color = rgb(0.18, 0.18, 0.21);
pub const WHITE: Color = Color::WHITE;
pub const SHADOW: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.15,
};
pub const ERROR: Color = rgb(0.80, 0.20, 0.20);
