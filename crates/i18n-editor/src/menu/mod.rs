//! Menu adapters for the editor window.
//!
//! - **macOS**: native menu bar via the `muda` crate
//! - **Windows/Linux**: in-app menu bar rendered with Iced
//!
//! Both render the same [`i18n_menu::MenuBar`] and report selections as
//! [`crate::message::Message::Menu`].

#[cfg_attr(target_os = "macos", allow(dead_code))]
mod components;
#[cfg_attr(target_os = "macos", allow(dead_code))]
pub mod in_app;
pub mod keyboard;
#[cfg(target_os = "macos")]
pub mod native;

pub use in_app::MenuDropdownState;
#[cfg(not(target_os = "macos"))]
pub use in_app::{view_dropdown, view_menu_bar};
