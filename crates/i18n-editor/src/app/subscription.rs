//! Application subscriptions.
//!
//! | Subscription | Interval | Purpose |
//! |--------------|----------|---------|
//! | Keyboard | Continuous | Accelerators, mnemonics, Escape |
//! | Window Close | Continuous | Route the close button through `request_close` |
//! | Menu (macOS) | 50ms poll | Native menu bar events |

use iced::Subscription;
use iced::keyboard;
use iced::window;

use crate::app::App;
use crate::message::Message;

impl App {
    /// All application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard_subscription(),
            window_close_subscription(),
            menu_subscription(),
        ])
    }
}

fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// The window is created with `exit_on_close_request: false`, so closing
/// it only produces this event.
fn window_close_subscription() -> Subscription<Message> {
    window::close_requests().map(Message::WindowCloseRequested)
}

#[cfg(target_os = "macos")]
fn menu_subscription() -> Subscription<Message> {
    crate::menu::native::menu_subscription().map(|commands| {
        if commands.is_empty() {
            Message::Noop
        } else {
            Message::NativeMenu(commands)
        }
    })
}

#[cfg(not(target_os = "macos"))]
fn menu_subscription() -> Subscription<Message> {
    Subscription::none()
}
