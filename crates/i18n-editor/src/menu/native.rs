//! macOS native menu bar built with `muda` from the platform-neutral
//! [`MenuBar`].
//!
//! # Architecture
//!
//! ```text
//! [muda MenuEvent] --blocking--> [Forwarder Thread] --crossbeam--> [Subscription]
//! ```
//!
//! Item ids are [`CommandId::event_id`] strings, so a click parses straight
//! back into a command. The native menu is rebuilt whenever the rendered
//! `MenuBar` changes.

use std::cell::RefCell;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use i18n_menu::about::PRODUCT_NAME;
use i18n_menu::{CommandId, Key, Menu as MenuDescriptor, MenuBar, MenuEntry, ShortcutModifier};
use iced::Subscription;
use muda::{
    Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu,
    accelerator::{Accelerator, Code, Modifiers},
};

// Menu handles are not Send; they only live on the main thread.
thread_local! {
    static NATIVE_MENU: RefCell<Option<NativeMenu>> = const { RefCell::new(None) };
}

struct NativeMenu {
    #[allow(dead_code)]
    menu: Menu,
    rendered: MenuBar,
}

static CHANNEL: OnceLock<(Sender<CommandId>, Receiver<CommandId>)> = OnceLock::new();
static FORWARDER_STARTED: OnceLock<()> = OnceLock::new();

/// Install or refresh the native menu bar for `bar`.
///
/// Does nothing when `bar` equals the last installed rendering.
pub fn sync(bar: &MenuBar, shortcut_modifier: ShortcutModifier) {
    let unchanged = NATIVE_MENU.with(|cell| {
        cell.borrow()
            .as_ref()
            .is_some_and(|native| &native.rendered == bar)
    });
    if unchanged {
        return;
    }

    match build(bar, shortcut_modifier) {
        Ok(menu) => {
            menu.init_for_nsapp();
            NATIVE_MENU.with(|cell| {
                *cell.borrow_mut() = Some(NativeMenu {
                    menu,
                    rendered: bar.clone(),
                });
            });
            tracing::debug!("Native menu bar rebuilt");
        }
        Err(e) => tracing::error!(error = %e, "Failed to build native menu bar"),
    }

    start_forwarder();
}

fn build(bar: &MenuBar, shortcut_modifier: ShortcutModifier) -> muda::Result<Menu> {
    let menu = Menu::new();

    let app_menu = Submenu::new(PRODUCT_NAME, true);
    app_menu.append(&PredefinedMenuItem::hide(None))?;
    app_menu.append(&PredefinedMenuItem::hide_others(None))?;
    app_menu.append(&PredefinedMenuItem::show_all(None))?;
    menu.append(&app_menu)?;

    for descriptor in &bar.menus {
        menu.append(&build_submenu(descriptor, shortcut_modifier)?)?;
    }
    Ok(menu)
}

fn build_submenu(
    descriptor: &MenuDescriptor,
    shortcut_modifier: ShortcutModifier,
) -> muda::Result<Submenu> {
    let submenu = Submenu::new(&descriptor.title, descriptor.enabled);
    for entry in &descriptor.entries {
        match entry {
            MenuEntry::Command(command) => {
                let accelerator = command
                    .accelerator
                    .and_then(|a| native_accelerator(a, shortcut_modifier));
                submenu.append(&MenuItem::with_id(
                    command.id.event_id(),
                    &command.label,
                    command.enabled,
                    accelerator,
                ))?;
            }
            MenuEntry::Submenu(sub) => submenu.append(&build_submenu(sub, shortcut_modifier)?)?,
            MenuEntry::Separator => submenu.append(&PredefinedMenuItem::separator())?,
        }
    }
    Ok(submenu)
}

fn native_accelerator(
    accelerator: i18n_menu::Accelerator,
    shortcut_modifier: ShortcutModifier,
) -> Option<Accelerator> {
    let code = key_code(accelerator.key)?;
    let modifiers = accelerator
        .primary
        .then(|| match shortcut_modifier.resolve() {
            ShortcutModifier::Ctrl => Modifiers::CONTROL,
            _ => Modifiers::META,
        });
    Some(Accelerator::new(modifiers, code))
}

fn key_code(key: Key) -> Option<Code> {
    let code = match key {
        Key::Char(c) => match c {
            'A' => Code::KeyA,
            'B' => Code::KeyB,
            'C' => Code::KeyC,
            'D' => Code::KeyD,
            'E' => Code::KeyE,
            'F' => Code::KeyF,
            'G' => Code::KeyG,
            'H' => Code::KeyH,
            'I' => Code::KeyI,
            'J' => Code::KeyJ,
            'K' => Code::KeyK,
            'L' => Code::KeyL,
            'M' => Code::KeyM,
            'N' => Code::KeyN,
            'O' => Code::KeyO,
            'P' => Code::KeyP,
            'Q' => Code::KeyQ,
            'R' => Code::KeyR,
            'S' => Code::KeyS,
            'T' => Code::KeyT,
            'U' => Code::KeyU,
            'V' => Code::KeyV,
            'W' => Code::KeyW,
            'X' => Code::KeyX,
            'Y' => Code::KeyY,
            'Z' => Code::KeyZ,
            '0' => Code::Digit0,
            '1' => Code::Digit1,
            '2' => Code::Digit2,
            '3' => Code::Digit3,
            '4' => Code::Digit4,
            '5' => Code::Digit5,
            '6' => Code::Digit6,
            '7' => Code::Digit7,
            '8' => Code::Digit8,
            '9' => Code::Digit9,
            _ => return None,
        },
        Key::Function(n) => match n {
            1 => Code::F1,
            2 => Code::F2,
            3 => Code::F3,
            4 => Code::F4,
            5 => Code::F5,
            6 => Code::F6,
            7 => Code::F7,
            8 => Code::F8,
            9 => Code::F9,
            10 => Code::F10,
            11 => Code::F11,
            12 => Code::F12,
            _ => return None,
        },
    };
    Some(code)
}

/// Start the thread that forwards muda events to our channel (once).
fn start_forwarder() {
    FORWARDER_STARTED.get_or_init(|| {
        match thread::Builder::new()
            .name("menu-event-forwarder".into())
            .spawn(forward_events)
        {
            Ok(_) => tracing::debug!("Menu event forwarder thread started"),
            Err(e) => tracing::error!(
                error = %e,
                "Failed to spawn menu forwarder thread - menu events may not work"
            ),
        }
    });
}

fn channel() -> &'static (Sender<CommandId>, Receiver<CommandId>) {
    CHANNEL.get_or_init(unbounded)
}

/// Blocks on muda's receiver; exits when it disconnects at shutdown.
fn forward_events() {
    let (sender, _) = channel();
    while let Ok(event) = MenuEvent::receiver().recv() {
        let id = event.id().0.as_str();
        tracing::trace!(event_id = id, "Native menu event");
        match id.parse::<CommandId>() {
            Ok(command) => {
                if sender.send(command).is_err() {
                    break;
                }
            }
            // Predefined items (hide, show all) carry muda-generated ids.
            Err(e) => tracing::trace!(error = %e, "Ignoring native menu event"),
        }
    }
}

/// Everything forwarded since the last poll, in arrival order.
fn drain_commands() -> Vec<CommandId> {
    channel().1.try_iter().collect()
}

/// Subscription that polls forwarded menu commands every 50ms and hands
/// over all of them at once.
pub fn menu_subscription() -> Subscription<Vec<CommandId>> {
    iced::time::every(Duration::from_millis(50)).map(|_| drain_commands())
}
