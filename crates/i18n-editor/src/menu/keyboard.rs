//! Key presses to menu accelerators.

use i18n_menu::{Accelerator, Key, ShortcutModifier};
use iced::keyboard;
use iced::keyboard::key::Named;

/// Accelerator for a key press, if it could be one.
///
/// Alt combinations are reserved for menu mnemonics and never map to an
/// accelerator.
pub fn accelerator_for(
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
    shortcut_modifier: ShortcutModifier,
) -> Option<Accelerator> {
    if modifiers.alt() {
        return None;
    }
    let primary = match shortcut_modifier.resolve() {
        ShortcutModifier::Meta => modifiers.logo(),
        _ => modifiers.control(),
    };

    let key = match key.as_ref() {
        keyboard::Key::Character(text) => Key::Char(single_alphanumeric(text)?),
        keyboard::Key::Named(named) => Key::Function(function_number(named)?),
        _ => return None,
    };

    Some(Accelerator { key, primary })
}

/// Mnemonic character for an Alt+key press.
pub fn mnemonic_for(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<char> {
    if !modifiers.alt() {
        return None;
    }
    match key.as_ref() {
        keyboard::Key::Character(text) => single_alphanumeric(text),
        _ => None,
    }
}

/// Letter or digit typed without command modifiers, for mnemonics inside an
/// open dropdown.
pub fn plain_char(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<char> {
    if modifiers.alt() || modifiers.control() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        keyboard::Key::Character(text) => single_alphanumeric(text),
        _ => None,
    }
}

fn single_alphanumeric(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_ascii_alphanumeric() {
        return None;
    }
    Some(c.to_ascii_uppercase())
}

fn function_number(named: Named) -> Option<u8> {
    let n = match named {
        Named::F1 => 1,
        Named::F2 => 2,
        Named::F3 => 3,
        Named::F4 => 4,
        Named::F5 => 5,
        Named::F6 => 6,
        Named::F7 => 7,
        Named::F8 => 8,
        Named::F9 => 9,
        Named::F10 => 10,
        Named::F11 => 11,
        Named::F12 => 12,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn ctrl_letter_is_primary_accelerator() {
        let accel = accelerator_for(
            &char_key("o"),
            keyboard::Modifiers::CTRL,
            ShortcutModifier::Ctrl,
        );
        assert_eq!(accel, Some(Accelerator::primary('O')));
    }

    #[test]
    fn meta_setting_ignores_ctrl() {
        let accel = accelerator_for(
            &char_key("s"),
            keyboard::Modifiers::CTRL,
            ShortcutModifier::Meta,
        );
        assert_eq!(
            accel,
            Some(Accelerator {
                key: Key::Char('S'),
                primary: false,
            })
        );

        let accel = accelerator_for(
            &char_key("s"),
            keyboard::Modifiers::LOGO,
            ShortcutModifier::Meta,
        );
        assert_eq!(accel, Some(Accelerator::primary('S')));
    }

    #[test]
    fn function_key_without_modifiers() {
        let accel = accelerator_for(
            &keyboard::Key::Named(Named::F5),
            keyboard::Modifiers::empty(),
            ShortcutModifier::Ctrl,
        );
        assert_eq!(accel, Some(Accelerator::bare(Key::Function(5))));
    }

    #[test]
    fn alt_is_a_mnemonic_not_an_accelerator() {
        let key = char_key("f");
        assert_eq!(
            accelerator_for(&key, keyboard::Modifiers::ALT, ShortcutModifier::Ctrl),
            None
        );
        assert_eq!(mnemonic_for(&key, keyboard::Modifiers::ALT), Some('F'));
        assert_eq!(mnemonic_for(&key, keyboard::Modifiers::empty()), None);
    }

    #[test]
    fn plain_char_rejects_command_modifiers() {
        let key = char_key("x");
        assert_eq!(plain_char(&key, keyboard::Modifiers::empty()), Some('X'));
        assert_eq!(plain_char(&key, keyboard::Modifiers::SHIFT), Some('X'));
        assert_eq!(plain_char(&key, keyboard::Modifiers::CTRL), None);
    }

    #[test]
    fn punctuation_is_ignored() {
        assert_eq!(
            accelerator_for(&char_key(","), keyboard::Modifiers::CTRL, ShortcutModifier::Ctrl),
            None
        );
    }
}
