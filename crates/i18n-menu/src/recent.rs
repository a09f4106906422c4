//! Label codec for the open-recent submenu.
//!
//! Entries are labeled `"{n}: {path}"` with a 1-based ordinal, and the path
//! is recovered from the label when the entry is invoked.

use crate::command::Accelerator;

/// Label for the recent entry at 1-based `ordinal`.
pub fn recent_label(ordinal: usize, path: &str) -> String {
    format!("{ordinal}: {path}")
}

/// Accelerator for the recent entry at 1-based `ordinal`.
///
/// Uses the first digit of the ordinal, so entry 10 shares a key with
/// entry 1.
pub fn recent_accelerator(ordinal: usize) -> Accelerator {
    let digit = ordinal.to_string().chars().next().unwrap_or('0');
    Accelerator::primary(digit)
}

/// Path embedded in a recent entry label.
///
/// Strips a leading `"<digits>: "` prefix. A label without that prefix is
/// returned unchanged.
pub fn path_from_label(label: &str) -> &str {
    let digits = label.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return label;
    }
    label[digits..].strip_prefix(": ").unwrap_or(label)
}
