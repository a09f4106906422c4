//! Command descriptors and the menu tree they live in.
//!
//! Everything here is plain data. Adapters walk a [`MenuBar`] to build
//! toolkit widgets and report selections back as [`CommandId`]s.

use std::fmt;

use crate::resource::ResourceType;

// =============================================================================
// COMMANDS
// =============================================================================

/// A user intent bound to exactly one controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Show the import dialog.
    Open,
    /// Import the recent entry at this zero-based position.
    OpenRecent(usize),
    /// Save the current resources.
    Save,
    /// Reload the current resources from disk.
    Reload,
    /// Ask the host to close.
    Exit,
    /// Show the add-locale dialog for a format.
    AddLocale(ResourceType),
    /// Show the add-translation dialog.
    AddTranslation,
    /// Show the about panel.
    About,
}

/// Key part of an accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letter or digit, letters stored upper-case.
    Char(char),
    /// Function key `F1`..`F24`.
    Function(u8),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Function(n) => write!(f, "F{n}"),
        }
    }
}

/// Keyboard shortcut that triggers a command.
///
/// `primary` stands for the platform's menu shortcut modifier; adapters
/// decide whether that is Ctrl or Cmd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accelerator {
    pub key: Key,
    pub primary: bool,
}

impl Accelerator {
    /// Primary modifier plus a character key.
    pub fn primary(c: char) -> Self {
        Self {
            key: Key::Char(c.to_ascii_uppercase()),
            primary: true,
        }
    }

    /// A key without modifiers.
    pub fn bare(key: Key) -> Self {
        Self {
            key,
            primary: false,
        }
    }

    /// Shortcut text with the given name for the primary modifier.
    pub fn label(&self, modifier_name: &str) -> String {
        if self.primary {
            format!("{modifier_name}+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label("Mod"))
    }
}

/// Rendered menu entry for a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub label: String,
    pub mnemonic: Option<char>,
    pub accelerator: Option<Accelerator>,
    pub enabled: bool,
}

// =============================================================================
// MENUS
// =============================================================================

/// Identifies a menu or submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    OpenRecent,
    Edit,
    AddLocale,
    Help,
}

/// A menu or submenu with its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: MenuId,
    pub title: String,
    pub mnemonic: Option<char>,
    pub enabled: bool,
    pub entries: Vec<MenuEntry>,
}

/// One row inside a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Command(Command),
    Submenu(Menu),
    Separator,
}

impl Menu {
    /// Command selected by typing `c` while this menu is open
    /// (case-insensitive).
    ///
    /// A matching submenu selects its first reachable command, so the
    /// in-app dropdown, which shows submenus inline, can still use them.
    pub fn command_for_mnemonic(&self, c: char) -> Option<CommandId> {
        if !self.enabled {
            return None;
        }
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Command(command)
                if command.enabled && mnemonic_matches(command.mnemonic, c) =>
            {
                Some(command.id)
            }
            MenuEntry::Submenu(sub) if mnemonic_matches(sub.mnemonic, c) => {
                sub.first_reachable_command()
            }
            _ => None,
        })
    }

    fn first_reachable_command(&self) -> Option<CommandId> {
        let mut commands = Vec::new();
        self.collect(true, &mut commands);
        commands
            .into_iter()
            .find(|(command, parents)| *parents && command.enabled)
            .map(|(command, _)| command.id)
    }

    fn find_menu(&self, id: MenuId) -> Option<&Menu> {
        if self.id == id {
            return Some(self);
        }
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Submenu(sub) => sub.find_menu(id),
            _ => None,
        })
    }

    /// Collect commands in display order, paired with whether every
    /// enclosing menu is enabled.
    fn collect<'a>(&'a self, parents_enabled: bool, out: &mut Vec<(&'a Command, bool)>) {
        let enabled = parents_enabled && self.enabled;
        for entry in &self.entries {
            match entry {
                MenuEntry::Command(command) => out.push((command, enabled)),
                MenuEntry::Submenu(sub) => sub.collect(enabled, out),
                MenuEntry::Separator => {}
            }
        }
    }

    fn outline(&self, prefix: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if prefix.is_empty() {
            self.title.clone()
        } else {
            format!("{prefix} > {}", self.title)
        };
        writeln!(f, "{path}/{}", disabled_suffix(self.enabled))?;
        for entry in &self.entries {
            match entry {
                MenuEntry::Command(command) => {
                    let accel = command
                        .accelerator
                        .map(|a| format!(" [{a}]"))
                        .unwrap_or_default();
                    writeln!(
                        f,
                        "{path} > {}{accel}{}",
                        command.label,
                        disabled_suffix(command.enabled)
                    )?;
                }
                MenuEntry::Submenu(sub) => sub.outline(&path, f)?,
                MenuEntry::Separator => writeln!(f, "{path} > ---")?,
            }
        }
        Ok(())
    }
}

fn mnemonic_matches(mnemonic: Option<char>, c: char) -> bool {
    mnemonic.is_some_and(|m| m.eq_ignore_ascii_case(&c))
}

fn disabled_suffix(enabled: bool) -> &'static str {
    if enabled { "" } else { " (disabled)" }
}

/// The full menu bar: top-level menus in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// Find a menu or submenu.
    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.iter().find_map(|menu| menu.find_menu(id))
    }

    /// All commands in display order with their effective enabled state
    /// (the command and every enclosing menu enabled).
    pub fn commands(&self) -> Vec<(&Command, bool)> {
        let mut out = Vec::new();
        for menu in &self.menus {
            menu.collect(true, &mut out);
        }
        out.into_iter()
            .map(|(command, parents)| (command, parents && command.enabled))
            .collect()
    }

    /// Find a rendered command.
    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.commands()
            .into_iter()
            .map(|(command, _)| command)
            .find(|command| command.id == id)
    }

    /// Whether a command exists and can currently be triggered.
    pub fn is_reachable(&self, id: CommandId) -> bool {
        self.commands()
            .into_iter()
            .any(|(command, reachable)| command.id == id && reachable)
    }

    /// The first reachable command bound to `accelerator`.
    ///
    /// Recent entries 1 and 10 share a key; the earlier one wins.
    pub fn command_for_accelerator(&self, accelerator: Accelerator) -> Option<CommandId> {
        self.commands()
            .into_iter()
            .find(|(command, reachable)| *reachable && command.accelerator == Some(accelerator))
            .map(|(command, _)| command.id)
    }

    /// Enabled top-level menu whose mnemonic is `c` (case-insensitive).
    pub fn menu_for_mnemonic(&self, c: char) -> Option<MenuId> {
        self.menus
            .iter()
            .find(|menu| menu.enabled && mnemonic_matches(menu.mnemonic, c))
            .map(|menu| menu.id)
    }

    /// Labels of the open-recent entries, in order.
    pub fn recent_labels(&self) -> Vec<&str> {
        self.commands()
            .into_iter()
            .filter(|(command, _)| matches!(command.id, CommandId::OpenRecent(_)))
            .map(|(command, _)| command.label.as_str())
            .collect()
    }
}

impl fmt::Display for MenuBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for menu in &self.menus {
            menu.outline("", f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: CommandId, label: &str, accel: Option<Accelerator>, enabled: bool) -> MenuEntry {
        MenuEntry::Command(Command {
            id,
            label: label.to_string(),
            mnemonic: None,
            accelerator: accel,
            enabled,
        })
    }

    fn sample() -> MenuBar {
        MenuBar {
            menus: vec![
                Menu {
                    id: MenuId::File,
                    title: "File".to_string(),
                    mnemonic: Some('F'),
                    enabled: true,
                    entries: vec![
                        item(CommandId::Open, "Open", Some(Accelerator::primary('o')), true),
                        MenuEntry::Separator,
                        item(CommandId::Save, "Save", Some(Accelerator::primary('s')), false),
                    ],
                },
                Menu {
                    id: MenuId::Edit,
                    title: "Edit".to_string(),
                    mnemonic: None,
                    enabled: false,
                    entries: vec![item(
                        CommandId::AddTranslation,
                        "Add Translation",
                        Some(Accelerator::primary('t')),
                        true,
                    )],
                },
            ],
        }
    }

    #[test]
    fn accelerator_letters_are_upper_case() {
        assert_eq!(Accelerator::primary('o').key, Key::Char('O'));
        assert_eq!(Accelerator::primary('o').label("Ctrl"), "Ctrl+O");
        assert_eq!(Accelerator::bare(Key::Function(5)).label("Cmd"), "F5");
    }

    #[test]
    fn reachability_follows_enclosing_menus() {
        let bar = sample();
        assert!(bar.is_reachable(CommandId::Open));
        assert!(!bar.is_reachable(CommandId::Save));
        // Enabled item inside a disabled menu.
        assert!(!bar.is_reachable(CommandId::AddTranslation));
        assert!(!bar.is_reachable(CommandId::About));
    }

    #[test]
    fn accelerator_lookup_skips_unreachable_commands() {
        let bar = sample();
        assert_eq!(
            bar.command_for_accelerator(Accelerator::primary('O')),
            Some(CommandId::Open)
        );
        assert_eq!(bar.command_for_accelerator(Accelerator::primary('S')), None);
        assert_eq!(bar.command_for_accelerator(Accelerator::primary('T')), None);
    }

    #[test]
    fn mnemonics_resolve_case_insensitively() {
        let mut bar = sample();
        assert_eq!(bar.menu_for_mnemonic('f'), Some(MenuId::File));
        assert_eq!(bar.menu_for_mnemonic('x'), None);

        if let MenuEntry::Command(open) = &mut bar.menus[0].entries[0] {
            open.mnemonic = Some('O');
        }
        let file = bar.menu(MenuId::File).unwrap();
        assert_eq!(file.command_for_mnemonic('o'), Some(CommandId::Open));
        assert_eq!(file.command_for_mnemonic('s'), None);
    }

    #[test]
    fn submenu_mnemonic_selects_first_reachable_entry() {
        let recent = Menu {
            id: MenuId::OpenRecent,
            title: "Open Recent".to_string(),
            mnemonic: Some('R'),
            enabled: true,
            entries: vec![
                item(CommandId::OpenRecent(0), "1: /a", None, false),
                item(CommandId::OpenRecent(1), "2: /b", None, true),
            ],
        };
        let mut file = sample().menus.remove(0);
        file.entries.push(MenuEntry::Submenu(recent));

        assert_eq!(file.command_for_mnemonic('r'), Some(CommandId::OpenRecent(1)));

        if let Some(MenuEntry::Submenu(recent)) = file.entries.last_mut() {
            recent.enabled = false;
        }
        assert_eq!(file.command_for_mnemonic('r'), None);
    }

    #[test]
    fn outline_lists_every_entry() {
        let outline = sample().to_string();
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(
            lines,
            vec![
                "File/",
                "File > Open [Mod+O]",
                "File > ---",
                "File > Save [Mod+S] (disabled)",
                "Edit/ (disabled)",
                "Edit > Add Translation [Mod+T]",
            ]
        );
    }
}
