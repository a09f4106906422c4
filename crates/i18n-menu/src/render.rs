//! Pure rendering of view state into a menu bar.

use crate::command::{Accelerator, Command, CommandId, Key, Menu, MenuBar, MenuEntry, MenuId};
use crate::labels::{Label, MenuLabels};
use crate::recent::{recent_accelerator, recent_label};
use crate::resource::ResourceType;
use crate::state::MenuViewState;

/// Render the menu bar for `state`.
///
/// Equal inputs always produce equal output.
pub fn render(state: &MenuViewState, labels: &MenuLabels) -> MenuBar {
    MenuBar {
        menus: vec![
            file_menu(state, labels),
            edit_menu(state, labels),
            help_menu(labels),
        ],
    }
}

fn command(
    id: CommandId,
    label: &Label,
    accelerator: Option<Accelerator>,
    enabled: bool,
) -> MenuEntry {
    MenuEntry::Command(Command {
        id,
        label: label.text.clone(),
        mnemonic: label.mnemonic,
        accelerator,
        enabled,
    })
}

fn menu(id: MenuId, label: &Label, enabled: bool, entries: Vec<MenuEntry>) -> Menu {
    Menu {
        id,
        title: label.text.clone(),
        mnemonic: label.mnemonic,
        enabled,
        entries,
    }
}

fn file_menu(state: &MenuViewState, labels: &MenuLabels) -> Menu {
    let entries = vec![
        command(
            CommandId::Open,
            &labels.open,
            Some(Accelerator::primary('O')),
            true,
        ),
        MenuEntry::Submenu(recent_menu(&state.recent_items, labels)),
        MenuEntry::Separator,
        command(
            CommandId::Save,
            &labels.save,
            Some(Accelerator::primary('S')),
            state.saveable,
        ),
        command(
            CommandId::Reload,
            &labels.reload,
            Some(Accelerator::bare(Key::Function(5))),
            state.enabled,
        ),
        MenuEntry::Separator,
        command(CommandId::Exit, &labels.exit, None, true),
    ];
    menu(MenuId::File, &labels.file, true, entries)
}

fn recent_menu(items: &[String], labels: &MenuLabels) -> Menu {
    let entries = items
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let ordinal = index + 1;
            MenuEntry::Command(Command {
                id: CommandId::OpenRecent(index),
                label: recent_label(ordinal, path),
                mnemonic: None,
                accelerator: Some(recent_accelerator(ordinal)),
                enabled: true,
            })
        })
        .collect();
    menu(
        MenuId::OpenRecent,
        &labels.open_recent,
        !items.is_empty(),
        entries,
    )
}

fn edit_menu(state: &MenuViewState, labels: &MenuLabels) -> Menu {
    let add_locale = menu(
        MenuId::AddLocale,
        &labels.add_locale,
        true,
        ResourceType::ALL
            .into_iter()
            .map(|ty| add_locale_command(ty, labels))
            .collect(),
    );
    let entries = vec![
        MenuEntry::Submenu(add_locale),
        command(
            CommandId::AddTranslation,
            &labels.add_translation,
            Some(Accelerator::primary('T')),
            state.editable,
        ),
    ];
    menu(MenuId::Edit, &labels.edit, state.enabled, entries)
}

fn add_locale_command(ty: ResourceType, labels: &MenuLabels) -> MenuEntry {
    let (label, key) = match ty {
        ResourceType::Json => (&labels.add_locale_json, 'J'),
        ResourceType::Es6 => (&labels.add_locale_es6, 'E'),
    };
    command(
        CommandId::AddLocale(ty),
        label,
        Some(Accelerator::primary(key)),
        true,
    )
}

fn help_menu(labels: &MenuLabels) -> Menu {
    menu(
        MenuId::Help,
        &labels.help,
        true,
        vec![command(CommandId::About, &labels.about, None, true)],
    )
}
