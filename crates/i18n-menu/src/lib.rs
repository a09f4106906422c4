//! i18n Editor - command menu
//!
//! Platform-neutral model of the editor's menu bar. The menu is described as
//! plain data ([`MenuBar`]) rendered from an externally-set view state
//! ([`MenuViewState`]); a rendering adapter per UI toolkit turns it into
//! widgets or native menu items, and hands user selections back to
//! [`EditorMenu::invoke`], which forwards them to an [`EditorController`].
//!
//! ```
//! use i18n_menu::{CommandId, ControllerRequest, EditorMenu, Invocation};
//!
//! let mut menu = EditorMenu::default();
//! menu.set_recent_items(&["/home/user/locales"]);
//!
//! let mut requests: Vec<ControllerRequest> = Vec::new();
//! let outcome = menu.invoke(CommandId::OpenRecent(0), &mut requests).unwrap();
//!
//! assert!(matches!(outcome, Invocation::Forwarded(_)));
//! assert_eq!(
//!     requests,
//!     vec![ControllerRequest::ImportFrom("/home/user/locales".to_string())]
//! );
//! ```

pub mod about;
pub mod command;
pub mod controller;
pub mod error;
pub mod ids;
pub mod labels;
pub mod menu;
pub mod recent;
pub mod render;
pub mod resource;
pub mod settings;
pub mod state;

pub use about::AboutInfo;
pub use command::{Accelerator, Command, CommandId, Key, Menu, MenuBar, MenuEntry, MenuId};
pub use controller::{ControllerRequest, EditorController};
pub use error::{MenuError, Result};
pub use labels::{Label, MenuLabels};
pub use menu::{EditorMenu, Invocation};
pub use render::render;
pub use resource::ResourceType;
pub use settings::{MenuSettings, ShortcutModifier};
pub use state::MenuViewState;
