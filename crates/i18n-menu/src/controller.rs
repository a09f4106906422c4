//! Capability interface the menu forwards commands to.

use crate::resource::ResourceType;

/// Editor operations reachable from the menu.
///
/// All calls are fire-and-forget: the menu never waits for or inspects a
/// result. Precondition checks happen upstream by enabling or disabling
/// commands.
pub trait EditorController {
    /// Show the import dialog.
    fn request_import(&mut self);

    /// Import resources from `path`.
    fn request_import_from(&mut self, path: &str);

    /// Save the current resources.
    fn request_save(&mut self);

    /// Reload the current resources.
    fn request_reload(&mut self);

    /// Show the add-locale dialog for `format`.
    fn request_add_locale_dialog(&mut self, format: ResourceType);

    /// Show the add-translation dialog.
    fn request_add_translation_dialog(&mut self);

    /// Ask the host to close. The host runs its own shutdown sequence.
    fn request_close(&mut self);
}

/// A recorded controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerRequest {
    Import,
    ImportFrom(String),
    Save,
    Reload,
    AddLocaleDialog(ResourceType),
    AddTranslationDialog,
    Close,
}

impl ControllerRequest {
    /// Replay this request on a controller.
    pub fn apply<C: EditorController + ?Sized>(self, controller: &mut C) {
        match self {
            Self::Import => controller.request_import(),
            Self::ImportFrom(path) => controller.request_import_from(&path),
            Self::Save => controller.request_save(),
            Self::Reload => controller.request_reload(),
            Self::AddLocaleDialog(format) => controller.request_add_locale_dialog(format),
            Self::AddTranslationDialog => controller.request_add_translation_dialog(),
            Self::Close => controller.request_close(),
        }
    }
}

/// Queue of requests, drained later by the host.
impl EditorController for Vec<ControllerRequest> {
    fn request_import(&mut self) {
        self.push(ControllerRequest::Import);
    }

    fn request_import_from(&mut self, path: &str) {
        self.push(ControllerRequest::ImportFrom(path.to_string()));
    }

    fn request_save(&mut self) {
        self.push(ControllerRequest::Save);
    }

    fn request_reload(&mut self) {
        self.push(ControllerRequest::Reload);
    }

    fn request_add_locale_dialog(&mut self, format: ResourceType) {
        self.push(ControllerRequest::AddLocaleDialog(format));
    }

    fn request_add_translation_dialog(&mut self) {
        self.push(ControllerRequest::AddTranslationDialog);
    }

    fn request_close(&mut self) {
        self.push(ControllerRequest::Close);
    }
}
