//! Menu command and controller request handlers.
//!
//! Commands go through [`i18n_menu::EditorMenu::invoke`], which records the
//! controller call it makes. The recorded requests are then carried out
//! here against the host shell.

use std::path::Path;

use i18n_menu::{CommandId, ControllerRequest, Invocation};
use iced::Task;

use crate::app::App;
use crate::message::Message;

impl App {
    /// Dispatch a menu command from any source (in-app menu, native menu,
    /// accelerator or mnemonic).
    pub(crate) fn handle_command(&mut self, id: CommandId) -> Task<Message> {
        self.dropdown.close();

        let mut requests: Vec<ControllerRequest> = Vec::new();
        match self.menu.invoke(id, &mut requests) {
            Ok(Invocation::ShowAbout(info)) => {
                self.about = Some(info);
                Task::none()
            }
            Ok(Invocation::Forwarded(_)) => {
                let tasks: Vec<_> = requests
                    .into_iter()
                    .map(|request| self.handle_request(request))
                    .collect();
                Task::batch(tasks)
            }
            Err(e) => {
                // A native menu event can outlive the entry it was sent for.
                tracing::warn!(error = %e, "Ignoring menu command");
                Task::none()
            }
        }
    }

    /// Carry out one controller request.
    pub(crate) fn handle_request(&mut self, request: ControllerRequest) -> Task<Message> {
        tracing::debug!(?request, "Handling controller request");
        match request {
            ControllerRequest::Import => pick_folder(),

            ControllerRequest::ImportFrom(path) => {
                self.open_document(Path::new(&path));
                Task::none()
            }

            ControllerRequest::Save => {
                let saved = self.shell.save();
                tracing::info!(changes = saved, "Resources saved");
                self.menu.set_saveable(false);
                Task::none()
            }

            ControllerRequest::Reload => {
                if let Some(dir) = self.shell.document.clone() {
                    self.open_document(&dir);
                }
                Task::none()
            }

            // The dialogs are not built; each request stands in for a
            // completed edit.
            ControllerRequest::AddLocaleDialog(format) => {
                tracing::info!(%format, "Add locale requested");
                self.record_change(format!("Added locale ({format})"));
                Task::none()
            }

            ControllerRequest::AddTranslationDialog => {
                tracing::info!("Add translation requested");
                self.record_change("Added translation");
                Task::none()
            }

            ControllerRequest::Close => {
                if self.shell.is_dirty() {
                    tracing::debug!(
                        changes = self.shell.pending_changes.len(),
                        "Close requested with unsaved changes"
                    );
                    self.confirm_close = true;
                    Task::none()
                } else {
                    shutdown()
                }
            }
        }
    }

    fn record_change(&mut self, change: impl Into<String>) {
        if self.shell.document.is_none() {
            self.shell.set_error("No resources open");
            return;
        }
        self.shell.record_change(change);
        self.menu.set_saveable(self.shell.is_dirty());
    }

    /// Open `dir` and mirror the result onto the menu.
    fn open_document(&mut self, dir: &Path) {
        if !self.shell.open(dir) {
            tracing::warn!(path = %dir.display(), "Cannot open resource folder");
            return;
        }
        tracing::info!(
            path = %dir.display(),
            locale_files = self.shell.locale_files,
            "Opened resource folder"
        );

        self.menu.set_recent_items(self.shell.recent.items());
        self.menu.set_enabled(true);
        self.menu.set_saveable(false);
        self.menu.set_editable(self.shell.has_locale());
    }
}

/// Show the import folder picker.
fn pick_folder() -> Task<Message> {
    // On macOS, use the synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let path = rfd::FileDialog::new()
            .set_title("Open Resources")
            .pick_folder();

        Task::done(Message::FolderPicked(path))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Open Resources")
                .pick_folder()
                .await
                .map(|folder| folder.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

pub(crate) fn shutdown() -> Task<Message> {
    tracing::info!("Shutting down");
    iced::exit()
}
