//! Host-side document state.
//!
//! Stands in for the resource editor behind the menu: it knows which folder
//! is open, how many locale files it holds, which edits are pending and which
//! folders were opened recently (in memory only), and keeps a one-line status
//! for the main view.

use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the recent list.
pub const MAX_RECENT: usize = 10;

/// Recently opened folders, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentList {
    items: Vec<String>,
}

impl RecentList {
    /// Move `path` to the front, dropping the oldest entry past the limit.
    pub fn touch(&mut self, path: &str) {
        self.items.retain(|item| item != path);
        self.items.insert(0, path.to_string());
        self.items.truncate(MAX_RECENT);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Open document, recent folders and status line.
#[derive(Debug, Clone)]
pub struct Shell {
    pub document: Option<PathBuf>,
    /// Locale files (`.json` or `.js`) directly inside `document`.
    pub locale_files: usize,
    /// Edits requested since the last open, save or reload.
    pub pending_changes: Vec<String>,
    pub recent: RecentList,
    pub status: String,
    pub status_kind: StatusKind,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            document: None,
            locale_files: 0,
            pending_changes: Vec::new(),
            recent: RecentList::default(),
            status: "Open a resource folder to start.".to_string(),
            status_kind: StatusKind::Info,
        }
    }
}

impl Shell {
    /// Record `dir` as the open document.
    ///
    /// Returns `false` (and sets an error status) when `dir` is not a folder.
    pub fn open(&mut self, dir: &Path) -> bool {
        if !dir.is_dir() {
            self.set_error(format!("Not a folder: {}", dir.display()));
            return false;
        }
        self.recent.touch(&dir.display().to_string());
        self.document = Some(dir.to_path_buf());
        self.locale_files = count_locale_files(dir);
        self.pending_changes.clear();
        self.set_info(format!(
            "Opened {} ({} locale files)",
            dir.display(),
            self.locale_files
        ));
        true
    }

    /// Whether a locale is available for editing. The first locale file
    /// counts as selected.
    pub fn has_locale(&self) -> bool {
        self.document.is_some() && self.locale_files > 0
    }

    /// Record an edit. The resources are dirty until saved or reloaded.
    pub fn record_change(&mut self, change: impl Into<String>) {
        let change = change.into();
        self.set_info(format!("{change} (unsaved)"));
        self.pending_changes.push(change);
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending_changes.is_empty()
    }

    /// Clear pending edits. Returns how many there were.
    pub fn save(&mut self) -> usize {
        let saved = self.pending_changes.len();
        self.pending_changes.clear();
        self.set_info(format!("Saved {saved} change(s)"));
        saved
    }

    pub fn set_info(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Info;
    }

    pub fn set_error(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Error;
    }

    /// Display name of the open document.
    pub fn document_name(&self) -> Option<String> {
        self.document.as_ref().map(|dir| dir.display().to_string())
    }
}

fn count_locale_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry.path().extension().is_some_and(|ext| {
                ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("js")
            })
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_moves_existing_entry_to_front() {
        let mut recent = RecentList::default();
        recent.touch("/a");
        recent.touch("/b");
        recent.touch("/a");
        assert_eq!(recent.items(), ["/a", "/b"]);
    }

    #[test]
    fn touch_keeps_at_most_max_recent() {
        let mut recent = RecentList::default();
        for i in 0..(MAX_RECENT + 3) {
            recent.touch(&format!("/dir{i}"));
        }
        assert_eq!(recent.items().len(), MAX_RECENT);
        assert_eq!(recent.items()[0], format!("/dir{}", MAX_RECENT + 2));
    }

    #[test]
    fn opening_a_missing_folder_is_reported() {
        let mut shell = Shell::default();
        let missing = std::env::temp_dir().join("i18n-editor-does-not-exist-7f3a");

        assert!(!shell.open(&missing));
        assert_eq!(shell.status_kind, StatusKind::Error);
        assert!(shell.document.is_none());
        assert!(shell.recent.items().is_empty());
    }

    #[test]
    fn opening_a_folder_records_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::default();

        assert!(shell.open(dir.path()));
        assert_eq!(shell.document.as_deref(), Some(dir.path()));
        assert_eq!(shell.recent.items(), [dir.path().display().to_string()]);
        assert_eq!(shell.status_kind, StatusKind::Info);
        assert!(!shell.has_locale());
    }

    #[test]
    fn counts_json_and_js_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), "{}").unwrap();
        std::fs::write(dir.path().join("nl.js"), "export default {};").unwrap();
        std::fs::write(dir.path().join("README.md"), "").unwrap();

        let mut shell = Shell::default();
        assert!(shell.open(dir.path()));
        assert_eq!(shell.locale_files, 2);
        assert!(shell.has_locale());
    }

    #[test]
    fn changes_are_pending_until_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::default();
        shell.open(dir.path());
        assert!(!shell.is_dirty());

        shell.record_change("Added locale (JSON)");
        shell.record_change("Added translation");
        assert!(shell.is_dirty());
        assert_eq!(shell.status, "Added translation (unsaved)");

        assert_eq!(shell.save(), 2);
        assert!(!shell.is_dirty());
    }

    #[test]
    fn reopening_discards_pending_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::default();
        shell.open(dir.path());
        shell.record_change("Added translation");

        shell.open(dir.path());
        assert!(!shell.is_dirty());
    }
}
