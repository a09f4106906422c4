//! Externally-set menu view state.

/// Enable flags and recent entries, set by the controller.
///
/// The menu never infers any of these; it only renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuViewState {
    /// Unsaved changes exist; gates Save.
    pub saveable: bool,
    /// A document is loaded; gates Reload and the whole Edit menu.
    pub enabled: bool,
    /// A locale is selected; gates Add Translation.
    pub editable: bool,
    /// Recently opened paths, most recent first.
    pub recent_items: Vec<String>,
}
