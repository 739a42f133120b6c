//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod ui;

pub use document::{Document, DocumentStatus, SaveOutcome, DISCARD_CHANGES_MESSAGE};
pub use ui::UiState;

use crate::config::EditorConfig;
use crate::search::SearchState;

/// Shown in the title when the document has never been saved
pub const NO_FILE_TITLE: &str = "None Loaded";

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub document: Document,
    pub search: SearchState,
    pub ui: UiState,
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with an empty document
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let search = SearchState::new(config.case_sensitive_search);
        Self {
            document,
            search,
            ui: UiState::new(),
            config,
        }
    }

    /// Window title: `"<title> - <path>"`, with `" *"` while modified
    pub fn window_title(&self) -> String {
        let name = match self.document.file_path() {
            Some(path) => path.display().to_string(),
            None => NO_FILE_TITLE.to_string(),
        };
        let marker = if self.document.is_dirty() { " *" } else { "" };
        format!("{} - {}{}", self.config.title, name, marker)
    }

    /// Set the cursor (clamped to the buffer)
    pub fn set_cursor(&mut self, offset: usize) {
        self.ui.cursor = offset.min(self.document.len_chars());
    }

    /// 1-indexed (line, column) of the cursor, for the status line
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let (line, col) = self.document.offset_to_cursor(self.ui.cursor);
        (line + 1, col + 1)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
