//! Messages for the Elm-style architecture
//!
//! The host translates key chords, menu clicks and raw text edits into these.

use std::path::PathBuf;

/// Content edits forwarded from the host's text widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert text at a char offset
    InsertText { offset: usize, text: String },
    /// Delete the char range `[start, end)`
    DeleteRange { start: usize, end: usize },
    /// The host's widget changed the text itself; only the dirty flag is updated
    ContentChanged,
    /// Move the cursor to a char offset
    MoveCursor(usize),
}

/// Find messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Set the pattern; searching starts at the cursor
    SetPattern(String),
    /// Jump to the next match (wraps)
    FindNext,
    /// Jump to the previous match (wraps)
    FindPrevious,
    ToggleCaseSensitive,
    /// Drop the pattern and highlight
    Clear,
}

/// Application-level messages (file operations)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Replace the buffer with an empty one (Ctrl+N)
    NewFile,
    /// Pick a file and open it (Ctrl+O)
    OpenFile,
    /// Open a known path without the picker
    OpenPath(PathBuf),
    /// Save to the current path, picking one if needed (Ctrl+S)
    SaveFile,
    /// Pick a path and save there (Ctrl+Shift+S)
    SaveFileAs,
    /// Request to end the session
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    Search(SearchMsg),
    App(AppMsg),
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<SearchMsg> for Msg {
    fn from(msg: SearchMsg) -> Self {
        Msg::Search(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
