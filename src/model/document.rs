//! Document model - the text buffer, its file path and dirty state
//!
//! The document owns the only copy of the text. Transitions that would throw
//! away unsaved edits (`new_`, `open`, `close`) go through
//! [`Document::confirm_discard_if_needed`] first and do nothing when the user
//! declines.

use ropey::Rope;
use std::path::{Path, PathBuf};

use crate::host::Prompt;
use crate::io::{FileStore, IoError};

/// Message shown when an operation would discard unsaved changes
pub const DISCARD_CHANGES_MESSAGE: &str =
    "You have unsaved changes. Discard them and continue?";

/// Logical state of the document relative to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Clean,
    Modified,
}

/// Result of a save that may have needed a path from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content was written to this path
    Saved(PathBuf),
    /// The save-as picker was dismissed; nothing changed
    Cancelled,
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer; only changed through the methods below
    buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    dirty: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            buffer: Rope::new(),
            file_path: None,
            dirty: false,
        }
    }

    /// Create a clean, never-saved document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            file_path: None,
            dirty: false,
        }
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the user names a non-existent file on the command line.
    /// It is marked modified so the first save creates the file.
    pub fn new_with_path(path: PathBuf) -> Self {
        Self {
            buffer: Rope::new(),
            file_path: Some(path),
            dirty: true,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status(&self) -> DocumentStatus {
        if self.dirty {
            DocumentStatus::Modified
        } else {
            DocumentStatus::Clean
        }
    }

    /// Full buffer contents
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Length of the buffer in characters
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        match &self.file_path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            None => "Untitled".to_string(),
        }
    }

    /// Convert a buffer offset to 0-indexed (line, column)
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Record that the content changed
    pub fn mark_modified(&mut self) {
        if !self.dirty {
            tracing::debug!(doc = %self.display_name(), "document modified");
        }
        self.dirty = true;
    }

    /// Insert text at a char offset (clamped), returning the offset after it
    pub fn insert_text(&mut self, offset: usize, text: &str) -> usize {
        let at = offset.min(self.buffer.len_chars());
        if text.is_empty() {
            return at;
        }
        self.buffer.insert(at, text);
        self.mark_modified();
        at + text.chars().count()
    }

    /// Delete the char range `[start, end)` (clamped); returns whether anything was removed
    pub fn delete_range(&mut self, start: usize, end: usize) -> bool {
        let len = self.buffer.len_chars();
        let (start, end) = (start.min(len), end.min(len));
        if start >= end {
            return false;
        }
        self.buffer.remove(start..end);
        self.mark_modified();
        true
    }

    // ========================================================================
    // Guarded transitions
    // ========================================================================

    /// Ask before discarding unsaved changes
    ///
    /// Returns `true` without prompting when the document is clean; otherwise
    /// returns the prompt's answer.
    pub fn confirm_discard_if_needed<P>(&self, prompt: &mut P) -> bool
    where
        P: Prompt + ?Sized,
    {
        if !self.dirty {
            return true;
        }
        let proceed = prompt.confirm(DISCARD_CHANGES_MESSAGE);
        tracing::debug!(proceed, "discard confirmation answered");
        proceed
    }

    /// Replace the document with an empty, never-saved buffer
    ///
    /// Returns `false` if the user kept their unsaved changes.
    pub fn new_<P>(&mut self, prompt: &mut P) -> bool
    where
        P: Prompt + ?Sized,
    {
        if !self.confirm_discard_if_needed(prompt) {
            return false;
        }
        self.buffer = Rope::new();
        self.file_path = None;
        self.dirty = false;
        tracing::info!("new document");
        true
    }

    /// Load `path` into the document
    ///
    /// `Ok(false)` means the user declined to discard changes. On a read
    /// failure nothing about the document changes.
    pub fn open<S, P>(
        &mut self,
        path: PathBuf,
        store: &mut S,
        prompt: &mut P,
    ) -> Result<bool, IoError>
    where
        S: FileStore + ?Sized,
        P: Prompt + ?Sized,
    {
        if !self.confirm_discard_if_needed(prompt) {
            return Ok(false);
        }

        let content = store.read(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "open failed");
            e
        })?;

        self.buffer = Rope::from_str(&content);
        tracing::info!(
            path = %path.display(),
            chars = self.buffer.len_chars(),
            "opened document"
        );
        self.file_path = Some(path);
        self.dirty = false;
        Ok(true)
    }

    /// Write the buffer to its path, asking for one via `pick_path` if it has none
    pub fn save<S, F>(&mut self, store: &mut S, pick_path: F) -> Result<SaveOutcome, IoError>
    where
        S: FileStore + ?Sized,
        F: FnOnce() -> Option<PathBuf>,
    {
        let Some(path) = self.file_path.clone() else {
            let Some(path) = pick_path() else {
                tracing::debug!("save cancelled: no path chosen");
                return Ok(SaveOutcome::Cancelled);
            };
            self.save_as(path.clone(), store)?;
            return Ok(SaveOutcome::Saved(path));
        };

        self.write_to(&path, store)?;
        self.dirty = false;
        Ok(SaveOutcome::Saved(path))
    }

    /// Write the buffer to `path` and adopt it as the document's path
    ///
    /// On failure the previous path and dirty flag are kept.
    pub fn save_as<S>(&mut self, path: PathBuf, store: &mut S) -> Result<(), IoError>
    where
        S: FileStore + ?Sized,
    {
        self.write_to(&path, store)?;
        self.file_path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Whether the session may end
    pub fn close<P>(&self, prompt: &mut P) -> bool
    where
        P: Prompt + ?Sized,
    {
        self.confirm_discard_if_needed(prompt)
    }

    fn write_to<S>(&self, path: &Path, store: &mut S) -> Result<(), IoError>
    where
        S: FileStore + ?Sized,
    {
        let content = self.buffer.to_string();
        match store.write(path, &content) {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    chars = self.buffer.len_chars(),
                    "saved document"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                Err(e)
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
