//! File I/O collaborators
//!
//! The document tracker never touches the file system directly. Reads and
//! writes go through a [`FileStore`], so hosts plug in the real disk while
//! tests use the in-memory store.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::file_validation::{
    filename_for_display, is_likely_binary, validate_file_for_opening,
};

/// Broad category of a read/write failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds the size limit
    TooLarge,
    Other,
}

/// A failed read or write, carrying the underlying error text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoError {
    kind: IoErrorKind,
    message: String,
}

impl IoError {
    pub fn new(kind: IoErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for an `Other` error
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(IoErrorKind::Other, message)
    }

    pub fn kind(&self) -> IoErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get a user-friendly error message for the status line
    pub fn user_message(&self, path: &Path) -> String {
        let filename = filename_for_display(path);
        match self.kind {
            IoErrorKind::NotFound => format!("File not found: {}", filename),
            IoErrorKind::PermissionDenied => format!("Permission denied: {}", filename),
            IoErrorKind::IsDirectory => format!("Cannot open directory: {}", filename),
            IoErrorKind::BinaryFile => format!("Cannot open binary file: {}", filename),
            IoErrorKind::TooLarge => format!("{}: {}", filename, self.message),
            IoErrorKind::Other => format!("Error accessing {}: {}", filename, self.message),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        let kind = match e.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };
        Self::new(kind, e.to_string())
    }
}

/// Read/write collaborator for whole-file UTF-8 text
pub trait FileStore {
    /// Read the full contents of `path`
    fn read(&mut self, path: &Path) -> Result<String, IoError>;

    /// Write `content` to `path`, replacing whatever was there
    fn write(&mut self, path: &Path, content: &str) -> Result<(), IoError>;
}

/// [`FileStore`] backed by the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&mut self, path: &Path) -> Result<String, IoError> {
        validate_file_for_opening(path)?;
        if is_likely_binary(path) {
            return Err(IoError::new(IoErrorKind::BinaryFile, "binary file"));
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
        Ok(content)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), IoError> {
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

/// In-memory [`FileStore`] for tests and scripted hosts
///
/// Failures can be injected per direction to exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    files: HashMap<PathBuf, String>,
    /// When set, every read fails with this message
    pub fail_reads: Option<String>,
    /// When set, every write fails with this message
    pub fail_writes: Option<String>,
    /// Number of successful writes performed
    pub write_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl FileStore for MemoryStore {
    fn read(&mut self, path: &Path) -> Result<String, IoError> {
        if let Some(msg) = &self.fail_reads {
            return Err(IoError::other(msg.clone()));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::new(IoErrorKind::NotFound, "No such file or directory"))
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), IoError> {
        if let Some(msg) = &self.fail_writes {
            return Err(IoError::other(msg.clone()));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        self.write_count += 1;
        Ok(())
    }
}
