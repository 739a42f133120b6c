//! File validation utilities for opening files
//!
//! Validates files before attempting to open them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::io::{IoError, IoErrorKind};

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Validate a file before attempting to open it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path) -> Result<(), IoError> {
    let metadata = fs::metadata(path).map_err(IoError::from)?;

    if metadata.is_dir() {
        return Err(IoError::new(IoErrorKind::IsDirectory, "is a directory"));
    }

    if metadata.len() > MAX_FILE_SIZE {
        let size_mb = metadata.len() as f64 / (1024.0 * 1024.0);
        return Err(IoError::new(
            IoErrorKind::TooLarge,
            format!(
                "file too large ({:.1} MB, max {} MB)",
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
        ));
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file and checks for null bytes,
/// which are common in binary files but rare in text files.
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
