//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file at startup
//! - New empty buffer mode

use clap::Parser;
use std::path::PathBuf;

/// A minimal plain-text editor
#[derive(Parser, Debug)]
#[command(name = "metext", version, about = "A minimal plain-text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Start with an empty buffer, ignoring PATH
    #[arg(short = 'n', long)]
    pub new: bool,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty, never-saved buffer
    Empty,
    /// Open an existing file
    OpenFile(PathBuf),
    /// Start empty but save to this (not yet existing) path
    NewFile(PathBuf),
}

impl CliArgs {
    /// Convert parsed CLI args into a startup mode
    pub fn into_mode(self) -> Result<StartupMode, String> {
        if self.new {
            return Ok(StartupMode::Empty);
        }
        match self.path {
            None => Ok(StartupMode::Empty),
            Some(path) if path.is_dir() => {
                Err(format!("{} is a directory", path.display()))
            }
            Some(path) if path.exists() => Ok(StartupMode::OpenFile(path)),
            Some(path) => Ok(StartupMode::NewFile(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("metext").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_args_is_empty() {
        assert_eq!(parse(&[]).into_mode(), Ok(StartupMode::Empty));
    }

    #[test]
    fn test_new_flag_ignores_path() {
        assert_eq!(parse(&["-n", "foo.txt"]).into_mode(), Ok(StartupMode::Empty));
    }

    #[test]
    fn test_existing_file_is_opened() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(
            parse(&[path]).into_mode(),
            Ok(StartupMode::OpenFile(PathBuf::from(path)))
        );
    }

    #[test]
    fn test_missing_file_is_new() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("later.txt");
        let arg = path.to_str().unwrap();
        assert_eq!(parse(&[arg]).into_mode(), Ok(StartupMode::NewFile(path.clone())));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(parse(&[dir.path().to_str().unwrap()]).into_mode().is_err());
    }
}
