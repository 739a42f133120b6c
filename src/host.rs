//! Collaborators supplied by the host UI
//!
//! The core owns no windows or dialogs. Hosts hand in a [`Host`] bundle of
//! trait objects for confirmation prompts, path pickers and file storage.

use std::path::{Path, PathBuf};

use crate::io::FileStore;

/// Synchronous yes/no confirmation; `true` means proceed
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// File pickers for open and save-as; `None` means the user cancelled
pub trait PathPicker {
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// `suggested` is the current document path, if any
    fn pick_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;
}

/// Picker that returns fixed answers, for scripted hosts and tests
#[derive(Debug, Default, Clone)]
pub struct FixedPicker {
    pub open_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    /// Number of times either picker was shown
    pub calls: usize,
}

impl PathPicker for FixedPicker {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.calls += 1;
        self.open_path.clone()
    }

    fn pick_save_path(&mut self, _suggested: Option<&Path>) -> Option<PathBuf> {
        self.calls += 1;
        self.save_path.clone()
    }
}

/// Everything `update` needs from the outside world for one message
pub struct Host<'a> {
    pub store: &'a mut dyn FileStore,
    pub prompt: &'a mut dyn Prompt,
    pub picker: &'a mut dyn PathPicker,
}

impl<'a> Host<'a> {
    pub fn new(
        store: &'a mut dyn FileStore,
        prompt: &'a mut dyn Prompt,
        picker: &'a mut dyn PathPicker,
    ) -> Self {
        Self {
            store,
            prompt,
            picker,
        }
    }
}
