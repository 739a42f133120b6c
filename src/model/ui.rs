//! UI state - status line, cursor position and quit request

/// UI state the host renders after each update
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Cursor position as a char offset into the buffer
    pub cursor: usize,
    /// Set once the session has been allowed to end
    pub quit_requested: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }
}
