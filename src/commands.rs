//! Side-effect commands returned from update

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render title, status line, buffer and highlight
    Redraw,
    /// The session may end
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
