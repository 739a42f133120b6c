//! metext - minimal plain-text editor core
//!
//! This crate provides the document state tracker (dirty tracking, discard
//! guard, open/save transitions) and the wrap-around find engine, driven by
//! an Elm-style `update` loop that any host UI can sit on top of.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod io;
pub mod messages;
pub mod model;
pub mod search;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use host::{Host, PathPicker, Prompt};
pub use io::{DiskStore, FileStore, IoError, IoErrorKind, MemoryStore};
pub use messages::Msg;
pub use model::{AppModel, Document};
pub use search::{find_next, MatchRange, SearchState};
