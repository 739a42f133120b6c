//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use metext::commands::Cmd;
use metext::config::EditorConfig;
use metext::host::{FixedPicker, Host, Prompt};
use metext::io::MemoryStore;
use metext::messages::Msg;
use metext::model::{AppModel, Document};
use metext::update::update;

/// Prompt with a fixed answer that records every message it was shown
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub messages: Vec<String>,
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.messages.push(message.to_string());
        self.answer
    }
}

/// Fake collaborators for driving `update`
#[derive(Debug, Default)]
pub struct Fakes {
    pub store: MemoryStore,
    pub prompt: ScriptedPrompt,
    pub picker: FixedPicker,
}

impl Fakes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store,
            ..Default::default()
        }
    }

    /// Dispatch one message through `update`
    pub fn send(&mut self, model: &mut AppModel, msg: impl Into<Msg>) -> Option<Cmd> {
        let mut host = Host::new(&mut self.store, &mut self.prompt, &mut self.picker);
        update(model, msg.into(), &mut host)
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt.messages.len()
    }
}

/// Create a test model holding a clean, never-saved document with `text`
pub fn test_model(text: &str) -> AppModel {
    AppModel::with_document(Document::with_text(text), EditorConfig::default())
}
