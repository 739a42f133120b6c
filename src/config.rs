//! Editor configuration
//!
//! User preferences are read from `~/.config/metext/config.yaml`

use serde::Deserialize;
use std::path::Path;

/// Editor configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Prefix of the window title (e.g., "metext - notes.txt")
    #[serde(default = "default_title")]
    pub title: String,

    /// Whether find starts out case-sensitive
    #[serde(default = "default_case_sensitive_search")]
    pub case_sensitive_search: bool,
}

fn default_title() -> String {
    "metext".to_string()
}

fn default_case_sensitive_search() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            case_sensitive_search: default_case_sensitive_search(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
