//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tabstop/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Snippet library root (defaults to `<config dir>/snippets`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_dir: Option<PathBuf>,

    /// Completion vocabulary (defaults to `<config dir>/vocabulary.yaml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_file: Option<PathBuf>,

    /// Offer word completions on Tab
    #[serde(default = "default_word_completion")]
    pub word_completion: bool,

    /// Minimum typed prefix before completions are offered
    #[serde(default = "default_completion_min_prefix")]
    pub completion_min_prefix: usize,
}

fn default_word_completion() -> bool {
    true
}

fn default_completion_min_prefix() -> usize {
    1
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snippets_dir: None,
            vocabulary_file: None,
            word_completion: default_word_completion(),
            completion_min_prefix: default_completion_min_prefix(),
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

    /// Load config from `path`, or return defaults if missing or invalid
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

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Effective snippet directory
    pub fn resolved_snippets_dir(&self) -> Option<PathBuf> {
        self.snippets_dir
            .clone()
            .or_else(crate::config_paths::snippets_dir)
    }

    /// Effective vocabulary file
    pub fn resolved_vocabulary_file(&self) -> Option<PathBuf> {
        self.vocabulary_file
            .clone()
            .or_else(crate::config_paths::vocabulary_file)
    }
}
