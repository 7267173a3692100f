//! Editor settings
//!
//! Settings live in `settings.json` inside the workspace directory. A
//! missing file means defaults; a file that does not parse is reported and
//! replaced by defaults in memory.

use crate::{Result, DEFAULT_WORKSPACE_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum undo steps per editor; unbounded when absent
    pub history_limit: Option<usize>,
    /// Snapshot file name, relative to the workspace directory
    pub workspace_file: String,
    /// Turn event logging on for every newly created file
    pub log_enabled_by_default: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: None,
            workspace_file: DEFAULT_WORKSPACE_FILE.to_string(),
            log_enabled_by_default: false,
        }
    }
}

/// Loads, caches and saves [`EditorSettings`]
pub struct SettingsManager {
    settings_path: PathBuf,
    current: EditorSettings,
}

impl SettingsManager {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: dir.as_ref().join(SETTINGS_FILE),
            current: EditorSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load(&mut self) -> Result<&EditorSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<EditorSettings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                    EditorSettings::default()
                }
            }
        } else {
            EditorSettings::default()
        };
        Ok(&self.current)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &EditorSettings {
        &self.current
    }

    /// Replace the settings and write them out
    pub fn update(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save()
    }

    pub fn reset(&mut self) -> Result<&EditorSettings> {
        self.current = EditorSettings::default();
        self.save()?;
        Ok(&self.current)
    }
}
