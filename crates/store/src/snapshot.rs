//! Workspace snapshot
//!
//! Which files were open, their flags, and which one was active. Written
//! as pretty JSON on exit and read back on the next start.

use crate::Result;
use doc_model::DocumentKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default snapshot file name, relative to the workspace directory
pub const DEFAULT_WORKSPACE_FILE: &str = ".editor_workspace";

/// One open file in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFileRecord {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub modified: bool,
    pub logging_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub open_files: Vec<OpenFileRecord>,
    /// Path of the active editor, if any
    pub active: Option<PathBuf>,
}

impl WorkspaceSnapshot {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Read a snapshot; `Ok(None)` when there is none yet
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
