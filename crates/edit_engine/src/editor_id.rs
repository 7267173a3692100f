//! Editor instance identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one open editor for the lifetime of the process.
/// Two editors opened on the same path (one after the other) get
/// different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorId(Uuid);

impl EditorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EditorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EditorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
