//! Document kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The two kinds of document an editor can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Line-oriented plain text (`.txt`)
    #[serde(alias = "txt")]
    Text,
    /// Id-indexed markup tree (`.xml`)
    Xml,
}

impl DocumentKind {
    /// Pick the kind from a file extension, case-insensitively
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Parse the kind name used on the command line (`text` / `xml`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// File extension for this kind
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Xml => f.write_str("xml"),
        }
    }
}
