//! Error types for document model operations

use thiserror::Error;

/// Broad category of a document model failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown element id
    NotFound,
    /// Duplicate id
    Conflict,
    /// Markup or tree invariant violated
    Structure,
    /// Line, column or length out of range
    OutOfBounds,
    /// Argument rejected before touching the document
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocModelError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element id already exists: {0}")]
    DuplicateId(String),

    #[error("Structure violation: {0}")]
    Structure(String),

    #[error("Malformed markup at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DocModelError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Category used by callers that only care about the class of failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ElementNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateId(_) => ErrorKind::Conflict,
            Self::Structure(_) | Self::Syntax { .. } => ErrorKind::Structure,
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocModelError>;
