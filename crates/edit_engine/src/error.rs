//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),

    #[error("Cannot undo '{0}': it has not been executed")]
    NotExecuted(String),
}

impl EditError {
    /// Category of the underlying document model error, if any
    pub fn kind(&self) -> Option<doc_model::ErrorKind> {
        match self {
            Self::DocModel(err) => Some(err.kind()),
            Self::NotExecuted(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditError>;
