//! Error types for workspace operations

use doc_model::DocumentKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Edit(#[from] edit_engine::EditError),

    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error(transparent)]
    DocModel(#[from] doc_model::DocModelError),

    #[error(transparent)]
    Render(#[from] render_model::RenderError),

    #[error("No active editor")]
    NoActiveEditor,

    #[error("File is not open: {0}")]
    NotOpen(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Unsupported file type: {0} (only .txt and .xml)")]
    UnsupportedFileType(String),

    #[error("Active editor holds a {actual} document, this command needs {expected}")]
    WrongDocumentKind {
        expected: DocumentKind,
        actual: DocumentKind,
    },
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;
