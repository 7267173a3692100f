//! An editor of either document kind

use crate::Result;
use doc_model::{DocumentKind, TextDocument, XmlDocument};
use edit_engine::{Editor, EditorId, EditorInfo, EditorListener, ListenerId};
use std::path::Path;

/// An open editor, tagged by the kind of document it holds
#[derive(Debug)]
pub enum OpenDocument {
    Text(Editor<TextDocument>),
    Xml(Editor<XmlDocument>),
}

impl OpenDocument {
    /// Read `path` from disk
    pub fn load(path: &Path, kind: DocumentKind) -> Result<Self> {
        Ok(match kind {
            DocumentKind::Text => {
                let document = store::load_text(path)?;
                let logging = document.is_logging_marked();
                Self::Text(Editor::new(path, document, logging))
            }
            DocumentKind::Xml => {
                let document = store::load_xml(path)?;
                let logging = document.is_logging_marked();
                Self::Xml(Editor::new(path, document, logging))
            }
        })
    }

    /// Fresh document for a file that does not exist yet
    pub fn create(path: &Path, kind: DocumentKind, with_log: bool) -> Self {
        let mut open = match kind {
            DocumentKind::Text => {
                let mut document = TextDocument::new();
                if with_log {
                    document.mark_logging();
                }
                Self::Text(Editor::new(path, document, with_log))
            }
            DocumentKind::Xml => {
                let mut document = XmlDocument::new();
                if with_log {
                    document.mark_logging();
                }
                Self::Xml(Editor::new(path, document, with_log))
            }
        };
        open.set_modified(true);
        open
    }

    /// Limit undo depth; must be called before any command runs
    pub fn with_history_limit(self, limit: Option<usize>) -> Self {
        match self {
            Self::Text(editor) => Self::Text(editor.with_history_limit(limit)),
            Self::Xml(editor) => Self::Xml(editor.with_history_limit(limit)),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Text(_) => DocumentKind::Text,
            Self::Xml(_) => DocumentKind::Xml,
        }
    }

    pub fn info(&self) -> &EditorInfo {
        match self {
            Self::Text(editor) => editor.info(),
            Self::Xml(editor) => editor.info(),
        }
    }

    pub fn id(&self) -> EditorId {
        self.info().id
    }

    pub fn path(&self) -> &Path {
        &self.info().path
    }

    pub fn is_modified(&self) -> bool {
        self.info().modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        match self {
            Self::Text(editor) => editor.set_modified(modified),
            Self::Xml(editor) => editor.set_modified(modified),
        }
    }

    pub fn set_logging(&mut self, enabled: bool) {
        match self {
            Self::Text(editor) => editor.set_logging(enabled),
            Self::Xml(editor) => editor.set_logging(enabled),
        }
    }

    pub fn undo(&mut self) -> Result<Option<String>> {
        Ok(match self {
            Self::Text(editor) => editor.undo()?,
            Self::Xml(editor) => editor.undo()?,
        })
    }

    pub fn redo(&mut self) -> Result<Option<String>> {
        Ok(match self {
            Self::Text(editor) => editor.redo()?,
            Self::Xml(editor) => editor.redo()?,
        })
    }

    /// Write the document to its path and mark the editor clean
    pub fn save(&mut self) -> Result<()> {
        match self {
            Self::Text(editor) => {
                store::save_text(editor.document(), editor.path())?;
                editor.mark_saved();
            }
            Self::Xml(editor) => {
                store::save_xml(editor.document(), editor.path())?;
                editor.mark_saved();
            }
        }
        tracing::info!(path = %self.path().display(), "saved");
        Ok(())
    }

    pub fn notify_started(&mut self, reason: String) {
        match self {
            Self::Text(editor) => editor.notify_started(reason),
            Self::Xml(editor) => editor.notify_started(reason),
        }
    }

    pub fn notify_closed(&mut self) {
        match self {
            Self::Text(editor) => editor.notify_closed(),
            Self::Xml(editor) => editor.notify_closed(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn EditorListener>) -> ListenerId {
        match self {
            Self::Text(editor) => editor.subscribe(listener),
            Self::Xml(editor) => editor.subscribe(listener),
        }
    }
}
