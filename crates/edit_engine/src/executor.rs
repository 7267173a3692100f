//! Per-document editor
//!
//! An [`Editor`] owns one document, the command history bound to it and
//! the listeners interested in it. All mutation goes through
//! [`Editor::execute`], so the history always matches the document.

use crate::{ChangeNotifier, Command, CommandHistory, EditorAction, EditorEvent, EditorId, EditorListener, ListenerId, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bookkeeping shown to users and saved in workspace snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInfo {
    pub id: EditorId,
    pub path: PathBuf,
    /// Changed since the last save
    pub modified: bool,
    pub logging_enabled: bool,
}

/// A document together with its history and listeners
pub struct Editor<D> {
    info: EditorInfo,
    document: D,
    history: CommandHistory<D>,
    notifier: ChangeNotifier,
}

impl<D> Editor<D> {
    /// Create an editor for `document`, which lives (or will live) at `path`
    pub fn new(path: impl Into<PathBuf>, document: D, logging_enabled: bool) -> Self {
        Self {
            info: EditorInfo {
                id: EditorId::new(),
                path: path.into(),
                modified: false,
                logging_enabled,
            },
            document,
            history: CommandHistory::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Cap the number of undo steps kept for this editor
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = match limit {
            Some(limit) => CommandHistory::with_limit(limit),
            None => CommandHistory::new(),
        };
        self
    }

    pub fn info(&self) -> &EditorInfo {
        &self.info
    }

    pub fn id(&self) -> EditorId {
        self.info.id
    }

    pub fn path(&self) -> &Path {
        &self.info.path
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory<D> {
        &self.history
    }

    pub fn is_modified(&self) -> bool {
        self.info.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.info.modified = modified;
    }

    pub fn logging_enabled(&self) -> bool {
        self.info.logging_enabled
    }

    pub fn set_logging(&mut self, enabled: bool) {
        self.info.logging_enabled = enabled;
    }

    /// Run a command against the document and record it
    pub fn execute(&mut self, command: Box<dyn Command<D>>) -> Result<String> {
        let description = self.history.execute(&mut self.document, command)?;
        tracing::debug!(path = %self.info.path.display(), command = %description, "executed");

        self.info.modified = true;
        self.emit(EditorAction::Executed, Some(description.clone()));
        Ok(description)
    }

    /// Undo the latest command. `Ok(None)` if there is nothing to undo.
    pub fn undo(&mut self) -> Result<Option<String>> {
        let Some(description) = self.history.undo(&mut self.document)? else {
            tracing::warn!(path = %self.info.path.display(), "nothing to undo");
            return Ok(None);
        };
        tracing::debug!(path = %self.info.path.display(), command = %description, "undone");

        self.info.modified = true;
        self.emit(EditorAction::Undone, Some(description.clone()));
        Ok(Some(description))
    }

    /// Redo the latest undone command. `Ok(None)` if there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<String>> {
        let Some(description) = self.history.redo(&mut self.document)? else {
            tracing::warn!(path = %self.info.path.display(), "nothing to redo");
            return Ok(None);
        };
        tracing::debug!(path = %self.info.path.display(), command = %description, "redone");

        self.info.modified = true;
        self.emit(EditorAction::Redone, Some(description.clone()));
        Ok(Some(description))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Record that the document was written to disk
    pub fn mark_saved(&mut self) {
        self.info.modified = false;
        self.emit(EditorAction::Saved, None);
    }

    /// Announce that the editor was opened, e.g. `load notes.txt`
    pub fn notify_started(&mut self, reason: impl Into<String>) {
        self.emit(EditorAction::Started, Some(reason.into()));
    }

    pub fn notify_closed(&mut self) {
        self.emit(EditorAction::Closed, None);
    }

    pub fn subscribe(&mut self, listener: Box<dyn EditorListener>) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn emit(&mut self, action: EditorAction, description: Option<String>) {
        if self.notifier.is_empty() {
            return;
        }
        let event = EditorEvent {
            editor_id: self.info.id,
            path: self.info.path.clone(),
            action,
            description,
            logging_enabled: self.info.logging_enabled,
        };
        self.notifier.notify(&event);
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Editor<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("info", &self.info)
            .field("document", &self.document)
            .field("undo_len", &self.history.undo_len())
            .field("redo_len", &self.history.redo_len())
            .finish()
    }
}
