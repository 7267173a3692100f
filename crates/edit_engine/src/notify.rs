//! Change notification for editors
//!
//! Listeners are told about every executed, undone and redone command plus
//! the save/close/start lifecycle of an editor. The session log is one such
//! listener; tests use closures.

use crate::EditorId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorAction {
    Started,
    Executed,
    Undone,
    Redone,
    Saved,
    Closed,
}

/// One notification sent to every listener of an editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorEvent {
    pub editor_id: EditorId,
    pub path: PathBuf,
    pub action: EditorAction,
    /// Command description, or the start reason for [`EditorAction::Started`]
    pub description: Option<String>,
    /// Whether the editor has event logging switched on
    pub logging_enabled: bool,
}

impl EditorEvent {
    /// Line recorded in the session log for this event
    pub fn log_line(&self) -> String {
        let description = self.description.as_deref().unwrap_or_default();
        match self.action {
            EditorAction::Started | EditorAction::Executed => description.to_string(),
            EditorAction::Undone => format!("undo {description}"),
            EditorAction::Redone => format!("redo {description}"),
            EditorAction::Saved => "save".to_string(),
            EditorAction::Closed => "close".to_string(),
        }
    }
}

/// Receives editor events
pub trait EditorListener {
    fn on_event(&mut self, event: &EditorEvent);
}

impl<F> EditorListener for F
where
    F: FnMut(&EditorEvent),
{
    fn on_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(usize);

/// Ordered set of listeners; events are delivered in subscription order
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(ListenerId, Box<dyn EditorListener>)>,
    next_id: usize,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn EditorListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, event: &EditorEvent) {
        for (_, listener) in &mut self.listeners {
            listener.on_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
