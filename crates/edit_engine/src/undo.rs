//! Undo/redo history for a single document

use crate::{Command, Result};

/// Undo and redo stacks of commands for one document.
///
/// The history does not own the document; the caller passes it in on every
/// call so that one history is only ever used with the document it was
/// created for (see [`Editor`](crate::Editor)).
pub struct CommandHistory<D> {
    /// Commands that can be undone, most recent last
    undo_stack: Vec<Box<dyn Command<D>>>,
    /// Commands that can be redone, most recent last
    redo_stack: Vec<Box<dyn Command<D>>>,
    /// Maximum number of undo entries, unbounded if `None`
    max_entries: Option<usize>,
}

impl<D> CommandHistory<D> {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries: None,
        }
    }

    /// Create a history that keeps at most `max_entries` undo steps
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            ..Self::new()
        }
    }

    /// Run `command` and record it.
    ///
    /// A command that fails is dropped without touching either stack. A
    /// successful one clears the redo stack. Returns the command description.
    pub fn execute(&mut self, document: &mut D, mut command: Box<dyn Command<D>>) -> Result<String> {
        command.execute(document)?;
        let description = command.description();

        self.redo_stack.clear();
        self.undo_stack.push(command);

        if let Some(max) = self.max_entries {
            let excess = self.undo_stack.len().saturating_sub(max);
            self.undo_stack.drain(..excess);
        }

        Ok(description)
    }

    /// Reverse the most recent command.
    ///
    /// Returns `Ok(None)` when there is nothing to undo. If the inverse
    /// fails the command stays on the undo stack.
    pub fn undo(&mut self, document: &mut D) -> Result<Option<String>> {
        let Some(mut command) = self.undo_stack.pop() else {
            return Ok(None);
        };

        if let Err(err) = command.undo(document) {
            self.undo_stack.push(command);
            return Err(err);
        }

        let description = command.description();
        self.redo_stack.push(command);
        Ok(Some(description))
    }

    /// Re-apply the most recently undone command.
    ///
    /// Returns `Ok(None)` when there is nothing to redo. If re-applying
    /// fails the command stays on the redo stack.
    pub fn redo(&mut self, document: &mut D) -> Result<Option<String>> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(None);
        };

        if let Err(err) = command.execute(document) {
            self.redo_stack.push(command);
            return Err(err);
        }

        let description = command.description();
        self.undo_stack.push(command);
        Ok(Some(description))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Descriptions on the undo stack, oldest first
    pub fn undo_descriptions(&self) -> Vec<String> {
        self.undo_stack.iter().map(|c| c.description()).collect()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<D> Default for CommandHistory<D> {
    fn default() -> Self {
        Self::new()
    }
}
