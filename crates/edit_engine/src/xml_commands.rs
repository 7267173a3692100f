//! Commands for markup documents
//!
//! Each command pairs one [`XmlDocument`] mutation with its natural inverse.
//! The document validates before it mutates, so a failed execute leaves
//! nothing behind to undo.

use crate::command::quote;
use crate::{Command, EditError, Result};
use doc_model::{DetachedSubtree, XmlDocument};

fn describe_text(text: &Option<String>) -> String {
    match text {
        Some(text) => format!(" {}", quote(text)),
        None => String::new(),
    }
}

/// Insert a new element right before an existing sibling
#[derive(Debug, Clone)]
pub struct InsertBeforeCommand {
    tag: String,
    new_id: String,
    target_id: String,
    text: Option<String>,
}

impl InsertBeforeCommand {
    pub fn new(
        tag: impl Into<String>,
        new_id: impl Into<String>,
        target_id: impl Into<String>,
        text: Option<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            new_id: new_id.into(),
            target_id: target_id.into(),
            text,
        }
    }
}

impl Command<XmlDocument> for InsertBeforeCommand {
    fn execute(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.insert_before(&self.tag, &self.new_id, &self.target_id, self.text.as_deref())?;
        Ok(())
    }

    fn undo(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.delete(&self.new_id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "insert-before {} {} {}{}",
            self.tag,
            self.new_id,
            self.target_id,
            describe_text(&self.text)
        )
    }
}

/// Append a new element as the last child of a parent
#[derive(Debug, Clone)]
pub struct AppendChildCommand {
    tag: String,
    new_id: String,
    parent_id: String,
    text: Option<String>,
}

impl AppendChildCommand {
    pub fn new(
        tag: impl Into<String>,
        new_id: impl Into<String>,
        parent_id: impl Into<String>,
        text: Option<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            new_id: new_id.into(),
            parent_id: parent_id.into(),
            text,
        }
    }
}

impl Command<XmlDocument> for AppendChildCommand {
    fn execute(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.append_child(&self.tag, &self.new_id, &self.parent_id, self.text.as_deref())?;
        Ok(())
    }

    fn undo(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.delete(&self.new_id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "append-child {} {} {}{}",
            self.tag,
            self.new_id,
            self.parent_id,
            describe_text(&self.text)
        )
    }
}

/// Rename an element
#[derive(Debug, Clone)]
pub struct EditIdCommand {
    old_id: String,
    new_id: String,
}

impl EditIdCommand {
    pub fn new(old_id: impl Into<String>, new_id: impl Into<String>) -> Self {
        Self {
            old_id: old_id.into(),
            new_id: new_id.into(),
        }
    }
}

impl Command<XmlDocument> for EditIdCommand {
    fn execute(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.edit_id(&self.old_id, &self.new_id)?;
        Ok(())
    }

    fn undo(&mut self, document: &mut XmlDocument) -> Result<()> {
        document.edit_id(&self.new_id, &self.old_id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("edit-id {} {}", self.old_id, self.new_id)
    }
}

/// Replace (or clear) an element's text
#[derive(Debug, Clone)]
pub struct EditTextCommand {
    id: String,
    text: Option<String>,
    /// Text before the last execute; `Some(None)` means there was none
    previous: Option<Option<String>>,
}

impl EditTextCommand {
    pub fn new(id: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id: id.into(),
            text,
            previous: None,
        }
    }
}

impl Command<XmlDocument> for EditTextCommand {
    fn execute(&mut self, document: &mut XmlDocument) -> Result<()> {
        let previous = document.edit_text(&self.id, self.text.as_deref())?;
        self.previous = Some(previous);
        Ok(())
    }

    fn undo(&mut self, document: &mut XmlDocument) -> Result<()> {
        let previous = self
            .previous
            .clone()
            .ok_or_else(|| EditError::NotExecuted(self.description()))?;
        document.edit_text(&self.id, previous.as_deref())?;
        self.previous = None;
        Ok(())
    }

    fn description(&self) -> String {
        let text = self.text.as_deref().unwrap_or_default();
        format!("edit-text {} {}", self.id, quote(text))
    }
}

/// Remove an element together with its subtree
#[derive(Debug, Clone)]
pub struct DeleteElementCommand {
    id: String,
    removed: Option<DetachedSubtree>,
}

impl DeleteElementCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            removed: None,
        }
    }
}

impl Command<XmlDocument> for DeleteElementCommand {
    fn execute(&mut self, document: &mut XmlDocument) -> Result<()> {
        self.removed = Some(document.delete(&self.id)?);
        Ok(())
    }

    fn undo(&mut self, document: &mut XmlDocument) -> Result<()> {
        let removed = self
            .removed
            .clone()
            .ok_or_else(|| EditError::NotExecuted(self.description()))?;
        document.undo_delete(removed)?;
        self.removed = None;
        Ok(())
    }

    fn description(&self) -> String {
        format!("delete-element {}", self.id)
    }
}
