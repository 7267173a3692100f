//! Commands a user can ask of the active editor

use doc_model::{Position, TextDocument, XmlDocument};
use edit_engine::{
    AppendChildCommand, AppendCommand, Command, DeleteCommand, DeleteElementCommand,
    EditIdCommand, EditTextCommand, InsertBeforeCommand, InsertCommand, ReplaceCommand,
};

/// Edit of a text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextAction {
    Append { text: String },
    Insert { position: Position, text: String },
    Delete { position: Position, length: usize },
    Replace { position: Position, length: usize, text: String },
}

impl TextAction {
    pub fn into_command(self) -> Box<dyn Command<TextDocument>> {
        match self {
            Self::Append { text } => Box::new(AppendCommand::new(text)),
            Self::Insert { position, text } => Box::new(InsertCommand::new(position, text)),
            Self::Delete { position, length } => Box::new(DeleteCommand::new(position, length)),
            Self::Replace {
                position,
                length,
                text,
            } => Box::new(ReplaceCommand::new(position, length, text)),
        }
    }
}

/// Edit of a markup document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlAction {
    InsertBefore {
        tag: String,
        new_id: String,
        target_id: String,
        text: Option<String>,
    },
    AppendChild {
        tag: String,
        new_id: String,
        parent_id: String,
        text: Option<String>,
    },
    EditId { old_id: String, new_id: String },
    EditText { id: String, text: Option<String> },
    DeleteElement { id: String },
}

impl XmlAction {
    pub fn into_command(self) -> Box<dyn Command<XmlDocument>> {
        match self {
            Self::InsertBefore {
                tag,
                new_id,
                target_id,
                text,
            } => Box::new(InsertBeforeCommand::new(tag, new_id, target_id, text)),
            Self::AppendChild {
                tag,
                new_id,
                parent_id,
                text,
            } => Box::new(AppendChildCommand::new(tag, new_id, parent_id, text)),
            Self::EditId { old_id, new_id } => Box::new(EditIdCommand::new(old_id, new_id)),
            Self::EditText { id, text } => Box::new(EditTextCommand::new(id, text)),
            Self::DeleteElement { id } => Box::new(DeleteElementCommand::new(id)),
        }
    }
}

/// Which editors a save applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Active,
    Path(String),
    All,
}
