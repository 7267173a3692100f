//! Commands for line-oriented text documents
//!
//! Append is undone by dropping the line it added. Insert and delete keep a
//! copy of every line from before the edit and put it back on undo, which
//! sidesteps the newline-splitting cases a minimal inverse would have to
//! handle. Replace is a delete followed by an insert.

use crate::command::quote;
use crate::{Command, EditError, Result};
use doc_model::{Position, TextDocument};

/// Add one line at the end of the document
#[derive(Debug, Clone)]
pub struct AppendCommand {
    text: String,
    applied: bool,
}

impl AppendCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }
}

impl Command<TextDocument> for AppendCommand {
    fn execute(&mut self, document: &mut TextDocument) -> Result<()> {
        document.append(&self.text)?;
        self.applied = true;
        Ok(())
    }

    fn undo(&mut self, document: &mut TextDocument) -> Result<()> {
        if !self.applied || document.remove_last_line().is_none() {
            return Err(EditError::NotExecuted(self.description()));
        }
        self.applied = false;
        Ok(())
    }

    fn description(&self) -> String {
        format!("append {}", quote(&self.text))
    }
}

/// Insert text at a 1-based position
#[derive(Debug, Clone)]
pub struct InsertCommand {
    position: Position,
    text: String,
    snapshot: Option<Vec<String>>,
}

impl InsertCommand {
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            snapshot: None,
        }
    }
}

impl Command<TextDocument> for InsertCommand {
    fn execute(&mut self, document: &mut TextDocument) -> Result<()> {
        let before = document.lines().to_vec();
        document.insert_at(self.position.line, self.position.column, &self.text)?;
        self.snapshot = Some(before);
        Ok(())
    }

    fn undo(&mut self, document: &mut TextDocument) -> Result<()> {
        let lines = self
            .snapshot
            .take()
            .ok_or_else(|| EditError::NotExecuted(self.description()))?;
        document.set_lines(lines);
        Ok(())
    }

    fn description(&self) -> String {
        format!("insert {} {}", self.position, quote(&self.text))
    }
}

/// Delete a run of chars within one line
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    position: Position,
    length: usize,
    snapshot: Option<Vec<String>>,
}

impl DeleteCommand {
    pub fn new(position: Position, length: usize) -> Self {
        Self {
            position,
            length,
            snapshot: None,
        }
    }
}

impl Command<TextDocument> for DeleteCommand {
    fn execute(&mut self, document: &mut TextDocument) -> Result<()> {
        let before = document.lines().to_vec();
        document.delete_at(self.position.line, self.position.column, self.length)?;
        self.snapshot = Some(before);
        Ok(())
    }

    fn undo(&mut self, document: &mut TextDocument) -> Result<()> {
        let lines = self
            .snapshot
            .take()
            .ok_or_else(|| EditError::NotExecuted(self.description()))?;
        document.set_lines(lines);
        Ok(())
    }

    fn description(&self) -> String {
        format!("delete {} {}", self.position, self.length)
    }
}

/// Replace `length` chars at a position with new text
#[derive(Debug, Clone)]
pub struct ReplaceCommand {
    delete: DeleteCommand,
    insert: InsertCommand,
}

impl ReplaceCommand {
    pub fn new(position: Position, length: usize, text: impl Into<String>) -> Self {
        Self {
            delete: DeleteCommand::new(position, length),
            insert: InsertCommand::new(position, text),
        }
    }
}

impl Command<TextDocument> for ReplaceCommand {
    fn execute(&mut self, document: &mut TextDocument) -> Result<()> {
        self.delete.execute(document)?;
        if let Err(err) = self.insert.execute(document) {
            self.delete.undo(document)?;
            return Err(err);
        }
        Ok(())
    }

    fn undo(&mut self, document: &mut TextDocument) -> Result<()> {
        self.insert.undo(document)?;
        self.delete.undo(document)
    }

    fn description(&self) -> String {
        format!(
            "replace {} {} {}",
            self.delete.position,
            self.delete.length,
            quote(&self.insert.text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommandHistory;
    use proptest::prelude::*;

    fn doc(lines: &[&str]) -> TextDocument {
        let mut doc = TextDocument::new();
        doc.set_lines(lines.iter().map(|l| l.to_string()).collect());
        doc
    }

    #[test]
    fn test_insert_scenario() {
        let mut document = doc(&["Line 1", "Line 2"]);
        let mut history = CommandHistory::new();
        history
            .execute(&mut document, Box::new(InsertCommand::new(Position::new(1, 7), " Inserted")))
            .unwrap();
        assert_eq!(document.content(), "Line 1 Inserted\nLine 2");

        history.undo(&mut document).unwrap();
        assert_eq!(document.content(), "Line 1\nLine 2");
    }

    #[test]
    fn test_delete_scenario() {
        let mut document = doc(&["Line 1", "Line 2"]);
        let mut history = CommandHistory::new();
        history
            .execute(&mut document, Box::new(DeleteCommand::new(Position::new(1, 6), 1)))
            .unwrap();
        assert_eq!(document.content(), "Line \nLine 2");

        history.undo(&mut document).unwrap();
        assert_eq!(document.content(), "Line 1\nLine 2");
    }

    #[test]
    fn test_delete_whole_line_removes_it() {
        let mut document = doc(&["abc", "def"]);
        let mut history = CommandHistory::new();
        history
            .execute(&mut document, Box::new(DeleteCommand::new(Position::new(1, 1), 3)))
            .unwrap();
        // the emptied line is gone rather than left blank
        assert_eq!(document.lines(), ["def"]);
        history.undo(&mut document).unwrap();
        assert_eq!(document.lines(), ["abc", "def"]);
    }

    #[test]
    fn test_append_with_newline_is_rejected() {
        let mut document = doc(&["one"]);
        let mut history = CommandHistory::new();
        let err = history
            .execute(&mut document, Box::new(AppendCommand::new("two\nthree")))
            .unwrap_err();
        assert_eq!(err.kind(), Some(doc_model::ErrorKind::InvalidInput));
        assert_eq!(document.content(), "one");
        assert!(!history.can_undo());
    }

    #[test]
    fn test_append_undo_redo() {
        let mut document = TextDocument::new();
        let mut history = CommandHistory::new();
        history.execute(&mut document, Box::new(AppendCommand::new("first"))).unwrap();
        history.execute(&mut document, Box::new(AppendCommand::new("second"))).unwrap();
        assert_eq!(document.content(), "first\nsecond");

        history.undo(&mut document).unwrap();
        assert_eq!(document.content(), "first");
        history.redo(&mut document).unwrap();
        assert_eq!(document.content(), "first\nsecond");
    }

    #[test]
    fn test_undo_before_execute_fails() {
        let mut document = doc(&["x"]);
        let mut command = InsertCommand::new(Position::new(1, 1), "y");
        assert!(matches!(command.undo(&mut document), Err(EditError::NotExecuted(_))));
        let mut command = AppendCommand::new("y");
        assert!(matches!(command.undo(&mut document), Err(EditError::NotExecuted(_))));
        assert_eq!(document.content(), "x");
    }

    #[test]
    fn test_replace_and_undo() {
        let mut document = doc(&["Hello world"]);
        let mut history = CommandHistory::new();
        let description = history
            .execute(
                &mut document,
                Box::new(ReplaceCommand::new(Position::new(1, 7), 5, "Rust")),
            )
            .unwrap();
        assert_eq!(description, "replace 1:7 5 \"Rust\"");
        assert_eq!(document.content(), "Hello Rust");

        history.undo(&mut document).unwrap();
        assert_eq!(document.content(), "Hello world");
        history.redo(&mut document).unwrap();
        assert_eq!(document.content(), "Hello Rust");
    }

    #[test]
    fn test_replace_whole_last_line() {
        // the delete removes "c", so the insert lands on a fresh line 2
        let mut document = doc(&["ab", "c"]);
        let mut history = CommandHistory::new();
        history
            .execute(&mut document, Box::new(ReplaceCommand::new(Position::new(2, 1), 1, "zz")))
            .unwrap();
        assert_eq!(document.lines(), ["ab", "zz"]);

        history.undo(&mut document).unwrap();
        assert_eq!(document.lines(), ["ab", "c"]);
    }

    #[test]
    fn test_replace_failing_delete_records_nothing() {
        let mut document = doc(&["ab"]);
        let mut history = CommandHistory::new();
        assert!(history
            .execute(&mut document, Box::new(ReplaceCommand::new(Position::new(1, 2), 5, "x")))
            .is_err());
        assert_eq!(document.content(), "ab");
        assert!(!history.can_undo());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(AppendCommand::new("a \"b\"").description(), r#"append "a \"b\"""#);
        assert_eq!(
            InsertCommand::new(Position::new(2, 3), "x\ny").description(),
            r#"insert 2:3 "x\ny""#
        );
        assert_eq!(DeleteCommand::new(Position::new(1, 6), 1).description(), "delete 1:6 1");
    }

    #[test]
    fn test_insert_into_empty_document() {
        let mut document = TextDocument::new();
        let mut history = CommandHistory::new();
        assert!(history
            .execute(&mut document, Box::new(InsertCommand::new(Position::new(1, 2), "x")))
            .is_err());
        history
            .execute(&mut document, Box::new(InsertCommand::new(Position::new(1, 1), "a\nb")))
            .unwrap();
        assert_eq!(document.lines(), ["a", "b"]);
        history.undo(&mut document).unwrap();
        assert!(document.is_empty());
    }

    fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z ]{1,8}", 1..5)
    }

    /// Lines plus a legal 1-based insert position
    fn insert_case() -> impl Strategy<Value = (Vec<String>, usize, usize, String)> {
        lines_strategy().prop_flat_map(|lines| {
            let count = lines.len();
            (Just(lines), 0..count).prop_flat_map(|(lines, row)| {
                let width = lines[row].chars().count();
                (Just(lines), Just(row + 1), 1..=width + 1, "[a-z\n]{0,6}")
            })
        })
    }

    /// Lines plus a legal 1-based delete range within one line
    fn delete_case() -> impl Strategy<Value = (Vec<String>, usize, usize, usize)> {
        lines_strategy().prop_flat_map(|lines| {
            let count = lines.len();
            (Just(lines), 0..count).prop_flat_map(|(lines, row)| {
                let width = lines[row].chars().count();
                (Just(lines), Just(row + 1), 1..=width).prop_flat_map(move |(lines, line, column)| {
                    (Just(lines), Just(line), Just(column), 0..=width + 1 - column)
                })
            })
        })
    }

    proptest! {
        #[test]
        fn prop_insert_round_trips((lines, line, column, text) in insert_case()) {
            let mut document = TextDocument::new();
            document.set_lines(lines.clone());
            let mut history = CommandHistory::new();

            history.execute(&mut document, Box::new(InsertCommand::new(Position::new(line, column), text))).unwrap();
            let after = document.content();

            history.undo(&mut document).unwrap();
            prop_assert_eq!(document.lines(), lines.as_slice());

            history.redo(&mut document).unwrap();
            prop_assert_eq!(document.content(), after);
        }

        #[test]
        fn prop_delete_round_trips((lines, line, column, length) in delete_case()) {
            let mut document = TextDocument::new();
            document.set_lines(lines.clone());
            let mut history = CommandHistory::new();

            history.execute(&mut document, Box::new(DeleteCommand::new(Position::new(line, column), length))).unwrap();
            let after = document.content();

            history.undo(&mut document).unwrap();
            prop_assert_eq!(document.lines(), lines.as_slice());

            history.redo(&mut document).unwrap();
            prop_assert_eq!(document.content(), after);
        }

        #[test]
        fn prop_replace_round_trips((lines, line, column, length) in delete_case(), text in "[a-z]{0,4}") {
            let mut document = TextDocument::new();
            document.set_lines(lines.clone());
            let mut history = CommandHistory::new();

            let result = history.execute(
                &mut document,
                Box::new(ReplaceCommand::new(Position::new(line, column), length, text)),
            );
            if result.is_ok() {
                let after = document.content();
                history.undo(&mut document).unwrap();
                prop_assert_eq!(document.lines(), lines.as_slice());
                history.redo(&mut document).unwrap();
                prop_assert_eq!(document.content(), after);
            } else {
                prop_assert_eq!(document.lines(), lines.as_slice());
                prop_assert!(!history.can_undo());
            }
        }

        #[test]
        fn prop_append_with_newline_never_recorded(prefix in "[a-z]{0,4}", suffix in "[a-z]{0,4}") {
            let mut document = TextDocument::from_content("keep");
            let mut history = CommandHistory::new();
            let text = format!("{prefix}\n{suffix}");
            prop_assert!(history.execute(&mut document, Box::new(AppendCommand::new(text))).is_err());
            prop_assert_eq!(document.content(), "keep");
            prop_assert!(!history.can_undo());
        }
    }
}
