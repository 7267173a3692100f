//! Command abstraction for document editing

use std::fmt;

/// A reversible unit of document mutation.
///
/// A command captures whatever state it needs during [`execute`](Command::execute)
/// so that [`undo`](Command::undo) can restore the document's previous
/// content exactly. After an undo, calling `execute` again must reproduce the
/// same result, which is how redo works.
pub trait Command<D>: fmt::Debug + Send {
    /// Apply the command to a document
    fn execute(&mut self, document: &mut D) -> crate::Result<()>;

    /// Reverse a previous successful `execute`
    fn undo(&mut self, document: &mut D) -> crate::Result<()>;

    /// One-line description: verb plus normalized arguments, text quoted
    fn description(&self) -> String;
}

/// Quote a text payload for a command description, escaping anything that
/// would break it across lines.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
