//! Line-oriented text document
//!
//! Every public coordinate is 1-based `(line, column)`; columns count
//! `char`s. Internally lines are stored in a plain `Vec<String>` and indexed
//! from zero.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First line of a text file that has event logging switched on
pub const TEXT_LOG_MARKER: &str = "# log";

/// A 1-based `line:column` pair as typed by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Parse `"line:col"`
    pub fn parse(input: &str) -> Result<Self> {
        let (line, column) = parse_pair(input)?;
        Ok(Self { line, column })
    }
}

impl FromStr for Position {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Inclusive 1-based line range used by [`TextDocument::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Every line of the document
    pub fn all() -> Self {
        Self {
            start: 1,
            end: usize::MAX,
        }
    }

    /// Parse `"start:end"`
    pub fn parse(input: &str) -> Result<Self> {
        let (start, end) = parse_pair(input)?;
        Ok(Self { start, end })
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::all()
    }
}

fn parse_pair(input: &str) -> Result<(usize, usize)> {
    let invalid = || DocModelError::InvalidInput(format!("expected <number>:<number>, got {input:?}"));
    let (left, right) = input.trim().split_once(':').ok_or_else(invalid)?;
    let parse = |part: &str| -> Result<usize> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        part.parse::<usize>().map_err(|_| invalid())
    };
    Ok((parse(left)?, parse(right)?))
}

/// Byte offset of the `column`-th char, or the line length past the end
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Flat text document: an ordered sequence of lines without newlines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Create an empty document (no lines at all)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from newline-joined file content.
    ///
    /// Empty content yields a document with no lines, so that loading and
    /// saving an empty file is lossless.
    pub fn from_content(content: &str) -> Self {
        if content.is_empty() {
            return Self::new();
        }
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    /// Newline-joined content, the on-disk form
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace every line at once. Used by snapshot-based undo.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the first line is exactly the logging marker
    pub fn is_logging_marked(&self) -> bool {
        self.lines.first().is_some_and(|line| line == TEXT_LOG_MARKER)
    }

    /// Put the logging marker in front of the document if it is missing
    pub fn mark_logging(&mut self) {
        if !self.is_logging_marked() {
            self.lines.insert(0, TEXT_LOG_MARKER.to_string());
        }
    }

    /// Add exactly one line at the end of the document
    pub fn append(&mut self, line: &str) -> Result<()> {
        if line.contains('\n') {
            return Err(DocModelError::InvalidInput(
                "append adds a single line and cannot contain a newline".to_string(),
            ));
        }
        self.lines.push(line.to_string());
        Ok(())
    }

    /// Remove the last line, returning it
    pub fn remove_last_line(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Insert `text` before the char at 1-based `(line, column)`.
    ///
    /// The line one past the end and the column one past the end of a line
    /// are both legal. Newlines inside `text` split the target line.
    pub fn insert_at(&mut self, line: usize, column: usize, text: &str) -> Result<()> {
        if self.lines.is_empty() && (line, column) != (1, 1) {
            return Err(DocModelError::OutOfBounds(
                "an empty document only accepts insertion at 1:1".to_string(),
            ));
        }
        let row = self.check_line(line, true)?;

        // The line one past the end does not exist yet; it starts out empty.
        let current = self.lines.get(row).map_or("", String::as_str);
        let col = check_column(current, column, true)?;

        let split = byte_offset(current, col);
        let mut spliced = String::with_capacity(current.len() + text.len());
        spliced.push_str(&current[..split]);
        spliced.push_str(text);
        spliced.push_str(&current[split..]);

        let replacement = spliced.split('\n').map(str::to_string);
        if row == self.lines.len() {
            self.lines.extend(replacement);
        } else {
            self.lines.splice(row..=row, replacement);
        }
        Ok(())
    }

    /// Delete `length` chars starting at 1-based `(line, column)`.
    ///
    /// Deletion never crosses the end of a line. A line left empty is removed
    /// from the document.
    pub fn delete_at(&mut self, line: usize, column: usize, length: usize) -> Result<()> {
        let row = self.check_line(line, false)?;
        let current = &self.lines[row];
        let col = check_column(current, column, length == 0)?;

        let width = current.chars().count();
        if col.checked_add(length).map_or(true, |end| end > width) {
            return Err(DocModelError::OutOfBounds(format!(
                "cannot delete {length} chars from column {column}: line {line} has {width}"
            )));
        }

        let start = byte_offset(current, col);
        let end = byte_offset(current, col + length);
        let mut edited = String::with_capacity(current.len() - (end - start));
        edited.push_str(&current[..start]);
        edited.push_str(&current[end..]);

        if edited.is_empty() {
            self.lines.remove(row);
        } else {
            self.lines[row] = edited;
        }
        Ok(())
    }

    /// Render lines `range.start..=range.end` as `"n: text"` rows.
    ///
    /// The range is clamped to the document. An empty result after clamping
    /// is reported as a warning and renders nothing.
    pub fn show(&self, range: LineRange) -> String {
        let start = range.start.max(1);
        let end = range.end.min(self.lines.len());
        if start > end {
            tracing::warn!(start, end, "start line is past end line, nothing to show");
            return String::new();
        }

        self.lines[start - 1..end]
            .iter()
            .enumerate()
            .map(|(offset, line)| format!("{}: {}", start + offset, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_line(&self, line: usize, allow_end: bool) -> Result<usize> {
        let limit = self.lines.len() + usize::from(allow_end);
        if line == 0 || line > limit {
            return Err(DocModelError::OutOfBounds(format!(
                "line {line} is outside 1..={limit}"
            )));
        }
        Ok(line - 1)
    }
}

fn check_column(line: &str, column: usize, allow_end: bool) -> Result<usize> {
    let limit = line.chars().count() + usize::from(allow_end);
    if column == 0 || column > limit {
        return Err(DocModelError::OutOfBounds(format!(
            "column {column} is outside 1..={limit}"
        )));
    }
    Ok(column - 1)
}
