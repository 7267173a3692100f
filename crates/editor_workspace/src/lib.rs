//! Editor workspace - the set of open editors
//!
//! A [`Workspace`] opens text and markup files into editors, tracks which
//! one is active, routes commands to it, and keeps the session log and
//! workspace snapshot up to date.

mod actions;
mod error;
mod open_document;
mod prompt;
pub mod spellcheck;
mod workspace;

pub use actions::*;
pub use error::*;
pub use open_document::*;
pub use prompt::*;
pub use spellcheck::{SpellChecker, SpellIssue, WordListChecker};
pub use workspace::*;
