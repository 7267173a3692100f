//! Edit Engine - Undoable commands, command history and editors
//!
//! Every change to a document is a [`Command`] run through the document's
//! own [`CommandHistory`]. An [`Editor`] ties a document, its history and
//! its listeners together.

mod command;
mod editor_id;
mod error;
mod executor;
mod notify;
mod text_commands;
mod undo;
mod xml_commands;

pub use command::*;
pub use editor_id::*;
pub use error::*;
pub use executor::*;
pub use notify::*;
pub use text_commands::*;
pub use undo::*;
pub use xml_commands::*;
