//! Document Model - line-oriented text documents and id-indexed markup trees
//!
//! This crate holds the two document models an editor can work on, the
//! markup lexer/parser/writer for the tree model, and the shared error type.
//! Nothing in here knows about undo; callers snapshot or invert as needed.

mod document;
mod element;
mod element_id;
mod error;
pub mod markup;
mod text;
mod xml_document;

pub use document::*;
pub use element::*;
pub use element_id::*;
pub use error::*;
pub use text::*;
pub use xml_document::*;
