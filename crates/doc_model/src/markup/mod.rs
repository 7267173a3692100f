//! Markup reading and writing
//!
//! The dialect is a small subset of XML:
//!
//! - Every element carries a unique `id` attribute
//! - Attribute values are quoted (`key="value"` or `key='value'`)
//! - An element holds either text or child elements, never both
//! - A `<?...?>` declaration and `<!-- -->` comments are skipped
//! - `&lt; &gt; &amp; &quot; &apos;` are decoded; anything else is literal
//!
//! Reading is split into a character-level [`Lexer`] and a stack-based
//! parser; writing is a plain recursive printer.

mod lexer;
mod parser;
mod writer;

pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::parse;
pub use writer::write;
