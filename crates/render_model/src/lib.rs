//! Render Model - text trees
//!
//! One renderer, [`TreeViewer`], draws any tree given a way to list its
//! nodes and a way to name them. Providers for markup documents and for
//! directories on disk live next to it.

mod dir_tree;
mod error;
mod tree;
mod xml_tree;

pub use dir_tree::*;
pub use error::*;
pub use tree::*;
pub use xml_tree::*;
