//! File I/O for text and markup documents

use crate::{Result, StoreError};
use doc_model::{TextDocument, XmlDocument};
use std::path::Path;

/// Required first line of every markup file
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load a text document; lines are split on `\n`
pub fn load_text(path: impl AsRef<Path>) -> Result<TextDocument> {
    let content = read_existing(path.as_ref())?;
    Ok(TextDocument::from_content(&content))
}

/// Save a text document as newline-joined lines
pub fn save_text(document: &TextDocument, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, document.content())?;
    Ok(())
}

/// Load a markup document. The file must start with [`XML_DECLARATION`].
pub fn load_xml(path: impl AsRef<Path>) -> Result<XmlDocument> {
    let path = path.as_ref();
    let content = read_existing(path)?;
    let Some(markup) = content.strip_prefix(XML_DECLARATION) else {
        return Err(StoreError::InvalidFormat(format!(
            "{} does not start with the XML declaration",
            path.display()
        )));
    };
    let document = XmlDocument::parse(markup)?;
    tracing::debug!(path = %path.display(), elements = document.len(), "loaded markup");
    Ok(document)
}

/// Save a markup document with its declaration line
pub fn save_xml(document: &XmlDocument, path: impl AsRef<Path>) -> Result<()> {
    let mut content = String::from(XML_DECLARATION);
    content.push_str(&document.to_markup());
    std::fs::write(path, content)?;
    Ok(())
}
