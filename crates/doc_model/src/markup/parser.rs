//! Markup parser - builds an [`XmlDocument`] from lexer tokens
//!
//! A stack machine: open tags push, close tags pop, text attaches to the
//! element on top of the stack. Every structural rule of the dialect is
//! enforced here so that a successfully parsed document already satisfies
//! the tree invariants.

use super::lexer::{Lexer, TokenKind};
use crate::xml_document::check_id_syntax;
use crate::{DocModelError, ElementId, Result, XmlDocument, XmlElement};
use std::collections::HashMap;

/// Parse markup (without any leading declaration requirement) into a document
pub fn parse(markup: &str) -> Result<XmlDocument> {
    let mut elements: HashMap<ElementId, XmlElement> = HashMap::new();
    let mut stack: Vec<ElementId> = Vec::new();
    let mut root: Option<ElementId> = None;

    for token in Lexer::new(markup.trim()) {
        let token = token?;
        match token.kind {
            TokenKind::OpenTag { tag, attributes } => {
                let mut element = XmlElement::from_attributes(&tag, attributes).ok_or_else(|| {
                    DocModelError::Structure(format!("<{tag}> is missing an id attribute"))
                })?;
                let id = element.id().clone();
                check_id_syntax(&id)?;
                if elements.contains_key(&id) {
                    return Err(DocModelError::DuplicateId(id.to_string()));
                }

                match stack.last() {
                    Some(parent_id) => {
                        element.set_parent(Some(parent_id.clone()));
                        if let Some(parent) = elements.get_mut(parent_id) {
                            parent.children_mut().push(id.clone());
                        }
                    }
                    None if root.is_some() => {
                        return Err(DocModelError::Structure(
                            "document has more than one root element".to_string(),
                        ));
                    }
                    None => root = Some(id.clone()),
                }

                elements.insert(id.clone(), element);
                stack.push(id);
            }

            TokenKind::CloseTag { tag } => {
                let top = stack
                    .pop()
                    .and_then(|id| elements.get(&id))
                    .ok_or_else(|| DocModelError::Structure(format!("</{tag}> has no matching open tag")))?;
                if top.tag() != tag {
                    return Err(DocModelError::Structure(format!(
                        "</{tag}> does not close <{}>",
                        top.tag()
                    )));
                }
                if top.text().is_some() && top.has_children() {
                    return Err(mixed_content(top));
                }
            }

            TokenKind::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let top = match stack.last() {
                    Some(id) => elements.get_mut(id),
                    None => None,
                }
                .ok_or_else(|| DocModelError::Structure("text found outside the root element".to_string()))?;
                if top.has_children() {
                    return Err(mixed_content(top));
                }
                top.push_text(text);
            }
        }
    }

    let root = root.ok_or_else(|| DocModelError::Structure("document has no root element".to_string()))?;
    if let Some(open) = stack.last().and_then(|id| elements.get(id)) {
        return Err(DocModelError::Structure(format!("<{}> is never closed", open.tag())));
    }

    tracing::debug!(root = %root, elements = elements.len(), "parsed markup document");
    Ok(XmlDocument::from_parts(root, elements))
}

fn mixed_content(element: &XmlElement) -> DocModelError {
    DocModelError::Structure(format!(
        "<{}> cannot hold both text and child elements",
        element.tag()
    ))
}
