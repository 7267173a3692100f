//! Id-indexed markup document
//!
//! Elements live in one arena keyed by their id, so the arena doubles as the
//! document-wide id table. Children and parent links are ids, which keeps
//! the tree free of reference cycles while parent lookup stays O(1).
//!
//! Every mutation checks all of its preconditions before it touches the
//! arena: a rejected call leaves the document exactly as it was.

use crate::{markup, DocModelError, ElementId, Result, XmlElement};
use std::collections::HashMap;

/// Attribute on the root element that switches event logging on
pub const XML_LOG_ATTRIBUTE: &str = "log";

/// A subtree removed by [`XmlDocument::delete`], with everything needed to
/// put it back where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedSubtree {
    root: ElementId,
    elements: HashMap<ElementId, XmlElement>,
    parent_id: ElementId,
    index: usize,
}

impl DetachedSubtree {
    /// Id of the removed element
    pub fn root_id(&self) -> &ElementId {
        &self.root
    }

    /// The removed element itself
    pub fn root(&self) -> Option<&XmlElement> {
        self.elements.get(&self.root)
    }

    /// Id of the element the subtree was removed from
    pub fn parent_id(&self) -> &ElementId {
        &self.parent_id
    }

    /// Position the subtree held in its parent's child list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of elements in the subtree, root included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

/// Markup document: a single-rooted element tree plus its id table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: ElementId,
    elements: HashMap<ElementId, XmlElement>,
}

impl XmlDocument {
    /// Fresh document: a single empty `<root id="root">` element
    pub fn new() -> Self {
        let root = XmlElement::new("root", "root");
        let root_id = root.id().clone();
        let mut elements = HashMap::new();
        elements.insert(root_id.clone(), root);
        Self {
            root: root_id,
            elements,
        }
    }

    /// Parse markup into a document
    pub fn parse(markup: &str) -> Result<Self> {
        markup::parse(markup)
    }

    pub(crate) fn from_parts(root: ElementId, elements: HashMap<ElementId, XmlElement>) -> Self {
        Self { root, elements }
    }

    /// Serialize back to markup (no declaration line)
    pub fn to_markup(&self) -> String {
        markup::write(self)
    }

    pub fn root_id(&self) -> &ElementId {
        &self.root
    }

    pub fn root(&self) -> &XmlElement {
        &self.elements[&self.root]
    }

    pub fn element(&self, id: &str) -> Option<&XmlElement> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Children of `id` in document order; empty for unknown ids
    pub fn children(&self, id: &str) -> impl Iterator<Item = &XmlElement> {
        self.elements
            .get(id)
            .map(XmlElement::children)
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.elements.get(child))
    }

    /// All ids, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.keys()
    }

    /// Number of elements, root included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Depth-first pre-order walk starting at the root
    pub fn walk(&self) -> Vec<&XmlElement> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut pending = vec![&self.root];
        while let Some(id) = pending.pop() {
            if let Some(element) = self.elements.get(id) {
                order.push(element);
                pending.extend(element.children().iter().rev());
            }
        }
        order
    }

    pub fn is_logging_marked(&self) -> bool {
        self.root().attributes().get(XML_LOG_ATTRIBUTE) == Some("true")
    }

    pub fn mark_logging(&mut self) {
        if let Some(root) = self.elements.get_mut(&self.root) {
            root.set_attribute(XML_LOG_ATTRIBUTE, "true");
        }
    }

    /// Insert a new element as the sibling immediately before `target_id`
    pub fn insert_before(
        &mut self,
        tag: &str,
        new_id: &str,
        target_id: &str,
        text: Option<&str>,
    ) -> Result<()> {
        let target = self.require(target_id)?;
        self.check_new_element(tag, new_id)?;
        let parent_id = target
            .parent()
            .cloned()
            .ok_or_else(|| DocModelError::Structure("cannot insert before the root element".to_string()))?;
        let index = self.child_index(parent_id.as_str(), target_id)?;

        let mut element = XmlElement::new(tag, new_id).with_text(text.map(str::to_string));
        element.set_parent(Some(parent_id.clone()));
        self.attach(element, &parent_id, index);
        Ok(())
    }

    /// Append a new element as the last child of `parent_id`
    pub fn append_child(
        &mut self,
        tag: &str,
        new_id: &str,
        parent_id: &str,
        text: Option<&str>,
    ) -> Result<()> {
        let parent = self.require(parent_id)?;
        self.check_new_element(tag, new_id)?;
        if parent.text().is_some() {
            return Err(DocModelError::Structure(format!(
                "<{}> already holds text and cannot take child elements",
                parent.tag()
            )));
        }
        let parent_id = parent.id().clone();
        let index = parent.children().len();

        let mut element = XmlElement::new(tag, new_id).with_text(text.map(str::to_string));
        element.set_parent(Some(parent_id.clone()));
        self.attach(element, &parent_id, index);
        Ok(())
    }

    /// Rename an element. The root id is fixed.
    pub fn edit_id(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        let element = self.require(old_id)?;
        if self.elements.contains_key(new_id) {
            return Err(DocModelError::DuplicateId(new_id.to_string()));
        }
        check_id_syntax(new_id)?;
        if element.is_root() {
            return Err(DocModelError::Structure("the root element id cannot be changed".to_string()));
        }

        let Some(mut element) = self.elements.remove(old_id) else {
            return Err(DocModelError::ElementNotFound(old_id.to_string()));
        };
        let new_id = ElementId::new(new_id);
        element.set_id(new_id.clone());

        if let Some(parent_id) = element.parent() {
            if let Some(parent) = self.elements.get_mut(parent_id) {
                for slot in parent.children_mut().iter_mut().filter(|c| c.as_str() == old_id) {
                    *slot = new_id.clone();
                }
            }
        }
        for child in element.children() {
            if let Some(child) = self.elements.get_mut(child) {
                child.set_parent(Some(new_id.clone()));
            }
        }

        self.elements.insert(new_id, element);
        Ok(())
    }

    /// Replace an element's text, returning the previous text.
    ///
    /// Text is trimmed; `None` or blank text clears it.
    pub fn edit_text(&mut self, id: &str, text: Option<&str>) -> Result<Option<String>> {
        let element = self.require(id)?;
        let text = text.filter(|t| !t.trim().is_empty());
        if text.is_some() && element.has_children() {
            return Err(DocModelError::Structure(format!(
                "<{}> has child elements and cannot hold text",
                element.tag()
            )));
        }

        let Some(element) = self.elements.get_mut(id) else {
            return Err(DocModelError::ElementNotFound(id.to_string()));
        };
        Ok(element.replace_text(text.map(str::to_string)))
    }

    /// Remove an element and its whole subtree
    pub fn delete(&mut self, id: &str) -> Result<DetachedSubtree> {
        let element = self.require(id)?;
        let parent_id = element
            .parent()
            .cloned()
            .ok_or_else(|| DocModelError::Structure("the root element cannot be deleted".to_string()))?;
        let index = self.child_index(parent_id.as_str(), id)?;
        let root = element.id().clone();

        if let Some(parent) = self.elements.get_mut(&parent_id) {
            parent.children_mut().remove(index);
        }

        let mut removed = HashMap::new();
        let mut pending = vec![root.clone()];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(&next) {
                pending.extend(element.children().iter().cloned());
                removed.insert(next, element);
            }
        }

        Ok(DetachedSubtree {
            root,
            elements: removed,
            parent_id,
            index,
        })
    }

    /// Put a deleted subtree back at its recorded parent and index,
    /// registering every id it contains.
    pub fn undo_delete(&mut self, subtree: DetachedSubtree) -> Result<()> {
        let parent = self.require(subtree.parent_id.as_str())?;
        if subtree.index > parent.children().len() {
            return Err(DocModelError::OutOfBounds(format!(
                "cannot restore <{}> at index {}: parent has {} children",
                subtree.root,
                subtree.index,
                parent.children().len()
            )));
        }
        if parent.text().is_some() {
            return Err(DocModelError::Structure(format!(
                "cannot restore into <{}>: it holds text",
                parent.tag()
            )));
        }
        if let Some(taken) = subtree.elements.keys().find(|id| self.elements.contains_key(*id)) {
            return Err(DocModelError::DuplicateId(taken.to_string()));
        }

        let DetachedSubtree {
            root,
            mut elements,
            parent_id,
            index,
        } = subtree;
        if let Some(element) = elements.get_mut(&root) {
            element.set_parent(Some(parent_id.clone()));
        }
        if let Some(parent) = self.elements.get_mut(&parent_id) {
            parent.children_mut().insert(index, root);
        }
        self.elements.extend(elements);
        Ok(())
    }

    fn require(&self, id: &str) -> Result<&XmlElement> {
        self.elements
            .get(id)
            .ok_or_else(|| DocModelError::ElementNotFound(id.to_string()))
    }

    fn check_new_element(&self, tag: &str, id: &str) -> Result<()> {
        if self.elements.contains_key(id) {
            return Err(DocModelError::DuplicateId(id.to_string()));
        }
        check_id_syntax(id)?;
        if tag.is_empty() || !tag.chars().all(is_name_char) {
            return Err(DocModelError::InvalidInput(format!("invalid tag name {tag:?}")));
        }
        Ok(())
    }

    fn child_index(&self, parent_id: &str, child_id: &str) -> Result<usize> {
        self.require(parent_id)?
            .children()
            .iter()
            .position(|c| c == child_id)
            .ok_or_else(|| {
                DocModelError::Structure(format!("<{child_id}> is not listed under its parent <{parent_id}>"))
            })
    }

    fn attach(&mut self, element: XmlElement, parent_id: &ElementId, index: usize) {
        let id = element.id().clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children_mut().insert(index, id.clone());
        }
        self.elements.insert(id, element);
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_id_syntax(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(DocModelError::InvalidInput("element id cannot be empty".to_string()));
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '=' | '"' | '\'')
}
