//! Markup element node

use crate::ElementId;

/// Attribute holding the element id
pub const ID_ATTRIBUTE: &str = "id";

/// Ordered attribute map. Keys are unique; insertion order is kept so that
/// documents serialize back the way they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set `key` to `value`, returning the previous value if there was one.
    /// A new key goes to the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

/// One element of a markup tree.
///
/// Children and parent are stored as ids into the owning document's arena.
/// An element holds either text or children, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    id: ElementId,
    tag: String,
    attributes: Attributes,
    text: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl XmlElement {
    /// Create a detached element. The `id` attribute is set from `id`.
    pub fn new(tag: impl Into<String>, id: impl Into<ElementId>) -> Self {
        let id = id.into();
        let mut attributes = Attributes::new();
        attributes.set(ID_ATTRIBUTE, id.as_str());
        Self {
            id,
            tag: tag.into(),
            attributes,
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create an element from parsed attributes; `None` if there is no id.
    pub fn from_attributes(tag: impl Into<String>, attributes: Attributes) -> Option<Self> {
        let id = ElementId::new(attributes.get(ID_ATTRIBUTE)?);
        Some(Self {
            id,
            tag: tag.into(),
            attributes,
            text: None,
            parent: None,
            children: Vec::new(),
        })
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = normalize_text(text);
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Set a non-id attribute. The id can only change through the document.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        if key == ID_ATTRIBUTE {
            return None;
        }
        self.attributes.set(key, value)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<&ElementId> {
        self.parent.as_ref()
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_id(&mut self, id: ElementId) {
        self.attributes.set(ID_ATTRIBUTE, id.as_str());
        self.id = id;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ElementId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ElementId> {
        &mut self.children
    }

    pub(crate) fn replace_text(&mut self, text: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.text, normalize_text(text))
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = normalize_text(Some(text.to_string())),
        }
    }
}

/// Text is stored trimmed, the way the parser reads it back. Blank text
/// and no text are the same thing.
fn normalize_text(text: Option<String>) -> Option<String> {
    let text = text?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}
