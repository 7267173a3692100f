//! Tree view of a markup document
//!
//! Each element shows as `tag [id="…",key="value",…]` with the id first.
//! An element's text is drawn as a quoted leaf ahead of its children.

use crate::{render_tree, NameProvider, TreeContentProvider};
use doc_model::{XmlDocument, XmlElement, ID_ATTRIBUTE};

/// A node in the rendered markup tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlNode<'a> {
    Element(&'a XmlElement),
    Text(&'a str),
}

/// Content and names for one markup document
#[derive(Debug, Clone, Copy)]
pub struct XmlTreeProvider<'a> {
    document: &'a XmlDocument,
}

impl<'a> XmlTreeProvider<'a> {
    pub fn new(document: &'a XmlDocument) -> Self {
        Self { document }
    }

    pub fn render(&self) -> String {
        render_tree(self)
    }
}

impl<'a> TreeContentProvider<XmlNode<'a>> for XmlTreeProvider<'a> {
    fn roots(&self) -> Vec<XmlNode<'a>> {
        vec![XmlNode::Element(self.document.root())]
    }

    fn children(&self, node: &XmlNode<'a>) -> Vec<XmlNode<'a>> {
        let XmlNode::Element(element) = *node else {
            return Vec::new();
        };
        let text = element.text().map(XmlNode::Text);
        text.into_iter()
            .chain(self.document.children(element.id().as_str()).map(XmlNode::Element))
            .collect()
    }
}

impl<'a> NameProvider<XmlNode<'a>> for XmlTreeProvider<'a> {
    fn name(&self, node: &XmlNode<'a>) -> String {
        match node {
            XmlNode::Text(text) => format!("\"{}\"", text.replace('\n', "\\n")),
            XmlNode::Element(element) => {
                let mut attributes = vec![format!("{ID_ATTRIBUTE}=\"{}\"", element.id())];
                attributes.extend(
                    element
                        .attributes()
                        .iter()
                        .filter(|(key, _)| *key != ID_ATTRIBUTE)
                        .map(|(key, value)| format!("{key}=\"{value}\"")),
                );
                format!("{} [{}]", element.tag(), attributes.join(","))
            }
        }
    }
}

/// Render a markup document as a text tree
pub fn render_xml_tree(document: &XmlDocument) -> String {
    XmlTreeProvider::new(document).render()
}
