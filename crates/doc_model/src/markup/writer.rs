//! Markup writer
//!
//! Output layout: one element per line, four spaces of indentation per
//! ancestor, text inline between the tags. The root always breaks before its
//! close tag, even when it is empty, so an untouched document prints the same
//! way every time.

use crate::{ElementId, XmlDocument};
use std::borrow::Cow;

const INDENT: &str = "    ";

/// Serialize a document (without the file declaration)
pub fn write(doc: &XmlDocument) -> String {
    let mut out = String::new();
    write_element(doc, doc.root_id(), 0, &mut out);
    out
}

fn write_element(doc: &XmlDocument, id: &ElementId, depth: usize, out: &mut String) {
    let Some(element) = doc.element(id.as_str()) else {
        return;
    };
    let indent = INDENT.repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(element.tag());
    for (key, value) in element.attributes().iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');

    if let Some(text) = element.text() {
        out.push_str(&escape_text(text));
    }

    if element.has_children() {
        for child in element.children() {
            out.push('\n');
            write_element(doc, child, depth + 1, out);
        }
        out.push('\n');
        out.push_str(&indent);
    } else if element.is_root() {
        out.push('\n');
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, &['&', '<', '>'])
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, &['&', '<', '"'])
}

fn escape<'a>(raw: &'a str, special: &[char]) -> Cow<'a, str> {
    if !raw.contains(special) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' if special.contains(&'&') => escaped.push_str("&amp;"),
            '<' if special.contains(&'<') => escaped.push_str("&lt;"),
            '>' if special.contains(&'>') => escaped.push_str("&gt;"),
            '"' if special.contains(&'"') => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
