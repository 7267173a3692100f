//! Markup lexer - turns raw markup into open-tag, close-tag and text tokens
//!
//! The lexer walks the input one byte at a time. All structural characters
//! (`<`, `>`, `/`, `=`, quotes, whitespace) are ASCII, so every slice taken
//! between them is a valid `str` boundary.

use crate::{Attributes, DocModelError, Result};
use std::borrow::Cow;

/// Token kinds produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<tag key="value" ...>`
    OpenTag { tag: String, attributes: Attributes },
    /// `</tag>`
    CloseTag { tag: String },
    /// Raw run of characters between tags, entities decoded
    Text(String),
}

/// A token together with the byte offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    /// Whether this is a text token made only of whitespace
    pub fn is_blank_text(&self) -> bool {
        matches!(&self.kind, TokenKind::Text(text) if text.trim().is_empty())
    }
}

/// Character-level markup lexer
pub struct Lexer<'a> {
    source: &'a str,
    input: &'a [u8],
    position: usize,
    /// Close tag synthesized for a self-closing `<tag/>`
    pending: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            input: source.as_bytes(),
            position: 0,
            pending: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.pending.is_none() && self.position >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.position..].starts_with(prefix.as_bytes())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    /// Advance past `terminator`, failing if the input ends first
    fn skip_past(&mut self, terminator: &str, what: &str) -> Result<()> {
        let start = self.position;
        match self.source[self.position..].find(terminator) {
            Some(found) => {
                self.position += found + terminator.len();
                Ok(())
            }
            None => Err(DocModelError::syntax(start, format!("unterminated {what}"))),
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        match self.peek() {
            Some(b) if b == byte => {
                self.position += 1;
                Ok(())
            }
            Some(b) => Err(DocModelError::syntax(
                self.position,
                format!("expected '{}', found '{}'", byte as char, b as char),
            )),
            None => Err(DocModelError::syntax(
                self.position,
                format!("expected '{}', found end of input", byte as char),
            )),
        }
    }

    /// Read the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }

        loop {
            let Some(byte) = self.peek() else {
                return Ok(None);
            };

            if byte != b'<' {
                return Ok(Some(self.read_text()));
            }

            if self.starts_with("<?") {
                self.skip_past("?>", "processing instruction")?;
            } else if self.starts_with("<!--") {
                self.skip_past("-->", "comment")?;
            } else if self.starts_with("</") {
                return self.read_close_tag().map(Some);
            } else {
                return self.read_open_tag().map(Some);
            }
        }
    }

    fn read_text(&mut self) -> Token {
        let start = self.position;
        while matches!(self.peek(), Some(b) if b != b'<') {
            self.position += 1;
        }
        let raw = &self.source[start..self.position];
        Token {
            kind: TokenKind::Text(decode_entities(raw).into_owned()),
            offset: start,
        }
    }

    fn read_name(&mut self, what: &str) -> Result<String> {
        let start = self.position;
        while matches!(self.peek(), Some(b) if is_name_byte(b)) {
            self.position += 1;
        }
        if start == self.position {
            return Err(DocModelError::syntax(start, format!("expected {what}")));
        }
        Ok(self.source[start..self.position].to_string())
    }

    fn read_close_tag(&mut self) -> Result<Token> {
        let offset = self.position;
        self.position += 2;
        self.skip_whitespace();
        let tag = self.read_name("tag name")?;
        self.skip_whitespace();
        self.expect(b'>')?;
        Ok(Token {
            kind: TokenKind::CloseTag { tag },
            offset,
        })
    }

    fn read_open_tag(&mut self) -> Result<Token> {
        let offset = self.position;
        self.position += 1;
        let tag = self.read_name("tag name")?;
        let mut attributes = Attributes::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.position += 1;
                    break;
                }
                Some(b'/') => {
                    self.position += 1;
                    self.expect(b'>')?;
                    self.pending = Some(Token {
                        kind: TokenKind::CloseTag { tag: tag.clone() },
                        offset,
                    });
                    break;
                }
                Some(_) => {
                    let key_offset = self.position;
                    let (key, value) = self.read_attribute()?;
                    if attributes.contains(&key) {
                        return Err(DocModelError::syntax(
                            key_offset,
                            format!("duplicate attribute '{key}' on <{tag}>"),
                        ));
                    }
                    attributes.set(key, value);
                }
                None => return Err(DocModelError::syntax(offset, format!("unterminated tag <{tag}"))),
            }
        }

        Ok(Token {
            kind: TokenKind::OpenTag { tag, attributes },
            offset,
        })
    }

    fn read_attribute(&mut self) -> Result<(String, String)> {
        let key = self.read_name("attribute name")?;
        self.skip_whitespace();
        self.expect(b'=')?;
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => {
                return Err(DocModelError::syntax(
                    self.position,
                    format!("value of attribute '{key}' must be quoted"),
                ))
            }
        };
        self.position += 1;

        let start = self.position;
        while matches!(self.peek(), Some(b) if b != quote) {
            self.position += 1;
        }
        if self.peek().is_none() {
            return Err(DocModelError::syntax(
                start - 1,
                format!("unterminated value of attribute '{key}'"),
            ));
        }
        let value = decode_entities(&self.source[start..self.position]).into_owned();
        self.position += 1;

        Ok((key, value))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                // Stop after the first error
                self.position = self.input.len();
                self.pending = None;
                Some(Err(err))
            }
        }
    }
}

/// Tokenize a whole document
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).collect()
}

fn is_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'<' | b'>' | b'/' | b'=' | b'"' | b'\'')
}

fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    const ENTITIES: [(&str, char); 5] = [
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&amp;", '&'),
        ("&quot;", '"'),
        ("&apos;", '\''),
    ];

    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(at) = rest.find('&') {
        decoded.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, ch)) => {
                decoded.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn open(tag: &str, attrs: &[(&str, &str)]) -> TokenKind {
        TokenKind::OpenTag {
            tag: tag.to_string(),
            attributes: attrs.iter().copied().collect(),
        }
    }

    fn close(tag: &str) -> TokenKind {
        TokenKind::CloseTag { tag: tag.to_string() }
    }

    #[test]
    fn test_three_token_kinds() {
        assert_eq!(
            kinds(r#"<book id="b1" lang="en">Title</book>"#),
            vec![
                open("book", &[("id", "b1"), ("lang", "en")]),
                TokenKind::Text("Title".to_string()),
                close("book"),
            ]
        );
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let tokens = tokenize("<a id=\"1\">\n  <b id=\"2\"></b>\n</a>").unwrap();
        assert_eq!(tokens.len(), 6);
        assert!(tokens[1].is_blank_text());
        assert!(tokens[4].is_blank_text());
        assert!(!tokens[2].is_blank_text());
    }

    #[test]
    fn test_angle_brackets_inside_quotes() {
        assert_eq!(
            kinds(r#"<a id="x" expr='1 > 0 && "<b>"'></a>"#),
            vec![open("a", &[("id", "x"), ("expr", "1 > 0 && \"<b>\"")]), close("a")]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        assert_eq!(
            kinds(r#"<a id="x"/><b id = "y" />"#),
            vec![open("a", &[("id", "x")]), close("a"), open("b", &[("id", "y")]), close("b")]
        );
    }

    #[test]
    fn test_declaration_and_comments_skipped() {
        assert_eq!(
            kinds("<?xml version=\"1.0\"?><!-- note --><a id=\"1\"></a>"),
            vec![open("a", &[("id", "1")]), close("a")]
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            kinds(r#"<a id="&quot;q&quot;">x &lt; y &amp;&amp; &unknown;</a>"#),
            vec![
                open("a", &[("id", "\"q\"")]),
                TokenKind::Text("x < y && &unknown;".to_string()),
                close("a"),
            ]
        );
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("<a id=\"1\">hi</a>").unwrap();
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [0, 10, 12]);
    }

    #[test]
    fn test_malformed_input() {
        for bad in [
            "<a id=\"1\"",
            "<a id=1>",
            "<a id=\"1>",
            "<>",
            "</>",
            "<a id=\"1\" id=\"2\">",
            "<!-- open",
            "<a id=\"1\" / >",
        ] {
            let err = tokenize(bad).unwrap_err();
            assert!(matches!(err, DocModelError::Syntax { .. }), "{bad}: {err}");
        }
    }
}
