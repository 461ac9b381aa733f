//! Minimal XML reader for interface description documents.
//!
//! Interface descriptions use a small, regular subset of XML: nested elements
//! with attributes and text content, plus an optional prolog, comments and a
//! DOCTYPE line. This reader covers exactly that subset with a byte cursor
//! over the input. It does not validate against a schema; structural
//! validation happens when the element tree is mapped into the model.

use thiserror::Error;

/// A parsed element: name, attributes in document order, accumulated text
/// content, and child elements in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Syntax error with the byte offset where parsing stopped.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("byte {offset}: {message}")]
pub struct SyntaxError {
    pub offset: usize,
    pub message: String,
}

/// Parse a complete document and return its root element.
pub fn parse_document(input: &str) -> Result<Element, SyntaxError> {
    let mut cursor = Cursor::new(input);

    cursor.skip_misc()?;
    if cursor.at_end() {
        return Err(cursor.error("document has no root element"));
    }

    let root = cursor.parse_element()?;

    cursor.skip_misc()?;
    if !cursor.at_end() {
        return Err(cursor.error("unexpected content after the root element"));
    }

    Ok(root)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.input[self.pos..].starts_with(pattern)
    }

    fn expect(&mut self, byte: u8) -> Result<(), SyntaxError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", byte as char)))
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Skip past the next occurrence of `terminator`, erroring at end of
    /// input.
    fn skip_past(&mut self, terminator: &str) -> Result<(), SyntaxError> {
        match self.input[self.pos..].find(terminator) {
            Some(idx) => {
                self.pos += idx + terminator.len();
                Ok(())
            }
            None => Err(self.error(format!("unterminated section, expected '{terminator}'"))),
        }
    }

    /// Skip whitespace, prolog (`<?..?>`), comments and DOCTYPE declarations.
    fn skip_misc(&mut self) -> Result<(), SyntaxError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<!") {
                self.skip_past(">")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_element(&mut self) -> Result<Element, SyntaxError> {
        self.expect(b'<')?;
        let name = self.parse_name()?;

        let mut element = Element {
            name,
            ..Element::default()
        };

        // Attribute list, up to '>' or '/>'.
        loop {
            self.skip_whitespace();
            if self.starts_with("/>") {
                self.pos += 2;
                return Ok(element);
            }
            if self.peek() == Some(b'>') {
                self.pos += 1;
                break;
            }
            if self.at_end() {
                return Err(self.error(format!("unterminated <{}> tag", element.name)));
            }

            let attr_name = self.parse_name()?;
            self.skip_whitespace();
            self.expect(b'=')?;
            self.skip_whitespace();
            let value = self.parse_quoted()?;
            element.attributes.push((attr_name, value));
        }

        // Content: text runs, comments and child elements until the matching
        // closing tag.
        loop {
            if self.starts_with("</") {
                self.pos += 2;
                let close = self.parse_name()?;
                if close != element.name {
                    return Err(self.error(format!(
                        "mismatched closing tag </{close}>, expected </{}>",
                        element.name
                    )));
                }
                self.skip_whitespace();
                self.expect(b'>')?;
                return Ok(element);
            } else if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.peek() == Some(b'<') {
                element.children.push(self.parse_element()?);
            } else if self.at_end() {
                return Err(self.error(format!("unclosed element <{}>", element.name)));
            } else {
                let start = self.pos;
                while !self.at_end() && self.peek() != Some(b'<') {
                    self.pos += 1;
                }
                element.text.push_str(&decode_entities(&self.input[start..self.pos]));
            }
        }
    }

    fn parse_name(&mut self) -> Result<String, SyntaxError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && is_name_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("expected a name"));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_quoted(&mut self) -> Result<String, SyntaxError> {
        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(self.error("expected a quoted attribute value")),
        };
        self.pos += 1;

        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] != quote {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return Err(self.error("unterminated attribute value"));
        }

        let value = decode_entities(&self.input[start..self.pos]);
        self.pos += 1;
        Ok(value)
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'.' | b':')
}

/// Decode the five predefined entities; anything else passes through verbatim.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    const ENTITIES: [(&str, char); 5] = [
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&amp;", '&'),
        ("&quot;", '"'),
        ("&apos;", '\''),
    ];

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
