//! Reading helpers on top of quick-xml's `NsReader`.
//!
//! - `Attrs`: the unqualified attributes of one start tag, decoded
//! - `XmlCursor`: namespace-resolving event reader that knows where it is
//! - `local_name`: element local name as an owned string

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace as NsUri, ResolveResult};

use crate::namespace::Namespace;
use crate::xml::ParseConfig;
use crate::xml::errors::{ErrorContext, ParseError};

/// Unqualified attributes of a start tag, unescaped once on construction.
///
/// Namespace declarations and prefixed attributes are left out: the Atom and
/// GData attributes this crate reads (`rel`, `href`, `name`, `value`, ...) are
/// never qualified.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    element: String,
    pairs: Vec<(String, String)>,
}

impl Attrs {
    pub fn from_start(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let element = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut pairs = Vec::new();

        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.prefix().is_some() || attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            pairs.push((key, value));
        }

        Ok(Self { element, pairs })
    }

    /// Qualified name of the element, as written.
    pub fn element_name(&self) -> &str {
        &self.element
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Move the value of `key` out, leaving the attribute absent.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.swap_remove(index).1)
    }
}

/// The local part of an element name, e.g. `property` for `apps:property`.
pub fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).to_string()
}

/// A wrapper around quick-xml's `NsReader` over an in-memory document.
///
/// Every event comes back owned and paired with the namespace its element
/// resolved to (`None` for unqualified names and non-element events).
pub struct XmlCursor<'a> {
    reader: NsReader<&'a [u8]>,
    buf: Vec<u8>,
    // e.g. ["feed", "entry #2"]
    path: Vec<String>,
}

impl<'a> XmlCursor<'a> {
    /// Create a cursor over `input`, configured from `config`.
    pub fn new(input: &'a [u8], config: &ParseConfig) -> Self {
        let mut reader = NsReader::from_reader(input);
        reader
            .trim_text(config.trim_text)
            .check_end_names(config.check_end_names);

        Self {
            reader,
            buf: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Byte offset of the reader in the input.
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Enter `element` for error reporting, e.g. `entry #2`.
    pub fn push_path(&mut self, element: impl Into<String>) {
        self.path.push(element.into());
    }

    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    /// The entered elements joined with `/`.
    pub fn path_str(&self) -> String {
        self.path.join("/")
    }

    /// Error context for the current reader position and path.
    pub fn context(&self) -> ErrorContext {
        let context = ErrorContext::at(self.position());
        if self.path.is_empty() {
            context
        } else {
            context.with_parsing(self.path_str())
        }
    }

    /// Create a malformed-document error at the current position.
    pub fn malformed(&self, message: impl Into<String>) -> ParseError {
        ParseError::malformed(message, self.context())
    }

    /// Read the next event, resolving the namespace of element names.
    pub fn next_event(&mut self) -> Result<(Option<Namespace>, Event<'static>), ParseError> {
        self.buf.clear();
        let position = self.position();
        let (resolved, event) = match self.reader.read_resolved_event_into(&mut self.buf) {
            Ok(pair) => pair,
            Err(err) => {
                return Err(ParseError::malformed(
                    err.to_string(),
                    ErrorContext::at(position),
                ));
            }
        };

        let ns = match resolved {
            ResolveResult::Bound(NsUri(uri)) => Some(Namespace::from_uri_bytes(uri)),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                let prefix = String::from_utf8_lossy(&prefix).to_string();
                return Err(ParseError::malformed(
                    format!("unbound namespace prefix '{}'", prefix),
                    ErrorContext::at(position),
                ));
            }
        };

        let event = event.into_owned();
        if let Err(message) = check_well_formed(&event) {
            return Err(ParseError::malformed(message, ErrorContext::at(position)));
        }

        Ok((ns, event))
    }

    /// Read the text content of the current element (after consuming its
    /// `Start` event), up to and including the matching `End`.
    ///
    /// Text inside nested elements is included.
    pub fn read_text(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        let mut depth = 1u32;

        loop {
            match self.next_event()?.1 {
                Event::Text(e) => {
                    text.push_str(&e.unescape()?);
                }
                Event::CData(e) => {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Event::Eof => return Err(self.malformed("unexpected end of document")),
                _ => {}
            }
        }

        Ok(text)
    }

    /// Skip the current element's content (after consuming its `Start` event).
    pub fn skip_to_end(&mut self) -> Result<(), ParseError> {
        let mut depth = 1u32;

        loop {
            match self.next_event()?.1 {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Event::Eof => return Err(self.malformed("unexpected end of document")),
                _ => {}
            }
        }
    }

    /// Consume whatever follows the root element.
    ///
    /// Comments, processing instructions and whitespace are allowed there.
    /// An XML or document type declaration is not.
    /// Any other content makes the document malformed unless
    /// `allow_trailing` is set, in which case it is left unread.
    pub fn finish(&mut self, allow_trailing: bool) -> Result<(), ParseError> {
        if allow_trailing {
            return Ok(());
        }

        loop {
            match self.next_event()?.1 {
                Event::Eof => return Ok(()),
                Event::Text(e) if e.iter().all(u8::is_ascii_whitespace) => {}
                Event::Start(_) | Event::Empty(_) => {
                    return Err(self.malformed("more than one root element"));
                }
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.malformed("text content after the root element"));
                }
                Event::End(_) => {
                    return Err(self.malformed("unmatched end tag after the root element"));
                }
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(self.malformed("declaration after the root element"));
                }
                _ => {}
            }
        }
    }
}

/// Checks the parts of an event quick-xml leaves unvalidated until they are
/// decoded: every attribute of a start tag and every escape in text.
fn check_well_formed(event: &Event<'_>) -> Result<(), String> {
    match event {
        Event::Start(e) | Event::Empty(e) => {
            for attr in e.attributes() {
                let attr = attr.map_err(|err| err.to_string())?;
                attr.unescape_value().map_err(|err| err.to_string())?;
            }
        }
        Event::Text(e) => {
            e.unescape().map_err(|err| err.to_string())?;
        }
        _ => {}
    }
    Ok(())
}
