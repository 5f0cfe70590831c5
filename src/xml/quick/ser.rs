//! Writing helpers on top of `quick_xml::Writer`.
//!
//! `AttrList` collects owned attribute pairs; `XmlEmitter` writes the handful
//! of element shapes an Atom entry needs.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::atom::Link;
use crate::namespace::Namespace;
use crate::xml::errors::SerializeError;

/// Attribute pairs in insertion order. Values are escaped when written.
#[derive(Debug, Default)]
pub struct AttrList {
    attrs: Vec<(String, String)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.attrs.push((key.to_string(), value.into()));
        self
    }

    /// Add the attribute only when `value` is present.
    pub fn add_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    /// Bind `ns` to `prefix`, or make it the default namespace when `prefix`
    /// is `None`.
    pub fn bind(&mut self, prefix: Option<&str>, ns: &Namespace) -> &mut Self {
        let key = match prefix {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        self.attrs.push((key, ns.uri().to_string()));
        self
    }

    fn start<'n>(&self, name: &'n str) -> BytesStart<'n> {
        let mut start = BytesStart::new(name);
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        start
    }
}

/// Element writer borrowing a `quick_xml::Writer`.
pub struct XmlEmitter<'a, W: Write> {
    writer: &'a mut Writer<W>,
}

impl<'a, W: Write> XmlEmitter<'a, W> {
    pub fn new(writer: &'a mut Writer<W>) -> Self {
        Self { writer }
    }

    /// `<?xml version="1.0" encoding="UTF-8"?>`
    pub fn xml_decl(&mut self) -> Result<(), SerializeError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub fn start_elem(&mut self, name: &str, attrs: &AttrList) -> Result<(), SerializeError> {
        self.write(Event::Start(attrs.start(name)))
    }

    pub fn end_elem(&mut self, name: &str) -> Result<(), SerializeError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// `<name attrs..>text</name>`; `text` is escaped.
    pub fn text_elem(
        &mut self,
        name: &str,
        attrs: &AttrList,
        text: &str,
    ) -> Result<(), SerializeError> {
        self.start_elem(name, attrs)?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end_elem(name)
    }

    /// Write `<name>text</name>` when `text` is present.
    pub fn opt_text_elem(&mut self, name: &str, text: Option<&str>) -> Result<(), SerializeError> {
        match text {
            Some(text) => self.text_elem(name, &AttrList::new(), text),
            None => Ok(()),
        }
    }

    pub fn empty_elem(&mut self, name: &str, attrs: &AttrList) -> Result<(), SerializeError> {
        self.write(Event::Empty(attrs.start(name)))
    }

    /// `<apps:property name=".." value=".."/>`, assuming `apps` is bound.
    pub fn property(&mut self, name: &str, value: &str) -> Result<(), SerializeError> {
        let mut attrs = AttrList::new();
        attrs.add("name", name).add("value", value);
        self.empty_elem("apps:property", &attrs)
    }

    /// `<link rel=".." type=".." href=".."/>` in the default (Atom) namespace.
    pub fn link(&mut self, link: &Link) -> Result<(), SerializeError> {
        let mut attrs = AttrList::new();
        attrs
            .add("rel", link.rel.as_str())
            .add_opt("type", link.content_type.as_deref())
            .add("href", link.href.as_str());
        self.empty_elem("link", &attrs)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), SerializeError> {
        self.writer.write_event(event)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_to_string(f: impl FnOnce(&mut XmlEmitter<'_, &mut Vec<u8>>)) -> String {
        let mut output = Vec::new();
        let mut writer = Writer::new(&mut output);
        f(&mut XmlEmitter::new(&mut writer));
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_attr_list_optional_and_bindings() {
        let mut attrs = AttrList::new();
        attrs
            .bind(None, &Namespace::Atom)
            .bind(Some("apps"), &Namespace::Apps)
            .add_opt("type", None);

        let xml = emit_to_string(|emit| emit.empty_elem("entry", &attrs).unwrap());
        assert_eq!(
            xml,
            r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:apps="http://schemas.google.com/apps/2006"/>"#
        );
    }

    #[test]
    fn test_text_elem_escapes() {
        let xml = emit_to_string(|emit| {
            emit.opt_text_elem("title", Some("R&D <west>")).unwrap();
            emit.opt_text_elem("id", None).unwrap();
        });
        assert_eq!(xml, "<title>R&amp;D &lt;west&gt;</title>");
    }

    #[test]
    fn test_property_and_link() {
        let xml = emit_to_string(|emit| {
            emit.property("orgUserEmail", "a@example.com").unwrap();
            emit.link(&Link::new("edit", "https://example.com/a%40example.com"))
                .unwrap();
        });
        assert_eq!(
            xml,
            concat!(
                r#"<apps:property name="orgUserEmail" value="a@example.com"/>"#,
                r#"<link rel="edit" href="https://example.com/a%40example.com"/>"#
            )
        );
    }
}
