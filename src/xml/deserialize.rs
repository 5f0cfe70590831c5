//! Table-driven deserialization of Atom entries and feeds.
//!
//! The reader walks the document once. Entry children are matched against the
//! record's `EntrySchema::FIELDS` table; Atom envelope children (`id`,
//! `updated`, `title`, `link`) go into `AtomMeta`; everything else is skipped.

use quick_xml::events::{BytesStart, Event};

use crate::atom::{AtomMeta, Link, REL_ALTERNATE};
use crate::model::Feed;
use crate::namespace::Namespace;
use crate::schema::{Cardinality, EntrySchema};
use crate::xml::ParseConfig;
use crate::xml::errors::ParseError;
use crate::xml::quick::de::{Attrs, XmlCursor, local_name};

/// Local name of the Atom entry element.
pub const ENTRY: &str = "entry";
/// Local name of the Atom feed element.
pub const FEED: &str = "feed";

/// A shape a whole document can be parsed into.
///
/// The root element must be `{http://www.w3.org/2005/Atom}ROOT`.
pub trait Document: Sized {
    /// Local name of the expected root element.
    const ROOT: &'static str;

    /// Read the root element's content. The root `Start` (or `Empty`, when
    /// `empty` is set) event has already been consumed.
    fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError>;

    /// Parse a complete document with the default configuration.
    fn from_xml(raw: &[u8]) -> Result<Self, ParseError> {
        parse(raw)
    }

    /// Parse a complete document held in a string.
    fn from_xml_str(raw: &str) -> Result<Self, ParseError> {
        parse_str(raw)
    }
}

/// Parse `raw` into the shape `D` with the default configuration.
pub fn parse<D: Document>(raw: &[u8]) -> Result<D, ParseError> {
    parse_with(raw, &ParseConfig::default())
}

/// Parse a document held in a string.
pub fn parse_str<D: Document>(raw: &str) -> Result<D, ParseError> {
    parse(raw.as_bytes())
}

/// Parse `raw` into the shape `D`.
///
/// # Errors
///
/// - `MalformedDocument` if the input is not well-formed XML.
/// - `ShapeMismatch` if the root element is not `D::ROOT` in the Atom namespace.
/// - `MissingField` if a required field of an entry is absent.
pub fn parse_with<D: Document>(raw: &[u8], config: &ParseConfig) -> Result<D, ParseError> {
    let mut cursor = XmlCursor::new(raw, config);

    let document = loop {
        match cursor.next_event()? {
            (ns, Event::Start(e)) => {
                expect_root::<D>(&cursor, ns.as_ref(), &e)?;
                break D::read_root(&mut cursor, false)?;
            }
            (ns, Event::Empty(e)) => {
                expect_root::<D>(&cursor, ns.as_ref(), &e)?;
                break D::read_root(&mut cursor, true)?;
            }
            (_, Event::Text(e)) if e.iter().all(u8::is_ascii_whitespace) => {}
            (_, Event::Text(_) | Event::CData(_)) => {
                return Err(cursor.malformed("text content before the root element"));
            }
            (_, Event::End(_)) => {
                return Err(cursor.malformed("end tag before the root element"));
            }
            (_, Event::Eof) => {
                return Err(cursor.malformed("document has no root element"));
            }
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
    };

    cursor.finish(config.allow_trailing_content)?;
    log::debug!("parsed <{}> document of {} bytes", D::ROOT, raw.len());
    Ok(document)
}

fn expect_root<D: Document>(
    cursor: &XmlCursor<'_>,
    ns: Option<&Namespace>,
    start: &BytesStart<'_>,
) -> Result<(), ParseError> {
    let local = local_name(start);
    if ns == Some(&Namespace::Atom) && local == D::ROOT {
        log::trace!("root element <{}> matches", local);
        return Ok(());
    }

    let found = match ns {
        Some(ns) => ns.clark(&local),
        None => local,
    };
    Err(ParseError::ShapeMismatch {
        expected: Namespace::Atom.clark(D::ROOT),
        found,
        context: cursor.context(),
    })
}

/// Read one `<entry>` whose start tag has been consumed.
pub fn read_entry<E: EntrySchema>(
    cursor: &mut XmlCursor<'_>,
    empty: bool,
) -> Result<E, ParseError> {
    let mut entry = E::default();

    if !empty {
        loop {
            match cursor.next_event()? {
                (Some(ns), Event::Start(e)) => {
                    read_entry_child(cursor, &mut entry, &ns, &e, false)?;
                }
                (Some(ns), Event::Empty(e)) => {
                    read_entry_child(cursor, &mut entry, &ns, &e, true)?;
                }
                (None, Event::Start(e)) => {
                    log::trace!("skipping unqualified element <{}>", local_name(&e));
                    cursor.skip_to_end()?;
                }
                (_, Event::End(_)) => break,
                (_, Event::Eof) => {
                    return Err(cursor.malformed(format!(
                        "unexpected end of document inside {}",
                        E::NAME
                    )));
                }
                _ => {}
            }
        }
    }

    for spec in E::FIELDS {
        if spec.cardinality == Cardinality::Required && (spec.value)(&entry).is_none() {
            return Err(ParseError::MissingField {
                field: spec.name,
                context: cursor.context(),
            });
        }
    }

    Ok(entry)
}

fn read_entry_child<E: EntrySchema>(
    cursor: &mut XmlCursor<'_>,
    entry: &mut E,
    ns: &Namespace,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<(), ParseError> {
    let local = local_name(start);

    if *ns == Namespace::Apps && local == "property" {
        let attrs = Attrs::from_start(start)?;
        if !empty {
            cursor.skip_to_end()?;
        }
        return store_property(entry, attrs);
    }

    if let Some(spec) = E::FIELDS
        .iter()
        .find(|spec| spec.source.matches_element(ns, &local))
    {
        let text = if empty {
            String::new()
        } else {
            cursor.read_text()?
        };
        let slot = (spec.slot)(entry);
        if slot.is_none() {
            *slot = Some(text);
        } else {
            log::warn!("ignoring duplicate <{}> in {}", local, E::NAME);
        }
        return Ok(());
    }

    read_atom_child(cursor, entry.atom_mut(), ns, &local, start, empty)
}

fn store_property<E: EntrySchema>(entry: &mut E, mut attrs: Attrs) -> Result<(), ParseError> {
    let Some(name) = attrs.take("name") else {
        log::trace!("ignoring <{}> without a name", attrs.element_name());
        return Ok(());
    };
    let Some(spec) = E::property_field(&name) else {
        log::trace!("ignoring undeclared property '{}' in {}", name, E::NAME);
        return Ok(());
    };
    let Some(value) = attrs.take("value") else {
        log::trace!("ignoring property '{}' without a value", name);
        return Ok(());
    };

    let slot = (spec.slot)(entry);
    if slot.is_none() {
        *slot = Some(value);
    } else {
        log::warn!("ignoring duplicate property '{}' in {}", name, E::NAME);
    }
    Ok(())
}

/// Handle an Atom envelope child shared by entries and feeds; anything not
/// recognised is skipped.
fn read_atom_child(
    cursor: &mut XmlCursor<'_>,
    meta: &mut AtomMeta,
    ns: &Namespace,
    local: &str,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<(), ParseError> {
    if *ns != Namespace::Atom {
        log::trace!("skipping {}", ns.clark(local));
        if !empty {
            cursor.skip_to_end()?;
        }
        return Ok(());
    }

    match local {
        "link" => {
            let mut attrs = Attrs::from_start(start)?;
            if !empty {
                cursor.skip_to_end()?;
            }
            match attrs.take("href") {
                Some(href) => meta.links.push(Link {
                    // Atom defines a missing rel as "alternate"
                    rel: attrs
                        .take("rel")
                        .unwrap_or_else(|| REL_ALTERNATE.to_string()),
                    href,
                    content_type: attrs.take("type"),
                }),
                None => log::warn!("ignoring <link> without href"),
            }
        }
        "id" | "updated" | "title" => {
            let text = if empty {
                String::new()
            } else {
                cursor.read_text()?
            };
            let slot = match local {
                "id" => &mut meta.id,
                "updated" => &mut meta.updated,
                _ => &mut meta.title,
            };
            if slot.is_none() {
                *slot = Some(text);
            }
        }
        _ => {
            log::trace!("skipping <{}>", local);
            if !empty {
                cursor.skip_to_end()?;
            }
        }
    }

    Ok(())
}

impl<E: EntrySchema> Document for Feed<E> {
    const ROOT: &'static str = FEED;

    fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError> {
        let mut feed = Feed::default();
        if empty {
            return Ok(feed);
        }

        cursor.push_path(FEED);
        loop {
            match cursor.next_event()? {
                (Some(ns), Event::Start(e)) => {
                    let local = local_name(&e);
                    if ns == Namespace::Atom && local == ENTRY {
                        cursor.push_path(format!("entry #{}", feed.entries.len() + 1));
                        let entry = read_entry::<E>(cursor, false)?;
                        cursor.pop_path();
                        feed.entries.push(entry);
                    } else {
                        read_atom_child(cursor, &mut feed.atom, &ns, &local, &e, false)?;
                    }
                }
                (Some(ns), Event::Empty(e)) => {
                    let local = local_name(&e);
                    if ns == Namespace::Atom && local == ENTRY {
                        cursor.push_path(format!("entry #{}", feed.entries.len() + 1));
                        let entry = read_entry::<E>(cursor, true)?;
                        cursor.pop_path();
                        feed.entries.push(entry);
                    } else {
                        read_atom_child(cursor, &mut feed.atom, &ns, &local, &e, true)?;
                    }
                }
                (None, Event::Start(_)) => cursor.skip_to_end()?,
                (_, Event::End(_)) => break,
                (_, Event::Eof) => {
                    return Err(cursor.malformed("unexpected end of document inside feed"));
                }
                _ => {}
            }
        }
        cursor.pop_path();

        log::debug!("parsed feed of {} {}(s)", feed.entries.len(), E::NAME);
        Ok(feed)
    }
}

/// Parse `true`/`false` flag text.
///
/// Accepts the spellings `true`/`false`, `1`/`0` and `yes`/`no`, ignoring case.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ParseError::InvalidValue {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::HasLinks;
    use crate::namespace::ATOM_NS;
    use crate::schema::FieldSpec;

    #[derive(Debug, Default, PartialEq)]
    struct Note {
        atom: AtomMeta,
        code: Option<String>,
        summary: Option<String>,
    }

    impl EntrySchema for Note {
        const NAME: &'static str = "note";
        const FIELDS: &'static [FieldSpec<Self>] = &[
            FieldSpec::<Self>::property("code", "code", |n| &mut n.code, |n| n.code.as_deref())
                .required(),
            FieldSpec::element(
                "summary",
                ATOM_NS,
                "summary",
                |n| &mut n.summary,
                |n| n.summary.as_deref(),
            ),
        ];

        fn atom(&self) -> &AtomMeta {
            &self.atom
        }

        fn atom_mut(&mut self) -> &mut AtomMeta {
            &mut self.atom
        }
    }

    impl Document for Note {
        const ROOT: &'static str = ENTRY;

        fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError> {
            read_entry(cursor, empty)
        }
    }

    const NOTE: &str = r#"<?xml version="1.0"?>
<entry xmlns="http://www.w3.org/2005/Atom" xmlns:apps="http://schemas.google.com/apps/2006">
  <id>urn:note:1</id>
  <summary>first<b>-bold</b></summary>
  <summary>second</summary>
  <link href="https://example.com/alt"/>
  <apps:property name="code" value="A1"/>
  <apps:property name="code" value="B2"/>
  <apps:property name="unknown" value="x"/>
  <apps:other><nested/></apps:other>
</entry>"#;

    #[test]
    fn test_element_and_property_sources() {
        let note: Note = parse(NOTE.as_bytes()).unwrap();
        assert_eq!(note.code.as_deref(), Some("A1"));
        assert_eq!(note.summary.as_deref(), Some("first-bold"));
        assert_eq!(note.atom.id.as_deref(), Some("urn:note:1"));
    }

    #[test]
    fn test_link_without_rel_is_alternate() {
        let note: Note = parse(NOTE.as_bytes()).unwrap();
        assert_eq!(note.atom.find_link("alternate"), Some("https://example.com/alt"));
        assert_eq!(note.atom.find_edit_link(), None);
    }

    #[test]
    fn test_required_field_missing() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"><summary>s</summary></entry>"#;
        match parse::<Note>(xml.as_bytes()) {
            Err(ParseError::MissingField { field, .. }) => assert_eq!(field, "code"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_root_entry() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"/>"#;
        assert!(matches!(
            parse::<Note>(xml.as_bytes()),
            Err(ParseError::MissingField { .. })
        ));
    }

    #[test]
    fn test_root_in_wrong_namespace() {
        let xml = r#"<entry xmlns="urn:other"><x/></entry>"#;
        match parse::<Note>(xml.as_bytes()) {
            Err(ParseError::ShapeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "{http://www.w3.org/2005/Atom}entry");
                assert_eq!(found, "{urn:other}entry");
            }
            other => panic!("Expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_feed_of_notes_carries_entry_path_in_errors() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:apps="http://schemas.google.com/apps/2006">
  <entry><apps:property name="code" value="1"/></entry>
  <entry><summary>no code</summary></entry>
</feed>"#;
        let err = parse::<Feed<Note>>(xml.as_bytes()).unwrap_err();
        let context = err.context().unwrap();
        assert_eq!(context.parsing.as_deref(), Some("feed/entry #2"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("flag", "TRUE").unwrap());
        assert!(!parse_flag("flag", " false ").unwrap());
        assert!(parse_flag("flag", "0").is_ok());
        assert!(matches!(
            parse_flag("flag", "maybe"),
            Err(ParseError::InvalidValue { field: "flag", .. })
        ));
    }

    #[test]
    fn test_trailing_content_config() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:apps="http://schemas.google.com/apps/2006"><apps:property name="code" value="1"/></entry><entry/>"#;
        assert!(parse::<Note>(xml.as_bytes()).unwrap_err().is_malformed());

        let config = ParseConfig {
            allow_trailing_content: true,
            ..ParseConfig::default()
        };
        let note: Note = parse_with(xml.as_bytes(), &config).unwrap();
        assert_eq!(note.code.as_deref(), Some("1"));
    }
}
