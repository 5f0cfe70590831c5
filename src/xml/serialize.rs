//! Writing entries back to Atom XML.
//!
//! The output uses Atom as the default namespace and binds `apps:` for
//! properties, which is the form the provisioning service accepts in request
//! bodies. Fields are written in the order of the record's field table.

use quick_xml::Writer;

use crate::atom::AtomMeta;
use crate::namespace::{ATOM_NS, Namespace};
use crate::schema::{EntrySchema, Source};
use crate::xml::errors::SerializeError;
use crate::xml::quick::ser::{AttrList, XmlEmitter};

/// Serialize a record as a standalone `<entry>` document.
pub fn to_xml<E: EntrySchema>(entry: &E) -> Result<String, SerializeError> {
    let mut writer = Writer::new(Vec::new());
    let mut emit = XmlEmitter::new(&mut writer);

    emit.xml_decl()?;

    let mut root = AttrList::new();
    root.bind(None, &Namespace::Atom)
        .bind(Namespace::Apps.default_prefix(), &Namespace::Apps);
    emit.start_elem("entry", &root)?;

    write_atom_meta(&mut emit, entry.atom())?;

    for spec in E::FIELDS {
        let Some(value) = (spec.value)(entry) else {
            continue;
        };
        match spec.source {
            Source::Property(name) => emit.property(name, value)?,
            Source::Element { ns, local } if ns == ATOM_NS => {
                emit.text_elem(local, &AttrList::new(), value)?;
            }
            Source::Element { ns, local } => {
                let mut attrs = AttrList::new();
                attrs.add("xmlns", ns);
                emit.text_elem(local, &attrs, value)?;
            }
        }
    }

    emit.end_elem("entry")?;
    log::trace!("serialized {}", E::NAME);

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_atom_meta(
    emit: &mut XmlEmitter<'_, Vec<u8>>,
    meta: &AtomMeta,
) -> Result<(), SerializeError> {
    emit.opt_text_elem("id", meta.id.as_deref())?;
    emit.opt_text_elem("updated", meta.updated.as_deref())?;
    emit.opt_text_elem("title", meta.title.as_deref())?;

    for link in &meta.links {
        emit.link(link)?;
    }

    Ok(())
}

/// Serialization for every record with a field table.
pub trait ToXml {
    fn to_xml(&self) -> Result<String, SerializeError>;
}

impl<E: EntrySchema> ToXml for E {
    fn to_xml(&self) -> Result<String, SerializeError> {
        to_xml(self)
    }
}
