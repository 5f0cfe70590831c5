//! Static field tables describing where each record field lives in the XML.
//!
//! A record shape is described once, as a `&'static [FieldSpec<Self>]`, and
//! the generic parser and serializer walk that table. Adding a record means
//! adding a table; no parsing code changes.
//!
//! ```rust
//! use orgfeed::schema::{EntrySchema, Source};
//! use orgfeed::OrgUserEntry;
//!
//! let spec = OrgUserEntry::field("user_email").unwrap();
//! assert_eq!(spec.source, Source::Property("orgUserEmail"));
//! ```

use crate::atom::AtomMeta;
use crate::namespace::Namespace;

/// Where a field's text comes from inside an `<entry>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// `<apps:property name="NAME" value="..."/>`; the `value` attribute.
    Property(&'static str),
    /// Text content of a direct child element.
    Element {
        ns: &'static str,
        local: &'static str,
    },
}

impl Source {
    /// Whether this source reads the child element `{ns}local`.
    pub fn matches_element(&self, ns: &Namespace, local: &str) -> bool {
        match self {
            Source::Element { ns: uri, local: name } => ns.uri() == *uri && *name == local,
            Source::Property(_) => false,
        }
    }
}

/// How many times a field may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// Zero or one; a missing field stays `None`.
    #[default]
    Optional,
    /// Exactly one; a missing field fails the parse.
    Required,
}

/// One row of a record's field table.
pub struct FieldSpec<T: 'static> {
    /// The Rust-side field name, also used in error messages.
    pub name: &'static str,
    pub source: Source,
    pub cardinality: Cardinality,
    /// Storage of the field on the record.
    pub slot: fn(&mut T) -> &mut Option<String>,
    /// Read access to the stored value.
    pub value: fn(&T) -> Option<&str>,
}

impl<T: 'static> FieldSpec<T> {
    /// An optional field read from an `<apps:property>`.
    pub const fn property(
        name: &'static str,
        property: &'static str,
        slot: fn(&mut T) -> &mut Option<String>,
        value: fn(&T) -> Option<&str>,
    ) -> Self {
        Self {
            name,
            source: Source::Property(property),
            cardinality: Cardinality::Optional,
            slot,
            value,
        }
    }

    /// An optional field read from a child element's text.
    pub const fn element(
        name: &'static str,
        ns: &'static str,
        local: &'static str,
        slot: fn(&mut T) -> &mut Option<String>,
        value: fn(&T) -> Option<&str>,
    ) -> Self {
        Self {
            name,
            source: Source::Element { ns, local },
            cardinality: Cardinality::Optional,
            slot,
            value,
        }
    }

    /// Mark this field as required.
    pub const fn required(mut self) -> Self {
        self.cardinality = Cardinality::Required;
        self
    }
}

impl<T: 'static> std::fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("cardinality", &self.cardinality)
            .finish()
    }
}

/// A record parsed from a single Atom `<entry>`.
pub trait EntrySchema: Default + 'static {
    /// Human-readable record name used in logs and error contexts.
    const NAME: &'static str;

    /// The field table, in serialization order.
    const FIELDS: &'static [FieldSpec<Self>];

    fn atom(&self) -> &AtomMeta;

    fn atom_mut(&mut self) -> &mut AtomMeta;

    /// Look up a field by its Rust-side name.
    fn field(name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }

    /// The field read from `<apps:property name="property">`, if declared.
    fn property_field(property: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS
            .iter()
            .find(|spec| matches!(spec.source, Source::Property(name) if name == property))
    }
}
