use crate::atom::{AtomMeta, HasLinks, Link};
use crate::model::property;
use crate::schema::{EntrySchema, FieldSpec};
use crate::xml::deserialize::{Document, ENTRY, read_entry};
use crate::xml::errors::ParseError;
use crate::xml::quick::de::XmlCursor;

/// The customer id entry of a domain, together with the domain's root
/// organization unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerIdEntry {
    atom: AtomMeta,
    customer_id: Option<String>,
    customer_org_unit_name: Option<String>,
    customer_org_unit_description: Option<String>,
    org_unit_name: Option<String>,
    org_unit_description: Option<String>,
}

impl CustomerIdEntry {
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn customer_org_unit_name(&self) -> Option<&str> {
        self.customer_org_unit_name.as_deref()
    }

    pub fn customer_org_unit_description(&self) -> Option<&str> {
        self.customer_org_unit_description.as_deref()
    }

    pub fn org_unit_name(&self) -> Option<&str> {
        self.org_unit_name.as_deref()
    }

    pub fn org_unit_description(&self) -> Option<&str> {
        self.org_unit_description.as_deref()
    }
}

impl EntrySchema for CustomerIdEntry {
    const NAME: &'static str = "customer id entry";

    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::property(
            "customer_id",
            property::CUSTOMER_ID,
            |e| &mut e.customer_id,
            |e| e.customer_id.as_deref(),
        ),
        FieldSpec::property(
            "customer_org_unit_name",
            property::CUSTOMER_ORG_UNIT_NAME,
            |e| &mut e.customer_org_unit_name,
            |e| e.customer_org_unit_name.as_deref(),
        ),
        FieldSpec::property(
            "customer_org_unit_description",
            property::CUSTOMER_ORG_UNIT_DESCRIPTION,
            |e| &mut e.customer_org_unit_description,
            |e| e.customer_org_unit_description.as_deref(),
        ),
        FieldSpec::property(
            "org_unit_name",
            property::ORG_UNIT_NAME,
            |e| &mut e.org_unit_name,
            |e| e.org_unit_name.as_deref(),
        ),
        FieldSpec::property(
            "org_unit_description",
            property::ORG_UNIT_DESCRIPTION,
            |e| &mut e.org_unit_description,
            |e| e.org_unit_description.as_deref(),
        ),
    ];

    fn atom(&self) -> &AtomMeta {
        &self.atom
    }

    fn atom_mut(&mut self) -> &mut AtomMeta {
        &mut self.atom
    }
}

impl HasLinks for CustomerIdEntry {
    fn links(&self) -> &[Link] {
        &self.atom.links
    }
}

impl Document for CustomerIdEntry {
    const ROOT: &'static str = ENTRY;

    fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError> {
        read_entry(cursor, empty)
    }
}
