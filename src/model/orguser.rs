use crate::atom::{AtomMeta, HasLinks, Link};
use crate::model::property;
use crate::schema::{EntrySchema, FieldSpec};
use crate::xml::deserialize::{Document, ENTRY, read_entry};
use crate::xml::errors::ParseError;
use crate::xml::quick::de::XmlCursor;

/// A user and the organization unit it belongs to.
///
/// `user_email` holds the plain address; the entry's links carry it
/// percent-encoded as the last path segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrgUserEntry {
    atom: AtomMeta,
    user_email: Option<String>,
    org_unit_path: Option<String>,
    old_org_unit_path: Option<String>,
}

impl OrgUserEntry {
    /// An entry moving `user_email` into `org_unit_path`.
    pub fn new(user_email: impl Into<String>, org_unit_path: impl Into<String>) -> Self {
        Self {
            user_email: Some(user_email.into()),
            org_unit_path: Some(org_unit_path.into()),
            ..Self::default()
        }
    }

    pub fn with_old_org_unit_path(mut self, path: impl Into<String>) -> Self {
        self.old_org_unit_path = Some(path.into());
        self
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn org_unit_path(&self) -> Option<&str> {
        self.org_unit_path.as_deref()
    }

    /// The unit the user was in before the last move, when reported.
    pub fn old_org_unit_path(&self) -> Option<&str> {
        self.old_org_unit_path.as_deref()
    }
}

impl EntrySchema for OrgUserEntry {
    const NAME: &'static str = "org user entry";

    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::property(
            "user_email",
            property::USER_EMAIL,
            |e| &mut e.user_email,
            |e| e.user_email.as_deref(),
        ),
        FieldSpec::property(
            "org_unit_path",
            property::ORG_UNIT_PATH,
            |e| &mut e.org_unit_path,
            |e| e.org_unit_path.as_deref(),
        ),
        FieldSpec::property(
            "old_org_unit_path",
            property::OLD_ORG_UNIT_PATH,
            |e| &mut e.old_org_unit_path,
            |e| e.old_org_unit_path.as_deref(),
        ),
    ];

    fn atom(&self) -> &AtomMeta {
        &self.atom
    }

    fn atom_mut(&mut self) -> &mut AtomMeta {
        &mut self.atom
    }
}

impl HasLinks for OrgUserEntry {
    fn links(&self) -> &[Link] {
        &self.atom.links
    }
}

impl Document for OrgUserEntry {
    const ROOT: &'static str = ENTRY;

    fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError> {
        read_entry(cursor, empty)
    }
}
