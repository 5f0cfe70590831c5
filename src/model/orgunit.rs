use crate::atom::{AtomMeta, HasLinks, Link};
use crate::model::{property, split_list};
use crate::schema::{EntrySchema, FieldSpec};
use crate::xml::deserialize::{Document, ENTRY, parse_flag, read_entry};
use crate::xml::errors::ParseError;
use crate::xml::quick::de::XmlCursor;

/// An organization unit.
///
/// Paths are the service's `/`-separated unit paths below the customer's root
/// unit, e.g. `Test/Test+Organization`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrgUnitEntry {
    atom: AtomMeta,
    org_unit_name: Option<String>,
    org_unit_description: Option<String>,
    org_unit_path: Option<String>,
    parent_org_unit_path: Option<String>,
    org_unit_block_inheritance: Option<String>,
    users_to_move: Option<String>,
    moved_users: Option<String>,
}

impl OrgUnitEntry {
    /// An entry describing a unit to create under `parent_org_unit_path`.
    pub fn new(org_unit_name: impl Into<String>, parent_org_unit_path: impl Into<String>) -> Self {
        Self {
            org_unit_name: Some(org_unit_name.into()),
            parent_org_unit_path: Some(parent_org_unit_path.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.org_unit_description = Some(description.into());
        self
    }

    pub fn with_block_inheritance(mut self, block: bool) -> Self {
        self.org_unit_block_inheritance = Some(block.to_string());
        self
    }

    /// Users to move into this unit, written as a comma-separated list.
    pub fn with_users_to_move<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = users
            .into_iter()
            .map(|user| user.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.users_to_move = Some(list);
        self
    }

    pub fn org_unit_name(&self) -> Option<&str> {
        self.org_unit_name.as_deref()
    }

    pub fn org_unit_description(&self) -> Option<&str> {
        self.org_unit_description.as_deref()
    }

    pub fn org_unit_path(&self) -> Option<&str> {
        self.org_unit_path.as_deref()
    }

    pub fn parent_org_unit_path(&self) -> Option<&str> {
        self.parent_org_unit_path.as_deref()
    }

    /// The raw `blockInheritance` text, `"true"` or `"false"`.
    pub fn org_unit_block_inheritance(&self) -> Option<&str> {
        self.org_unit_block_inheritance.as_deref()
    }

    /// `blockInheritance` as a flag.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if the text is not a recognised boolean spelling.
    pub fn blocks_inheritance(&self) -> Result<Option<bool>, ParseError> {
        self.org_unit_block_inheritance
            .as_deref()
            .map(|value| parse_flag("org_unit_block_inheritance", value))
            .transpose()
    }

    pub fn users_to_move(&self) -> Vec<&str> {
        split_list(self.users_to_move.as_deref())
    }

    /// Users the service reports as moved by an update.
    pub fn moved_users(&self) -> Vec<&str> {
        split_list(self.moved_users.as_deref())
    }
}

impl EntrySchema for OrgUnitEntry {
    const NAME: &'static str = "org unit entry";

    const FIELDS: &'static [FieldSpec<Self>] = &[
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
        FieldSpec::property(
            "org_unit_path",
            property::ORG_UNIT_PATH,
            |e| &mut e.org_unit_path,
            |e| e.org_unit_path.as_deref(),
        ),
        FieldSpec::property(
            "parent_org_unit_path",
            property::PARENT_ORG_UNIT_PATH,
            |e| &mut e.parent_org_unit_path,
            |e| e.parent_org_unit_path.as_deref(),
        ),
        FieldSpec::property(
            "org_unit_block_inheritance",
            property::ORG_UNIT_BLOCK_INHERITANCE,
            |e| &mut e.org_unit_block_inheritance,
            |e| e.org_unit_block_inheritance.as_deref(),
        ),
        FieldSpec::property(
            "users_to_move",
            property::USERS_TO_MOVE,
            |e| &mut e.users_to_move,
            |e| e.users_to_move.as_deref(),
        ),
        FieldSpec::property(
            "moved_users",
            property::MOVED_USERS,
            |e| &mut e.moved_users,
            |e| e.moved_users.as_deref(),
        ),
    ];

    fn atom(&self) -> &AtomMeta {
        &self.atom
    }

    fn atom_mut(&mut self) -> &mut AtomMeta {
        &mut self.atom
    }
}

impl HasLinks for OrgUnitEntry {
    fn links(&self) -> &[Link] {
        &self.atom.links
    }
}

impl Document for OrgUnitEntry {
    const ROOT: &'static str = ENTRY;

    fn read_root(cursor: &mut XmlCursor<'_>, empty: bool) -> Result<Self, ParseError> {
        read_entry(cursor, empty)
    }
}
