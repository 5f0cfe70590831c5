//! Typed records for the Google Apps organization unit provisioning feeds.
//!
//! Documents are parsed with [`parse`] (or [`Document::from_xml`]) into one of
//! the record shapes:
//!
//! ```rust
//! use orgfeed::{HasLinks, OrgUserEntry, parse};
//!
//! let xml = br#"<entry xmlns="http://www.w3.org/2005/Atom"
//!     xmlns:apps="http://schemas.google.com/apps/2006">
//!   <link rel="edit" href="https://apps-apis.google.com/a/feeds/orguser/2.0/C1/admin%40example.com"/>
//!   <apps:property name="orgUserEmail" value="admin@example.com"/>
//!   <apps:property name="orgUnitPath" value="Test"/>
//! </entry>"#;
//!
//! let entry: OrgUserEntry = parse(xml).unwrap();
//! assert_eq!(entry.user_email(), Some("admin@example.com"));
//! assert_eq!(
//!     entry.find_edit_link(),
//!     Some("https://apps-apis.google.com/a/feeds/orguser/2.0/C1/admin%40example.com")
//! );
//! ```

pub mod atom;
pub mod model;
pub mod namespace;
pub mod schema;
pub mod uri;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use crate::atom::{AtomMeta, HasLinks, Link};
pub use crate::model::{
    CustomerIdEntry, Feed, OrgUnitEntry, OrgUnitFeed, OrgUserEntry, OrgUserFeed,
};
pub use crate::namespace::Namespace;
pub use crate::schema::EntrySchema;
pub use crate::xml::{
    Document, ErrorContext, ParseConfig, ParseError, parse, parse_str, parse_with,
};
#[cfg(feature = "serialize")]
pub use crate::xml::{SerializeError, ToXml};
