//! Event-level plumbing shared by the feed reader and writer.
//!
//! `de` turns quick-xml events into namespace-resolved, well-formedness
//! checked events; `ser` writes the element shapes of an Atom entry.

pub mod de;
#[cfg(feature = "serialize")]
pub mod ser;

pub use de::{Attrs, XmlCursor, local_name};
#[cfg(feature = "serialize")]
pub use ser::{AttrList, XmlEmitter};
