//! Atom feeds embedding a list of entries.

use crate::atom::{AtomMeta, HasLinks, Link};
use crate::model::{OrgUnitEntry, OrgUserEntry};

/// A feed of entries of one record type, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed<E> {
    pub(crate) atom: AtomMeta,
    pub(crate) entries: Vec<E>,
}

/// Organization units of a customer.
pub type OrgUnitFeed = Feed<OrgUnitEntry>;

/// Users and the organization unit each belongs to.
pub type OrgUserFeed = Feed<OrgUserEntry>;

impl<E> Feed<E> {
    pub fn new(atom: AtomMeta, entries: Vec<E>) -> Self {
        Self { atom, entries }
    }

    /// The feed's own Atom metadata.
    pub fn atom(&self) -> &AtomMeta {
        &self.atom
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }
}

impl<E> Default for Feed<E> {
    fn default() -> Self {
        Self {
            atom: AtomMeta::default(),
            entries: Vec::new(),
        }
    }
}

impl<E> HasLinks for Feed<E> {
    fn links(&self) -> &[Link] {
        &self.atom.links
    }
}

impl<'a, E> IntoIterator for &'a Feed<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<E> IntoIterator for Feed<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
