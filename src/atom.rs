//! Atom envelope data shared by entries and feeds, and link resolution.

/// Relation of the link used to update or delete the owning resource.
pub const REL_EDIT: &str = "edit";
/// Relation of the link pointing at the resource itself.
pub const REL_SELF: &str = "self";
/// Relation of the human-readable alternate representation.
pub const REL_ALTERNATE: &str = "alternate";

/// An Atom `<link rel="..." href="..."/>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub rel: String,
    pub href: String,
    /// The `type` attribute, e.g. `application/atom+xml`.
    pub content_type: Option<String>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Atom metadata carried by every entry and feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomMeta {
    pub id: Option<String>,
    pub updated: Option<String>,
    pub title: Option<String>,
    /// Links in document order.
    pub links: Vec<Link>,
}

/// Anything that carries Atom link relations.
///
/// Every lookup returns the first matching link in document order; a
/// missing relation is `None`, never an error.
pub trait HasLinks {
    fn links(&self) -> &[Link];

    /// The `href` of the first link whose `rel` equals `rel` exactly.
    fn find_link(&self, rel: &str) -> Option<&str> {
        self.links()
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }

    /// The URI used to update or delete this resource.
    fn find_edit_link(&self) -> Option<&str> {
        self.find_link(REL_EDIT)
    }

    fn find_self_link(&self) -> Option<&str> {
        self.find_link(REL_SELF)
    }

    /// The `alternate` link served as HTML.
    fn find_html_link(&self) -> Option<&str> {
        self.links()
            .iter()
            .find(|link| {
                link.rel == REL_ALTERNATE && link.content_type.as_deref() == Some("text/html")
            })
            .map(|link| link.href.as_str())
    }
}

impl HasLinks for AtomMeta {
    fn links(&self) -> &[Link] {
        &self.links
    }
}

impl HasLinks for [Link] {
    fn links(&self) -> &[Link] {
        self
    }
}
