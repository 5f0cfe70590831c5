//! # XML namespaces of the provisioning feeds
//!
//! Organization unit documents mix three vocabularies:
//!
//! - **Atom** (`http://www.w3.org/2005/Atom`): the `<feed>`, `<entry>`, `<id>`,
//!   `<updated>` and `<link>` envelope.
//! - **Apps** (`http://schemas.google.com/apps/2006`): the
//!   `<apps:property name="..." value="..."/>` elements carrying record fields.
//! - **OpenSearch** (`http://a9.com/-/spec/opensearchrss/1.0/`): paging
//!   counters on feeds, which this crate skips.
//!
//! Element names are compared by namespace URI, never by prefix, so a document
//! that binds the apps vocabulary to `g:` parses the same as one using `apps:`.
//!
//! ## Examples
//!
//! ```rust
//! use orgfeed::Namespace;
//!
//! let ns = Namespace::from_uri("http://schemas.google.com/apps/2006");
//! assert_eq!(ns, Namespace::Apps);
//! assert_eq!(ns.default_prefix(), Some("apps"));
//!
//! let other = Namespace::from_uri("urn:example");
//! assert!(!other.is_known());
//! assert_eq!(other.uri(), "urn:example");
//! ```

use std::fmt;

/// Atom syndication namespace URI.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Google Apps provisioning namespace URI.
pub const APPS_NS: &str = "http://schemas.google.com/apps/2006";

/// OpenSearch 1.0 namespace URI.
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearchrss/1.0/";

/// An XML namespace, identified by its URI.
///
/// The vocabularies used by the provisioning API have their own variants;
/// anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// The Atom envelope.
    Atom,

    /// Apps provisioning properties.
    Apps,

    /// OpenSearch paging elements.
    OpenSearch,

    /// Any namespace not listed above, holding its URI.
    Other(String),
}

impl Namespace {
    /// Classifies a namespace URI.
    ///
    /// Matching is exact: namespace URIs are case-sensitive strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orgfeed::Namespace;
    ///
    /// assert_eq!(Namespace::from_uri("http://www.w3.org/2005/Atom"), Namespace::Atom);
    /// assert_eq!(
    ///     Namespace::from_uri("HTTP://WWW.W3.ORG/2005/ATOM"),
    ///     Namespace::Other("HTTP://WWW.W3.ORG/2005/ATOM".to_string())
    /// );
    /// ```
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            ATOM_NS => Namespace::Atom,
            APPS_NS => Namespace::Apps,
            OPENSEARCH_NS => Namespace::OpenSearch,
            _ => Namespace::Other(uri.to_string()),
        }
    }

    /// Classifies a namespace URI given as raw bytes from the reader.
    pub fn from_uri_bytes(uri: &[u8]) -> Self {
        Self::from_uri(&String::from_utf8_lossy(uri))
    }

    /// Returns the namespace URI.
    pub fn uri(&self) -> &str {
        match self {
            Namespace::Atom => ATOM_NS,
            Namespace::Apps => APPS_NS,
            Namespace::OpenSearch => OPENSEARCH_NS,
            Namespace::Other(uri) => uri,
        }
    }

    /// Returns the prefix the service conventionally binds to this namespace.
    ///
    /// Atom is the default namespace of every document, so it has no prefix.
    pub fn default_prefix(&self) -> Option<&'static str> {
        match self {
            Namespace::Apps => Some("apps"),
            Namespace::OpenSearch => Some("openSearch"),
            Namespace::Atom | Namespace::Other(_) => None,
        }
    }

    /// Checks if this is one of the vocabularies the provisioning API uses.
    pub fn is_known(&self) -> bool {
        !matches!(self, Namespace::Other(_))
    }

    /// Formats a local name in Clark notation, `{uri}local`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orgfeed::Namespace;
    ///
    /// assert_eq!(
    ///     Namespace::Atom.clark("entry"),
    ///     "{http://www.w3.org/2005/Atom}entry"
    /// );
    /// ```
    pub fn clark(&self, local: &str) -> String {
        format!("{{{}}}{}", self.uri(), local)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}
