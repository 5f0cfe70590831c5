//! Resource URIs of the organization unit provisioning API.
//!
//! URIs have the form `{base}/{feed}/{version}/{customer_id}[/{key}]`, where
//! `key` is an org unit path or a user email. Keys are encoded segment by
//! segment with form-urlencoded rules, the way the service writes them into
//! `edit` links:
//!
//! ```rust
//! use orgfeed::uri::Endpoint;
//!
//! let endpoint = Endpoint::default();
//! assert_eq!(
//!     endpoint.org_user_uri("C123A456B", Some("user720430@example.com")),
//!     "https://apps-apis.google.com/a/feeds/orguser/2.0/C123A456B/user720430%40example.com"
//! );
//! ```

use url::Url;
use url::form_urlencoded::byte_serialize;

/// Feed root of the production service.
pub const DEFAULT_BASE_URL: &str = "https://apps-apis.google.com/a/feeds";
/// Protocol version segment.
pub const API_VERSION: &str = "2.0";

const CUSTOMER_FEED: &str = "customer";
const ORG_UNIT_FEED: &str = "orgunit";
const ORG_USER_FEED: &str = "orguser";

/// Where the provisioning feeds live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_version: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
        }
    }
}

impl Endpoint {
    /// An endpoint rooted at `base_url`, e.g. a test server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// The URI that answers with the caller's `CustomerIdEntry`.
    pub fn customer_uri(&self) -> String {
        format!("{}/customerId", self.feed_uri(CUSTOMER_FEED))
    }

    /// The org unit feed of a customer, or one unit when `org_unit_path` is given.
    pub fn org_unit_uri(&self, customer_id: &str, org_unit_path: Option<&str>) -> String {
        self.resource_uri(ORG_UNIT_FEED, customer_id, org_unit_path.map(encode_path))
    }

    /// The org user feed of a customer, or one user when `user_email` is given.
    pub fn org_user_uri(&self, customer_id: &str, user_email: Option<&str>) -> String {
        self.resource_uri(ORG_USER_FEED, customer_id, user_email.map(encode_segment))
    }

    fn feed_uri(&self, feed: &str) -> String {
        format!("{}/{}/{}", self.base_url, feed, self.api_version)
    }

    fn resource_uri(&self, feed: &str, customer_id: &str, key: Option<String>) -> String {
        let mut uri = format!("{}/{}", self.feed_uri(feed), encode_segment(customer_id));
        if let Some(key) = key {
            uri.push('/');
            uri.push_str(&key);
        }
        uri
    }
}

/// Encode one path segment: `@` becomes `%40`, space becomes `+`.
pub fn encode_segment(segment: &str) -> String {
    byte_serialize(segment.as_bytes()).collect()
}

/// Encode a `/`-separated path, keeping the separators.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// The last path segment of `uri` as it appears on the wire (still encoded).
///
/// `None` if `uri` is not an absolute URL or has no path.
pub fn last_segment(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    let segment = url.path_segments()?.next_back()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}
