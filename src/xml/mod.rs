//! XML reading and writing for provisioning feeds.

pub mod deserialize;
pub mod errors;
pub mod quick;
#[cfg(feature = "serialize")]
pub mod serialize;

pub use deserialize::{Document, parse, parse_str, parse_with};
#[cfg(feature = "serialize")]
pub use errors::SerializeError;
pub use errors::{ErrorContext, ParseError};
#[cfg(feature = "serialize")]
pub use serialize::{ToXml, to_xml};

/// Reader settings handed to quick-xml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Trim whitespace around text content. Off by default so element text
    /// survives a write and re-read unchanged.
    pub trim_text: bool,
    /// Reject end tags that do not match the open element.
    pub check_end_names: bool,
    /// Stop reading at the end of the root element instead of rejecting
    /// whatever follows it.
    pub allow_trailing_content: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            trim_text: false,
            check_end_names: true,
            allow_trailing_content: false,
        }
    }
}
