//! Error types for feed parsing and serialization.

use std::fmt;

use thiserror::Error;

/// An error produced while turning an XML document into a record.
///
/// Missing optional fields and missing links are not errors; the record simply
/// leaves them empty.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML.
    #[error("Malformed document{context}: {message}")]
    MalformedDocument {
        message: String,
        context: ErrorContext,
    },

    /// The root element is not the one the requested shape expects.
    #[error("Shape mismatch{context}: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: String,
        found: String,
        context: ErrorContext,
    },

    /// A field declared as required was not present in the entry.
    #[error("Missing required field '{field}'{context}")]
    MissingField {
        field: &'static str,
        context: ErrorContext,
    },

    /// A field holds text that its typed accessor cannot interpret.
    #[error("Invalid value for '{field}': '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl ParseError {
    /// Create a malformed-document error.
    pub fn malformed(message: impl Into<String>, context: ErrorContext) -> Self {
        ParseError::MalformedDocument {
            message: message.into(),
            context,
        }
    }

    /// Check whether this error reports a malformed document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedDocument { .. })
    }

    /// Check whether this error reports a shape mismatch.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, ParseError::ShapeMismatch { .. })
    }

    /// The context attached to this error, if it has one.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ParseError::MalformedDocument { context, .. }
            | ParseError::ShapeMismatch { context, .. }
            | ParseError::MissingField { context, .. } => Some(context),
            ParseError::InvalidValue { .. } => None,
        }
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        ParseError::malformed(err.to_string(), ErrorContext::new())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ParseError::malformed(err.to_string(), ErrorContext::new())
    }
}

/// Where in the document an error happened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Byte offset into the input, when known.
    pub position: Option<usize>,
    /// What was being parsed, e.g. `"entry #2"`.
    pub parsing: Option<String>,
}

impl ErrorContext {
    /// Create a new empty error context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error context at a byte offset.
    pub fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            parsing: None,
        }
    }

    /// Add parsing context information.
    pub fn with_parsing<S: Into<String>>(mut self, parsing: S) -> Self {
        self.parsing = Some(parsing.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(position) = self.position {
            parts.push(format!(" at byte {}", position));
        }

        if let Some(ref parsing) = self.parsing {
            parts.push(format!(" while parsing {}", parsing));
        }

        if parts.is_empty() {
            return Ok(());
        }

        write!(f, "{}", parts.join(","))
    }
}

/// Errors that can occur while writing an entry back to XML.
#[cfg(feature = "serialize")]
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialized output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
