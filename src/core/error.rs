//! Error types for anchorfix

use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Result type for anchorfix operations
pub type Result<T> = std::result::Result<T, Error>;

/// An identifier that appears on more than one anchor element.
///
/// Raised only after the whole document has been scanned, so `line_numbers`
/// lists every occurrence in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    /// The identifier value shared by several anchors
    pub id_value: String,

    /// 1-based line numbers of every occurrence, in document order
    pub line_numbers: Vec<usize>,
}

impl fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .line_numbers
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "duplicate id \"{}\" found on lines {}", self.id_value, lines)
    }
}

impl std::error::Error for DuplicateIdError {}

/// Errors that can occur while rewriting a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),

    #[error("cannot decode {} (tried {tried})", .path.display())]
    Decode { path: PathBuf, tried: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to process markup: {0}")]
    Markup(#[from] lol_html::errors::RewritingError),

    #[error("invalid attribute name: {0}")]
    AttributeName(#[from] lol_html::errors::AttributeNameError),

    #[error("rewritten markup is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("invalid prefix {0:?}: only word characters, '-', '.' and ':' are allowed")]
    InvalidPrefix(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The duplicate record, if this error was raised by the collector
    pub fn as_duplicate(&self) -> Option<&DuplicateIdError> {
        match self {
            Error::DuplicateId(dup) => Some(dup),
            _ => None,
        }
    }
}
