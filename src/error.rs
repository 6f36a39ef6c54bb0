//! Error types for INI parsing, lookup, and serialization.
//!
//! Every failure the crate can report is a variant of [`Error`]. During
//! parsing, malformed lines are *recoverable*: each one is surfaced through
//! the caller's error callback together with its position, and parsing moves
//! on unless the callback asks for an abort. Lookup and conversion failures
//! are returned directly from the accessor that hit them.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{from_str, Error};
//!
//! let doc = from_str("[db]\nhost = localhost\n").unwrap();
//! match doc.find_integer(Some("db"), "host") {
//!     Err(Error::NotInteger(value)) => assert_eq!(value, "localhost"),
//!     other => panic!("expected NotInteger, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// All errors reported by this crate.
///
/// Parse-time variants (`ExpectedClosingBracket` through `RepeatedKey`) are
/// delivered to the error callback with line and column context; the same
/// kinds come back wrapped in [`Error::Parse`] when a parse is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO failure while reading input or writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// A section name, key, or value does not fit in a single arena chunk.
    ///
    /// This is the one allocation limit the library enforces itself; see
    /// [`MAX_STRING_LEN`](crate::MAX_STRING_LEN).
    #[error("string of {len} bytes exceeds the maximum of {max}")]
    StringTooLarge { len: usize, max: usize },

    /// A section header was opened with `[` but never closed with `]`.
    #[error("expected closing square bracket ']'")]
    ExpectedClosingBracket,

    /// A property line has no `=` between key and value.
    #[error("expected equals sign '='")]
    ExpectedEquals,

    /// A section header contains no name, as in `[]` or `[  ]`.
    #[error("section name not provided")]
    SectionNotProvided,

    /// A property line starts with `=` instead of a key.
    #[error("key not provided")]
    KeyNotProvided,

    /// A property line has nothing after `=` except whitespace or a comment.
    #[error("value not provided")]
    ValueNotProvided,

    /// The key already exists in the current section.
    #[error("repeated key `{0}`")]
    RepeatedKey(String),

    /// No section with the requested name exists.
    #[error("no such section `{0}`")]
    NoSuchSection(String),

    /// The section exists but holds no property with the requested key.
    #[error("no such property `{0}`")]
    NoSuchProperty(String),

    /// The property's value is not a valid signed integer.
    #[error("value `{0}` is not a valid integer")]
    NotInteger(String),

    /// The property's value is not a valid unsigned integer.
    #[error("value `{0}` is not a valid unsigned integer")]
    NotUnsigned(String),

    /// The property's value is not a valid floating point number.
    #[error("value `{0}` is not a valid float")]
    NotFloat(String),

    /// A parse was aborted; carries the position and kind of the offending
    /// line so the failure stays diagnosable even without a callback.
    #[error("{source_name}:{line}:{column}: {kind}")]
    Parse {
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// 1-based byte column of the failure point.
        column: usize,
        kind: Box<Error>,
    },
}

impl Error {
    /// Creates an I/O error from anything displayable.
    pub fn io<T: std::fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Wraps a parse-time error with its source position.
    pub fn parse(source_name: &str, line: usize, column: usize, kind: Error) -> Self {
        Error::Parse {
            source_name: source_name.to_string(),
            line,
            column,
            kind: Box::new(kind),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
