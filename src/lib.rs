//! # inifile
//!
//! An in-memory store, parser, and serializer for a line-oriented INI
//! dialect, built around a string arena and sorted section/property tables.
//!
//! ## The format
//!
//! - **Comments**: a line whose first non-whitespace character is `#` or
//!   `;` is discarded; a marker later in a line ends it.
//! - **Section headers**: `[name]`. Names may contain spaces but not `]`,
//!   `#`, or `;`. Text after the closing bracket is ignored.
//! - **Properties**: `key = value`. Keys cannot contain spaces, `=`, `#`,
//!   or `;`; values may contain spaces and `=`. Both are trimmed of
//!   surrounding whitespace and must be non-empty.
//! - Properties before the first header belong to the *global section*,
//!   addressed by an empty or absent section name.
//! - Everything is case-sensitive and compared byte-wise. No nesting, no
//!   quoting, no escapes.
//!
//! ## Key properties
//!
//! - **Recoverable parsing**: each malformed line is reported through a
//!   caller-supplied callback with its line, column, and raw text; the
//!   callback decides per line whether to continue or abort. See [`Parser`].
//! - **Sorted storage**: sections and the properties within each section
//!   are kept strictly ascending, so every lookup is a binary search and
//!   serialized output is canonical.
//! - **Arena-owned text**: all names, keys, and values live in one bump
//!   arena owned by the document. Value references returned by lookups stay
//!   valid for the document's whole lifetime, even as more entries are
//!   inserted. A single string is limited to [`MAX_STRING_LEN`] bytes.
//! - **Strict typed access**: [`IniDocument::find_integer`],
//!   [`IniDocument::find_unsigned`], and [`IniDocument::find_float`]
//!   convert the entire value or fail; nothing is silently defaulted.
//!
//! ## Quick start
//!
//! ```rust
//! use inifile::from_str;
//!
//! let doc = from_str("timeout = 30\n\n[db]\nhost = localhost\nport = 5432\n").unwrap();
//!
//! assert_eq!(doc.find_property(None, "timeout").unwrap(), "30");
//! assert_eq!(doc.find_property(Some("db"), "host").unwrap(), "localhost");
//! assert_eq!(doc.find_integer(Some("db"), "port").unwrap(), 5432);
//!
//! // Output is canonical: sections and keys in sorted order.
//! assert_eq!(
//!     inifile::to_string(&doc),
//!     "timeout = 30\n\n[db]\nhost = localhost\nport = 5432\n\n"
//! );
//! ```
//!
//! ## Diagnosing malformed input
//!
//! ```rust
//! use inifile::{ErrorAction, Parser};
//!
//! let doc = Parser::new()
//!     .with_source_name("app.ini")
//!     .on_error(|event| {
//!         eprintln!(
//!             "{}:{}:{}: {}",
//!             event.source_name, event.line_number, event.column, event.error
//!         );
//!         ErrorAction::Continue
//!     })
//!     .parse_str("[ok]\noops no equals\nkey = value\n")
//!     .unwrap();
//!
//! assert_eq!(doc.find_property(Some("ok"), "key").unwrap(), "value");
//! ```
//!
//! ## Building documents programmatically
//!
//! [`IniDocument::add_section`] and [`IniDocument::add_property`] expose the
//! same operations the parser uses, including the "re-opening a section
//! moves the insertion point" behavior. There is no delete: a document is
//! built by insertion and dropped as a unit.
//!
//! ## Hazards
//!
//! A document is single-owner, build-then-read. Section and property
//! *positions* shift as entries are inserted, which is why the API hands
//! out values and [`SectionView`]s rather than raw indices; only the
//! arena-owned strings are stable across mutations.

mod arena;
mod document;
mod error;
mod parser;
mod scanner;
mod ser;
mod table;

pub use arena::MAX_STRING_LEN;
pub use document::{DocumentStats, IniDocument, SectionView};
pub use error::{Error, Result};
pub use parser::{ErrorAction, ParseEvent, Parser};

use std::io::BufRead;
use std::path::Path;

/// Parses INI text from a string, silently dropping malformed lines.
///
/// Use a [`Parser`] with [`Parser::on_error`] to observe or abort on
/// malformed lines instead.
///
/// # Examples
///
/// ```rust
/// let doc = inifile::from_str("[net]\nretries = 3\n").unwrap();
/// assert_eq!(doc.find_integer(Some("net"), "retries").unwrap(), 3);
/// ```
///
/// # Errors
///
/// Without a callback nothing aborts, so string input currently always
/// parses; the `Result` keeps the signature aligned with [`from_reader`]
/// and [`from_file`], which can fail on I/O.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<IniDocument> {
    Parser::new().parse_str(input)
}

/// Parses INI text from a buffered reader, silently dropping malformed
/// lines.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = inifile::from_reader(Cursor::new(b"key = value\n")).unwrap();
/// assert_eq!(doc.find_property(None, "key").unwrap(), "value");
/// ```
///
/// # Errors
///
/// [`Error::Io`] if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: BufRead>(reader: R) -> Result<IniDocument> {
    Parser::new().parse_reader(reader)
}

/// Opens and parses an INI file, silently dropping malformed lines.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be opened or read.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file(path: impl AsRef<Path>) -> Result<IniDocument> {
    Parser::new().parse_file(path)
}

/// Renders a document as canonical INI text.
///
/// Equivalent to [`IniDocument::to_ini_string`].
#[must_use]
pub fn to_string(doc: &IniDocument) -> String {
    doc.to_ini_string()
}

/// Writes a document as canonical INI text to `writer`.
///
/// # Errors
///
/// [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: std::io::Write>(writer: W, doc: &IniDocument) -> Result<()> {
    doc.write_to(writer)
}
