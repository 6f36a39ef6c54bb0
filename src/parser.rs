//! The parser: drives the line scanner over a whole input and builds a
//! document, reporting malformed lines through a caller-supplied callback.
//!
//! Parsing is line-at-a-time and recoverable by default. Every malformed
//! line (and every constraint violation such as a repeated key) produces a
//! [`ParseEvent`] carrying the source name, 1-based line number, 1-based
//! byte column, and the raw line text. The callback answers with
//! [`ErrorAction::Continue`] to drop the line and keep going, or
//! [`ErrorAction::Abort`] to stop; on abort the partially built document is
//! discarded and the parse returns [`Error::Parse`]. Without a callback
//! every malformed line is silently dropped.
//!
//! Failing to open or read the input is always fatal: it is reported once
//! through the callback (with line number 0) and the parse returns
//! [`Error::Io`] regardless of the callback's answer.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{ErrorAction, Parser};
//!
//! let text = "[db]\nhost = localhost\noops\nport = 5432\n";
//! let mut events = Vec::new();
//! let doc = Parser::new()
//!     .with_source_name("db.ini")
//!     .on_error(|event| {
//!         events.push(format!(
//!             "{}:{}:{}: {}",
//!             event.source_name, event.line_number, event.column, event.error
//!         ));
//!         ErrorAction::Continue
//!     })
//!     .parse_str(text)
//!     .unwrap();
//!
//! assert_eq!(events, ["db.ini:3:5: expected equals sign '='"]);
//! assert_eq!(doc.find_property(Some("db"), "port").unwrap(), "5432");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::document::IniDocument;
use crate::error::{Error, Result};
use crate::scanner::{scan_line, ScannedLine};

/// Name used in diagnostics when no source name is configured.
const UNNAMED_SOURCE: &str = "<input>";

/// The callback's verdict on a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Drop the offending line and keep parsing.
    Continue,
    /// Stop parsing; the partial document is discarded.
    Abort,
}

/// One malformed-line report delivered to the error callback.
#[derive(Debug)]
pub struct ParseEvent<'a> {
    /// Configured source name (file path, or `<input>` for strings).
    pub source_name: &'a str,
    /// 1-based line number; 0 for failures not tied to a line, such as an
    /// unopenable file.
    pub line_number: usize,
    /// 1-based byte column of the failure point; 0 when `line_number` is 0.
    pub column: usize,
    /// The raw text of the offending line, without its newline.
    pub line: &'a str,
    /// What went wrong.
    pub error: &'a Error,
}

/// A configurable INI parser.
///
/// Consumes itself on use; configure with [`Parser::with_source_name`] and
/// [`Parser::on_error`], then call one of [`Parser::parse_str`],
/// [`Parser::parse_reader`], or [`Parser::parse_file`].
#[derive(Default)]
pub struct Parser<'cb> {
    source_name: Option<String>,
    callback: Option<Box<dyn FnMut(ParseEvent<'_>) -> ErrorAction + 'cb>>,
}

impl<'cb> Parser<'cb> {
    /// Creates a parser with no source name and no callback (malformed
    /// lines are silently dropped).
    #[must_use]
    pub fn new() -> Self {
        Parser::default()
    }

    /// Sets the source name used in [`ParseEvent`]s and abort errors.
    ///
    /// [`Parser::parse_file`] defaults this to the file path.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Installs the error callback.
    #[must_use]
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ParseEvent<'_>) -> ErrorAction + 'cb,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Parses a whole string.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the callback aborted.
    pub fn parse_str(mut self, input: &str) -> Result<IniDocument> {
        let source_name = self.source_name.take().unwrap_or_else(|| UNNAMED_SOURCE.into());
        let mut builder = LineBuilder::new(&source_name, self.callback.as_deref_mut());
        for line in input.lines() {
            builder.line(line)?;
        }
        Ok(builder.finish())
    }

    /// Parses lines read from `reader`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading fails (always fatal), [`Error::Parse`] if
    /// the callback aborted.
    pub fn parse_reader<R: BufRead>(mut self, mut reader: R) -> Result<IniDocument> {
        let source_name = self.source_name.take().unwrap_or_else(|| UNNAMED_SOURCE.into());
        let mut builder = LineBuilder::new(&source_name, self.callback.as_deref_mut());
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => builder.line(buf.trim_end_matches(|c| c == '\r' || c == '\n'))?,
                Err(err) => return Err(builder.fatal(Error::io(err))),
            }
        }
        Ok(builder.finish())
    }

    /// Opens and parses a file. The file path becomes the source name
    /// unless one was configured.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be opened or read (always fatal),
    /// [`Error::Parse`] if the callback aborted.
    pub fn parse_file(mut self, path: impl AsRef<Path>) -> Result<IniDocument> {
        let path = path.as_ref();
        if self.source_name.is_none() {
            self.source_name = Some(path.display().to_string());
        }
        match File::open(path) {
            Ok(file) => self.parse_reader(BufReader::new(file)),
            Err(err) => {
                let source_name = self.source_name.take().unwrap_or_default();
                let mut builder = LineBuilder::new(&source_name, self.callback.as_deref_mut());
                Err(builder.fatal(Error::io(err)))
            }
        }
    }
}

/// Per-parse state: the document under construction plus error plumbing.
struct LineBuilder<'a, 'cb> {
    source_name: &'a str,
    callback: Option<&'a mut (dyn FnMut(ParseEvent<'_>) -> ErrorAction + 'cb)>,
    doc: IniDocument,
    line_number: usize,
}

impl<'a, 'cb> LineBuilder<'a, 'cb> {
    fn new(
        source_name: &'a str,
        callback: Option<&'a mut (dyn FnMut(ParseEvent<'_>) -> ErrorAction + 'cb)>,
    ) -> Self {
        LineBuilder {
            source_name,
            callback,
            doc: IniDocument::new(),
            line_number: 0,
        }
    }

    /// Feeds the next line. `Err` means the callback aborted; the document
    /// is dropped with the builder.
    fn line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        match scan_line(line) {
            Ok(ScannedLine::Skip) => Ok(()),
            Ok(ScannedLine::Section { name, column }) => {
                match self.doc.add_section(name) {
                    Ok(()) => Ok(()),
                    Err(error) => self.report(column, line, error),
                }
            }
            Ok(ScannedLine::Property {
                key,
                key_column,
                value,
                ..
            }) => match self.doc.add_property(key, value) {
                Ok(()) => Ok(()),
                Err(error) => self.report(key_column, line, error),
            },
            Err(scan_error) => self.report(scan_error.column, line, scan_error.error),
        }
    }

    fn finish(self) -> IniDocument {
        self.doc
    }

    /// Routes a recoverable error through the callback.
    fn report(&mut self, column: usize, line: &str, error: Error) -> Result<()> {
        let action = match self.callback.as_mut() {
            Some(callback) => callback(ParseEvent {
                source_name: self.source_name,
                line_number: self.line_number,
                column,
                line,
                error: &error,
            }),
            None => ErrorAction::Continue,
        };
        match action {
            ErrorAction::Continue => Ok(()),
            ErrorAction::Abort => Err(Error::parse(self.source_name, self.line_number, column, error)),
        }
    }

    /// Reports a structural failure (unopenable or unreadable input) and
    /// returns it. The callback is informed but cannot override the abort.
    fn fatal(&mut self, error: Error) -> Error {
        if let Some(callback) = self.callback.as_mut() {
            callback(ParseEvent {
                source_name: self.source_name,
                line_number: 0,
                column: 0,
                line: "",
                error: &error,
            });
        }
        error
    }
}
