//! Serialization of a document back to canonical INI text.
//!
//! Output is canonical, not a byte-for-byte echo of whatever was parsed:
//! the global section's properties come first (with no header, and only if
//! there are any), then each named section as `[name]` followed by its
//! `key = value` lines, everything in sorted order, with one blank line
//! after every emitted section block. Re-parsing the output yields an equal
//! document.
//!
//! This module also carries the serde view of a document: the global
//! properties as top-level string entries and each named section as a
//! nested string-to-string map, so a document can be handed to any serde
//! serializer (JSON, YAML, ...) without copying it into another type.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::{IniDocument, SectionView};
use crate::error::{Error, Result};

fn write_section(out: &mut String, section: &SectionView<'_>, with_header: bool) {
    if with_header {
        // Infallible: fmt::Write to String cannot fail.
        let _ = writeln!(out, "[{}]", section.name());
    }
    for (key, value) in section.properties() {
        let _ = writeln!(out, "{} = {}", key, value);
    }
    out.push('\n');
}

/// Renders `doc` as canonical INI text.
pub(crate) fn document_to_string(doc: &IniDocument) -> String {
    let mut out = String::new();
    let global = doc.global();
    if !global.is_empty() {
        write_section(&mut out, &global, false);
    }
    for section in doc.sections() {
        write_section(&mut out, &section, true);
    }
    out
}

/// Writes `doc` as canonical INI text to an [`std::io::Write`] sink.
pub(crate) fn document_to_writer<W: Write>(doc: &IniDocument, mut writer: W) -> Result<()> {
    writer
        .write_all(document_to_string(doc).as_bytes())
        .map_err(Error::io)
}

/// Saves `doc` to a file, creating or truncating it.
pub(crate) fn document_to_file(doc: &IniDocument, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(Error::io)?;
    let mut writer = BufWriter::new(file);
    document_to_writer(doc, &mut writer)?;
    writer.flush().map_err(Error::io)
}

impl IniDocument {
    /// Renders this document as canonical INI text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::IniDocument;
    ///
    /// let mut doc = IniDocument::new();
    /// doc.add_section("db").unwrap();
    /// doc.add_property("host", "localhost").unwrap();
    /// assert_eq!(doc.to_ini_string(), "[db]\nhost = localhost\n\n");
    /// ```
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        document_to_string(self)
    }

    /// Writes this document as canonical INI text to `writer`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if writing fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        document_to_writer(self, writer)
    }

    /// Saves this document to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        document_to_file(self, path.as_ref())
    }
}

struct SectionAsMap<'a>(SectionView<'a>);

impl Serialize for SectionAsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.properties() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for IniDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let global = self.global();
        let mut map = serializer.serialize_map(Some(global.len() + self.section_count()))?;
        for (key, value) in global.properties() {
            map.serialize_entry(key, value)?;
        }
        for section in self.sections() {
            map.serialize_entry(section.name(), &SectionAsMap(section))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        let mut doc = IniDocument::new();
        doc.add_property("timeout", "30").unwrap();
        doc.add_section("net").unwrap();
        doc.add_property("retries", "3").unwrap();
        doc.add_section("db").unwrap();
        doc.add_property("port", "5432").unwrap();
        doc.add_property("host", "localhost").unwrap();
        doc
    }

    #[test]
    fn canonical_layout() {
        let text = document_to_string(&sample());
        assert_eq!(
            text,
            "timeout = 30\n\n[db]\nhost = localhost\nport = 5432\n\n[net]\nretries = 3\n\n"
        );
    }

    #[test]
    fn empty_global_section_emits_no_leading_block() {
        let mut doc = IniDocument::new();
        doc.add_section("only").unwrap();
        doc.add_property("k", "v").unwrap();
        assert_eq!(document_to_string(&doc), "[only]\nk = v\n\n");
    }

    #[test]
    fn empty_document_serializes_to_nothing() {
        assert_eq!(document_to_string(&IniDocument::new()), "");
    }

    #[test]
    fn section_without_properties_still_emits_header() {
        let mut doc = IniDocument::new();
        doc.add_section("empty").unwrap();
        assert_eq!(document_to_string(&doc), "[empty]\n\n");
    }
}
