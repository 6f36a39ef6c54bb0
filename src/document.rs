//! The in-memory INI document: sections, properties, and typed lookup.
//!
//! An [`IniDocument`] owns a string arena holding every piece of text, one
//! unnamed *global section* for properties declared before any header, and
//! a sorted table of named sections, each with its own sorted property
//! table. Documents are built by insertion only (there is no delete) and
//! dropped as a unit.
//!
//! ## Building and querying
//!
//! ```rust
//! use inifile::IniDocument;
//!
//! let mut doc = IniDocument::new();
//! doc.add_section("db").unwrap();
//! doc.add_property("port", "5432").unwrap();
//! doc.add_property("host", "localhost").unwrap();
//!
//! assert_eq!(doc.find_property(Some("db"), "host").unwrap(), "localhost");
//! assert_eq!(doc.find_integer(Some("db"), "port").unwrap(), 5432);
//! ```
//!
//! ## The current section
//!
//! [`IniDocument::add_property`] inserts into whichever section the last
//! successful [`IniDocument::add_section`] selected (initially the global
//! section). Re-adding an existing section name does not duplicate the
//! section; it moves that cursor, so later properties append to the
//! existing section. This mirrors INI files that re-open a section.

use crate::arena::{ArenaStr, StringArena};
use crate::error::{Error, Result};
use crate::table::{SortedTable, TableEntry};

/// One `key = value` pair. Both strings live in the document's arena.
#[derive(Debug)]
pub(crate) struct Property {
    pub(crate) key: ArenaStr,
    pub(crate) value: ArenaStr,
}

impl TableEntry for Property {
    fn key<'a>(&self, arena: &'a StringArena) -> &'a str {
        arena.get(self.key)
    }
}

/// A named group of properties, sorted by key.
#[derive(Debug)]
pub(crate) struct Section {
    /// `None` only for the global section.
    pub(crate) name: Option<ArenaStr>,
    pub(crate) properties: SortedTable<Property>,
}

impl Section {
    fn new(name: Option<ArenaStr>) -> Self {
        Section {
            name,
            properties: SortedTable::new(),
        }
    }
}

impl TableEntry for Section {
    fn key<'a>(&self, arena: &'a StringArena) -> &'a str {
        match self.name {
            Some(name) => arena.get(name),
            None => "",
        }
    }
}

/// Which section the next [`IniDocument::add_property`] targets.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    Global,
    Named(usize),
}

/// An in-memory INI document.
///
/// Sections are kept strictly ascending by name and each section's
/// properties strictly ascending by key, both byte-wise and case-sensitive.
/// The global section sits outside that order and is addressed with an
/// empty or absent name.
#[derive(Debug, Default)]
pub struct IniDocument {
    arena: StringArena,
    global: Section,
    sections: SortedTable<Section>,
    cursor: Cursor,
}

impl Default for Section {
    fn default() -> Self {
        Section::new(None)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::Global
    }
}

impl IniDocument {
    /// Creates an empty document: no named sections, empty global section.
    #[must_use]
    pub fn new() -> Self {
        IniDocument::default()
    }

    /// Selects (creating if necessary) the section named `name`.
    ///
    /// If the name is new, the section is inserted at its sorted position.
    /// If it already exists, nothing is inserted; either way the section
    /// becomes the target of subsequent [`IniDocument::add_property`] calls.
    ///
    /// # Errors
    ///
    /// [`Error::SectionNotProvided`] for an empty name,
    /// [`Error::StringTooLarge`] for a name longer than
    /// [`MAX_STRING_LEN`](crate::MAX_STRING_LEN).
    pub fn add_section(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::SectionNotProvided);
        }
        let index = match self.sections.find(&self.arena, name) {
            Ok(existing) => existing,
            Err(insertion_point) => {
                let name = self.arena.intern(name)?;
                self.sections
                    .insert_at(insertion_point, Section::new(Some(name)));
                insertion_point
            }
        };
        self.cursor = Cursor::Named(index);
        Ok(())
    }

    /// Inserts `key = value` into the current section.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotProvided`] / [`Error::ValueNotProvided`] for empty
    /// arguments, [`Error::RepeatedKey`] if the key already exists in the
    /// current section (the section is left unchanged), and
    /// [`Error::StringTooLarge`] for over-long strings.
    pub fn add_property(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::KeyNotProvided);
        }
        if value.is_empty() {
            return Err(Error::ValueNotProvided);
        }
        let section = match self.cursor {
            Cursor::Global => &self.global,
            Cursor::Named(index) => self.sections.get(index),
        };
        let insertion_point = match section.properties.find(&self.arena, key) {
            Ok(_) => return Err(Error::RepeatedKey(key.to_string())),
            Err(point) => point,
        };
        let key = self.arena.intern(key)?;
        let value = self.arena.intern(value)?;
        let section = match self.cursor {
            Cursor::Global => &mut self.global,
            Cursor::Named(index) => self.sections.get_mut(index),
        };
        section
            .properties
            .insert_at(insertion_point, Property { key, value });
        Ok(())
    }

    fn section_for(&self, name: Option<&str>) -> Result<&Section> {
        match name {
            None | Some("") => Ok(&self.global),
            Some(name) => match self.sections.find(&self.arena, name) {
                Ok(index) => Ok(self.sections.get(index)),
                Err(_) => Err(Error::NoSuchSection(name.to_string())),
            },
        }
    }

    /// Looks up a section by name. `None` or `Some("")` selects the global
    /// section, which always exists.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchSection`] if no section has that name.
    pub fn find_section(&self, name: Option<&str>) -> Result<SectionView<'_>> {
        let section = self.section_for(name)?;
        Ok(SectionView {
            arena: &self.arena,
            section,
        })
    }

    /// Looks up a property's value.
    ///
    /// The returned `&str` borrows from the document's arena and stays valid
    /// for the document's lifetime.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchSection`] / [`Error::NoSuchProperty`].
    pub fn find_property(&self, section: Option<&str>, key: &str) -> Result<&str> {
        let section = self.section_for(section)?;
        match section.properties.find(&self.arena, key) {
            Ok(index) => Ok(self.arena.get(section.properties.get(index).value)),
            Err(_) => Err(Error::NoSuchProperty(key.to_string())),
        }
    }

    /// Looks up a property and converts it to a signed integer.
    ///
    /// The whole value must convert; `"5432"` is an integer, `"5432x"` and
    /// `"54.32"` are not.
    ///
    /// # Errors
    ///
    /// Lookup errors from [`IniDocument::find_property`], or
    /// [`Error::NotInteger`].
    pub fn find_integer(&self, section: Option<&str>, key: &str) -> Result<i64> {
        let value = self.find_property(section, key)?;
        value
            .parse()
            .map_err(|_| Error::NotInteger(value.to_string()))
    }

    /// Looks up a property and converts it to an unsigned integer.
    ///
    /// # Errors
    ///
    /// Lookup errors from [`IniDocument::find_property`], or
    /// [`Error::NotUnsigned`].
    pub fn find_unsigned(&self, section: Option<&str>, key: &str) -> Result<u64> {
        let value = self.find_property(section, key)?;
        value
            .parse()
            .map_err(|_| Error::NotUnsigned(value.to_string()))
    }

    /// Looks up a property and converts it to a float.
    ///
    /// # Errors
    ///
    /// Lookup errors from [`IniDocument::find_property`], or
    /// [`Error::NotFloat`].
    pub fn find_float(&self, section: Option<&str>, key: &str) -> Result<f64> {
        let value = self.find_property(section, key)?;
        value.parse().map_err(|_| Error::NotFloat(value.to_string()))
    }

    /// The global section (properties declared before any header).
    #[must_use]
    pub fn global(&self) -> SectionView<'_> {
        SectionView {
            arena: &self.arena,
            section: &self.global,
        }
    }

    /// Iterates the named sections in ascending name order.
    pub fn sections(&self) -> impl Iterator<Item = SectionView<'_>> {
        self.sections.iter().map(|section| SectionView {
            arena: &self.arena,
            section,
        })
    }

    /// Number of named sections (the global section is not counted).
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// True if the document holds no named sections and no global
    /// properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.global.properties.is_empty()
    }

    /// Memory and shape diagnostics for this document.
    #[must_use]
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            sections: self.sections.len(),
            properties: self.global.properties.len()
                + self
                    .sections
                    .iter()
                    .map(|s| s.properties.len())
                    .sum::<usize>(),
            arena_chunks: self.arena.chunk_count(),
            arena_bytes: self.arena.used_bytes(),
        }
    }
}

impl PartialEq for IniDocument {
    fn eq(&self, other: &Self) -> bool {
        if self.section_count() != other.section_count() {
            return false;
        }
        if self.global() != other.global() {
            return false;
        }
        self.sections().zip(other.sections()).all(|(a, b)| a == b)
    }
}

impl Eq for IniDocument {}

/// Borrowed view of one section.
///
/// Resolves arena handles on the fly; all returned strings borrow from the
/// owning document.
#[derive(Clone, Copy)]
pub struct SectionView<'a> {
    arena: &'a StringArena,
    section: &'a Section,
}

impl<'a> SectionView<'a> {
    /// The section name; empty for the global section.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.section.key(self.arena)
    }

    /// Number of properties in this section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.section.properties.len()
    }

    /// True if the section holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.section.properties.is_empty()
    }

    /// The value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        match self.section.properties.find(self.arena, key) {
            Ok(index) => Some(self.arena.get(self.section.properties.get(index).value)),
            Err(_) => None,
        }
    }

    /// Iterates `(key, value)` pairs in ascending key order.
    pub fn properties(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        let arena = self.arena;
        self.section
            .properties
            .iter()
            .map(move |p| (arena.get(p.key), arena.get(p.value)))
    }
}

impl PartialEq for SectionView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.len() == other.len()
            && self.properties().eq(other.properties())
    }
}

impl std::fmt::Debug for SectionView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.properties()).finish()
    }
}

/// Shape and memory usage of a document, from [`IniDocument::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Named sections (the global section is not counted).
    pub sections: usize,
    /// Properties across all sections, global included.
    pub properties: usize,
    /// Chunks in the string arena.
    pub arena_chunks: usize,
    /// Bytes of interned text in the arena.
    pub arena_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_before_any_section_go_to_global() {
        let mut doc = IniDocument::new();
        doc.add_property("timeout", "30").unwrap();
        assert_eq!(doc.find_property(None, "timeout").unwrap(), "30");
        assert_eq!(doc.find_property(Some(""), "timeout").unwrap(), "30");
        assert!(doc.global().get("timeout").is_some());
    }

    #[test]
    fn sections_stay_sorted_by_name() {
        let mut doc = IniDocument::new();
        for name in ["net", "app", "db", "cache"] {
            doc.add_section(name).unwrap();
        }
        let names: Vec<_> = doc.sections().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["app", "cache", "db", "net"]);
    }

    #[test]
    fn reopening_a_section_moves_the_cursor_without_duplicating() {
        let mut doc = IniDocument::new();
        doc.add_section("a").unwrap();
        doc.add_property("x", "1").unwrap();
        doc.add_section("b").unwrap();
        doc.add_property("z", "3").unwrap();
        doc.add_section("a").unwrap();
        doc.add_property("y", "2").unwrap();

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.find_property(Some("a"), "x").unwrap(), "1");
        assert_eq!(doc.find_property(Some("a"), "y").unwrap(), "2");
        assert_eq!(doc.find_property(Some("b"), "z").unwrap(), "3");
    }

    #[test]
    fn repeated_key_is_rejected_and_leaves_section_unchanged() {
        let mut doc = IniDocument::new();
        doc.add_section("db").unwrap();
        doc.add_property("host", "localhost").unwrap();
        assert_eq!(
            doc.add_property("host", "remote"),
            Err(Error::RepeatedKey("host".to_string()))
        );
        assert_eq!(doc.find_property(Some("db"), "host").unwrap(), "localhost");
        assert_eq!(doc.find_section(Some("db")).unwrap().len(), 1);
    }

    #[test]
    fn same_key_in_different_sections_is_fine() {
        let mut doc = IniDocument::new();
        doc.add_property("host", "global").unwrap();
        doc.add_section("db").unwrap();
        doc.add_property("host", "db-host").unwrap();
        assert_eq!(doc.find_property(None, "host").unwrap(), "global");
        assert_eq!(doc.find_property(Some("db"), "host").unwrap(), "db-host");
    }

    #[test]
    fn empty_names_and_values_are_rejected() {
        let mut doc = IniDocument::new();
        assert_eq!(doc.add_section(""), Err(Error::SectionNotProvided));
        assert_eq!(doc.add_property("", "v"), Err(Error::KeyNotProvided));
        assert_eq!(doc.add_property("k", ""), Err(Error::ValueNotProvided));
    }

    #[test]
    fn lookup_errors() {
        let mut doc = IniDocument::new();
        doc.add_section("db").unwrap();
        doc.add_property("host", "localhost").unwrap();
        assert_eq!(
            doc.find_property(Some("missing"), "host"),
            Err(Error::NoSuchSection("missing".to_string()))
        );
        assert_eq!(
            doc.find_property(Some("db"), "missing"),
            Err(Error::NoSuchProperty("missing".to_string()))
        );
    }

    #[test]
    fn section_names_are_case_sensitive() {
        let mut doc = IniDocument::new();
        doc.add_section("DB").unwrap();
        assert!(doc.find_section(Some("db")).is_err());
        assert!(doc.find_section(Some("DB")).is_ok());
    }

    #[test]
    fn typed_accessors() {
        let mut doc = IniDocument::new();
        doc.add_section("db").unwrap();
        doc.add_property("port", "5432").unwrap();
        doc.add_property("host", "localhost").unwrap();
        doc.add_property("load", "0.75").unwrap();
        doc.add_property("offset", "-12").unwrap();

        assert_eq!(doc.find_integer(Some("db"), "port").unwrap(), 5432);
        assert_eq!(doc.find_integer(Some("db"), "offset").unwrap(), -12);
        assert_eq!(doc.find_unsigned(Some("db"), "port").unwrap(), 5432);
        assert_eq!(doc.find_float(Some("db"), "load").unwrap(), 0.75);

        assert_eq!(
            doc.find_integer(Some("db"), "host"),
            Err(Error::NotInteger("localhost".to_string()))
        );
        assert_eq!(
            doc.find_unsigned(Some("db"), "offset"),
            Err(Error::NotUnsigned("-12".to_string()))
        );
        assert_eq!(
            doc.find_float(Some("db"), "host"),
            Err(Error::NotFloat("localhost".to_string()))
        );
    }

    #[test]
    fn strict_conversion_rejects_partial_numbers() {
        let mut doc = IniDocument::new();
        doc.add_property("almost", "12abc").unwrap();
        assert!(matches!(
            doc.find_integer(None, "almost"),
            Err(Error::NotInteger(_))
        ));
    }

    #[test]
    fn stats_count_everything() {
        let mut doc = IniDocument::new();
        doc.add_property("g", "1").unwrap();
        doc.add_section("s").unwrap();
        doc.add_property("a", "2").unwrap();
        doc.add_property("b", "3").unwrap();
        let stats = doc.stats();
        assert_eq!(stats.sections, 1);
        assert_eq!(stats.properties, 3);
        assert_eq!(stats.arena_chunks, 1);
        // "g" + "1" + "s" + "a" + "2" + "b" + "3"
        assert_eq!(stats.arena_bytes, 7);
    }

    #[test]
    fn document_equality_ignores_construction_order() {
        let mut a = IniDocument::new();
        a.add_section("s").unwrap();
        a.add_property("x", "1").unwrap();
        a.add_property("y", "2").unwrap();

        let mut b = IniDocument::new();
        b.add_section("s").unwrap();
        b.add_property("y", "2").unwrap();
        b.add_property("x", "1").unwrap();

        assert_eq!(a, b);
    }
}
