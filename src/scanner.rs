//! The line scanner: classifies one line of INI text without copying.
//!
//! A line is either skippable (blank or comment), a section header, or a
//! `key = value` property. The scanner walks the line's bytes, trims
//! surrounding whitespace, and hands back subslices of the input together
//! with their 1-based byte columns so the parser can report positions.
//!
//! Comment markers are `#` and `;`; a marker anywhere outside a recognized
//! construct ends the line. Keys stop at `=`, whitespace, or a comment
//! marker; values run to a comment marker or line end and may contain spaces
//! and `=`. Section names stop at `]`, a comment marker, or line end.

use crate::error::Error;

/// One classified line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ScannedLine<'a> {
    /// Blank line or comment line; contributes nothing.
    Skip,
    /// `[name]` header. `column` is the name's 1-based start column.
    Section { name: &'a str, column: usize },
    /// `key = value` pair with the 1-based start columns of both parts.
    Property {
        key: &'a str,
        key_column: usize,
        value: &'a str,
        value_column: usize,
    },
}

/// A malformed line, with the 1-based byte column of the failure point.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ScanError {
    pub(crate) column: usize,
    pub(crate) error: Error,
}

fn is_comment(byte: u8) -> bool {
    byte == b'#' || byte == b';'
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn trim_trailing_whitespace(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    end
}

/// Classifies a single line.
///
/// Columns are byte offsets plus one; all delimiters are ASCII, so every
/// reported slice boundary falls on a character boundary even in UTF-8
/// input.
pub(crate) fn scan_line(line: &str) -> Result<ScannedLine<'_>, ScanError> {
    let bytes = line.as_bytes();
    let mut pos = skip_whitespace(bytes, 0);

    if pos == bytes.len() || is_comment(bytes[pos]) {
        return Ok(ScannedLine::Skip);
    }

    if bytes[pos] == b'[' {
        return scan_section(line, pos + 1);
    }

    scan_property(line, pos)
}

fn scan_section(line: &str, after_bracket: usize) -> Result<ScannedLine<'_>, ScanError> {
    let bytes = line.as_bytes();
    let start = skip_whitespace(bytes, after_bracket);
    let mut pos = start;
    while pos < bytes.len() && bytes[pos] != b']' && !is_comment(bytes[pos]) {
        pos += 1;
    }
    if pos == bytes.len() || bytes[pos] != b']' {
        return Err(ScanError {
            column: pos + 1,
            error: Error::ExpectedClosingBracket,
        });
    }
    let end = trim_trailing_whitespace(bytes, start, pos);
    if end == start {
        return Err(ScanError {
            column: start + 1,
            error: Error::SectionNotProvided,
        });
    }
    // Anything after the closing bracket is ignored.
    Ok(ScannedLine::Section {
        name: &line[start..end],
        column: start + 1,
    })
}

fn scan_property(line: &str, key_start: usize) -> Result<ScannedLine<'_>, ScanError> {
    let bytes = line.as_bytes();

    let mut pos = key_start;
    while pos < bytes.len()
        && bytes[pos] != b'='
        && !is_comment(bytes[pos])
        && !bytes[pos].is_ascii_whitespace()
    {
        pos += 1;
    }
    let key_end = pos;
    if key_end == key_start {
        return Err(ScanError {
            column: key_start + 1,
            error: Error::KeyNotProvided,
        });
    }

    pos = skip_whitespace(bytes, pos);
    if pos == bytes.len() || bytes[pos] != b'=' {
        return Err(ScanError {
            column: pos + 1,
            error: Error::ExpectedEquals,
        });
    }
    pos = skip_whitespace(bytes, pos + 1);

    let value_start = pos;
    while pos < bytes.len() && !is_comment(bytes[pos]) {
        pos += 1;
    }
    let value_end = trim_trailing_whitespace(bytes, value_start, pos);
    if value_end == value_start {
        return Err(ScanError {
            column: value_start + 1,
            error: Error::ValueNotProvided,
        });
    }

    Ok(ScannedLine::Property {
        key: &line[key_start..key_end],
        key_column: key_start + 1,
        value: &line[value_start..value_end],
        value_column: value_start + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(line: &str) -> &str {
        match scan_line(line).unwrap() {
            ScannedLine::Section { name, .. } => name,
            other => panic!("expected section, got {:?}", other),
        }
    }

    fn property(line: &str) -> (&str, &str) {
        match scan_line(line).unwrap() {
            ScannedLine::Property { key, value, .. } => (key, value),
            other => panic!("expected property, got {:?}", other),
        }
    }

    fn failure(line: &str) -> (usize, Error) {
        let err = scan_line(line).unwrap_err();
        (err.column, err.error)
    }

    #[test]
    fn blank_and_comment_lines_skip() {
        assert_eq!(scan_line("").unwrap(), ScannedLine::Skip);
        assert_eq!(scan_line("   \t").unwrap(), ScannedLine::Skip);
        assert_eq!(scan_line("# a comment").unwrap(), ScannedLine::Skip);
        assert_eq!(scan_line("  ; indented comment").unwrap(), ScannedLine::Skip);
    }

    #[test]
    fn section_headers() {
        assert_eq!(section("[db]"), "db");
        assert_eq!(section("  [ spaced name ]  "), "spaced name");
        assert_eq!(section("[net] trailing junk"), "net");
        assert_eq!(section("[net] # comment after bracket"), "net");
    }

    #[test]
    fn properties() {
        assert_eq!(property("host = localhost"), ("host", "localhost"));
        assert_eq!(property("key=value"), ("key", "value"));
        assert_eq!(property("  port =  5432   "), ("port", "5432"));
        // Values may contain spaces and equals signs.
        assert_eq!(property("q = a = b c"), ("q", "a = b c"));
        assert_eq!(property("host = localhost ; comment"), ("host", "localhost"));
    }

    #[test]
    fn missing_closing_bracket() {
        assert_eq!(failure("[db"), (4, Error::ExpectedClosingBracket));
        assert_eq!(failure("[db # oops]"), (5, Error::ExpectedClosingBracket));
    }

    #[test]
    fn empty_section_name() {
        assert_eq!(failure("[]"), (2, Error::SectionNotProvided));
        assert_eq!(failure("[   ]"), (5, Error::SectionNotProvided));
    }

    #[test]
    fn missing_equals_reports_column_after_key() {
        assert_eq!(failure("oops"), (5, Error::ExpectedEquals));
        assert_eq!(failure("key value"), (5, Error::ExpectedEquals));
        assert_eq!(failure("key # = value"), (5, Error::ExpectedEquals));
    }

    #[test]
    fn empty_key_and_value() {
        assert_eq!(failure("= value"), (1, Error::KeyNotProvided));
        assert_eq!(failure("key ="), (6, Error::ValueNotProvided));
        assert_eq!(failure("key =   "), (9, Error::ValueNotProvided));
        assert_eq!(failure("key = # comment"), (7, Error::ValueNotProvided));
    }
}
