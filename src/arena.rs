//! The string arena that owns every piece of text in a document.
//!
//! Sections and properties never own their strings. Each name, key, and
//! value is copied once into a chain of fixed-capacity chunks and addressed
//! through a small Copy handle, [`ArenaStr`]. A chunk is never reallocated
//! after creation, so a handle resolved today resolves to the same bytes for
//! the arena's whole lifetime, no matter how many strings are interned after
//! it. There is no way to free an individual string; the arena drops as a
//! unit with the document that owns it.

use crate::error::{Error, Result};

/// Capacity of one arena chunk in bytes.
pub(crate) const CHUNK_SIZE: usize = 4096;

/// Maximum length of a single interned string.
///
/// A section name, key, or value must fit in one chunk. Longer strings are
/// rejected with [`Error::StringTooLarge`]; during parsing that surfaces as
/// a recoverable per-line error.
pub const MAX_STRING_LEN: usize = CHUNK_SIZE - 1;

/// Handle to a string interned in a [`StringArena`].
///
/// Plain indices into the chunk chain, so it stays valid across later
/// interns. Only meaningful together with the arena that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArenaStr {
    chunk: u32,
    start: u32,
    len: u32,
}

/// A bump allocator for document text.
///
/// Interning appends to the newest chunk; when the string does not fit in
/// the remaining space, a fresh chunk is linked in and the old one is left
/// exactly as it was (its slack is wasted, not reused).
#[derive(Debug, Default)]
pub(crate) struct StringArena {
    chunks: Vec<String>,
}

impl StringArena {
    pub(crate) fn new() -> Self {
        StringArena { chunks: Vec::new() }
    }

    /// Copies `s` into the arena and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLarge`] if `s` is longer than
    /// [`MAX_STRING_LEN`].
    pub(crate) fn intern(&mut self, s: &str) -> Result<ArenaStr> {
        if s.len() > MAX_STRING_LEN {
            return Err(Error::StringTooLarge {
                len: s.len(),
                max: MAX_STRING_LEN,
            });
        }
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() + s.len() > chunk.capacity(),
            None => true,
        };
        if needs_chunk {
            self.chunks.push(String::with_capacity(CHUNK_SIZE));
        }
        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        let start = chunk.len();
        chunk.push_str(s);
        Ok(ArenaStr {
            chunk: chunk_index as u32,
            start: start as u32,
            len: s.len() as u32,
        })
    }

    /// Resolves a handle produced by [`StringArena::intern`].
    pub(crate) fn get(&self, handle: ArenaStr) -> &str {
        let start = handle.start as usize;
        &self.chunks[handle.chunk as usize][start..start + handle.len as usize]
    }

    /// Number of chunks in the chain.
    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total bytes of interned text across all chunks.
    pub(crate) fn used_bytes(&self) -> usize {
        self.chunks.iter().map(|c| c.len()).sum()
    }
}
