//! The sorted table backing both the section list and each section's
//! property list.
//!
//! A table is a contiguous, growable array kept in strictly ascending key
//! order. Lookup is a binary search that either lands on the exact entry or
//! reports the index where the key would have to be inserted to keep the
//! order; insertion shifts every later entry one slot to the right. Keys are
//! arena handles, so comparing entries needs the arena that interned them.
//!
//! Entry positions are *not* stable: any insertion may move entries that sit
//! at or after the insertion point. Only the arena-owned strings keep their
//! addresses across mutations.

use crate::arena::StringArena;

/// Minimum capacity allocated on the first insertion.
const INITIAL_CAPACITY: usize = 32;

/// An entry whose sort key lives in the arena.
pub(crate) trait TableEntry {
    fn key<'a>(&self, arena: &'a StringArena) -> &'a str;
}

/// A dynamic array kept strictly ascending by entry key.
#[derive(Debug, Default)]
pub(crate) struct SortedTable<T> {
    entries: Vec<T>,
}

impl<T: TableEntry> SortedTable<T> {
    pub(crate) fn new() -> Self {
        SortedTable {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> &T {
        &self.entries[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.entries[index]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Binary search for `key` over the ascending entries.
    ///
    /// Returns `Ok(index)` on an exact match, otherwise `Err(index)` where
    /// `index` is the sorted insertion point. Comparison is byte-wise, so a
    /// query that is a strict prefix of an entry's key orders before that
    /// entry and never compares equal to it.
    pub(crate) fn find(&self, arena: &StringArena, key: &str) -> std::result::Result<usize, usize> {
        let mut low = 0usize;
        let mut high = self.entries.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match self.entries[mid].key(arena).cmp(key) {
                std::cmp::Ordering::Less => low = mid + 1,
                std::cmp::Ordering::Greater => high = mid,
                std::cmp::Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }

    /// Inserts `entry` at `index`, shifting later entries right.
    ///
    /// The caller is responsible for passing the insertion point reported by
    /// [`SortedTable::find`]; inserting anywhere else breaks the ordering
    /// invariant.
    pub(crate) fn insert_at(&mut self, index: usize, entry: T) {
        self.ensure_capacity();
        self.entries.insert(index, entry);
    }

    /// Grows the backing array so capacity stays ahead of `len + 1`.
    ///
    /// Capacity doubles, starting at `INITIAL_CAPACITY`.
    fn ensure_capacity(&mut self) {
        let cap = self.entries.capacity();
        if self.entries.len() + 1 >= cap {
            let new_cap = std::cmp::max(INITIAL_CAPACITY, 2 * cap);
            self.entries.reserve_exact(new_cap - self.entries.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ArenaStr;

    struct Entry {
        key: ArenaStr,
        tag: usize,
    }

    impl TableEntry for Entry {
        fn key<'a>(&self, arena: &'a StringArena) -> &'a str {
            arena.get(self.key)
        }
    }

    fn insert(table: &mut SortedTable<Entry>, arena: &mut StringArena, key: &str, tag: usize) {
        let index = table
            .find(arena, key)
            .expect_err("test keys are all distinct");
        let key = arena.intern(key).unwrap();
        table.insert_at(index, Entry { key, tag });
    }

    fn keys(table: &SortedTable<Entry>, arena: &StringArena) -> Vec<String> {
        table.iter().map(|e| e.key(arena).to_string()).collect()
    }

    #[test]
    fn stays_sorted_under_unordered_insertion() {
        let mut arena = StringArena::new();
        let mut table = SortedTable::new();
        for (i, key) in ["zeta", "alpha", "mu", "beta", "omega"].iter().enumerate() {
            insert(&mut table, &mut arena, key, i);
        }
        assert_eq!(keys(&table, &arena), ["alpha", "beta", "mu", "omega", "zeta"]);
    }

    #[test]
    fn find_reports_exact_match() {
        let mut arena = StringArena::new();
        let mut table = SortedTable::new();
        insert(&mut table, &mut arena, "beta", 0);
        insert(&mut table, &mut arena, "alpha", 1);
        let index = table.find(&arena, "beta").unwrap();
        assert_eq!(table.get(index).tag, 0);
    }

    #[test]
    fn find_reports_insertion_point_when_absent() {
        let mut arena = StringArena::new();
        let mut table = SortedTable::new();
        assert_eq!(table.find(&arena, "anything"), Err(0));
        for key in ["b", "d", "f"] {
            insert(&mut table, &mut arena, key, 0);
        }
        assert_eq!(table.find(&arena, "a"), Err(0));
        assert_eq!(table.find(&arena, "c"), Err(1));
        assert_eq!(table.find(&arena, "e"), Err(2));
        assert_eq!(table.find(&arena, "g"), Err(3));
    }

    #[test]
    fn prefix_of_existing_key_is_not_a_match() {
        let mut arena = StringArena::new();
        let mut table = SortedTable::new();
        insert(&mut table, &mut arena, "timeout", 0);
        // "time" is a strict prefix of "timeout": not found, ordered before.
        assert_eq!(table.find(&arena, "time"), Err(0));
        // The reverse: a longer query ordered after the stored prefix.
        assert_eq!(table.find(&arena, "timeouts"), Err(1));
    }

    #[test]
    fn capacity_doubles_from_initial_minimum() {
        let mut arena = StringArena::new();
        let mut table = SortedTable::new();
        insert(&mut table, &mut arena, "a", 0);
        assert_eq!(table.capacity(), 32);
        for i in 0..32 {
            insert(&mut table, &mut arena, &format!("k{:02}", i), i);
        }
        assert_eq!(table.capacity(), 64);
        assert!(table.capacity() >= table.len() + 1);
    }
}
