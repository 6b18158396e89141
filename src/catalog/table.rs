//! Keyed table with insertion-order iteration.
//!
//! Rows live in a `Vec` so iteration order is stable (pool order, and so
//! seeded draws, do not depend on hashing). An `FxHashMap` indexes rows by
//! their composite key.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Insert-or-replace table keyed by `K`.
#[derive(Clone, Debug)]
pub struct Table<K, V> {
    rows: Vec<V>,
    index: FxHashMap<K, usize>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq, V> Table<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, replacing (in place) any row with the same key.
    ///
    /// Returns the replaced row.
    pub fn upsert(&mut self, key: K, row: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            Some(std::mem::replace(&mut self.rows[idx], row))
        } else {
            self.index.insert(key, self.rows.len());
            self.rows.push(row);
            None
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.rows[idx])
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove the row stored under `key`.
    ///
    /// Later rows shift down one slot and keep their relative order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(self.rows.remove(idx))
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.rows.iter()
    }

    /// Mutable rows in insertion order. Keys must not be changed.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.rows.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
