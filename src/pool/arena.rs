//! Drawable card pool.
//!
//! Every physical copy of an eligible card is a `PoolEntry` with a stable
//! `PoolEntryId`. The pool keeps the remaining ids in build order; removal
//! is by id, so one entry is consumed at most once.
//!
//! ## Usage
//!
//! ```
//! use kda_deck::catalog::CardCategory;
//! use kda_deck::pool::CardPool;
//!
//! let mut pool = CardPool::new();
//! let leap = pool.push(CardCategory::AI, "Leap", "B").unwrap();
//! pool.push(CardCategory::AI, "Leap Back", "B");
//!
//! assert_eq!(pool.find_by_prefix("Leap"), Some(leap));
//! assert!(pool.remove(leap).is_some());
//! assert_eq!(pool.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::CardCategory;

/// Stable identifier of one pool entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolEntryId(pub u32);

impl PoolEntryId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PoolEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PoolEntry({})", self.0)
    }
}

/// One drawable copy of a catalog card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub id: PoolEntryId,
    pub category: CardCategory,
    pub title: String,
    pub level: String,
}

/// Largest number of entries a pool can address.
pub const MAX_POOL_ENTRIES: usize = u32::MAX as usize;

/// Arena of pool entries plus the ordered list of those still available.
#[derive(Clone, Debug)]
pub struct CardPool {
    entries: Vec<PoolEntry>,
    remaining: Vec<PoolEntryId>,
    limit: usize,
}

impl Default for CardPool {
    fn default() -> Self {
        Self::with_limit(MAX_POOL_ENTRIES)
    }
}

impl CardPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool that refuses entries beyond `limit` (never more than
    /// `MAX_POOL_ENTRIES`).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            remaining: Vec::new(),
            limit: limit.min(MAX_POOL_ENTRIES),
        }
    }

    /// Add one entry at the end of the pool.
    ///
    /// Returns `None`, leaving the pool unchanged, once the limit is reached.
    pub fn push(
        &mut self,
        category: CardCategory,
        title: impl Into<String>,
        level: impl Into<String>,
    ) -> Option<PoolEntryId> {
        if self.entries.len() >= self.limit {
            return None;
        }
        let id = PoolEntryId::new(u32::try_from(self.entries.len()).ok()?);
        self.entries.push(PoolEntry {
            id,
            category,
            title: title.into(),
            level: level.into(),
        });
        self.remaining.push(id);
        Some(id)
    }

    /// Get an entry by id, whether or not it is still available.
    #[must_use]
    pub fn get(&self, id: PoolEntryId) -> Option<&PoolEntry> {
        self.entries.get(id.0 as usize)
    }

    /// Is the entry still available?
    #[must_use]
    pub fn contains(&self, id: PoolEntryId) -> bool {
        self.remaining.contains(&id)
    }

    /// Remove an entry. Returns it if it was still available.
    pub fn remove(&mut self, id: PoolEntryId) -> Option<&PoolEntry> {
        let pos = self.remaining.iter().position(|&e| e == id)?;
        self.remaining.remove(pos);
        self.get(id)
    }

    /// First available entry whose title starts with `prefix`.
    #[must_use]
    pub fn find_by_prefix(&self, prefix: &str) -> Option<PoolEntryId> {
        self.iter()
            .find(|e| e.title.starts_with(prefix))
            .map(|e| e.id)
    }

    /// Available entries with exactly this level tag, in pool order.
    pub fn with_level<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a PoolEntry> + 'a {
        self.iter().filter(move |e| e.level == level)
    }

    /// Available entries in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry> {
        self.remaining.iter().map(|&id| &self.entries[id.0 as usize])
    }

    /// Number of available entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Titles of available entries, in pool order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.iter().map(|e| e.title.as_str()).collect()
    }
}
