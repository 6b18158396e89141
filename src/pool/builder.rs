//! Builds a monster's draw pool from the catalog.
//!
//! A card is eligible when:
//!
//! - its category is AI or Universal,
//! - it is valid for the requested version (when one is given), and
//! - it is Universal, or associated with the monster.
//!
//! Eligible cards are expanded into one pool entry per copy.

use log::{debug, warn};

use super::arena::CardPool;
use crate::catalog::{CardCatalogEntry, Catalog};
use crate::core::{version, GenerationConfig};
use crate::template::strip_version_marks;

/// Assembles pools from a catalog snapshot.
#[derive(Clone, Copy, Debug)]
pub struct CardPoolBuilder<'a> {
    catalog: &'a Catalog,
    max_size: usize,
}

impl<'a> CardPoolBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            max_size: GenerationConfig::default().max_pool_size,
        }
    }

    /// Stop expanding once the pool holds `max_size` entries.
    ///
    /// Defaults to `GenerationConfig::max_pool_size`.
    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Is a card eligible for this monster and version?
    ///
    /// `monster` must already be stripped of version backticks.
    #[must_use]
    pub fn is_eligible(&self, card: &CardCatalogEntry, monster: &str, version: Option<&str>) -> bool {
        if !card.category.is_deck_eligible() {
            return false;
        }
        if let Some(v) = version {
            if !version::contains(v, &card.versions) {
                return false;
            }
        }
        card.category.is_universal() || self.catalog.is_associated(monster, &card.title)
    }

    /// Build the pool for a monster, in catalog order.
    #[must_use]
    pub fn build(&self, monster: &str, version: Option<&str>) -> CardPool {
        let monster = strip_version_marks(monster);
        let mut pool = CardPool::with_limit(self.max_size);

        'cards: for card in self.catalog.cards() {
            if !self.is_eligible(card, monster, version) {
                continue;
            }
            for _ in 0..card.multiplicity {
                if pool.push(card.category, card.title.as_str(), card.level.as_str()).is_none() {
                    warn!("pool for {monster} capped at {} entries", pool.len());
                    break 'cards;
                }
            }
        }

        debug!(
            "built pool for {monster} (version {}): {} entries",
            version.unwrap_or("any"),
            pool.len()
        );
        pool
    }
}
