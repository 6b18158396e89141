//! In-memory catalog snapshot.
//!
//! The `Catalog` holds the three reference tables the deck engine reads:
//!
//! - monster definitions keyed by (key name, level)
//! - cards keyed by (category, title)
//! - monster/card associations keyed by (monster, title)
//!
//! The engine never mutates a catalog while generating. A persistence layer
//! exposes its tables through `CatalogSource`, and `Catalog::snapshot` copies
//! them once per generation.
//!
//! ## Example
//!
//! ```
//! use kda_deck::catalog::{Catalog, CardCatalogEntry, CardCategory};
//!
//! let mut catalog = Catalog::new();
//! catalog.upsert_card(CardCatalogEntry::new(CardCategory::Universal, "Ambush").with_level("B"));
//!
//! assert!(catalog.card(CardCategory::Universal, "Ambush").is_some());
//! ```

use log::{debug, info};

use super::association::MonsterCardAssociation;
use super::card::{CardCatalogEntry, CardCategory};
use super::monster::{MonsterDefinition, MonsterLevel};
use super::table::Table;
use crate::template::strip_version_marks;

/// Read access to the persistence collaborator's tables.
pub trait CatalogSource {
    /// All monster definitions.
    fn monsters(&self) -> Vec<MonsterDefinition>;

    /// All card catalog entries.
    fn cards(&self) -> Vec<CardCatalogEntry>;

    /// All monster/card associations.
    fn associations(&self) -> Vec<MonsterCardAssociation>;
}

/// Filter for `Catalog::find_monsters`.
///
/// Each non-empty list must match at least one entry of the corresponding
/// monster attribute (trimmed, case-insensitive). Empty lists match all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterQuery {
    pub levels: Vec<String>,
    pub expansions: Vec<String>,
    pub versions: Vec<String>,
}

impl MonsterQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on levels (comma-separated).
    #[must_use]
    pub fn with_levels(mut self, levels: &str) -> Self {
        self.levels = split_list(levels);
        self
    }

    /// Filter on expansions (comma-separated).
    #[must_use]
    pub fn with_expansions(mut self, expansions: &str) -> Self {
        self.expansions = split_list(expansions);
        self
    }

    /// Filter on versions (comma-separated).
    #[must_use]
    pub fn with_versions(mut self, versions: &str) -> Self {
        self.versions = split_list(versions);
        self
    }

    /// Does a monster definition pass every filter?
    #[must_use]
    pub fn matches(&self, monster: &MonsterDefinition) -> bool {
        any_matches(&self.levels, monster.level.as_str())
            && any_matches(&self.expansions, &monster.expansion)
            && any_matches(&self.versions, &monster.version)
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn any_matches(wanted: &[String], available: &str) -> bool {
    wanted.is_empty()
        || available
            .split(',')
            .map(str::trim)
            .any(|a| wanted.iter().any(|w| w.trim().eq_ignore_ascii_case(a)))
}

/// Catalog of monsters, cards and associations.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    monsters: Table<(String, MonsterLevel), MonsterDefinition>,
    cards: Table<(CardCategory, String), CardCatalogEntry>,
    associations: Table<(String, String), MonsterCardAssociation>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every table of a source into a new catalog.
    #[must_use]
    pub fn snapshot<S: CatalogSource + ?Sized>(source: &S) -> Self {
        let mut catalog = Self::new();
        for monster in source.monsters() {
            catalog.upsert_monster(monster);
        }
        for card in source.cards() {
            catalog.upsert_card(card);
        }
        for assoc in source.associations() {
            catalog.upsert_association(assoc);
        }
        debug!(
            "catalog snapshot: {} monsters, {} cards, {} associations",
            catalog.monster_count(),
            catalog.card_count(),
            catalog.association_count()
        );
        catalog
    }

    /// Insert or replace a monster definition.
    pub fn upsert_monster(&mut self, monster: MonsterDefinition) -> Option<MonsterDefinition> {
        let key = (monster.key.clone(), monster.level);
        self.monsters.upsert(key, monster)
    }

    /// Insert or replace a card.
    pub fn upsert_card(&mut self, card: CardCatalogEntry) -> Option<CardCatalogEntry> {
        let key = (card.category, card.title.clone());
        self.cards.upsert(key, card)
    }

    /// Insert or replace an association.
    pub fn upsert_association(
        &mut self,
        assoc: MonsterCardAssociation,
    ) -> Option<MonsterCardAssociation> {
        let key = (assoc.monster.clone(), assoc.title.clone());
        self.associations.upsert(key, assoc)
    }

    /// Look up a monster definition by exact key name and level.
    #[must_use]
    pub fn monster(&self, key: &str, level: MonsterLevel) -> Option<&MonsterDefinition> {
        self.monsters.get(&(key.to_string(), level))
    }

    /// Look up a card by category and title.
    #[must_use]
    pub fn card(&self, category: CardCategory, title: &str) -> Option<&CardCatalogEntry> {
        self.cards.get(&(category, title.to_string()))
    }

    /// Is `title` associated with `monster`?
    #[must_use]
    pub fn is_associated(&self, monster: &str, title: &str) -> bool {
        self.associations
            .contains(&(monster.to_string(), title.to_string()))
    }

    /// All monster definitions, in insertion order.
    pub fn monsters(&self) -> impl Iterator<Item = &MonsterDefinition> {
        self.monsters.iter()
    }

    /// All cards, in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &CardCatalogEntry> {
        self.cards.iter()
    }

    /// All associations, in insertion order.
    pub fn associations(&self) -> impl Iterator<Item = &MonsterCardAssociation> {
        self.associations.iter()
    }

    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn association_count(&self) -> usize {
        self.associations.len()
    }

    /// Every revision of a monster at a level, ignoring version backticks.
    pub fn revisions(
        &self,
        name: &str,
        level: MonsterLevel,
    ) -> impl Iterator<Item = &MonsterDefinition> + '_ {
        let name = strip_version_marks(name).to_string();
        self.monsters
            .iter()
            .filter(move |m| m.level == level && m.base_name() == name)
    }

    /// Monster definitions passing a query, in insertion order.
    #[must_use]
    pub fn find_monsters(&self, query: &MonsterQuery) -> Vec<&MonsterDefinition> {
        self.monsters.iter().filter(|m| query.matches(m)).collect()
    }

    /// Cards whose category name or title contains `query` (case-insensitive).
    pub fn find_cards(&self, query: &str) -> Vec<&CardCatalogEntry> {
        let needle = query.to_lowercase();
        self.cards
            .iter()
            .filter(|c| {
                c.category.as_str().to_lowercase().contains(&needle)
                    || c.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Associations that feed a monster's pool.
    ///
    /// Backticks are stripped from `monster` and the result is compared
    /// exactly against association names, as `is_associated` does for pool
    /// eligibility. An association stored under a backticked name matches
    /// nothing.
    pub fn cards_for_monster(
        &self,
        monster: &str,
    ) -> impl Iterator<Item = &MonsterCardAssociation> + '_ {
        let monster = strip_version_marks(monster).to_string();
        self.associations.iter().filter(move |a| a.monster == monster)
    }

    /// Delete every card whose title starts with `prefix`, together with all
    /// associations to those titles.
    ///
    /// Returns the removed cards, in catalog order, and the number of
    /// associations removed. A blank prefix removes nothing.
    pub fn remove_cards_by_prefix(&mut self, prefix: &str) -> (Vec<CardCatalogEntry>, usize) {
        if prefix.is_empty() {
            return (Vec::new(), 0);
        }

        let keys: Vec<(CardCategory, String)> = self
            .cards
            .iter()
            .filter(|c| c.title.starts_with(prefix))
            .map(|c| (c.category, c.title.clone()))
            .collect();

        let mut removed = Vec::with_capacity(keys.len());
        let mut unlinked = 0;
        for key in keys {
            let Some(card) = self.cards.remove(&key) else {
                continue;
            };
            let links: Vec<(String, String)> = self
                .associations
                .iter()
                .filter(|a| a.title == card.title)
                .map(|a| (a.monster.clone(), a.title.clone()))
                .collect();
            for link in &links {
                if self.associations.remove(link).is_some() {
                    unlinked += 1;
                }
            }
            debug!("removed card {} [{}] and {} associations", card.title, card.category, links.len());
            removed.push(card);
        }

        info!(
            "removed {} cards matching '{prefix}' and {unlinked} associations",
            removed.len()
        );
        (removed, unlinked)
    }

    /// Re-sync association categories with the card table.
    ///
    /// Every card outside the shared resource categories propagates its
    /// category to associations with the same title. Returns the number of
    /// associations that changed.
    pub fn rebuild_association_categories(&mut self) -> usize {
        let mut updated = 0;

        for card in self.cards.iter().filter(|c| !c.category.is_shared_resource()) {
            for assoc in self.associations.iter_mut() {
                if assoc.title == card.title && assoc.category != card.category {
                    debug!("association '{}' updated to {}", assoc, card.category);
                    assoc.category = card.category;
                    updated += 1;
                }
            }
        }

        updated
    }
}

impl CatalogSource for Catalog {
    fn monsters(&self) -> Vec<MonsterDefinition> {
        self.monsters.iter().cloned().collect()
    }

    fn cards(&self) -> Vec<CardCatalogEntry> {
        self.cards.iter().cloned().collect()
    }

    fn associations(&self) -> Vec<MonsterCardAssociation> {
        self.associations.iter().cloned().collect()
    }
}
