//! Removes cards that are already in play from a pool.
//!
//! The exclusion names are the monster's cards in play followed by its
//! traits. Each name removes the first remaining entry whose title starts
//! with it, so two exclusions sharing a prefix remove two entries.

use log::{debug, trace};
use smallvec::SmallVec;

use super::arena::{CardPool, PoolEntryId};
use crate::catalog::MonsterDefinition;
use crate::template::strip_version_marks;

/// Exclusion names, cards in play first, blanks dropped.
#[must_use]
pub fn exclusion_names<'a>(cards_in_play: &'a str, traits: &'a str) -> SmallVec<[&'a str; 8]> {
    cards_in_play
        .split(',')
        .chain(traits.split(','))
        .map(strip_version_marks)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Apply exclusion names to a pool, in order.
///
/// Returns the ids that were removed.
pub fn apply_exclusions<'a, I>(pool: &mut CardPool, names: I) -> Vec<PoolEntryId>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut removed = Vec::new();

    for name in names {
        match pool.find_by_prefix(name) {
            Some(id) => {
                pool.remove(id);
                trace!("excluded {id} for '{name}'");
                removed.push(id);
            }
            None => trace!("no pool entry matches exclusion '{name}'"),
        }
    }

    removed
}

/// Remove a monster's cards in play and traits from its pool.
pub fn exclude_for_monster(pool: &mut CardPool, monster: &MonsterDefinition) -> Vec<PoolEntryId> {
    let names = exclusion_names(&monster.cards_in_play, &monster.traits);
    let removed = apply_exclusions(pool, names.iter().copied());
    debug!(
        "{} exclusions for {}, {} pool entries removed",
        names.len(),
        monster.base_name(),
        removed.len()
    );
    removed
}
