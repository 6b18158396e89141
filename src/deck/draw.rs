//! Level draws against a pool.
//!
//! A `{X}` token draws one remaining entry with level tag `X`. The drawn
//! entry is then consumed. Under `RemovalPolicy::ByPrefix` the consumed entry
//! is the first one whose title starts with the drawn title, which is the
//! drawn entry itself unless an earlier entry's title extends it (drawing
//! "Leap" can consume an earlier "Leap Away").

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::{DeckRng, DrawMode, RemovalPolicy};
use crate::pool::{CardPool, PoolEntryId};

/// Resolves level draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawEngine {
    pub mode: DrawMode,
    pub removal: RemovalPolicy,
}

impl DrawEngine {
    #[must_use]
    pub fn new(mode: DrawMode, removal: RemovalPolicy) -> Self {
        Self { mode, removal }
    }

    /// Pick an entry with exactly this level tag without consuming it.
    ///
    /// `DrawMode::First` does not touch the RNG.
    pub fn pick(&self, pool: &CardPool, level: &str, rng: &mut DeckRng) -> Option<PoolEntryId> {
        match self.mode {
            DrawMode::First => pool.with_level(level).next().map(|e| e.id),
            DrawMode::Random => {
                let candidates: SmallVec<[PoolEntryId; 16]> =
                    pool.with_level(level).map(|e| e.id).collect();
                rng.choose_index(candidates.len()).map(|i| candidates[i])
            }
        }
    }

    /// Draw a card of this level and consume it from the pool.
    ///
    /// Returns the drawn title, or an empty string when nothing matches.
    pub fn draw(&self, pool: &mut CardPool, level: &str, rng: &mut DeckRng) -> String {
        let Some(picked) = self.pick(pool, level, rng) else {
            debug!("unresolved draw: no pool entry with level {level}");
            return String::new();
        };

        let title = pool
            .get(picked)
            .map(|e| e.title.clone())
            .unwrap_or_default();

        let consumed = match self.removal {
            RemovalPolicy::ByIdentity => Some(picked),
            RemovalPolicy::ByPrefix => pool.find_by_prefix(&title),
        };
        if let Some(id) = consumed {
            pool.remove(id);
            if id != picked {
                debug!("draw of '{title}' consumed {id} instead of {picked} (shared prefix)");
            }
        }

        trace!("drew '{title}' for level {level}");
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardCategory;

    fn pool() -> CardPool {
        let mut pool = CardPool::new();
        pool.push(CardCategory::AI, "Leap Away", "A");
        pool.push(CardCategory::AI, "Leap", "B");
        pool.push(CardCategory::AI, "Bound", "B");
        pool
    }

    #[test]
    fn test_first_mode_is_deterministic() {
        let engine = DrawEngine::new(DrawMode::First, RemovalPolicy::ByIdentity);
        let mut pool = pool();
        let mut rng = DeckRng::new(1);

        assert_eq!(engine.draw(&mut pool, "B", &mut rng), "Leap");
        assert_eq!(engine.draw(&mut pool, "B", &mut rng), "Bound");
        assert_eq!(engine.draw(&mut pool, "B", &mut rng), "");
        assert_eq!(pool.titles(), vec!["Leap Away"]);
    }

    #[test]
    fn test_random_mode_only_draws_matching_level() {
        let engine = DrawEngine::new(DrawMode::Random, RemovalPolicy::ByIdentity);
        for seed in 0..20 {
            let mut pool = pool();
            let mut rng = DeckRng::new(seed);
            let title = engine.draw(&mut pool, "B", &mut rng);
            assert!(title == "Leap" || title == "Bound");
            assert_eq!(pool.len(), 2);
            assert!(!pool.titles().contains(&title.as_str()));
        }
    }

    #[test]
    fn test_unresolved_draw_is_empty() {
        let engine = DrawEngine::default();
        let mut pool = pool();
        let mut rng = DeckRng::new(1);

        assert_eq!(engine.draw(&mut pool, "L", &mut rng), "");
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_prefix_removal_can_consume_other_card() {
        let engine = DrawEngine::new(DrawMode::First, RemovalPolicy::ByPrefix);
        let mut pool = pool();
        let mut rng = DeckRng::new(1);

        // "Leap" is drawn, but "Leap Away" comes first and shares the prefix.
        assert_eq!(engine.draw(&mut pool, "B", &mut rng), "Leap");
        assert_eq!(pool.titles(), vec!["Leap", "Bound"]);
    }

    #[test]
    fn test_identity_removal_consumes_drawn_card() {
        let engine = DrawEngine::new(DrawMode::First, RemovalPolicy::ByIdentity);
        let mut pool = pool();
        let mut rng = DeckRng::new(1);

        assert_eq!(engine.draw(&mut pool, "B", &mut rng), "Leap");
        assert_eq!(pool.titles(), vec!["Leap Away", "Bound"]);
    }
}
