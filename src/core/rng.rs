//! Seeded randomness for draws and shuffles.
//!
//! Every draw and shuffle takes a `&mut DeckRng` from its caller. There is no
//! process-wide generator: a front end creates one per request (from a seed,
//! or from OS entropy), and batches take a `fork()` per item so that results
//! never depend on how requests interleave.
//!
//! ```
//! use kda_deck::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//! assert_eq!(a.gen_index(1000), b.gen_index(1000));
//!
//! // Restoring a captured state replays the same stream.
//! let saved = a.state();
//! let next = a.gen_index(1000);
//! assert_eq!(DeckRng::from_state(&saved).gen_index(1000), next);
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct DeckRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A generator seeded from OS entropy, for production requests.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child generator seeded from this stream.
    ///
    /// Advances `self`, so successive forks differ while the whole family
    /// stays reproducible from the root seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.stream.gen())
    }

    /// Uniform index in `0..upper`. `upper` must be non-zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.stream.gen_range(0..upper)
    }

    /// Uniform value in an inclusive range.
    pub fn gen_inclusive(&mut self, range: RangeInclusive<usize>) -> usize {
        self.stream.gen_range(range)
    }

    /// Uniform index into `len` items, `None` when there are none.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_index(len))
    }

    /// Fisher-Yates in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }

    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

/// Captured position of a `DeckRng`, for replaying a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    pub seed: u64,
    /// Offset into the ChaCha8 keystream, in 32-bit words.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rng: &mut DeckRng, n: usize) -> Vec<usize> {
        (0..n).map(|_| rng.gen_index(1000)).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(
            sample(&mut DeckRng::new(42), 100),
            sample(&mut DeckRng::new(42), 100)
        );
        assert_ne!(
            sample(&mut DeckRng::new(42), 100),
            sample(&mut DeckRng::new(43), 100)
        );
    }

    #[test]
    fn test_forks_differ_but_replay() {
        let mut root = DeckRng::new(9);
        let mut first = root.fork();
        let mut second = root.fork();
        assert_ne!(sample(&mut first, 10), sample(&mut second, 10));

        let mut replay = DeckRng::new(9);
        assert_eq!(sample(&mut replay.fork(), 10), sample(&mut DeckRng::new(9).fork(), 10));
    }

    #[test]
    fn test_choose_index() {
        let mut rng = DeckRng::new(3);

        assert_eq!(rng.choose_index(0), None);
        assert_eq!(rng.choose_index(1), Some(0));
        assert!((0..50).all(|_| rng.choose_index(5).is_some_and(|i| i < 5)));
    }

    #[test]
    fn test_gen_inclusive_bounds() {
        let mut rng = DeckRng::new(11);
        assert!((0..200).all(|_| (500..=2000).contains(&rng.gen_inclusive(500..=2000))));
        assert_eq!(rng.gen_inclusive(7..=7), 7);
    }

    #[test]
    fn test_state_replays_stream() {
        let mut rng = DeckRng::new(42);
        sample(&mut rng, 100);

        let state = rng.state();
        let expected = sample(&mut rng, 10);

        assert_eq!(sample(&mut DeckRng::from_state(&state), 10), expected);
    }

    #[test]
    fn test_state_json() {
        let state = DeckRngState {
            seed: 42,
            word_pos: 12345,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<DeckRngState>(&json).unwrap(), state);
    }
}
