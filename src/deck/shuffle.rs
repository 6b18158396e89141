//! Deck shuffling.
//!
//! The relocation shuffle picks a pass count in the configured range, then on
//! each pass pulls a random card and reinserts it at a random index. It is
//! not uniform, only well mixed. `ShuffleMode::Uniform` uses Fisher-Yates.
//! Both only permute: length and contents are preserved.

use std::ops::RangeInclusive;

use log::trace;

use crate::core::{DeckRng, GenerationConfig, ShuffleMode};

/// Relocation shuffle with a pass count drawn from `passes`.
///
/// Lists shorter than two elements are left alone and the RNG is not used.
pub fn relocation_shuffle<T>(list: &mut Vec<T>, passes: RangeInclusive<usize>, rng: &mut DeckRng) {
    if list.len() < 2 {
        return;
    }

    let count = rng.gen_inclusive(passes);
    for _ in 0..count {
        let from = rng.gen_index(list.len());
        let card = list.remove(from);
        let to = rng.gen_inclusive(0..=list.len());
        list.insert(to, card);
    }
    trace!("relocation shuffle: {count} passes over {} cards", list.len());
}

/// Fisher-Yates shuffle.
pub fn uniform_shuffle<T>(list: &mut [T], rng: &mut DeckRng) {
    if list.len() < 2 {
        return;
    }
    rng.shuffle(list);
}

/// Shuffle according to the configured mode.
pub fn shuffle<T>(list: &mut Vec<T>, config: &GenerationConfig, rng: &mut DeckRng) {
    match config.shuffle_mode {
        ShuffleMode::Relocation => relocation_shuffle(list, config.shuffle_passes.bounded(), rng),
        ShuffleMode::Uniform => uniform_shuffle(list, rng),
    }
}
