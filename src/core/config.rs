//! Generation configuration.
//!
//! Controls how draws, removals and shuffles behave. The defaults reproduce
//! the classic deck building behaviour; tests and tools can switch to
//! deterministic or uniform modes.

use serde::{Deserialize, Serialize};

/// Upper bound on relocation passes, whatever the configuration says.
pub const MAX_SHUFFLE_PASSES: usize = 10_000;

/// How a level draw picks among matching pool entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    /// Uniformly random matching entry.
    #[default]
    Random,
    /// First matching entry in pool order.
    First,
}

/// How the pool entry consumed by a draw is located.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalPolicy {
    /// Remove the first remaining entry whose title starts with the drawn
    /// title. If two titles share a prefix this may remove a different card
    /// than the one drawn.
    #[default]
    ByPrefix,
    /// Remove exactly the drawn entry.
    ByIdentity,
}

/// Shuffle algorithm for the non-fixed part of the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Repeatedly pull a random card and reinsert it at a random index.
    #[default]
    Relocation,
    /// Fisher-Yates.
    Uniform,
}

/// Inclusive range of relocation passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRange {
    pub min: usize,
    pub max: usize,
}

impl PassRange {
    /// Create a pass range. Bounds are reordered if reversed.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    /// The range clamped to `MAX_SHUFFLE_PASSES`.
    #[must_use]
    pub fn bounded(self) -> std::ops::RangeInclusive<usize> {
        let max = self.max.min(MAX_SHUFFLE_PASSES);
        let min = self.min.min(max);
        min..=max
    }
}

impl Default for PassRange {
    fn default() -> Self {
        Self { min: 500, max: 2000 }
    }
}

/// Deck generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Relocation pass count range for `ShuffleMode::Relocation`.
    pub shuffle_passes: PassRange,

    /// Shuffle algorithm.
    pub shuffle_mode: ShuffleMode,

    /// Draw selection.
    pub draw_mode: DrawMode,

    /// Pool removal after a draw.
    pub removal: RemovalPolicy,

    /// Maximum number of pool entries built from the catalog.
    /// Multiplicity expansion stops once this is reached.
    pub max_pool_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            shuffle_passes: PassRange::default(),
            shuffle_mode: ShuffleMode::default(),
            draw_mode: DrawMode::default(),
            removal: RemovalPolicy::default(),
            max_pool_size: 4096,
        }
    }
}

impl GenerationConfig {
    /// Set the relocation pass range.
    #[must_use]
    pub fn with_shuffle_passes(mut self, min: usize, max: usize) -> Self {
        self.shuffle_passes = PassRange::new(min, max);
        self
    }

    /// Set the shuffle algorithm.
    #[must_use]
    pub fn with_shuffle_mode(mut self, mode: ShuffleMode) -> Self {
        self.shuffle_mode = mode;
        self
    }

    /// Set the draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    /// Set the removal policy.
    #[must_use]
    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Set the pool size cap.
    #[must_use]
    pub fn with_max_pool_size(mut self, max: usize) -> Self {
        self.max_pool_size = max;
        self
    }
}
