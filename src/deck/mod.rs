//! Deck assembly steps: draws, shuffling, fixed positions, life.

pub mod compositor;
pub mod draw;
pub mod life;
pub mod shuffle;

pub use compositor::{compose, FixedCard};
pub use draw::DrawEngine;
pub use life::compute_life;
pub use shuffle::{relocation_shuffle, shuffle, uniform_shuffle};
