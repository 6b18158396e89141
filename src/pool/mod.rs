//! Draw pools: eligible card copies for one generation.
//!
//! - `CardPool`: arena of `PoolEntry` values addressed by `PoolEntryId`
//! - `CardPoolBuilder`: catalog + associations -> pool
//! - `exclusion`: removes cards already in play

pub mod arena;
pub mod builder;
pub mod exclusion;

pub use arena::{CardPool, PoolEntry, PoolEntryId, MAX_POOL_ENTRIES};
pub use builder::CardPoolBuilder;
pub use exclusion::{apply_exclusions, exclude_for_monster, exclusion_names};
