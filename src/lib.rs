//! # kda-deck
//!
//! Monster encounter deck generator. Compiles a monster's annotated deck
//! template, a versioned card catalog and its exclusion rules into an ordered
//! AI deck.
//!
//! ## Design Principles
//!
//! 1. **Deterministic except for shuffling**: All randomness comes from a
//!    caller-supplied `DeckRng`. Same seed, same deck.
//!
//! 2. **Immutable reference data**: The catalog is a read-only snapshot. The
//!    only state mutated during generation is the per-call card pool.
//!
//! 3. **Degrade, don't fail**: Bad versions are skipped, malformed template
//!    entries become literal names and empty draws leave an empty slot. Only a
//!    missing definition is reported to the caller.
//!
//! ## Pipeline
//!
//! request -> version selection -> pool build -> exclusions -> template
//! parsing -> draws -> shuffle -> fixed positions -> `GeneratedInstance`
//!
//! ## Modules
//!
//! - `core`: RNG, version codec, configuration, errors
//! - `catalog`: Monster definitions, cards, associations, dumps
//! - `template`: Deck template tokenizer
//! - `pool`: Draw pool arena, pool builder, exclusions
//! - `deck`: Draws, shuffles, fixed-position compositor, life total
//! - `generator`: The end-to-end generation entry point

pub mod catalog;
pub mod core;
pub mod deck;
pub mod generator;
pub mod pool;
pub mod template;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, CatalogResult, DeckRng, DeckRngState, DrawMode, GenerationConfig,
    GenerationError, GenerationResult, PassRange, RemovalPolicy, ShuffleMode, VersionFormatError,
};

pub use crate::catalog::{
    CardCatalogEntry, CardCategory, Catalog, CatalogDump, CatalogSource, MonsterCardAssociation,
    MonsterDefinition, MonsterLevel, MonsterQuery,
};

pub use crate::template::{parse_entry, parse_template, CardToken, TokenBody};

pub use crate::pool::{CardPool, CardPoolBuilder, PoolEntry, PoolEntryId};

pub use crate::deck::{compose, compute_life, DrawEngine, FixedCard};

pub use crate::generator::{
    generate_instance, GeneratedInstance, GenerationRequest, InstanceGenerator,
};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
