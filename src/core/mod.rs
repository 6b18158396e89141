//! Core engine types: RNG, version codec, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod version;

pub use config::{DrawMode, GenerationConfig, PassRange, RemovalPolicy, ShuffleMode};
pub use error::{CatalogError, CatalogResult, GenerationError, GenerationResult, VersionFormatError};
pub use rng::{DeckRng, DeckRngState};
