//! Monster instance generation.
//!
//! `InstanceGenerator::generate` is the single entry point front ends call.
//! It returns `GenerationError::DefinitionNotFound` when no definition
//! matches; every other degraded condition (bad versions, malformed tokens,
//! empty draws) is absorbed inside the pipeline.

pub mod engine;
pub mod instance;

pub use engine::{generate_instance, InstanceGenerator};
pub use instance::{GeneratedInstance, GenerationRequest};
