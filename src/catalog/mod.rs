//! Catalog reference data: monsters, cards, associations.
//!
//! ## Key Types
//!
//! - `MonsterDefinition`: Monster at one level, with its deck template
//! - `CardCatalogEntry`: Card with level tag, multiplicity and versions
//! - `MonsterCardAssociation`: Links a non-universal card to its monster
//! - `Catalog`: Keyed snapshot of all three tables
//! - `CatalogDump`: JSON / binary interchange format

pub mod association;
pub mod card;
pub mod dump;
pub mod monster;
pub mod registry;
pub mod table;

pub use association::MonsterCardAssociation;
pub use card::{CardCatalogEntry, CardCategory};
pub use dump::{CatalogDump, TableDescriptor};
pub use monster::{MonsterDefinition, MonsterLevel};
pub use registry::{Catalog, CatalogSource, MonsterQuery};
pub use table::Table;
