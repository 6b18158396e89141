//! Catalog dumps.
//!
//! A dump holds all three tables with their table names. JSON dumps are the
//! interchange format used to back up and restore the catalog store; binary
//! snapshots (bincode) are a compact equivalent for caching.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::association::MonsterCardAssociation;
use super::card::CardCatalogEntry;
use super::monster::MonsterDefinition;
use super::registry::{Catalog, CatalogSource};
use crate::core::error::CatalogResult;

pub const CARDS_TABLE: &str = "MonsterCards";
pub const INDEX_TABLE: &str = "IndexByMonsterNames";
pub const MONSTERS_TABLE: &str = "Monsters";

/// One table of a dump.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescriptor<T> {
    pub table_name: String,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> TableDescriptor<T> {
    #[must_use]
    pub fn new(table_name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            table_name: table_name.into(),
            items,
        }
    }
}

/// Full catalog dump.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogDump {
    pub cards: TableDescriptor<CardCatalogEntry>,
    pub index: TableDescriptor<MonsterCardAssociation>,
    pub monsters: TableDescriptor<MonsterDefinition>,
}

impl CatalogDump {
    /// Parse a JSON dump.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a JSON dump file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let dump = Self::from_json(&data)?;
        info!(
            "loaded dump {}: {} cards, {} index entries, {} monsters",
            path.display(),
            dump.cards.items.len(),
            dump.index.items.len(),
            dump.monsters.items.len()
        );
        Ok(dump)
    }

    /// Write a JSON dump file, replacing any existing file.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Encode as a binary snapshot.
    pub fn to_snapshot_bytes(&self) -> CatalogResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary snapshot.
    pub fn from_snapshot_bytes(bytes: &[u8]) -> CatalogResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl CatalogSource for CatalogDump {
    fn monsters(&self) -> Vec<MonsterDefinition> {
        self.monsters.items.clone()
    }

    fn cards(&self) -> Vec<CardCatalogEntry> {
        self.cards.items.clone()
    }

    fn associations(&self) -> Vec<MonsterCardAssociation> {
        self.index.items.clone()
    }
}

impl Catalog {
    /// Build a catalog from a dump. Later rows replace earlier ones with the
    /// same key.
    #[must_use]
    pub fn from_dump(dump: &CatalogDump) -> Self {
        Catalog::snapshot(dump)
    }

    /// Dump every table under the default table names.
    #[must_use]
    pub fn to_dump(&self) -> CatalogDump {
        CatalogDump {
            cards: TableDescriptor::new(CARDS_TABLE, self.cards().cloned().collect()),
            index: TableDescriptor::new(INDEX_TABLE, self.associations().cloned().collect()),
            monsters: TableDescriptor::new(MONSTERS_TABLE, self.monsters().cloned().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardCategory, MonsterLevel};

    const DUMP: &str = r#"{
        "Cards": {
            "TableName": "MonsterCards",
            "Items": [
                { "PartitionKey": "AI", "RowKey": "Claw", "AILevel": "B", "Versions": "1.5" },
                { "PartitionKey": "Universal", "RowKey": "Ambush", "AILevel": "B", "Versions": "1.5", "Multiplicity": 2 }
            ]
        },
        "Index": {
            "TableName": "IndexByMonsterNames",
            "Items": [ { "PartitionKey": "White Lion", "RowKey": "Claw", "CardType": "AI" } ]
        },
        "Monsters": {
            "TableName": "Monsters",
            "Items": [ { "PartitionKey": "White Lion", "RowKey": "L1", "Version": "1.5", "Cards": "Claw,{B}" } ]
        }
    }"#;

    #[test]
    fn test_parse_dump() {
        let dump = CatalogDump::from_json(DUMP).unwrap();
        assert_eq!(dump.cards.table_name, CARDS_TABLE);
        assert_eq!(dump.cards.items.len(), 2);
        assert_eq!(dump.cards.items[1].multiplicity, 2);
        assert_eq!(dump.index.items[0].category, CardCategory::AI);
        assert_eq!(dump.monsters.items[0].level, MonsterLevel::L1);
    }

    #[test]
    fn test_catalog_from_dump() {
        let dump = CatalogDump::from_json(DUMP).unwrap();
        let catalog = Catalog::from_dump(&dump);
        assert_eq!(catalog.card_count(), 2);
        assert!(catalog.is_associated("White Lion", "Claw"));
        assert!(catalog.monster("White Lion", MonsterLevel::L1).is_some());
    }

    #[test]
    fn test_snapshot_bytes() {
        let dump = CatalogDump::from_json(DUMP).unwrap();
        let bytes = dump.to_snapshot_bytes().unwrap();
        let restored = CatalogDump::from_snapshot_bytes(&bytes).unwrap();
        assert_eq!(dump, restored);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(CatalogDump::from_json("{ not json").is_err());
    }
}
