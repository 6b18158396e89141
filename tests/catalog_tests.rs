//! Catalog dump and query integration tests.

use kda_deck::catalog::{
    CardCatalogEntry, CardCategory, Catalog, CatalogDump, MonsterCardAssociation,
    MonsterDefinition, MonsterLevel, MonsterQuery,
};
use kda_deck::core::CatalogError;

const DUMP: &str = r#"{
  "Cards": {
    "TableName": "MonsterCards",
    "Items": [
      { "PartitionKey": "AI", "RowKey": "Claw", "AILevel": "B", "Versions": "1.5", "Expansion": "Core" },
      { "PartitionKey": "Universal", "RowKey": "Ambush", "AILevel": "B", "Versions": "1.5", "Multiplicity": 2 },
      { "PartitionKey": "HitLocation", "RowKey": "Strange Hand", "Versions": "1.5", "HLTypes": "Reflex" },
      { "PartitionKey": "Mystery", "RowKey": "Relic" }
    ]
  },
  "Index": {
    "TableName": "IndexByMonsterNames",
    "Items": [
      { "PartitionKey": "White Lion", "RowKey": "Claw", "CardType": "Universal" }
    ]
  },
  "Monsters": {
    "TableName": "Monsters",
    "Items": [
      { "PartitionKey": "White Lion", "RowKey": "L1", "Name": "White Lion", "Expansion": "Core",
        "Version": "1.5", "Cards": "[0]Claw,{B}", "Traits": "Cunning", "Movement": "6" },
      { "PartitionKey": "White Lion`", "RowKey": "L2", "Name": "White Lion", "Expansion": "Core",
        "Version": "1.6", "Cards": "{B}" },
      { "PartitionKey": "Gorm", "RowKey": "L1", "Name": "Gorm", "Expansion": "Gorm",
        "Version": "1.0", "Cards": "" }
    ]
  }
}"#;

fn load() -> Catalog {
    Catalog::from_dump(&CatalogDump::from_json(DUMP).unwrap())
}

// =============================================================================
// Dump Loading
// =============================================================================

#[test]
fn test_load_dump_tables() {
    let catalog = load();

    assert_eq!(catalog.card_count(), 4);
    assert_eq!(catalog.association_count(), 1);
    assert_eq!(catalog.monster_count(), 3);

    let ambush = catalog.card(CardCategory::Universal, "Ambush").unwrap();
    assert_eq!(ambush.multiplicity, 2);

    let claw = catalog.card(CardCategory::AI, "Claw").unwrap();
    assert_eq!(claw.multiplicity, 1);
    assert_eq!(claw.level, "B");

    let lion = catalog.monster("White Lion", MonsterLevel::L1).unwrap();
    assert_eq!(lion.cards, "[0]Claw,{B}");
    assert_eq!(lion.movement, "6");
}

#[test]
fn test_unknown_category_is_kept() {
    let catalog = load();
    let relic = catalog.find_cards("relic");
    assert_eq!(relic.len(), 1);
    assert_eq!(relic[0].category, CardCategory::Unknown);
}

#[test]
fn test_json_dump_round_trip() {
    let catalog = load();
    let json = catalog.to_dump().to_json().unwrap();
    let reloaded = Catalog::from_dump(&CatalogDump::from_json(&json).unwrap());

    assert_eq!(reloaded.to_dump(), catalog.to_dump());
}

#[test]
fn test_snapshot_bytes_round_trip() {
    let dump = load().to_dump();
    let bytes = dump.to_snapshot_bytes().unwrap();
    assert_eq!(CatalogDump::from_snapshot_bytes(&bytes).unwrap(), dump);
}

#[test]
fn test_dump_file_round_trip() {
    let path = std::env::temp_dir().join(format!("kda-deck-dump-{}.json", std::process::id()));
    let dump = load().to_dump();

    dump.save_json_file(&path).unwrap();
    let reloaded = CatalogDump::from_json_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded, dump);
}

#[test]
fn test_missing_dump_file() {
    let err = CatalogDump::from_json_file("/nonexistent/kda-deck/dump.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_malformed_dump() {
    let err = CatalogDump::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_find_monsters_by_level_and_expansion() {
    let catalog = load();

    let all = catalog.find_monsters(&MonsterQuery::new());
    assert_eq!(all.len(), 3);

    let l1 = catalog.find_monsters(&MonsterQuery::new().with_levels("l1"));
    let names: Vec<&str> = l1.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(names, vec!["White Lion", "Gorm"]);

    let core_16 = catalog.find_monsters(
        &MonsterQuery::new()
            .with_expansions("core")
            .with_versions("1.6"),
    );
    assert_eq!(core_16.len(), 1);
    assert_eq!(core_16[0].level, MonsterLevel::L2);
}

#[test]
fn test_revisions_ignore_backticks() {
    let mut catalog = load();
    catalog.upsert_monster(
        MonsterDefinition::new("White Lion``", MonsterLevel::L1).with_version("1.6"),
    );

    let keys: Vec<&str> = catalog
        .revisions("White Lion", MonsterLevel::L1)
        .map(|m| m.key.as_str())
        .collect();
    assert_eq!(keys, vec!["White Lion", "White Lion``"]);
}

#[test]
fn test_cards_for_monster() {
    let mut catalog = load();
    catalog.upsert_association(MonsterCardAssociation::new(
        "White Lion`",
        "Strange Hand",
        CardCategory::HitLocation,
    ));

    let titles: Vec<&str> = catalog
        .cards_for_monster("White Lion")
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Claw"]);
    assert_eq!(catalog.cards_for_monster("White Lion`").count(), 1);
    assert!(!catalog.is_associated("White Lion", "Strange Hand"));
}

// =============================================================================
// Maintenance
// =============================================================================

#[test]
fn test_rebuild_association_categories() {
    let mut catalog = load();
    assert_eq!(catalog.rebuild_association_categories(), 1);

    let assoc = catalog.associations().next().unwrap();
    assert_eq!(assoc.category, CardCategory::AI);

    assert_eq!(catalog.rebuild_association_categories(), 0);
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut catalog = load();
    let old = catalog.upsert_card(
        CardCatalogEntry::new(CardCategory::AI, "Claw")
            .with_level("A")
            .with_versions("1.5"),
    );

    assert_eq!(old.map(|c| c.level), Some("B".to_string()));
    assert_eq!(catalog.card_count(), 4);
    assert_eq!(catalog.cards().next().map(|c| c.level.as_str()), Some("A"));
}

#[test]
fn test_remove_cards_by_prefix_survives_dump() {
    let mut catalog = load();
    catalog.upsert_association(MonsterCardAssociation::new("Gorm", "Claw", CardCategory::AI));

    let (removed, unlinked) = catalog.remove_cards_by_prefix("Cl");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].title, "Claw");
    assert_eq!(unlinked, 2);

    let reloaded = Catalog::from_dump(&catalog.to_dump());
    assert_eq!(reloaded.card_count(), 3);
    assert_eq!(reloaded.association_count(), 0);
    assert!(reloaded.card(CardCategory::Universal, "Ambush").is_some());
    assert!(reloaded.card(CardCategory::AI, "Claw").is_none());
}
