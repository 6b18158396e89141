//! Monster definitions.
//!
//! A `MonsterDefinition` is keyed by (name, level). When a monster is
//! revised across expansion versions, each revision gets its own row whose
//! key name carries one or more trailing backticks ("White Lion`").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;
use crate::template::strip_version_marks;

/// Monster level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonsterLevel {
    #[default]
    Undefined,
    Prologue,
    L1,
    L2,
    L3,
    L4,
    Legendary,
}

impl MonsterLevel {
    pub const ALL: [MonsterLevel; 7] = [
        MonsterLevel::Undefined,
        MonsterLevel::Prologue,
        MonsterLevel::L1,
        MonsterLevel::L2,
        MonsterLevel::L3,
        MonsterLevel::L4,
        MonsterLevel::Legendary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MonsterLevel::Undefined => "Undefined",
            MonsterLevel::Prologue => "Prologue",
            MonsterLevel::L1 => "L1",
            MonsterLevel::L2 => "L2",
            MonsterLevel::L3 => "L3",
            MonsterLevel::L4 => "L4",
            MonsterLevel::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for MonsterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonsterLevel {
    type Err = CatalogError;

    /// Case-insensitive level parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::InvalidLevel(s.to_string()))
    }
}

/// Reference data for one monster at one level.
///
/// List-valued attributes are comma-separated strings, as stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonsterDefinition {
    /// Key name, possibly carrying version backticks.
    #[serde(rename = "PartitionKey")]
    pub key: String,
    #[serde(rename = "RowKey")]
    pub level: MonsterLevel,
    /// Display name without backticks.
    pub name: String,
    /// Expansion names (comma-separated).
    pub expansion: String,
    /// Versions this definition applies to (comma-separated).
    pub version: String,
    /// Deck template: comma-separated annotated card tokens.
    pub cards: String,
    pub traits: String,
    pub cards_in_play: String,
    pub movement: String,
    pub toughness: String,
    pub speed: String,
    pub damage: String,
    /// Tokens in play, each in round brackets ("(+dmg),(-spd)").
    pub tokens: String,
    /// Hunt steps in curly brackets, alternatives separated by '|'.
    pub hunt_table_steps: String,
    pub monster_position_in_hunt_table: String,
    /// Additional effects in curly brackets ("{Ambushed},{life:12}").
    pub additional_modifiers: String,
    pub instinct: String,
    pub basic_action: String,
}

impl MonsterDefinition {
    /// Create a definition with the given key name and level.
    #[must_use]
    pub fn new(key: impl Into<String>, level: MonsterLevel) -> Self {
        let key = key.into();
        Self {
            name: strip_version_marks(&key).to_string(),
            key,
            level,
            ..Self::default()
        }
    }

    /// Key name with version backticks removed.
    #[must_use]
    pub fn base_name(&self) -> &str {
        strip_version_marks(&self.key)
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.expansion = expansion.into();
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: impl Into<String>) -> Self {
        self.cards = cards.into();
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    #[must_use]
    pub fn with_cards_in_play(mut self, cards: impl Into<String>) -> Self {
        self.cards_in_play = cards.into();
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.additional_modifiers = modifiers.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("L1".parse::<MonsterLevel>().unwrap(), MonsterLevel::L1);
        assert_eq!("prologue".parse::<MonsterLevel>().unwrap(), MonsterLevel::Prologue);
        assert_eq!(" LEGENDARY ".parse::<MonsterLevel>().unwrap(), MonsterLevel::Legendary);
        assert!(matches!(
            "L9".parse::<MonsterLevel>(),
            Err(CatalogError::InvalidLevel(s)) if s == "L9"
        ));
    }

    #[test]
    fn test_base_name_strips_backticks() {
        let def = MonsterDefinition::new("White Lion``", MonsterLevel::L1);
        assert_eq!(def.base_name(), "White Lion");
        assert_eq!(def.name, "White Lion");
        assert_eq!(def.key, "White Lion``");
    }

    #[test]
    fn test_dump_column_names() {
        let json = r#"{
            "PartitionKey": "White Lion`",
            "RowKey": "L2",
            "Version": "1.5,1.6",
            "Cards": "[0]Claw,{B}",
            "CardsInPlay": "Grasp",
            "AdditionalModifiers": "{life:12}"
        }"#;

        let def: MonsterDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.key, "White Lion`");
        assert_eq!(def.level, MonsterLevel::L2);
        assert_eq!(def.version, "1.5,1.6");
        assert_eq!(def.cards, "[0]Claw,{B}");
        assert_eq!(def.cards_in_play, "Grasp");
        assert_eq!(def.additional_modifiers, "{life:12}");
    }
}
