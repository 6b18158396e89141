//! Generation requests and their output.

use serde::{Deserialize, Serialize};

use crate::catalog::{MonsterDefinition, MonsterLevel};

/// What to generate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Monster name; version backticks are ignored.
    pub monster: String,
    pub level: MonsterLevel,
    /// Expansion version; `None` picks the highest available.
    pub version: Option<String>,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(monster: impl Into<String>, level: MonsterLevel) -> Self {
        Self {
            monster: monster.into(),
            level,
            version: None,
        }
    }

    /// Request a specific version. Blank versions count as none.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        let version = version.trim();
        self.version = (!version.is_empty()).then(|| version.to_string());
        self
    }
}

/// A generated monster encounter.
///
/// `cards` is the final deck order, index 0 first. Face-up cards carry the
/// `~` prefix; an unresolved draw leaves an empty string in its slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedInstance {
    pub name: String,
    pub level: MonsterLevel,
    pub version: String,
    pub expansion: String,
    pub cards: Vec<String>,
    pub life: u32,
    pub traits: String,
    pub cards_in_play: String,
    pub movement: String,
    pub toughness: String,
    pub speed: String,
    pub damage: String,
    pub tokens: String,
    pub hunt_table_steps: String,
    pub monster_position_in_hunt_table: String,
    pub additional_modifiers: String,
    pub instinct: String,
    pub basic_action: String,
}

impl GeneratedInstance {
    /// Echo a definition's attributes around a generated deck.
    #[must_use]
    pub fn from_definition(
        definition: &MonsterDefinition,
        version: String,
        cards: Vec<String>,
        life: u32,
    ) -> Self {
        let name = if definition.name.is_empty() {
            definition.base_name().to_string()
        } else {
            definition.name.clone()
        };

        Self {
            name,
            level: definition.level,
            version,
            expansion: definition.expansion.clone(),
            cards,
            life,
            traits: definition.traits.clone(),
            cards_in_play: definition.cards_in_play.clone(),
            movement: definition.movement.clone(),
            toughness: definition.toughness.clone(),
            speed: definition.speed.clone(),
            damage: definition.damage.clone(),
            tokens: definition.tokens.clone(),
            hunt_table_steps: definition.hunt_table_steps.clone(),
            monster_position_in_hunt_table: definition.monster_position_in_hunt_table.clone(),
            additional_modifiers: definition.additional_modifiers.clone(),
            instinct: definition.instinct.clone(),
            basic_action: definition.basic_action.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_blank_version_is_none() {
        let req = GenerationRequest::new("White Lion", MonsterLevel::L1).with_version("  ");
        assert_eq!(req.version, None);

        let req = GenerationRequest::new("White Lion", MonsterLevel::L1).with_version(" 1.5 ");
        assert_eq!(req.version.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_from_definition_falls_back_to_key_name() {
        let mut def = MonsterDefinition::new("White Lion`", MonsterLevel::L1).with_traits("Life");
        def.name.clear();
        def.movement = "6".into();

        let inst = GeneratedInstance::from_definition(&def, "1.5".into(), vec!["Claw".into()], 12);
        assert_eq!(inst.name, "White Lion");
        assert_eq!(inst.movement, "6");
        assert_eq!(inst.traits, "Life");
        assert_eq!(inst.life, 12);
    }

    #[test]
    fn test_serializes_to_json() {
        let def = MonsterDefinition::new("White Lion", MonsterLevel::L2);
        let inst = GeneratedInstance::from_definition(&def, "1.5".into(), vec!["~Ambush".into()], 0);

        let json = serde_json::to_value(&inst).unwrap();
        assert_eq!(json["name"], "White Lion");
        assert_eq!(json["level"], "L2");
        assert_eq!(json["cards"][0], "~Ambush");
    }
}
