//! Monster/card associations.
//!
//! Non-universal cards only enter a monster's pool when an association
//! links the card title to that monster.

use serde::{Deserialize, Serialize};

use super::card::CardCategory;

/// A (monster, card title) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonsterCardAssociation {
    #[serde(rename = "PartitionKey")]
    pub monster: String,
    #[serde(rename = "RowKey")]
    pub title: String,
    /// Category of the linked card, kept in sync by
    /// `Catalog::rebuild_association_categories`.
    #[serde(rename = "CardType")]
    pub category: CardCategory,
}

impl MonsterCardAssociation {
    #[must_use]
    pub fn new(monster: impl Into<String>, title: impl Into<String>, category: CardCategory) -> Self {
        Self {
            monster: monster.into(),
            title: title.into(),
            category,
        }
    }
}

impl std::fmt::Display for MonsterCardAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {} [{}]", self.monster, self.title, self.category)
    }
}
