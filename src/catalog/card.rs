//! Card catalog entries.
//!
//! A `CardCatalogEntry` is immutable reference data: one row per
//! (category, title). Its `multiplicity` says how many physical copies are
//! available when the entry is expanded into a draw pool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card category. Only `AI` and `Universal` cards are eligible for decks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardCategory {
    AI,
    HitLocation,
    BasicResource,
    MonsterResource,
    StrangeResource,
    HuntEvent,
    Universal,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CardCategory {
    /// All known categories.
    pub const ALL: [CardCategory; 8] = [
        CardCategory::AI,
        CardCategory::HitLocation,
        CardCategory::BasicResource,
        CardCategory::MonsterResource,
        CardCategory::StrangeResource,
        CardCategory::HuntEvent,
        CardCategory::Universal,
        CardCategory::Unknown,
    ];

    /// Category name as stored in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardCategory::AI => "AI",
            CardCategory::HitLocation => "HitLocation",
            CardCategory::BasicResource => "BasicResource",
            CardCategory::MonsterResource => "MonsterResource",
            CardCategory::StrangeResource => "StrangeResource",
            CardCategory::HuntEvent => "HuntEvent",
            CardCategory::Universal => "Universal",
            CardCategory::Unknown => "Unknown",
        }
    }

    /// Parse a category name. Unrecognised names map to `Unknown`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name.trim())
            .unwrap_or(CardCategory::Unknown)
    }

    /// Can cards of this category appear in a monster AI deck?
    #[must_use]
    pub const fn is_deck_eligible(self) -> bool {
        matches!(self, CardCategory::AI | CardCategory::Universal)
    }

    /// Is this category shared by every monster without an association?
    #[must_use]
    pub const fn is_universal(self) -> bool {
        matches!(self, CardCategory::Universal)
    }

    /// Resource categories that never belong to a single monster.
    #[must_use]
    pub const fn is_shared_resource(self) -> bool {
        matches!(self, CardCategory::BasicResource | CardCategory::StrangeResource)
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_multiplicity() -> u32 {
    1
}

/// One card in the catalog.
///
/// Field names serialize in the catalog dump's column naming.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CardCatalogEntry {
    #[serde(rename = "PartitionKey")]
    pub category: CardCategory,
    #[serde(rename = "RowKey")]
    pub title: String,
    #[serde(default = "default_multiplicity")]
    pub multiplicity: u32,
    pub expansion: String,
    /// Comma-separated versions this card is valid for.
    pub versions: String,
    /// Level tag used by `{X}` draws (e.g. "B", "A", "L").
    #[serde(rename = "AILevel")]
    pub level: String,
    #[serde(rename = "AITypes")]
    pub ai_types: String,
    pub card_text: String,
    pub resource_keywords: String,
    pub event_subtitle: String,
    pub event_bottom_text: String,
    #[serde(rename = "HLTypes")]
    pub hl_types: String,
    #[serde(rename = "HLReactionFailure")]
    pub hl_reaction_failure: String,
    #[serde(rename = "HLReactionWound")]
    pub hl_reaction_wound: String,
    #[serde(rename = "HLReactionReflex")]
    pub hl_reaction_reflex: String,
    #[serde(rename = "HLCriticalText")]
    pub hl_critical_text: String,
    pub basic_action: String,
    pub instinct: String,
}

impl CardCatalogEntry {
    /// Create an entry with a single copy and no versions.
    #[must_use]
    pub fn new(category: CardCategory, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            multiplicity: 1,
            ..Self::default()
        }
    }

    /// Set the level tag.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the valid versions (comma-separated).
    #[must_use]
    pub fn with_versions(mut self, versions: impl Into<String>) -> Self {
        self.versions = versions.into();
        self
    }

    /// Set the number of physical copies.
    #[must_use]
    pub fn with_multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Set the expansion name.
    #[must_use]
    pub fn with_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.expansion = expansion.into();
        self
    }

    /// Set the card text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.card_text = text.into();
        self
    }
}

impl fmt::Display for CardCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.level.is_empty() {
            write!(f, " ({})", self.level)?;
        }
        writeln!(f, " [{} {}]", self.expansion, self.versions)?;

        match self.category {
            CardCategory::AI | CardCategory::Universal => {
                writeln!(f, "{}\n{}", self.ai_types, self.card_text)
            }
            CardCategory::HitLocation => writeln!(
                f,
                "{}\n{}\n{}\n{}\n{}\n{}",
                self.hl_types,
                self.card_text,
                self.hl_reaction_failure,
                self.hl_reaction_wound,
                self.hl_reaction_reflex,
                self.hl_critical_text
            ),
            CardCategory::HuntEvent => writeln!(
                f,
                "{}\n{}\n{}",
                self.event_subtitle, self.card_text, self.event_bottom_text
            ),
            CardCategory::MonsterResource
            | CardCategory::BasicResource
            | CardCategory::StrangeResource => {
                writeln!(f, "{}\n{}", self.resource_keywords, self.card_text)
            }
            CardCategory::Unknown => writeln!(f, "{}", self.card_text),
        }
    }
}
