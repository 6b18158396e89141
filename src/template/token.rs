//! Parsed template tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::annotation::FACE_UP_MARKER;

/// What a token resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenBody {
    /// A named card.
    Literal(String),
    /// A random card of the given level tag, drawn from the pool.
    LevelDraw(String),
}

/// One entry of a deck template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardToken {
    pub body: TokenBody,
    /// Card starts face up.
    pub face_up: bool,
    /// Zero-based deck index, applied after shuffling.
    pub fixed_position: Option<usize>,
}

impl CardToken {
    #[must_use]
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            body: TokenBody::Literal(name.into()),
            face_up: false,
            fixed_position: None,
        }
    }

    #[must_use]
    pub fn level_draw(tag: impl Into<String>) -> Self {
        Self {
            body: TokenBody::LevelDraw(tag.into()),
            face_up: false,
            fixed_position: None,
        }
    }

    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.fixed_position = Some(position);
        self
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self.body, TokenBody::LevelDraw(_))
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed_position.is_some()
    }

    /// Final deck name for a resolved card title.
    ///
    /// Face-up cards get the marker prefix; an empty title (unresolved draw)
    /// stays empty.
    #[must_use]
    pub fn deck_name(&self, title: &str) -> String {
        if self.face_up && !title.is_empty() {
            format!("{FACE_UP_MARKER}{title}")
        } else {
            title.to_string()
        }
    }
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{FACE_UP_MARKER}")?;
        }
        if let Some(pos) = self.fixed_position {
            write!(f, "[{pos}]")?;
        }
        match &self.body {
            TokenBody::Literal(name) => write!(f, "{name}"),
            TokenBody::LevelDraw(tag) => write!(f, "{{{tag}}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CardToken::literal("Claw").at(0).to_string(), "[0]Claw");
        assert_eq!(CardToken::literal("Vanish").face_up().to_string(), "~Vanish");
        assert_eq!(CardToken::level_draw("B").face_up().at(3).to_string(), "~[3]{B}");
    }

    #[test]
    fn test_deck_name() {
        assert_eq!(CardToken::literal("Ambush").face_up().deck_name("Ambush"), "~Ambush");
        assert_eq!(CardToken::literal("Claw").deck_name("Claw"), "Claw");
        assert_eq!(CardToken::level_draw("B").face_up().deck_name(""), "");
    }
}
