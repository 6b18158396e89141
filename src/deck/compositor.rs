//! Reinserts fixed-position cards into a shuffled deck.
//!
//! Fixed cards are inserted one at a time, in ascending position order (ties
//! keep template order), each at its nominal index in the deck as it stands
//! at that moment. Later insertions shift earlier ones: `[0]A` followed by
//! `[0]B` ends with B at index 0 and A at index 1.

use log::warn;
use serde::{Deserialize, Serialize};

/// A resolved card pinned to a deck index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCard {
    pub position: usize,
    pub name: String,
}

impl FixedCard {
    #[must_use]
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// Insert fixed cards into `deck`.
///
/// `fixed` must be in template order. Positions past the end of the deck
/// are clamped to the end.
#[must_use]
pub fn compose(mut deck: Vec<String>, mut fixed: Vec<FixedCard>) -> Vec<String> {
    // Stable sort keeps template order for equal positions.
    fixed.sort_by_key(|f| f.position);

    for card in fixed {
        let index = if card.position > deck.len() {
            warn!(
                "fixed position {} for '{}' is past the deck end ({}), appending",
                card.position,
                card.name,
                deck.len()
            );
            deck.len()
        } else {
            card.position
        };
        deck.insert(index, card.name);
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_at_positions() {
        let deck = compose(
            names(&["a", "b", "c"]),
            vec![FixedCard::new(2, "Y"), FixedCard::new(0, "X")],
        );
        assert_eq!(deck, names(&["X", "a", "Y", "b", "c"]));
    }

    #[test]
    fn test_equal_positions_cascade() {
        let deck = compose(
            names(&["a", "b"]),
            vec![FixedCard::new(0, "A"), FixedCard::new(0, "B")],
        );
        assert_eq!(deck, names(&["B", "A", "a", "b"]));
    }

    #[test]
    fn test_lower_insert_shifts_later_nominal_index() {
        // [1]P lands at 1, then [1]Q pushes it to 2.
        let deck = compose(
            names(&["a", "b", "c"]),
            vec![FixedCard::new(1, "P"), FixedCard::new(1, "Q")],
        );
        assert_eq!(deck, names(&["a", "Q", "P", "b", "c"]));
    }

    #[test]
    fn test_position_past_end_is_appended() {
        let deck = compose(names(&["a"]), vec![FixedCard::new(9, "Z")]);
        assert_eq!(deck, names(&["a", "Z"]));
    }

    #[test]
    fn test_only_fixed_cards() {
        let deck = compose(
            Vec::new(),
            vec![FixedCard::new(1, "B"), FixedCard::new(0, "A")],
        );
        assert_eq!(deck, names(&["A", "B"]));
    }

    #[test]
    fn test_no_fixed_cards() {
        assert_eq!(compose(names(&["a", "b"]), Vec::new()), names(&["a", "b"]));
    }
}
