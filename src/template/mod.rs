//! Deck template language.
//!
//! A monster's deck is described by a comma-separated list of annotated
//! entries:
//!
//! - `Claw`: the card named "Claw"
//! - `{B}`: a random card of level B from the monster's pool
//! - `~Vanish`: "Vanish", face up
//! - `[0]Claw`: "Claw" at index 0 of the final deck, after shuffling
//!
//! Backticks anywhere at the ends of an entry are version noise and ignored.

pub mod annotation;
pub mod parser;
pub mod token;

pub use annotation::{strip_version_marks, FACE_UP_MARKER};
pub use parser::{parse_entry, parse_template};
pub use token::{CardToken, TokenBody};
