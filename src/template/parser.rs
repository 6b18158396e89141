//! Deck template tokenizer.
//!
//! ```text
//! entry      := backtick* faceUp? positioned? body backtick*
//! faceUp     := '~'
//! positioned := '[' digits ']'
//! body       := '{' levelTag '}' | literalName
//! ```
//!
//! Parsing never fails: anything that does not fit the grammar becomes part
//! of a literal card name.
//!
//! ```
//! use kda_deck::template::{parse_entry, CardToken};
//!
//! assert_eq!(parse_entry("[0]Claw"), Some(CardToken::literal("Claw").at(0)));
//! assert_eq!(parse_entry("~{B}"), Some(CardToken::level_draw("B").face_up()));
//! ```

use log::trace;

use super::annotation::{level_tag, strip_version_marks, take_face_up, take_position};
use super::token::{CardToken, TokenBody};

/// Parse one template entry. Blank entries yield `None`.
#[must_use]
pub fn parse_entry(entry: &str) -> Option<CardToken> {
    let rest = strip_version_marks(entry);
    if rest.is_empty() {
        return None;
    }

    let (face_up, rest) = take_face_up(rest);
    let (fixed_position, rest) = take_position(rest);
    let body = rest.trim();

    let body = match level_tag(body) {
        Some(tag) => TokenBody::LevelDraw(tag.to_string()),
        None => TokenBody::Literal(body.to_string()),
    };

    let token = CardToken {
        body,
        face_up,
        fixed_position,
    };
    trace!("parsed template entry '{}' as {:?}", entry.trim(), token);
    Some(token)
}

/// Parse a comma-separated template into tokens, in template order.
#[must_use]
pub fn parse_template(template: &str) -> Vec<CardToken> {
    template.split(',').filter_map(parse_entry).collect()
}
