//! Annotation stripping steps.
//!
//! A template entry is peeled one annotation at a time:
//!
//! 1. version backticks (leading and trailing, no meaning)
//! 2. face-up marker `~`
//! 3. fixed position `[n]`
//!
//! Each step returns the remainder so they can be chained and tested alone.

/// Face-up marker, both in templates and on generated card names.
pub const FACE_UP_MARKER: char = '~';

/// Version disambiguation marker.
pub const VERSION_MARK: char = '`';

/// Trim whitespace and version backticks from both ends.
#[must_use]
pub fn strip_version_marks(s: &str) -> &str {
    s.trim().trim_matches(VERSION_MARK).trim()
}

/// Split off a leading face-up marker.
#[must_use]
pub fn take_face_up(s: &str) -> (bool, &str) {
    match s.strip_prefix(FACE_UP_MARKER) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s),
    }
}

/// Split off a leading `[digits]` position marker.
///
/// Anything that is not exactly `[` digits `]` leaves the input untouched,
/// so malformed markers end up as part of a literal name.
#[must_use]
pub fn take_position(s: &str) -> (Option<usize>, &str) {
    let Some(inner) = s.strip_prefix('[') else {
        return (None, s);
    };
    let Some(close) = inner.find(']') else {
        return (None, s);
    };

    let digits = &inner[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (None, s);
    }

    match digits.parse::<usize>() {
        Ok(pos) => (Some(pos), inner[close + 1..].trim_start()),
        Err(_) => (None, s),
    }
}

/// The level tag of a `{tag}` body, if it is one.
#[must_use]
pub fn level_tag(body: &str) -> Option<&str> {
    body.strip_prefix('{')
        .and_then(|b| b.strip_suffix('}'))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}
