//! Life total from traits and modifiers.
//!
//! Monsters with the `Life` trait carry their life total as a `{life:N}`
//! modifier. Everything else has no life total (0).

pub const LIFE_TRAIT: &str = "Life";

/// Life total for a monster's traits and additional modifiers.
#[must_use]
pub fn compute_life(traits: &str, modifiers: &str) -> u32 {
    if !traits.split(',').any(|t| t.trim() == LIFE_TRAIT) {
        return 0;
    }

    modifiers
        .split(',')
        .find_map(|m| parse_life_modifier(m.trim()))
        .unwrap_or(0)
}

fn parse_life_modifier(modifier: &str) -> Option<u32> {
    let digits = modifier.strip_prefix("{life:")?.strip_suffix('}')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
