//! Expansion version comparison.
//!
//! Versions are dotted strings ("1.5", "1.10", "2.0"). They are compared
//! numerically by encoding each one as an integer: components are read right
//! to left, and the component at reversed index `i` is weighted by `100^i`.
//!
//! ```
//! use kda_deck::core::version;
//!
//! assert_eq!(version::encode("1.10").unwrap(), 110);
//! assert!(version::encode("1.10").unwrap() > version::encode("1.9").unwrap());
//! ```

use log::debug;

use super::error::VersionFormatError;

/// Weight base between adjacent version components.
const COMPONENT_BASE: u64 = 100;

/// Encode a dotted version string as a comparable integer.
///
/// Fails if any component is not a non-negative integer, or if the encoded
/// value does not fit in a `u64`.
pub fn encode(version: &str) -> Result<u64, VersionFormatError> {
    let version = version.trim();
    let mut total: u64 = 0;
    let mut weight: u64 = 1;

    for (i, component) in version.split('.').rev().enumerate() {
        let value: u64 = component
            .trim()
            .parse()
            .map_err(|_| VersionFormatError::new(version, component))?;

        if i > 0 {
            weight = weight
                .checked_mul(COMPONENT_BASE)
                .ok_or_else(|| VersionFormatError::new(version, component))?;
        }

        total = value
            .checked_mul(weight)
            .and_then(|v| v.checked_add(total))
            .ok_or_else(|| VersionFormatError::new(version, component))?;
    }

    Ok(total)
}

/// Iterate over the trimmed, non-empty entries of a comma-separated list.
pub fn entries(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|e| !e.is_empty())
}

/// Find the highest version in a comma-separated list.
///
/// Returns the encoded value together with the entry that produced it.
/// Entries that fail to encode are skipped; the first maximum wins.
pub fn highest_entry(list: &str) -> Option<(u64, &str)> {
    let mut best: Option<(u64, &str)> = None;

    for entry in entries(list) {
        match encode(entry) {
            Ok(value) => {
                if best.map_or(true, |(b, _)| value > b) {
                    best = Some((value, entry));
                }
            }
            Err(e) => debug!("skipping version entry: {e}"),
        }
    }

    best
}

/// Encoded value of the highest version in a comma-separated list.
pub fn highest_in(list: &str) -> Option<u64> {
    highest_entry(list).map(|(value, _)| value)
}

/// Check whether `target` numerically equals some entry of `list`.
///
/// This is an exact numeric comparison, not a substring test:
/// "1.5" matches "1.05" but not "1.50".
pub fn contains(target: &str, list: &str) -> bool {
    let target = match encode(target) {
        Ok(v) => v,
        Err(e) => {
            debug!("target version is not encodable: {e}");
            return false;
        }
    };

    entries(list).any(|entry| encode(entry).map_or(false, |v| v == target))
}
