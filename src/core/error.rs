//! Error types for the deck engine.
//!
//! Only `GenerationError::DefinitionNotFound` ever reaches a caller of
//! `generate_instance`. Version format problems are recovered locally by
//! skipping the offending candidate, and malformed template entries or
//! unresolved draws degrade to a literal or an empty placeholder.

/// A version component that is not a non-negative integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid version '{input}': component '{component}' is not a non-negative integer")]
pub struct VersionFormatError {
    /// Full version string being encoded.
    pub input: String,
    /// Offending component.
    pub component: String,
}

impl VersionFormatError {
    pub(crate) fn new(input: &str, component: &str) -> Self {
        Self {
            input: input.to_string(),
            component: component.to_string(),
        }
    }
}

/// Failure to produce a generated instance.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No monster definition matches the requested name, level and version.
    #[error("no matching definition for {name} ({level}){}", version_suffix(.version))]
    DefinitionNotFound {
        name: String,
        level: String,
        version: Option<String>,
    },
}

fn version_suffix(version: &Option<String>) -> String {
    version
        .as_ref()
        .map(|v| format!(" version {v}"))
        .unwrap_or_default()
}

/// Failure to load, save or interpret catalog data.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON dump could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary snapshot could not be read or written
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// Unknown monster level text
    #[error("invalid monster level: {0}")]
    InvalidLevel(String),
}

/// Result type for generation.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_message() {
        let err = VersionFormatError::new("1.x", "x");
        assert_eq!(
            err.to_string(),
            "invalid version '1.x': component 'x' is not a non-negative integer"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = GenerationError::DefinitionNotFound {
            name: "White Lion".into(),
            level: "L1".into(),
            version: None,
        };
        assert_eq!(err.to_string(), "no matching definition for White Lion (L1)");

        let err = GenerationError::DefinitionNotFound {
            name: "White Lion".into(),
            level: "L1".into(),
            version: Some("1.5".into()),
        };
        assert_eq!(
            err.to_string(),
            "no matching definition for White Lion (L1) version 1.5"
        );
    }
}
