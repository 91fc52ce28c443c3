//! Error types for rapid_depwalk
//!
//! This module defines the error types used throughout the library.
//! Category lookups and tree validation fail loudly; empty input never does.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DepWalkError>;

/// Which closed tag set a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Coarse part-of-speech codes (NOUN, VERB, ...)
    PartOfSpeech,
    /// Dependency relation codes (nsubj, obj, ...)
    DependencyRelation,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::PartOfSpeech => f.write_str("part-of-speech"),
            CategoryKind::DependencyRelation => f.write_str("dependency relation"),
        }
    }
}

/// Main error type for rapid_depwalk
#[derive(Error, Debug, Clone)]
pub enum DepWalkError {
    /// A tag code is outside the closed enumeration known to this crate.
    /// Usually means the annotation model uses a tag set we do not cover.
    #[error("Unknown {kind} code: {code:?}")]
    UnknownCategory { kind: CategoryKind, code: String },

    /// The head pointers or span boundaries do not describe a valid tree
    #[error("Malformed tree: {message}")]
    MalformedTree { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The annotation provider failed to produce a document
    #[error("Annotation provider error: {message}")]
    Provider { message: String },
}

impl DepWalkError {
    /// Create an unknown category error
    pub fn unknown_category(kind: CategoryKind, code: impl Into<String>) -> Self {
        Self::UnknownCategory {
            kind,
            code: code.into(),
        }
    }

    /// Create a malformed tree error
    pub fn malformed_tree(message: impl Into<String>) -> Self {
        Self::MalformedTree {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Check if this error points at a defect in the provider's output
    /// rather than at the caller (retrying cannot help either way)
    pub fn is_provider_defect(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. } | Self::MalformedTree { .. }
        )
    }
}

impl From<serde_json::Error> for DepWalkError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DepWalkError::unknown_category(CategoryKind::PartOfSpeech, "FOO");
        assert!(err.to_string().contains("Unknown part-of-speech code"));
        assert!(err.to_string().contains("FOO"));

        let err = DepWalkError::malformed_tree("head 9 outside sentence 0");
        assert!(err.to_string().contains("Malformed tree"));
        assert!(err.to_string().contains("head 9"));
    }

    #[test]
    fn test_is_provider_defect() {
        assert!(DepWalkError::malformed_tree("x").is_provider_defect());
        assert!(
            DepWalkError::unknown_category(CategoryKind::DependencyRelation, "y")
                .is_provider_defect()
        );
        assert!(!DepWalkError::invalid_config("z").is_provider_defect());
    }

    #[test]
    fn test_from_serde_json() {
        let err: DepWalkError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, DepWalkError::Serialization { .. }));
    }
}
