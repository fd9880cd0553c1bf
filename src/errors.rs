// Copyright 2025 Cowboy AI, LLC.

//! Error types for finite-set operations

use thiserror::Error;

/// Errors that can occur while building sets and maps or running the
/// enumerators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinSetError {
    /// The codomain of the first map is not the domain of the second
    #[error("Non-composable pair of maps: codomain {codomain} is not domain {domain}")]
    Composability {
        /// Rendering of the first map's codomain
        codomain: String,
        /// Rendering of the second map's domain
        domain: String,
    },

    /// A map is not single-valued (or not total) on some element
    #[error("Malformed map: {candidates} candidate images for {element}")]
    MalformedMap {
        /// The element whose image is ambiguous or missing
        element: String,
        /// Number of arrows found leaving that element
        candidates: usize,
    },

    /// The requested operation has no meaning for the given arguments
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A negative cardinality was requested
    #[error("Invalid cardinality: {0}")]
    InvalidCardinality(i64),

    /// A random map was requested into an empty codomain
    #[error("Cannot draw images for {domain_size} elements from an empty codomain")]
    EmptyCodomain {
        /// Size of the non-empty domain
        domain_size: usize,
    },

    /// An element namer produced a name that is already in the set
    #[error("Element name already in use: {0}")]
    NameCollision(String),

    /// An enumeration would exceed the configured policy limit
    #[error("Enumeration too large: {count} results exceed the limit of {limit}")]
    EnumerationTooLarge {
        /// Exact number of results the enumeration would produce
        count: u128,
        /// Configured maximum
        limit: u64,
    },
}

/// Result type for finite-set operations
pub type FinSetResult<T> = Result<T, FinSetError>;

impl FinSetError {
    /// Create an unsupported operation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        FinSetError::UnsupportedOperation(msg.into())
    }

    /// Check if this error was raised by composition
    pub fn is_composition_error(&self) -> bool {
        matches!(
            self,
            FinSetError::Composability { .. } | FinSetError::MalformedMap { .. }
        )
    }

    /// Check if this error was raised while constructing a set or a map
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            FinSetError::InvalidCardinality(_)
                | FinSetError::EmptyCodomain { .. }
                | FinSetError::NameCollision(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = FinSetError::Composability {
            codomain: "{x, y}".to_string(),
            domain: "{a}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Non-composable pair of maps: codomain {x, y} is not domain {a}"
        );

        let err = FinSetError::MalformedMap {
            element: "b".to_string(),
            candidates: 2,
        };
        assert_eq!(err.to_string(), "Malformed map: 2 candidate images for b");

        let err = FinSetError::unsupported("hom of two maps");
        assert_eq!(err.to_string(), "Unsupported operation: hom of two maps");

        let err = FinSetError::InvalidCardinality(-3);
        assert_eq!(err.to_string(), "Invalid cardinality: -3");

        let err = FinSetError::EnumerationTooLarge { count: 1024, limit: 100 };
        assert_eq!(
            err.to_string(),
            "Enumeration too large: 1024 results exceed the limit of 100"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(FinSetError::MalformedMap {
            element: "a".to_string(),
            candidates: 0
        }
        .is_composition_error());
        assert!(!FinSetError::InvalidCardinality(-1).is_composition_error());

        assert!(FinSetError::InvalidCardinality(-1).is_construction_error());
        assert!(FinSetError::EmptyCodomain { domain_size: 2 }.is_construction_error());
        assert!(!FinSetError::unsupported("x").is_construction_error());
    }
}
