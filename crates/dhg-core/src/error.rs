//! # Error Hierarchy
//!
//! Structured error types for document loading and key search, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! File and parse failures carry the offending path so that the operator
//! sees which input was rejected without re-running under a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the destination hash pipeline.
#[derive(Error, Debug)]
pub enum DhgError {
    /// The input file does not exist or could not be read.
    #[error("failed to read JSON document {}: {source}", path.display())]
    File {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file was read but is not well-formed JSON.
    #[error("failed to parse JSON document {}: {source}", path.display())]
    Parse {
        /// The path the content came from (`<inline>` for in-memory input).
        path: PathBuf,
        /// The underlying parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but no field with the target key exists.
    #[error("No '{key}' key found in the JSON file.")]
    KeyNotFound {
        /// The key that was searched for.
        key: String,
    },

    /// The document nests deeper than the configured traversal limit.
    #[error("document nesting exceeds the maximum traversal depth of {limit}")]
    DepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for configuration values and domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The key to search for must be non-empty.
    #[error("invalid search key: must be non-empty")]
    EmptyKey,

    /// A depth limit of zero would reject every document, scalars included.
    #[error("invalid maximum depth: must be at least 1")]
    ZeroDepth,

    /// The depth limit exceeds what the JSON parser can represent.
    #[error("invalid maximum depth {requested}: must be at most {max}")]
    DepthTooLarge {
        /// The limit that was asked for.
        requested: usize,
        /// The largest supported limit.
        max: usize,
    },

    /// The container policy name is not recognized.
    #[error("unknown container policy \"{0}\" (expected empty, json, or skip)")]
    UnknownContainerPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_not_found_matches_cli_diagnostic() {
        let err = DhgError::KeyNotFound {
            key: "destination".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "No 'destination' key found in the JSON file."
        );
    }

    #[test]
    fn file_error_display_includes_path() {
        let err = DhgError::File {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn parse_error_display_includes_path() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = DhgError::Parse {
            path: PathBuf::from("input.json"),
            source,
        };
        assert!(format!("{err}").contains("input.json"));
    }

    #[test]
    fn parse_error_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = DhgError::Parse {
            path: PathBuf::from("x.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn depth_exceeded_display() {
        let err = DhgError::DepthExceeded { limit: 16 };
        assert!(format!("{err}").contains("16"));
    }

    #[test]
    fn validation_error_converts() {
        let err = DhgError::from(ValidationError::EmptyKey);
        assert!(format!("{err}").contains("non-empty"));
    }

    #[test]
    fn unknown_container_policy_display() {
        let err = ValidationError::UnknownContainerPolicy("flatten".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("flatten"));
        assert!(msg.contains("skip"));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e1 = DhgError::DepthExceeded { limit: 1 };
        let e2 = ValidationError::ZeroDepth;
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}
