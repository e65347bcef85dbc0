//! # Key Finder
//!
//! Locates the first field with a given name (by default `destination`)
//! anywhere in a JSON document and returns its value as text.
//!
//! ## Traversal Order
//!
//! Pre-order, depth-first. At an object, fields are visited in their
//! serialized order; a field whose name matches is the result, otherwise the
//! traversal descends into that field's value before moving on to the next
//! sibling. Array elements are visited by ascending index. So for
//!
//! ```json
//! {"x": {"destination": "first"}, "destination": "second"}
//! ```
//!
//! the result is `"first"`: the nested object under `x` is reached before
//! the root's own `destination` field.
//!
//! ## Textualization
//!
//! Strings are returned without quotes, numbers exactly as written in the
//! document (serde_json's `arbitrary_precision` keeps the source digits),
//! booleans as `true`/`false`, and null as `null`. A match whose value is
//! an object or array is handled by [`ContainerPolicy`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DhgError, ValidationError};

/// The field name searched for unless configured otherwise.
pub const DESTINATION_KEY: &str = "destination";

/// Deepest container nesting a document may have. serde_json's parser
/// rejects the 128th nested container, so documents are checked against
/// this bound before parsing and reported as [`DhgError::DepthExceeded`].
pub const MAX_SUPPORTED_DEPTH: usize = 127;

/// Default nesting limit for the search.
pub const DEFAULT_MAX_DEPTH: usize = MAX_SUPPORTED_DEPTH;

/// How a matching field whose value is an object or array is textualized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerPolicy {
    /// The match yields the empty string.
    #[default]
    Empty,
    /// The match yields the compact JSON serialization of the value.
    Json,
    /// The match is ignored and the search continues inside the value.
    Skip,
}

impl ContainerPolicy {
    /// The lowercase name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json => "json",
            Self::Skip => "skip",
        }
    }
}

impl FromStr for ContainerPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "json" => Ok(Self::Json),
            "skip" => Ok(Self::Skip),
            _ => Err(ValidationError::UnknownContainerPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContainerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Depth-first search for the first field with a given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFinder {
    key: String,
    max_depth: usize,
    container_policy: ContainerPolicy,
}

impl Default for KeyFinder {
    fn default() -> Self {
        Self {
            key: DESTINATION_KEY.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            container_policy: ContainerPolicy::default(),
        }
    }
}

impl KeyFinder {
    /// Create a finder for `key`. The key is matched literally and
    /// case-sensitively.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        Ok(Self {
            key,
            ..Self::default()
        })
    }

    /// Set the maximum container nesting the traversal will enter, between
    /// 1 and [`MAX_SUPPORTED_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self, ValidationError> {
        if max_depth == 0 {
            return Err(ValidationError::ZeroDepth);
        }
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ValidationError::DepthTooLarge {
                requested: max_depth,
                max: MAX_SUPPORTED_DEPTH,
            });
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    /// Set how container-valued matches are textualized.
    pub fn with_container_policy(mut self, policy: ContainerPolicy) -> Self {
        self.container_policy = policy;
        self
    }

    /// The field name this finder searches for.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The configured nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The configured container policy.
    pub fn container_policy(&self) -> ContainerPolicy {
        self.container_policy
    }

    /// Search `root` and return the text of the first matching field.
    ///
    /// Returns `Ok(None)` when no field matches, including when `root` is a
    /// scalar. Fails only when the traversal reaches nesting deeper than
    /// the configured limit before finding a match.
    pub fn find(&self, root: &Value) -> Result<Option<String>, DhgError> {
        let found = self.search(root, 0)?;
        match &found {
            Some(text) => tracing::debug!(key = %self.key, len = text.len(), "key found"),
            None => tracing::debug!(key = %self.key, "key not present in document"),
        }
        Ok(found)
    }

    fn search(&self, node: &Value, depth: usize) -> Result<Option<String>, DhgError> {
        match node {
            Value::Object(fields) => {
                let depth = self.enter(depth)?;
                for (name, value) in fields {
                    if *name == self.key {
                        if let Some(text) = self.match_text(value) {
                            return Ok(Some(text));
                        }
                    }
                    if let Some(found) = self.search(value, depth)? {
                        return Ok(Some(found));
                    }
                }
                Ok(None)
            }
            Value::Array(items) => {
                let depth = self.enter(depth)?;
                for item in items {
                    if let Some(found) = self.search(item, depth)? {
                        return Ok(Some(found));
                    }
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, DhgError> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(DhgError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(next)
    }

    /// Text for a matched value, or `None` when the match should be skipped.
    fn match_text(&self, value: &Value) -> Option<String> {
        if let Some(text) = scalar_text(value) {
            return Some(text);
        }
        match self.container_policy {
            ContainerPolicy::Empty => Some(String::new()),
            ContainerPolicy::Json => Some(value.to_string()),
            ContainerPolicy::Skip => None,
        }
    }
}

/// Textual form of a scalar value; `None` for objects and arrays.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Object(_) | Value::Array(_) => None,
    }
}

/// Find the first `destination` field using the default configuration.
pub fn find_destination(root: &Value) -> Result<Option<String>, DhgError> {
    KeyFinder::default().find(root)
}
