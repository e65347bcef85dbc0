//! # Caller Identifier
//!
//! The PRN is the caller-supplied identifier mixed into every digest. It is
//! normalized exactly once, at construction: lower-cased, with every U+0020
//! space removed. Other whitespace (tabs, newlines, non-breaking spaces) is
//! preserved.
//!
//! Normalization is idempotent, so a `Prn` built from an already-normalized
//! string is equal to the original.

/// A normalized caller identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prn(String);

impl Prn {
    /// Normalize `raw` and wrap it.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// The normalized identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lower-case `raw` and strip every space character.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "")
}

impl AsRef<str> for Prn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
