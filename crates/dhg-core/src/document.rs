//! # Input Loader
//!
//! Reads a JSON document from disk and parses it into a
//! [`serde_json::Value`] tree. Object fields keep their serialized order
//! (the workspace enables serde_json's `preserve_order` feature), which the
//! key finder relies on.
//!
//! The file handle lives only inside [`std::fs::read_to_string`], so it is
//! released on every path, including parse failure.
//!
//! Before parsing, the text is scanned for container nesting deeper than
//! [`MAX_SUPPORTED_DEPTH`]. Such documents fail as
//! [`DhgError::DepthExceeded`] rather than as a parser recursion error.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::DhgError;
use crate::finder::MAX_SUPPORTED_DEPTH;

/// Path label used when parsing text that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Read and parse the JSON document at `path`.
pub fn load_document(path: &Path) -> Result<Value, DhgError> {
    let text = std::fs::read_to_string(path).map_err(|source| DhgError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read JSON document");

    check_nesting(&text, MAX_SUPPORTED_DEPTH)?;
    serde_json::from_str(&text).map_err(|source| DhgError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `text` as a JSON document.
pub fn parse_document(text: &str) -> Result<Value, DhgError> {
    check_nesting(text, MAX_SUPPORTED_DEPTH)?;
    serde_json::from_str(text).map_err(|source| DhgError::Parse {
        path: PathBuf::from(INLINE_SOURCE),
        source,
    })
}

/// Reject text whose brackets nest more than `limit` deep.
///
/// Brackets inside string literals are ignored. Malformed text that stays
/// within the limit passes through so the parser can report it.
fn check_nesting(text: &str, limit: usize) -> Result<(), DhgError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    tracing::debug!(limit, "document nesting exceeds supported depth");
                    return Err(DhgError::DepthExceeded { limit });
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
