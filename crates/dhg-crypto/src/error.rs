//! # Cryptographic Error Types
//!
//! Structured errors for digest selection, nonce handling, and token
//! parsing. Uses `thiserror` for ergonomic error definitions with
//! diagnostic context.

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The requested digest algorithm is not available in this build.
    #[error("digest algorithm unavailable: \"{0}\" (supported: md5, sha256)")]
    AlgorithmUnavailable(String),

    /// A nonce is empty or contains characters outside `[A-Za-z0-9]`.
    #[error("invalid nonce: {0}")]
    InvalidNonce(String),

    /// A token line does not have the `<hex digest>;<nonce>` shape.
    #[error("malformed token: {0}")]
    MalformedToken(String),
}
