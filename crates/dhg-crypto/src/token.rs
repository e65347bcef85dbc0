//! # Token Building and Verification
//!
//! A token binds a normalized identifier and a destination to a nonce:
//!
//! ```text
//! digest = hex(H(prn ++ destination ++ nonce))
//! token  = digest ";" nonce
//! ```
//!
//! The preimage has no separators, and the digest is taken over its UTF-8
//! bytes. Given the same three inputs the digest is always the same, which
//! is what lets [`TokenBuilder::verify`] recompute it from a token line.

use std::str::FromStr;

use dhg_core::Prn;

use crate::digest::{digest_hex, DigestAlgorithm};
use crate::error::CryptoError;
use crate::nonce::Nonce;

/// Separator between the digest and the nonce in a token line.
pub const TOKEN_SEPARATOR: char = ';';

/// A `digest;nonce` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    digest: String,
    nonce: Nonce,
}

impl Token {
    /// The lowercase hex digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// The nonce mixed into the digest.
    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.digest, self.nonce)
    }
}

impl FromStr for Token {
    type Err = CryptoError;

    /// Parse a token line. Surrounding whitespace is ignored; the digest
    /// must be non-empty lowercase hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (digest, nonce) = line.split_once(TOKEN_SEPARATOR).ok_or_else(|| {
            CryptoError::MalformedToken(format!("missing '{TOKEN_SEPARATOR}' separator"))
        })?;
        if digest.is_empty() {
            return Err(CryptoError::MalformedToken("digest is empty".to_string()));
        }
        if !digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(CryptoError::MalformedToken(
                "digest must be lowercase hex".to_string(),
            ));
        }
        let nonce =
            Nonce::parse(nonce).map_err(|e| CryptoError::MalformedToken(e.to_string()))?;
        Ok(Self {
            digest: digest.to_string(),
            nonce,
        })
    }
}

/// Builds and verifies tokens with a fixed digest algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenBuilder {
    algorithm: DigestAlgorithm,
}

impl TokenBuilder {
    /// Builder using `algorithm`.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The digest algorithm in use.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Build the token for `prn`, `destination`, and `nonce`.
    pub fn build(&self, prn: &Prn, destination: &str, nonce: Nonce) -> Token {
        let digest = self.compute(prn, destination, &nonce);
        tracing::debug!(algorithm = %self.algorithm, "token digest computed");
        Token { digest, nonce }
    }

    /// Whether `token` was built from `prn` and `destination`.
    pub fn verify(&self, token: &Token, prn: &Prn, destination: &str) -> bool {
        self.compute(prn, destination, &token.nonce) == token.digest
    }

    fn compute(&self, prn: &Prn, destination: &str, nonce: &Nonce) -> String {
        let preimage = format!("{prn}{destination}{nonce}");
        digest_hex(self.algorithm, preimage.as_bytes())
    }
}
