//! # Digest Computation
//!
//! Hashes the UTF-8 bytes of a token preimage and renders the result as
//! lowercase hex. MD5 is the default and produces 32 hex characters;
//! SHA-256 produces 64.

use std::str::FromStr;

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// The hash algorithm used to compute a token digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// MD5 — 128-bit digest, the token format's native algorithm.
    #[default]
    Md5,
    /// SHA-256 — 256-bit digest.
    Sha256,
}

impl DigestAlgorithm {
    /// The lowercase name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }

    /// Length of the hex rendering of a digest from this algorithm.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }

    /// Hash `data` and return the raw digest bytes.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(CryptoError::AlgorithmUnavailable(s.to_string())),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash `data` with `algorithm` and return the lowercase hex digest.
pub fn digest_hex(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    algorithm
        .digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
