//! # Nonce Generation
//!
//! Each token carries a fresh alphanumeric nonce. Characters are drawn
//! independently and uniformly from the 62-character alphabet
//! `[A-Za-z0-9]`.
//!
//! The random source is owned by the [`NonceGenerator`] rather than pulled
//! from thread-local state, so tests and `--seed` runs can substitute a
//! seeded [`StdRng`]. Nonces are not required to be unpredictable and
//! collisions between runs are acceptable.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::CryptoError;

/// Number of characters in a standard token nonce.
pub const NONCE_LENGTH: usize = 8;

/// Every character a nonce may contain.
pub const NONCE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A non-empty string over [`NONCE_ALPHABET`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Validate a nonce received from outside, e.g. echoed in a token line.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        if s.is_empty() {
            return Err(CryptoError::InvalidNonce("nonce is empty".to_string()));
        }
        if let Some(bad) = s.chars().find(|c| !NONCE_ALPHABET.contains(*c)) {
            return Err(CryptoError::InvalidNonce(format!(
                "character {bad:?} is not in the nonce alphabet [A-Za-z0-9]"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The nonce text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the nonce.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a nonce cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces nonces from an injected random source.
pub struct NonceGenerator<R = StdRng> {
    rng: R,
}

impl NonceGenerator<StdRng> {
    /// Generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator whose output sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> NonceGenerator<R> {
    /// Wrap an arbitrary random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a nonce of [`NONCE_LENGTH`] characters.
    pub fn generate(&mut self) -> Nonce {
        Nonce(self.sample(NONCE_LENGTH))
    }

    /// Generate a nonce of `length` characters.
    pub fn generate_with_length(&mut self, length: usize) -> Result<Nonce, CryptoError> {
        if length == 0 {
            return Err(CryptoError::InvalidNonce(
                "nonce length must be at least 1".to_string(),
            ));
        }
        Ok(Nonce(self.sample(length)))
    }

    fn sample(&mut self, length: usize) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

impl<R> std::fmt::Debug for NonceGenerator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceGenerator").finish_non_exhaustive()
    }
}
