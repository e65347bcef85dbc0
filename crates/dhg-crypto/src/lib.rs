//! # dhg-crypto — Cryptographic Primitives
//!
//! Provides the building blocks that turn a normalized identifier and a
//! destination string into a token line:
//!
//! - **Digests** — MD5 (the default, 32 hex chars) and SHA-256, selected by
//!   [`DigestAlgorithm`].
//! - **Nonces** — fixed-length alphanumeric strings drawn from an injected,
//!   seedable random source ([`NonceGenerator`]).
//! - **Tokens** — `digest;nonce` lines built and verified by
//!   [`TokenBuilder`].
//!
//! ## Crate Policy
//!
//! - Depends only on `dhg-core` internally.
//! - Digest computation is a pure function of its input; all randomness
//!   lives in the nonce generator.

pub mod digest;
pub mod error;
pub mod nonce;
pub mod token;

pub use digest::{digest_hex, DigestAlgorithm};
pub use error::CryptoError;
pub use nonce::{Nonce, NonceGenerator, NONCE_ALPHABET, NONCE_LENGTH};
pub use token::{Token, TokenBuilder, TOKEN_SEPARATOR};
