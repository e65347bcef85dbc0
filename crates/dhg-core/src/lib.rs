#![deny(missing_docs)]

//! # dhg-core — Foundational Types for the Destination Hash Generator
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `tracing` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** The caller identifier is a
//!    [`Prn`], normalized once at construction. A raw `&str` cannot be mixed
//!    into a digest by accident.
//!
//! 2. **One traversal.** [`KeyFinder`] is the single path from a parsed
//!    document to the destination text. Order, depth limit, and the handling
//!    of container-valued matches are all decided there.
//!
//! 3. **[`DhgError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod finder;
pub mod identity;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{load_document, parse_document};
pub use error::{DhgError, ValidationError};
pub use finder::{
    find_destination, scalar_text, ContainerPolicy, KeyFinder, DEFAULT_MAX_DEPTH,
    DESTINATION_KEY, MAX_SUPPORTED_DEPTH,
};
pub use identity::Prn;
