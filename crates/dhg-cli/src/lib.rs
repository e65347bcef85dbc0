//! # dhg-cli — Destination Hash Generator Command-Line Interface
//!
//! Provides the `dhg` binary:
//!
//! ```bash
//! dhg <PRN> <path to json file>
//! dhg --config dhg.yaml "Order 77" shipment.json
//! dhg --verify 'e299dc38e790cf90f0b051030b4892cf;AbC12345' X1 order.json
//! ```
//!
//! ## Output Contract
//!
//! - stdout carries exactly one line: the `digest;nonce` token, or
//!   `valid`/`invalid` in verification mode.
//! - Diagnostics and log events go to stderr.
//! - Exit codes: [`EXIT_SUCCESS`], [`EXIT_FAILURE`], [`EXIT_USAGE`].
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the pipeline in [`generate`].
//! - Domain logic lives in `dhg-core` and `dhg-crypto`; this crate wires it
//!   together and maps outcomes to exit codes.

pub mod config;
pub mod generate;

use std::io::Write;

use dhg_core::DhgError;

/// Run completed and printed its result.
pub const EXIT_SUCCESS: u8 = 0;

/// Run failed: key absent, unreadable input, bad configuration, or a
/// token that did not verify.
pub const EXIT_FAILURE: u8 = 1;

/// Wrong number of arguments or an unknown flag.
pub const EXIT_USAGE: u8 = 2;

/// Write the diagnostic for a failed run to `sink` and return its exit code.
///
/// A missing key is an expected outcome and gets its one-line message. Any
/// other failure gets the full error chain.
pub fn report_failure(err: &anyhow::Error, sink: &mut impl Write) -> u8 {
    match err.downcast_ref::<DhgError>() {
        Some(dhg_err) if matches!(dhg_err, DhgError::KeyNotFound { .. }) => {
            let _ = writeln!(sink, "{dhg_err}");
        }
        _ => {
            let _ = writeln!(sink, "Error: {err:?}");
        }
    }
    EXIT_FAILURE
}
