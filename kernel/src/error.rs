//! Typed construction errors.
//!
//! The kernel fails only at construction time. Once a [`crate::Permutation`]
//! exists, every operation on it (goal test, flip, fingerprinting) is a
//! total function and cannot fail.

use thiserror::Error;

/// Invalid construction parameters. Surfaced immediately, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A permutation must contain at least one element.
    #[error("permutation size must be at least 1")]
    ZeroSize,

    /// The supplied table is not a permutation of `1..=len`.
    #[error("table of length {len} is not a permutation of 1..={len}: {detail}")]
    NotAPermutation {
        /// Length of the rejected table.
        len: usize,
        /// What the validation scan found.
        detail: String,
    },
}
