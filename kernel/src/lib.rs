//! Flipsort Kernel: the pure state carrier for prefix-reversal sorting.
//!
//! This crate owns the permutation state model and nothing else: the
//! [`Permutation`] type, its single legal action (the prefix-reversal
//! "flip"), canonical identity fingerprinting, and construction errors.
//! It knows nothing about frontiers, heuristics, or strategies — those
//! live in `flipsort-search`.
//!
//! # Crate dependency graph
//!
//! ```text
//! flipsort_kernel  ←  flipsort_search  ←  flipsort_harness
//! (pure carrier)      (frontier, nodes)    (runner, reports)
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod permutation;

pub use error::ConfigError;
pub use fingerprint::{canonical_hash, ContentHash};
pub use permutation::Permutation;
