//! Flipsort Search: pluggable frontier search over prefix-reversal states.
//!
//! This crate is the engine. It owns search nodes, the two heuristic
//! estimators, the dedup-aware frontier with its five selection policies,
//! and the one generic loop behind the six strategies. It depends only on
//! `flipsort_kernel` — it does NOT depend on `flipsort_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! flipsort_kernel  ←  flipsort_search  ←  flipsort_harness
//! (pure carrier)      (frontier, nodes)    (runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNodeV1`] — immutable arena node with fingerprint identity
//! - [`Heuristic`] — the estimator seam (none, inversion-sum, displacement)
//! - [`Frontier`] — insertion-ordered open set with lifetime dedup
//! - [`Strategy`] — the six selection policies
//! - [`SearchRunV1`] — the result contract (outcome, arena, open/closed sets)

#![forbid(unsafe_code)]

pub mod engine;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod strategy;

pub use engine::{run, run_with_rng, SearchOutcomeV1, SearchRunV1, SearchStatsV1};
pub use heuristic::Heuristic;
pub use node::SearchNodeV1;
pub use strategy::Strategy;
