//! Flipsort Harness: strategy comparison driver for the search engine.
//!
//! The harness owns orchestration and reporting only: it builds one root,
//! runs every strategy against it, measures wall-clock duration around each
//! call, and renders the results as a fixed-width comparison table or a
//! serialized JSON report. It implements no search logic — the engine's
//! result contract is consumed as-is.

#![forbid(unsafe_code)]

pub mod report;
pub mod runner;

pub use report::{render_table, RunReportV1, StrategyReportV1};
pub use runner::run_all;
