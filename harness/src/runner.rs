//! Comparison runner: one root, all six strategies, timed.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flipsort_kernel::{ConfigError, Permutation};
use flipsort_search::{SearchNodeV1, SearchRunV1, Strategy};

use crate::report::{RunReportV1, StrategyReportV1};

/// Summarize a finished run for the report table.
#[must_use]
pub fn summarize(run: &SearchRunV1, elapsed_ms: u64) -> StrategyReportV1 {
    let goal = run.goal_node();
    let informed = run.strategy.is_informed();
    StrategyReportV1 {
        strategy: run.strategy.name().to_string(),
        label: run.strategy.label().to_string(),
        solved: goal.is_some(),
        goal_table: goal.map(|g| g.state.to_string()),
        open_size: run.frontier_remaining.len(),
        closed_size: run.explored.len(),
        elapsed_ms,
        g_cost: goal.filter(|_| informed).map(|g| g.g_cost),
        h_cost: goal.filter(|_| informed).map(|g| g.h_cost),
        f_cost: goal.filter(|_| informed).map(SearchNodeV1::f_cost),
        path_len: goal.map(|g| run.flip_sequence(g.node_id).len()),
    }
}

/// Build a seeded root and run every strategy against clones of it.
///
/// The same `seed` drives the root shuffle and each Random-strategy draw,
/// so an entire report is reproducible from `(size, seed)`.
///
/// # Errors
///
/// Returns [`ConfigError::ZeroSize`] if `size == 0`.
pub fn run_all(size: usize, seed: u64) -> Result<RunReportV1, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let root = Permutation::shuffled(size, &mut rng)?;

    let mut strategies = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let started = Instant::now();
        let run = flipsort_search::run(strategy, root.clone(), Some(seed));
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        strategies.push(summarize(&run, elapsed_ms));
    }

    Ok(RunReportV1 {
        size,
        seed,
        root_table: root.to_string(),
        strategies,
    })
}
