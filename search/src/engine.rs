//! Search entry point and the shared expansion loop.
//!
//! One loop serves all six strategies: select a node per the strategy's
//! policy, move it to the closed set, goal-test it, otherwise expand it and
//! dedup-push the children. The loop has exactly two terminal states — goal
//! reached, or frontier exhausted — and the second is a result value, never
//! an error.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use flipsort_kernel::Permutation;

use crate::frontier::Frontier;
use crate::node::SearchNodeV1;
use crate::strategy::Strategy;

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcomeV1 {
    /// A sorted permutation was selected from the frontier.
    GoalReached {
        /// Arena id of the goal node.
        node_id: usize,
    },
    /// The frontier emptied before a goal was selected. Unreachable for a
    /// fully explored finite permutation space, but still a well-defined
    /// result rather than a panic.
    FrontierExhausted,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes expanded (selected, goal-tested negative, and enumerated).
    pub expansions: u64,
    /// Children generated, before dedup.
    pub generated: u64,
    /// Children discarded because their permutation was already admitted.
    pub duplicates_suppressed: u64,
    /// High-water mark of the open set.
    pub frontier_high_water: u64,
}

/// Result of a search execution.
///
/// Carries the full node arena so the frontier and explored collections can
/// be reported and the goal path reconstructed. Check
/// [`SearchRunV1::goal_node`] or match on `outcome` for the verdict.
#[derive(Debug)]
pub struct SearchRunV1 {
    /// The strategy that produced this run.
    pub strategy: Strategy,
    /// Terminal state of the loop.
    pub outcome: SearchOutcomeV1,
    /// Every node created during the run; `node_id` indexes this vector.
    pub nodes: Vec<SearchNodeV1>,
    /// Arena ids still pending in the frontier at termination, in
    /// insertion order.
    pub frontier_remaining: Vec<usize>,
    /// Arena ids of expanded (or goal) nodes, in selection order.
    pub explored: Vec<usize>,
    /// Run counters.
    pub stats: SearchStatsV1,
}

impl SearchRunV1 {
    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNodeV1> {
        match self.outcome {
            SearchOutcomeV1::GoalReached { node_id } => Some(&self.nodes[node_id]),
            SearchOutcomeV1::FrontierExhausted => None,
        }
    }

    /// Reconstruct the root-to-node path by walking `parent_id` links.
    #[must_use]
    pub fn reconstruct_path(&self, node_id: usize) -> Vec<&SearchNodeV1> {
        let mut path = Vec::new();
        let mut current = Some(node_id);
        while let Some(id) = current {
            path.push(&self.nodes[id]);
            current = self.nodes[id].parent_id;
        }
        path.reverse();
        path
    }

    /// The split indices applied along the root-to-node path.
    #[must_use]
    pub fn flip_sequence(&self, node_id: usize) -> Vec<usize> {
        self.reconstruct_path(node_id)
            .iter()
            .filter_map(|node| node.producing_split)
            .collect()
    }
}

/// Run one strategy to completion from `root`.
///
/// `seed` drives the Random strategy's selection; the other five ignore it.
/// `None` seeds from entropy, so pass `Some(..)` whenever reproducibility
/// matters.
#[must_use]
pub fn run(strategy: Strategy, root: Permutation, seed: Option<u64>) -> SearchRunV1 {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_with_rng(strategy, root, &mut rng)
}

/// Run one strategy to completion with a caller-owned random source.
pub fn run_with_rng<R: Rng + ?Sized>(
    strategy: Strategy,
    root: Permutation,
    rng: &mut R,
) -> SearchRunV1 {
    let heuristic = strategy.heuristic();
    debug!(strategy = %strategy, size = root.len(), "search start");

    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut frontier = Frontier::new();
    let mut explored: Vec<usize> = Vec::new();
    let mut stats = SearchStatsV1::default();

    let root_node = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        fingerprint: root.fingerprint(),
        g_cost: 0,
        h_cost: heuristic.estimate(&root),
        producing_split: None,
        state: root,
    };
    frontier.push(&root_node);
    nodes.push(root_node);

    let outcome = loop {
        let selected = match strategy {
            Strategy::Breadth => frontier.pop_oldest(),
            Strategy::Depth => frontier.pop_newest(),
            Strategy::Random => frontier.pop_random(rng),
            Strategy::Heuristic1 => frontier.pop_min_h(),
            Strategy::Heuristic2 | Strategy::Heuristic3 => frontier.pop_min_f(),
        };
        let Some(current_id) = selected else {
            break SearchOutcomeV1::FrontierExhausted;
        };
        explored.push(current_id);

        if nodes[current_id].state.is_sorted() {
            break SearchOutcomeV1::GoalReached {
                node_id: current_id,
            };
        }

        stats.expansions += 1;
        trace!(
            node_id = current_id,
            g = nodes[current_id].g_cost,
            h = nodes[current_id].h_cost,
            "expanding"
        );

        // Children in increasing split order so LIFO selection remains
        // reproducible (the last-generated child pops first under Depth).
        for split in 0..nodes[current_id].state.flip_count() {
            let state = nodes[current_id].state.flip(split);
            let fingerprint = state.fingerprint();
            stats.generated += 1;
            if frontier.is_visited(fingerprint.hex_digest()) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = SearchNodeV1 {
                node_id: nodes.len(),
                parent_id: Some(current_id),
                fingerprint,
                g_cost: nodes[current_id].g_cost + 1,
                h_cost: heuristic.estimate(&state),
                producing_split: Some(split),
                state,
            };
            frontier.push(&child);
            nodes.push(child);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug!(
        strategy = %strategy,
        ?outcome,
        expansions = stats.expansions,
        generated = stats.generated,
        duplicates = stats.duplicates_suppressed,
        "search end"
    );

    SearchRunV1 {
        strategy,
        outcome,
        nodes,
        frontier_remaining: frontier.remaining_ids(),
        explored,
        stats,
    }
}
