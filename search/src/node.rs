//! Core search node type.

use flipsort_kernel::{ContentHash, Permutation};

/// An immutable node in a search run's arena.
///
/// Nodes are created in arena order, so `node_id` doubles as the index into
/// [`crate::SearchRunV1::nodes`] and as the creation-order tiebreak. Identity
/// for dedup is `fingerprint` alone — two nodes with the same permutation
/// are duplicates regardless of how their costs or parents differ.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Arena index, assigned in creation order (root = 0).
    pub node_id: usize,
    /// Parent arena index (`None` for the root). Back-reference only,
    /// used solely for path reconstruction.
    pub parent_id: Option<usize>,
    /// Full immutable state at this node.
    pub state: Permutation,
    /// Content fingerprint of the state under the dedup policy.
    pub fingerprint: ContentHash,
    /// Cumulative path cost: reversal moves from the root (root = 0).
    pub g_cost: u64,
    /// Heuristic estimate of moves remaining (0 for uninformed strategies).
    pub h_cost: u64,
    /// The split index that produced this node from its parent
    /// (`None` for the root).
    pub producing_split: Option<usize>,
}

impl SearchNodeV1 {
    /// Compute `f_cost = g_cost + h_cost` (the cost-aware ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}
