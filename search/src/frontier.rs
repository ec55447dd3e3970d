//! Insertion-ordered frontier with lifetime dedup.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) for deterministic
//! iteration order at reporting boundaries.
//!
//! The open set keeps entries in insertion order because four of the six
//! selection policies are positional (FIFO, LIFO, uniform-random, and
//! first-minimal tie-breaking for the keyed policies). The visited set is
//! lifetime-scoped: a fingerprint admitted once is never admitted again,
//! even after the node moves to the closed set, so a cheaper later path to
//! the same permutation is discarded rather than relaxed. First-discovered
//! path wins; this intentionally trades optimality for stable behavior.

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;

use crate::node::SearchNodeV1;

/// A pending entry: the arena id plus the cost fields the keyed selection
/// policies order by. The full node stays in the run's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    node_id: usize,
    g_cost: u64,
    h_cost: u64,
}

impl FrontierEntry {
    fn f_cost(self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Dedup-aware open set.
///
/// Maintains:
/// - A `VecDeque` of pending entries in insertion order
/// - A `BTreeSet<String>` of every fingerprint hex digest ever admitted
pub struct Frontier {
    entries: VecDeque<FrontierEntry>,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Admit a node and mark its fingerprint as visited.
    ///
    /// Returns `false` if the fingerprint was already visited (node not
    /// added). The visited set never shrinks, so this covers membership in
    /// both the open and closed sets.
    pub fn push(&mut self, node: &SearchNodeV1) -> bool {
        let fp = node.fingerprint.hex_digest().to_string();
        if !self.visited.insert(fp) {
            return false;
        }
        self.entries.push_back(FrontierEntry {
            node_id: node.node_id,
            g_cost: node.g_cost,
            h_cost: node.h_cost,
        });
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// FIFO selection: the oldest-inserted entry.
    pub fn pop_oldest(&mut self) -> Option<usize> {
        self.entries.pop_front().map(|e| e.node_id)
    }

    /// LIFO selection: the most-recently-inserted entry.
    pub fn pop_newest(&mut self) -> Option<usize> {
        self.entries.pop_back().map(|e| e.node_id)
    }

    /// Uniform-random selection over the current entries.
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.entries.len());
        self.entries.remove(index).map(|e| e.node_id)
    }

    /// Greedy selection: minimum `h_cost`, ties broken by insertion order.
    pub fn pop_min_h(&mut self) -> Option<usize> {
        self.pop_min_by_key(|e| e.h_cost)
    }

    /// Cost-aware selection: minimum `f_cost`, ties broken by insertion order.
    pub fn pop_min_f(&mut self) -> Option<usize> {
        self.pop_min_by_key(FrontierEntry::f_cost)
    }

    /// Remove and return the first entry with the minimal key.
    ///
    /// A strict `<` scan keeps the earliest-inserted minimal entry, matching
    /// first-minimal tie-breaking.
    fn pop_min_by_key<F: Fn(FrontierEntry) -> u64>(&mut self, key: F) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (index, &entry) in self.entries.iter().enumerate() {
            let k = key(entry);
            if best.map_or(true, |(_, best_key)| k < best_key) {
                best = Some((index, k));
            }
        }
        let (index, _) = best?;
        self.entries.remove(index).map(|e| e.node_id)
    }

    /// Check if a fingerprint has been admitted at any point in this run.
    #[must_use]
    pub fn is_visited(&self, fingerprint_hex: &str) -> bool {
        self.visited.contains(fingerprint_hex)
    }

    /// Current open-set size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the open set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of open-set size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Arena ids of the entries still pending, in insertion order.
    #[must_use]
    pub fn remaining_ids(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.node_id).collect()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
