//! Dedup lock: no permutation appears twice across open ∪ closed, for any
//! strategy, and first-discovered paths are kept as-is.

use std::collections::BTreeSet;

use flipsort_search::{run, Strategy};
use lock_tests::seeded_root;

#[test]
fn open_and_closed_sets_never_share_a_permutation() {
    for size in 3..=6 {
        for strategy in Strategy::ALL {
            let result = run(strategy, seeded_root(size, 0xD0_0D), Some(0xD0_0D));
            let mut seen = BTreeSet::new();
            for &id in result.explored.iter().chain(&result.frontier_remaining) {
                let digest = result.nodes[id].fingerprint.hex_digest().to_string();
                assert!(
                    seen.insert(digest),
                    "{strategy} size {size}: permutation {} admitted twice",
                    result.nodes[id].state
                );
            }
        }
    }
}

#[test]
fn arena_fingerprints_are_all_distinct() {
    // The arena only ever holds admitted nodes, so fingerprint uniqueness
    // must hold over the whole arena too, not just the final sets.
    for strategy in Strategy::ALL {
        let result = run(strategy, seeded_root(6, 99), Some(99));
        let digests: BTreeSet<&str> = result
            .nodes
            .iter()
            .map(|node| node.fingerprint.hex_digest())
            .collect();
        assert_eq!(digests.len(), result.nodes.len(), "{strategy}");
    }
}

#[test]
fn child_costs_step_by_one_from_their_parents() {
    for strategy in Strategy::ALL {
        let result = run(strategy, seeded_root(5, 5), Some(5));
        for node in &result.nodes {
            match node.parent_id {
                None => assert_eq!(node.g_cost, 0, "{strategy}: root g"),
                Some(parent) => assert_eq!(
                    node.g_cost,
                    result.nodes[parent].g_cost + 1,
                    "{strategy}: child g"
                ),
            }
        }
    }
}
