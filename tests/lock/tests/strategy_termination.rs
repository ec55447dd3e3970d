//! Termination lock: every strategy reaches a goal on small roots.
//!
//! The permutation space for n in {3, 4, 5} is tiny (at most 120 states),
//! so a goal is always reachable and lifetime dedup cannot wall it off.

use flipsort_search::{run, SearchOutcomeV1, Strategy};
use lock_tests::seeded_root;

#[test]
fn all_strategies_succeed_for_sizes_three_through_five() {
    for size in 3..=5 {
        for strategy in Strategy::ALL {
            let root = seeded_root(size, 0xF11);
            let result = run(strategy, root, Some(0xF11));
            let goal = result.goal_node().unwrap_or_else(|| {
                panic!("{strategy} must terminate with a goal at size {size}")
            });
            assert!(goal.state.is_sorted(), "{strategy} size {size}");
            assert!(
                result.explored.len() <= (1..=size).product::<usize>(),
                "{strategy} size {size}: explored more states than exist"
            );
        }
    }
}

#[test]
fn size_one_succeeds_immediately_for_every_strategy() {
    for strategy in Strategy::ALL {
        let result = run(strategy, seeded_root(1, 4), Some(4));
        assert_eq!(result.outcome, SearchOutcomeV1::GoalReached { node_id: 0 });
        assert_eq!(result.explored, vec![0]);
        assert!(result.frontier_remaining.is_empty());
    }
}

#[test]
fn goal_paths_replay_to_the_goal_table() {
    for strategy in Strategy::ALL {
        let root = seeded_root(5, 0xBEEF);
        let result = run(strategy, root.clone(), Some(0xBEEF));
        let goal_id = result.goal_node().unwrap().node_id;
        let mut replay = root;
        for split in result.flip_sequence(goal_id) {
            replay = replay.flip(split);
        }
        assert!(replay.is_sorted(), "{strategy}: flip sequence must sort the root");
        assert_eq!(
            u64::try_from(result.flip_sequence(goal_id).len()).unwrap(),
            result.goal_node().unwrap().g_cost,
            "{strategy}: path length equals goal g"
        );
    }
}
