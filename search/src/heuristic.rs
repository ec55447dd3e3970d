//! Heuristic estimators over a permutation.
//!
//! Both estimators are total functions of the table alone — they never see
//! costs or parent links — and both evaluate to exactly 0 on any sorted
//! sequence. Neither is claimed admissible or consistent, so the informed
//! strategies are best-effort rather than certified-optimal; that is a
//! property of this engine, not a bug to fix here.

use flipsort_kernel::Permutation;

/// The estimator seam injected per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// No estimate: `h = 0` everywhere (uninformed strategies).
    None,
    /// Out-of-order mass: for each position, the count of strictly larger
    /// values to its left plus strictly smaller values to its right. O(n²).
    InversionSum,
    /// Total displacement: `Σ |table[i] - (i + 1)|`. O(n).
    Displacement,
}

impl Heuristic {
    /// Evaluate the estimate for `state`.
    #[must_use]
    pub fn estimate(self, state: &Permutation) -> u64 {
        match self {
            Self::None => 0,
            Self::InversionSum => inversion_sum(state),
            Self::Displacement => displacement(state),
        }
    }
}

/// Sum over positions of (larger-to-the-left + smaller-to-the-right) counts.
#[must_use]
pub fn inversion_sum(state: &Permutation) -> u64 {
    let table = state.as_slice();
    let mut total: u64 = 0;
    for (i, &value) in table.iter().enumerate() {
        let left = table[..i].iter().filter(|&&other| other > value).count();
        let right = table[i + 1..].iter().filter(|&&other| other < value).count();
        total += (left + right) as u64;
    }
    total
}

/// Sum over positions of the absolute distance to each value's home slot.
///
/// Value `v` belongs at 1-indexed position `v`.
#[must_use]
pub fn displacement(state: &Permutation) -> u64 {
    state
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            #[allow(clippy::cast_possible_truncation)]
            let home = (i + 1) as u32;
            u64::from(value.abs_diff(home))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(table: &[u32]) -> Permutation {
        Permutation::from_table(table.to_vec()).unwrap()
    }

    #[test]
    fn both_heuristics_vanish_on_sorted_sequences() {
        for n in 1..=8 {
            let sorted = Permutation::sorted(n).unwrap();
            assert_eq!(inversion_sum(&sorted), 0, "inversion_sum at n={n}");
            assert_eq!(displacement(&sorted), 0, "displacement at n={n}");
        }
    }

    #[test]
    fn inversion_sum_counts_both_sides() {
        // [2, 1]: position 0 has one smaller value to its right, position 1
        // has one larger value to its left.
        assert_eq!(inversion_sum(&perm(&[2, 1])), 2);
        // [3, 1, 2]: 3 contributes 2 (both smaller values right of it);
        // 1 contributes 1 (the 3); 2 contributes 1 (the 3).
        assert_eq!(inversion_sum(&perm(&[3, 1, 2])), 4);
        // Full reversal of 1..4 puts every pair out of order twice.
        assert_eq!(inversion_sum(&perm(&[4, 3, 2, 1])), 12);
    }

    #[test]
    fn displacement_sums_distances_to_home() {
        // [3, 1, 2]: |3-1| + |1-2| + |2-3| = 4.
        assert_eq!(displacement(&perm(&[3, 1, 2])), 4);
        // [2, 1]: each value is one slot from home.
        assert_eq!(displacement(&perm(&[2, 1])), 2);
    }

    #[test]
    fn none_estimates_zero_on_anything() {
        assert_eq!(Heuristic::None.estimate(&perm(&[4, 3, 2, 1])), 0);
    }

    #[test]
    fn enum_dispatch_matches_free_functions() {
        let state = perm(&[2, 4, 1, 3]);
        assert_eq!(Heuristic::InversionSum.estimate(&state), inversion_sum(&state));
        assert_eq!(Heuristic::Displacement.estimate(&state), displacement(&state));
    }
}
