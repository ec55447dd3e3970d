//! The six strategy identities and their policy wiring.

use std::fmt;

use crate::heuristic::Heuristic;

/// A selection policy over the frontier, paired with the heuristic used to
/// estimate children during expansion.
///
/// All six strategies share the same generate/dedup/goal-test loop in
/// [`crate::engine`]; only the wiring below differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Oldest-inserted node first (FIFO). Uninformed.
    Breadth,
    /// Most-recently-inserted node first (LIFO). Uninformed.
    Depth,
    /// Uniformly random node from the frontier. Uninformed; the only
    /// non-deterministic policy, driven by an explicitly threaded RNG.
    Random,
    /// Greedy: minimum `h`, children estimated with the inversion sum.
    Heuristic1,
    /// Cost-aware: minimum `g + h`, children estimated with the inversion sum.
    Heuristic2,
    /// Cost-aware: minimum `g + h`, children (and the root itself)
    /// estimated with the displacement heuristic.
    Heuristic3,
}

impl Strategy {
    /// Every strategy, in the comparison-table order.
    pub const ALL: [Self; 6] = [
        Self::Breadth,
        Self::Depth,
        Self::Random,
        Self::Heuristic1,
        Self::Heuristic2,
        Self::Heuristic3,
    ];

    /// Stable machine name, accepted by [`Strategy::parse`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Breadth => "breadth",
            Self::Depth => "depth",
            Self::Random => "random",
            Self::Heuristic1 => "heuristic1",
            Self::Heuristic2 => "heuristic2",
            Self::Heuristic3 => "heuristic3",
        }
    }

    /// Human label for report tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Breadth => "Breadth First",
            Self::Depth => "Depth First",
            Self::Random => "Random",
            Self::Heuristic1 => "Heuristic 1",
            Self::Heuristic2 => "Heuristic 2",
            Self::Heuristic3 => "Heuristic 3",
        }
    }

    /// The estimator attached to children generated under this strategy.
    #[must_use]
    pub fn heuristic(self) -> Heuristic {
        match self {
            Self::Breadth | Self::Depth | Self::Random => Heuristic::None,
            Self::Heuristic1 | Self::Heuristic2 => Heuristic::InversionSum,
            Self::Heuristic3 => Heuristic::Displacement,
        }
    }

    /// Whether the strategy consults cost estimates at all.
    #[must_use]
    pub fn is_informed(self) -> bool {
        self.heuristic() != Heuristic::None
    }

    /// Parse a machine name (as produced by [`Strategy::name`]).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::parse(strategy.name()), Some(strategy));
        }
        assert_eq!(Strategy::parse("astar"), None);
    }

    #[test]
    fn uninformed_strategies_carry_no_heuristic() {
        assert_eq!(Strategy::Breadth.heuristic(), Heuristic::None);
        assert_eq!(Strategy::Depth.heuristic(), Heuristic::None);
        assert_eq!(Strategy::Random.heuristic(), Heuristic::None);
        assert!(!Strategy::Random.is_informed());
    }

    #[test]
    fn informed_strategies_map_to_their_estimators() {
        assert_eq!(Strategy::Heuristic1.heuristic(), Heuristic::InversionSum);
        assert_eq!(Strategy::Heuristic2.heuristic(), Heuristic::InversionSum);
        assert_eq!(Strategy::Heuristic3.heuristic(), Heuristic::Displacement);
        assert!(Strategy::Heuristic3.is_informed());
    }
}
