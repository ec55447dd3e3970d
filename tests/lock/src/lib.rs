//! Shared helpers for the workspace lock tests.
//!
//! The lock tests pin cross-crate behavior that individual unit tests
//! cannot see: seed determinism across whole runs, the dedup invariant
//! over final open/closed sets, and termination for every strategy.

#![forbid(unsafe_code)]

use flipsort_kernel::Permutation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A reproducible shuffled root for `(size, seed)`.
///
/// # Panics
///
/// Panics if `size == 0`; lock tests only use positive sizes.
#[must_use]
pub fn seeded_root(size: usize, seed: u64) -> Permutation {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Permutation::shuffled(size, &mut rng).expect("lock tests use positive sizes")
}
