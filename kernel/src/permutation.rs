//! The permutation state and its single legal action.
//!
//! A [`Permutation`] holds each integer `1..=n` exactly once. The only way
//! to derive a new state is [`Permutation::flip`], which reverses the tail
//! of the table from a chosen split index. States are immutable once built;
//! search bookkeeping (costs, parent links) lives entirely outside this
//! crate so identity is a property of the table alone.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;
use crate::fingerprint::{canonical_hash, ContentHash, DOMAIN_PERMUTATION};

/// An immutable permutation of `1..=n`.
///
/// Invariant: `table` contains each value in `1..=n` exactly once, for
/// `n >= 1`. Enforced by every constructor; no method can break it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    table: Vec<u32>,
}

impl Permutation {
    /// The goal arrangement `[1, 2, .., n]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] if `n == 0`.
    pub fn sorted(n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroSize);
        }
        #[allow(clippy::cast_possible_truncation)]
        let table = (1..=n as u32).collect();
        Ok(Self { table })
    }

    /// A fresh root: `1..=n` shuffled with the caller-supplied RNG.
    ///
    /// Randomness is threaded explicitly so roots are reproducible under a
    /// seeded generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] if `n == 0`.
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, ConfigError> {
        let mut perm = Self::sorted(n)?;
        perm.table.shuffle(rng);
        Ok(perm)
    }

    /// Build from an explicit table, validating the permutation invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] for an empty table and
    /// [`ConfigError::NotAPermutation`] when any value is out of range or
    /// duplicated.
    pub fn from_table(table: Vec<u32>) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::ZeroSize);
        }
        let len = table.len();
        let mut seen = vec![false; len];
        for &value in &table {
            let Some(slot) = usize::try_from(value)
                .ok()
                .and_then(|v| v.checked_sub(1))
                .filter(|&index| index < len)
            else {
                return Err(ConfigError::NotAPermutation {
                    len,
                    detail: format!("value {value} out of range"),
                });
            };
            if seen[slot] {
                return Err(ConfigError::NotAPermutation {
                    len,
                    detail: format!("duplicate value {value}"),
                });
            }
            seen[slot] = true;
        }
        Ok(Self { table })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false` — the zero-size case is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The underlying table.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.table
    }

    /// Goal test: true iff every adjacent pair is non-decreasing.
    ///
    /// O(n), short-circuits on the first inversion. No side effects.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.table.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Number of legal flips from this state: `n - 1`.
    ///
    /// Split index `n - 1` would reverse a single trailing element (a
    /// no-op) and is not counted.
    #[must_use]
    pub fn flip_count(&self) -> usize {
        self.table.len() - 1
    }

    /// The sole action: keep `table[..split]`, reverse `table[split..]`.
    ///
    /// # Panics
    ///
    /// Panics if `split >= flip_count()`; callers enumerate split indices
    /// from [`Permutation::flip_count`].
    #[must_use]
    pub fn flip(&self, split: usize) -> Self {
        assert!(
            split < self.flip_count(),
            "flip split {split} out of range for length {}",
            self.table.len()
        );
        let mut table = self.table.clone();
        table[split..].reverse();
        Self { table }
    }

    /// Canonical LE byte encoding of the table, the fingerprint input.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.table.len() * 4);
        for &value in &self.table {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Content fingerprint over [`Permutation::identity_bytes`].
    ///
    /// Two permutations share a fingerprint iff their tables are identical;
    /// this is the dedup identity key for the search layer.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_PERMUTATION, &self.identity_bytes())
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.table.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
