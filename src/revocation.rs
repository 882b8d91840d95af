use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SimulationError;
use crate::maybestd::{collections::BTreeSet, vec::Vec};
use crate::tree::MAX_ID_LENGTH;
use crate::utils::{floor_log2, leaf_base, low_bits_mask};

/// Produces revocation leaf-sets for an activation tree with a fixed
/// identifier bit-length. Three distributions are supported: a best case
/// packing revocations under as few subtrees as possible, a worst case
/// spreading them over as many shallow subtrees as possible, and a seeded
/// pseudorandom sampling for average-case measurements.
#[derive(Debug, Clone, Copy)]
pub struct RevocationSetGenerator {
    id_length: usize,
}

impl RevocationSetGenerator {
    /// Creates a generator for trees with `2^id_length` leaves.
    pub fn new(id_length: usize) -> Result<Self, SimulationError> {
        if id_length < 1 || id_length > MAX_ID_LENGTH {
            return Err(SimulationError::UnsupportedIdLength(id_length));
        }
        Ok(Self { id_length })
    }

    /// The bit-length of the leaf identifiers this generator produces.
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    /// The number of leaves in the tree, `2^id_length`.
    pub fn capacity(&self) -> u64 {
        leaf_base(self.id_length)
    }

    fn ensure_supported(&self, count: u64) -> Result<(), SimulationError> {
        if count > self.capacity() {
            return Err(SimulationError::TooManyRevocations {
                requested: count,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Generates the `count` numerically smallest leaves, starting at the
    /// leftmost leaf. Consecutive leaves share as many ancestors as
    /// possible, so the revocation paths touch the fewest nodes at every
    /// depth: the best case for post-revocation privacy.
    ///
    /// Example, 4-bit IDs: for 2 revocations the leaves are 10000 and
    /// 10001, putting only node 10 at depth 1 on a revocation path; even for
    /// 7 revocations (10000..10110) the depth-1 node 11 stays untouched.
    pub fn best_case(&self, count: u64) -> Result<Vec<u64>, SimulationError> {
        self.ensure_supported(count)?;

        let base = leaf_base(self.id_length);
        Ok((0..count).map(|i| base | i).collect())
    }

    /// Generates `count` leaves spread to revoke the maximum number of
    /// distinct ancestors at the shallowest possible depths: the worst case
    /// for post-revocation privacy.
    ///
    /// With `p = 2^floor(log2(count))`, the first `p` leaves are the
    /// leftmost leaf of each depth-`floor(log2(count))` subtree, fully
    /// depleting that depth. Each remaining leaf additionally revokes one
    /// node at the next depth down, by revoking the left leaf of a sibling
    /// subtree left untouched by the first phase. The resulting IDs are
    /// `1 || i || 0...` for `i in 0..p`, then `1 || (2i+1) || 0...` one bit
    /// wider, for `i in 0..count-p`.
    ///
    /// Example, 4-bit IDs: 2 revocations give {10000, 11000}, revoking both
    /// depth-1 nodes; 4 revocations give {10000, 10100, 11000, 11100},
    /// revoking all four depth-2 nodes; 3 revocations give {10000, 11000}
    /// plus 10100, which also revokes depth-2 node 101.
    pub fn worst_case(&self, count: u64) -> Result<Vec<u64>, SimulationError> {
        self.ensure_supported(count)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let base = leaf_base(self.id_length);
        let depleted_depth = floor_log2(count) as usize;
        let full_subtrees = 1u64 << depleted_depth;
        let shift = self.id_length - depleted_depth;

        let mut list = Vec::with_capacity(count as usize);
        for i in 0..full_subtrees {
            list.push(base | (i << shift));
        }
        for i in 0..count - full_subtrees {
            list.push(base | ((2 * i + 1) << (shift - 1)));
        }
        Ok(list)
    }

    /// Generates `count` distinct pseudorandom leaves from the given seed.
    /// The same `(id_length, count, seed)` inputs always produce the same
    /// set.
    ///
    /// Each candidate leaf is assembled from two independent draws covering
    /// the low `id_length / 2` and the remaining high payload bits,
    /// concatenated under the sentinel bit. Duplicates are resolved by
    /// resampling, which is cheap while `count` is small relative to the
    /// number of leaves; there is no bound on resampling attempts.
    pub fn random(&self, count: u64, seed: u64) -> Result<Vec<u64>, SimulationError> {
        self.ensure_supported(count)?;

        let base = leaf_base(self.id_length);
        let low_bits = self.id_length / 2;
        let high_bits = self.id_length - low_bits;

        let mut prng = ChaCha8Rng::seed_from_u64(seed);
        let mut set = BTreeSet::new();
        while (set.len() as u64) < count {
            let high = u64::from(prng.next_u32()) & low_bits_mask(high_bits);
            let low = u64::from(prng.next_u32()) & low_bits_mask(low_bits);
            set.insert(base | (high << low_bits) | low);
        }

        Ok(set.into_iter().collect())
    }
}
