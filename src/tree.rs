use crate::error::SimulationError;
use crate::maybestd::vec::Vec;
use crate::utils::ancestor_at_depth;

/// The largest supported identifier bit-length. Node IDs are stored in a u64
/// together with their sentinel bit, so leaves need `id_length + 1` bits.
pub const MAX_ID_LENGTH: usize = 63;

/// An activation tree over identifiers of a fixed bit-length. The tree
/// records which nodes sit on the path from a revoked leaf to the root, and
/// counts how many nodes per depth remain available (neither revoked nor
/// picked by a selection strategy).
///
/// Node IDs start at 1: the root is `1`, its children are `10` and `11` in
/// binary, and the leaves of a tree with `id_length = n` run from
/// `1` followed by n zero bits through `1` followed by n one bits. The
/// tree's height is therefore `id_length + 1`, with the root at depth 0 and
/// the leaves at depth `id_length`.
///
/// ```ascii
///                         0001                          => depth 0
///                ________/    \________
///               /                      \
///           0010                       0011             => depth 1
///        __/    \__                 __/    \__
///       /          \               /          \
///    0100          0101         0110          0111      => depth 2
///    /  \          /  \         /  \          /  \
/// 1000  1001    1010  1011   1100  1101    1110  1111   => depth 3
/// ```
#[derive(Debug, Clone)]
pub struct ActivationTree {
    /// IDs of revoked nodes at each depth, in ascending order.
    revoked: Vec<Vec<u64>>,
    /// The number of nodes at each depth which are not revoked and have not
    /// yet been picked.
    pickable: Vec<u64>,
    id_length: usize,
}

impl ActivationTree {
    /// Constructs a tree with `2^id_length` leaves and no revocations. In
    /// the initial state only the root is pickable.
    pub fn new(id_length: usize) -> Result<Self, SimulationError> {
        if id_length < 1 || id_length > MAX_ID_LENGTH {
            return Err(SimulationError::UnsupportedIdLength(id_length));
        }
        let height = id_length + 1;
        let mut pickable = Vec::new();
        pickable.resize(height, 0);
        pickable[0] = 1;
        let mut revoked = Vec::with_capacity(height);
        for _ in 0..height {
            revoked.push(Vec::new());
        }
        Ok(Self {
            revoked,
            pickable,
            id_length,
        })
    }

    /// The bit-length of leaf identifiers (without the sentinel bit).
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    /// The number of depths in the tree, `id_length + 1`.
    pub fn height(&self) -> usize {
        self.id_length + 1
    }

    /// Revokes a batch of leaves, marking every node on their paths to the
    /// root as revoked. The batch does not need to be ordered; it is sorted
    /// before being applied, because the single-leaf revocation only accepts
    /// ascending identifiers.
    ///
    /// Revocation must complete before any node is picked: the per-depth
    /// availability counters are not designed for interleaving the two
    /// operations.
    pub fn revoke(&mut self, mut leaf_ids: Vec<u64>) {
        leaf_ids.sort_unstable();
        for id in leaf_ids {
            self.revoke_leaf(id);
        }
    }

    /// Revokes a single leaf. Callers must pass leaf IDs in strictly
    /// ascending order across calls: each depth's revocation list is
    /// append-only and deduplicated by comparing against its last entry
    /// only, which is what keeps a batch revocation linear in
    /// `id_length * batch size`.
    fn revoke_leaf(&mut self, leaf_id: u64) {
        for depth in 0..self.height() {
            // The ancestor is the prefix of the leaf ID at this depth.
            let ancestor = ancestor_at_depth(leaf_id, self.id_length, depth);
            let at_depth = &mut self.revoked[depth];
            if at_depth.last() == Some(&ancestor) {
                // Already revoked by an earlier leaf sharing this prefix.
                continue;
            }
            at_depth.push(ancestor);

            // One fewer node available here; the revoked node's two children
            // become available (the next iteration removes one of them again
            // if it is itself on the revocation path).
            self.pickable[depth] -= 1;
            if depth + 1 < self.pickable.len() {
                self.pickable[depth + 1] += 2;
            }
        }
    }

    /// Returns the number of nodes available (not revoked and not picked) at
    /// the given depth.
    pub fn count_available_nodes(&self, depth: usize) -> u64 {
        self.pickable[depth]
    }

    /// Marks one node at the given depth as picked, so that neither it nor
    /// its descendants are picked again, and returns the number of nodes
    /// still available at that depth. Callers must first check that
    /// [`count_available_nodes`](Self::count_available_nodes) is non-zero.
    pub fn mark_picked_node(&mut self, depth: usize) -> u64 {
        debug_assert!(self.pickable[depth] > 0);
        self.pickable[depth] -= 1;
        self.pickable[depth]
    }

    /// Counts the leaves below any single node at the given depth,
    /// `2^(id_length - depth)`. This is the crowd size gained by picking a
    /// node at that depth, and depends only on the tree's shape.
    pub fn count_descendant_leaves(&self, depth: usize) -> u64 {
        1u64 << (self.id_length - depth)
    }

    /// Totals the pickable nodes across all depths. This is the number of
    /// nodes a broadcast would carry if every remaining available node were
    /// picked.
    pub fn count_all_pickable_nodes(&self) -> u64 {
        self.pickable.iter().sum()
    }

    /// Returns the revoked node IDs recorded at the given depth, in
    /// ascending order.
    pub fn revoked_nodes(&self, depth: usize) -> &[u64] {
        &self.revoked[depth]
    }
}
