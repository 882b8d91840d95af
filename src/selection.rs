//! Node-picking strategies over a revoked [`ActivationTree`].
//!
//! Both strategies walk depths shallow-first, because a node at depth `d`
//! covers `2^(id_length - d)` leaves: a pick near the root buys
//! exponentially more anonymity than one near the leaves. They differ only
//! in their stopping rule. Fixed-Size Subset (FSS) picks exactly
//! `id_length` nodes and reports the crowd size reached; Variable-Size
//! Subset (VSS) picks until a target crowd size is reached and reports how
//! many nodes that took.

use crate::tree::ActivationTree;

/// Computes the crowd size obtained by picking `id_length` nodes from the
/// tree, the Fixed-Size Subset strategy: the result is the number of leaves
/// derivable from the picked nodes, i.e. the population the requester blends
/// into.
///
/// A first pass walks depths 1 through the leaf depth once, picking one node
/// per depth with availability. If depths without available nodes left part
/// of the budget unspent, a second pass rescans from depth 1, picking at the
/// shallowest depth that still has nodes. The root is never picked: this
/// strategy is only meaningful for trees with at least one revocation, and
/// revocation always consumes the root.
pub fn fss_crowd_size(tree: &mut ActivationTree) -> u64 {
    // One code request per identifier bit.
    let mut budget = tree.id_length();
    let mut crowd_size = 0u64;

    for depth in 1..tree.height() {
        if tree.count_available_nodes(depth) > 0 {
            tree.mark_picked_node(depth);
            crowd_size += tree.count_descendant_leaves(depth);
            budget -= 1;
        }
    }

    let mut depth = 1;
    while budget > 0 && depth < tree.height() {
        if tree.count_available_nodes(depth) > 0 {
            tree.mark_picked_node(depth);
            crowd_size += tree.count_descendant_leaves(depth);
            budget -= 1;
        } else {
            depth += 1;
        }
    }

    crowd_size
}

/// Counts how many nodes must be picked from the tree before the crowd size
/// reaches `target_crowd`, the Variable-Size Subset strategy.
///
/// Uses the same two-phase shallow-first walk as [`fss_crowd_size`], but
/// every pick is gated on the target not yet being reached, so a target of
/// zero picks nothing. If the target exceeds what the tree can still cover,
/// the walk runs out of depths and the count of everything picked is
/// returned as a best effort.
pub fn vss_nodes_needed(tree: &mut ActivationTree, target_crowd: u64) -> u64 {
    let mut picked = 0u64;
    let mut crowd_size = 0u64;

    for depth in 1..tree.height() {
        if crowd_size >= target_crowd {
            return picked;
        }
        if tree.count_available_nodes(depth) > 0 {
            tree.mark_picked_node(depth);
            crowd_size += tree.count_descendant_leaves(depth);
            picked += 1;
        }
    }

    let mut depth = 1;
    while crowd_size < target_crowd && depth < tree.height() {
        if tree.count_available_nodes(depth) > 0 {
            tree.mark_picked_node(depth);
            crowd_size += tree.count_descendant_leaves(depth);
            picked += 1;
        } else {
            depth += 1;
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revoked_tree(id_length: usize, leaves: Vec<u64>) -> ActivationTree {
        let mut tree = ActivationTree::new(id_length).unwrap();
        tree.revoke(leaves);
        tree
    }

    #[test]
    fn fss_single_revocation_covers_all_but_one_leaf() {
        // One revoked leaf leaves one sibling available per depth; picking
        // all four covers 8 + 4 + 2 + 1 = 15 of the 16 leaves.
        let mut tree = revoked_tree(4, vec![0b10000]);
        assert_eq!(fss_crowd_size(&mut tree), 15);
        assert_eq!(tree.count_all_pickable_nodes(), 0);
    }

    #[test]
    fn fss_second_pass_spends_the_leftover_budget() {
        // Best-case revocation of 2 leaves: pickable per depth is
        // [0, 1, 1, 1, 0]. The first pass picks three nodes (8 + 4 + 2) and
        // the second pass finds nothing left, so one budget unit is wasted.
        let mut tree = revoked_tree(4, vec![0b10000, 0b10001]);
        assert_eq!(fss_crowd_size(&mut tree), 14);

        // Worst-case revocation of 2 leaves: pickable per depth is
        // [0, 0, 2, 2, 2]. The first pass picks 4 + 2 + 1; the second pass
        // returns to depth 2 for the remaining budget unit and picks the
        // other depth-2 node.
        let mut tree = revoked_tree(4, vec![0b10000, 0b11000]);
        assert_eq!(fss_crowd_size(&mut tree), 11);
    }

    #[test]
    fn fss_worst_never_beats_best() {
        for revocations in 1..=16u64 {
            let gen = crate::RevocationSetGenerator::new(4).unwrap();
            let mut best = revoked_tree(4, gen.best_case(revocations).unwrap());
            let mut worst = revoked_tree(4, gen.worst_case(revocations).unwrap());
            assert!(fss_crowd_size(&mut worst) <= fss_crowd_size(&mut best));
        }
    }

    #[test]
    fn vss_zero_target_picks_nothing() {
        let mut tree = revoked_tree(4, vec![0b10000]);
        assert_eq!(vss_nodes_needed(&mut tree, 0), 0);
        assert_eq!(tree.count_all_pickable_nodes(), 4);
    }

    #[test]
    fn vss_stops_at_the_target() {
        // One revocation: depths 1..=4 each hold one node covering 8, 4, 2
        // and 1 leaves.
        let mut tree = revoked_tree(4, vec![0b10000]);
        assert_eq!(vss_nodes_needed(&mut tree, 8), 1);

        let mut tree = revoked_tree(4, vec![0b10000]);
        assert_eq!(vss_nodes_needed(&mut tree, 9), 2);

        let mut tree = revoked_tree(4, vec![0b10000]);
        assert_eq!(vss_nodes_needed(&mut tree, 15), 4);
    }

    #[test]
    fn vss_unreachable_target_picks_everything_and_terminates() {
        let mut tree = revoked_tree(4, vec![0b10000]);
        let total = tree.count_all_pickable_nodes();
        assert_eq!(vss_nodes_needed(&mut tree, u64::MAX), total);
        assert_eq!(tree.count_all_pickable_nodes(), 0);
    }

    #[test]
    fn vss_second_pass_drains_shallow_depths_first() {
        // Worst-case revocation of 2 leaves: pickable per depth is
        // [0, 0, 2, 2, 2]. Reaching a crowd of 13 takes the first-pass picks
        // 4 + 2 + 1, then the second depth-2 node (+4) and a depth-3 node
        // (+2).
        let mut tree = revoked_tree(4, vec![0b10000, 0b11000]);
        assert_eq!(vss_nodes_needed(&mut tree, 13), 5);
    }
}
