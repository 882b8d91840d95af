//! Bit-twiddling helpers shared by the tree and the revocation-set generators.

/// Computes `floor(log2(n))` for `n >= 1`.
pub fn floor_log2(n: u64) -> u32 {
    debug_assert!(n != 0);
    63 - n.leading_zeros()
}

/// Returns the identifier of the leftmost leaf in a tree with the given
/// id length: a single sentinel bit followed by `id_length` zero bits.
pub fn leaf_base(id_length: usize) -> u64 {
    1u64 << id_length
}

/// Computes the ancestor of `leaf_id` at the given depth by keeping its top
/// `depth + 1` bits (the sentinel plus `depth` path bits).
pub fn ancestor_at_depth(leaf_id: u64, id_length: usize, depth: usize) -> u64 {
    leaf_id >> (id_length - depth)
}

/// Returns a mask covering the `width` least significant bits. `width` must
/// be smaller than 64.
pub fn low_bits_mask(width: usize) -> u64 {
    (1u64 << width) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_log2() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(4), 2);
        assert_eq!(floor_log2(7), 2);
        assert_eq!(floor_log2(8), 3);
        assert_eq!(floor_log2(u64::MAX), 63);
    }

    #[test]
    fn test_ancestors_of_leaf() {
        // In a 4-bit tree, the leaf 0b10110 descends from 0b1 (the root),
        // 0b10, 0b101 and 0b1011.
        let leaf = 0b10110;
        assert_eq!(ancestor_at_depth(leaf, 4, 0), 0b1);
        assert_eq!(ancestor_at_depth(leaf, 4, 1), 0b10);
        assert_eq!(ancestor_at_depth(leaf, 4, 2), 0b101);
        assert_eq!(ancestor_at_depth(leaf, 4, 3), 0b1011);
        assert_eq!(ancestor_at_depth(leaf, 4, 4), leaf);
    }

    #[test]
    fn test_masks() {
        assert_eq!(low_bits_mask(0), 0);
        assert_eq!(low_bits_mask(1), 0b1);
        assert_eq!(low_bits_mask(20), 0xF_FFFF);
        assert_eq!(low_bits_mask(32), 0xFFFF_FFFF);
    }
}
