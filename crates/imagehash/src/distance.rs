//! Dissimilarity between two fingerprints.
//!
//! Comparison is done a whole byte at a time: two bytes that differ in one
//! bit count the same as two bytes that differ in all eight. This is not a
//! bit-level Hamming distance, and stored thresholds depend on it.

/// Number of mismatching byte positions, plus the length difference.
///
/// The first `min(a.len(), b.len())` positions are compared pairwise; every
/// byte of the longer input past that point counts as a mismatch.
pub fn distance(a: &[u8], b: &[u8]) -> usize {
    let (shorter, longer) = if a.len() <= b.len() {
        (a.len(), b.len())
    } else {
        (b.len(), a.len())
    };

    let mismatched = a.iter().zip(b).filter(|(x, y)| x != y).count();
    mismatched + (longer - shorter)
}

/// Largest value [`distance`] can return for inputs of these lengths.
///
/// This is a byte count, matching the granularity of [`distance`].
pub fn distance_max_range(a: &[u8], b: &[u8]) -> usize {
    a.len().max(b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_zero() {
        let x = [0xf3, 0x00, 0xa0, 0xe0, 0x7f, 0xe3, 0x8e, 0x3e];
        assert_eq!(distance(&x, &x), 0);
        assert_eq!(distance(&[], &[]), 0);
    }

    #[test]
    fn test_byte_granularity() {
        // One flipped bit and eight flipped bits score the same.
        assert_eq!(distance(&[0b0000_0001], &[0x00]), 1);
        assert_eq!(distance(&[0xFF], &[0x00]), 1);
        assert_eq!(distance(&[0xFF, 0x0F, 0x00], &[0xFE, 0x0F, 0x80]), 2);
    }

    #[test]
    fn test_unmatched_tail() {
        let mut a = vec![0u8; 8];
        let b = vec![0u8; 16];
        a[0] = 0x80;
        assert_eq!(distance(&a, &b), 1 + (16 - 8));
        assert_eq!(distance(&b, &a), 9);
    }

    #[test]
    fn test_symmetric() {
        let a = [0x12, 0x34, 0x56];
        let b = [0x12, 0x00];
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_max_range() {
        assert_eq!(distance_max_range(&[0; 8], &[0; 16]), 16);
        assert_eq!(distance_max_range(&[0; 32], &[0; 16]), 32);
        assert_eq!(distance_max_range(&[], &[]), 0);
    }

    #[test]
    fn test_max_range_reached_when_all_mismatch() {
        let a = [0xFF; 8];
        let b = [0x00; 8];
        assert_eq!(distance(&a, &b), distance_max_range(&a, &b));

        let c = [0x00; 16];
        let d = [0x01; 32];
        assert_eq!(distance(&c, &d), distance_max_range(&c, &d));
    }
}
