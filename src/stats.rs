use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::mem;

use itertools::Itertools;
use num::PrimInt;

// How often each difference occurs, ordered by difference value.
// The counts always sum to the length of `diffs`.
pub fn distribution<T: Ord + Hash + Copy>(diffs: &[T]) -> BTreeMap<T, usize> {
    diffs.iter()
        .copied()
        .counts()
        .into_iter()
        .collect()
}

#[test]
fn test_distribution() {
    let dist = distribution(&[3, 3, 7, 7, 3]);
    assert_eq!(dist, BTreeMap::from([(3, 3), (7, 2)]));
    assert!(distribution::<u8>(&[]).is_empty());
}

// Smallest difference wins a tie, so the answer does not depend on hashing
pub fn most_common<T: Copy>(dist: &BTreeMap<T, usize>) -> Option<(T, usize)> {
    dist.iter()
        .min_by_key(|&(_, &count)| Reverse(count) )
        .map(|(&value, &count)| (value, count) )
}

#[test]
fn test_most_common() {
    assert_eq!(most_common(&distribution(&[3, 3, 7, 7, 3])), Some((3, 3)));
    assert_eq!(most_common(&distribution(&[9, 1, 9, 1])), Some((1, 2)));
    assert_eq!(most_common::<i32>(&BTreeMap::new()), None);
}

// 2^k - 1 for some k >= 1: the pattern a carry ripple through k bits leaves
// behind when x and x + 1 are XORed together
pub fn is_all_ones_mask<T: PrimInt>(v: T) -> bool {
    let width = mem::size_of::<T>() * 8;
    !v.is_zero() && (v.count_ones() + v.leading_zeros()) as usize == width
}

#[test]
fn test_is_all_ones_mask() {
    for v in [1u32, 3, 7, 15, 255, u32::MAX] {
        assert!(is_all_ones_mask(v), "{v}");
    }
    for v in [0u32, 2, 5, 6, 254, 1 << 31] {
        assert!(!is_all_ones_mask(v), "{v}");
    }
    assert!(is_all_ones_mask(-1i16));
    assert!(!is_all_ones_mask(-2i16));
}
