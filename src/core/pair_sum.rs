//! Pair-sum scans: the two-pointer walk over a sorted slice and the
//! single-pass hash lookup over an unsorted one.

use crate::domain::model::Pair;
use std::cmp::Ordering;
use std::collections::HashMap;

fn pair_total(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Walks `nums` (ascending) from both ends and returns the 0-based indices of
/// the first pair summing to `target`.
fn two_pointer_indices(nums: &[i64], target: i128) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left < right {
        match pair_total(nums[left], nums[right]).cmp(&target) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    None
}

/// 1-indexed positions of two values in the sorted slice `nums` that add up
/// to `target`, or `None`.
pub fn pair_sum_sorted(nums: &[i64], target: i64) -> Option<Pair<usize>> {
    two_pointer_indices(nums, i128::from(target)).map(|(l, r)| Pair::new(l + 1, r + 1))
}

/// Same scan as [`pair_sum_sorted`], returning the values instead of positions.
pub fn pair_sum_sorted_values(nums: &[i64], target: i64) -> Option<Pair<i64>> {
    two_pointer_indices(nums, i128::from(target)).map(|(l, r)| Pair::new(nums[l], nums[r]))
}

/// 1-indexed positions `(earlier, later)` of the first pair in an unsorted
/// slice whose values add up to `target`.
pub fn pair_sum_unsorted(nums: &[i64], target: i64) -> Option<Pair<usize>> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        let complement = i128::from(target) - i128::from(num);
        if let Some(&j) = i64::try_from(complement).ok().and_then(|c| seen.get(&c)) {
            return Some(Pair::new(j + 1, i + 1));
        }
        seen.insert(num, i);
    }

    None
}

/// Every distinct value pair in `nums[start..]` (ascending) summing to
/// `target`.
///
/// After a match the left pointer skips past repeats of the value it just
/// used, so no `(b, c)` pair is reported twice.
pub fn pair_sum_sorted_from(nums: &[i64], start: usize, target: i128) -> Vec<Pair<i64>> {
    let mut pairs = Vec::new();
    if nums.len() < 2 || start >= nums.len() - 1 {
        return pairs;
    }
    let (mut left, mut right) = (start, nums.len() - 1);

    while left < right {
        match pair_total(nums[left], nums[right]).cmp(&target) {
            Ordering::Equal => {
                pairs.push(Pair::new(nums[left], nums[right]));
                left += 1;
                while left < right && nums[left] == nums[left - 1] {
                    left += 1;
                }
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_sum_sorted() {
        assert_eq!(pair_sum_sorted(&[2, 7, 11, 15], 9), Some(Pair::new(1, 2)));
        assert_eq!(pair_sum_sorted(&[2, 3, 4], 6), Some(Pair::new(1, 3)));
        assert_eq!(pair_sum_sorted(&[-1, 0], -1), Some(Pair::new(1, 2)));
        assert_eq!(pair_sum_sorted(&[1, 2, 3, 4, 5], 8), Some(Pair::new(3, 5)));
        assert_eq!(pair_sum_sorted(&[1, 2], 5), None);
        assert_eq!(pair_sum_sorted(&[1, 1, 1, 1], 2), Some(Pair::new(1, 4)));
        assert_eq!(pair_sum_sorted(&[-3, -1, 0, 2], -1), Some(Pair::new(1, 4)));
    }

    #[test]
    fn test_pair_sum_sorted_degenerate() {
        assert_eq!(pair_sum_sorted(&[], 0), None);
        assert_eq!(pair_sum_sorted(&[0], 0), None);
    }

    #[test]
    fn test_pair_sum_sorted_values() {
        assert_eq!(pair_sum_sorted_values(&[2, 7, 11, 15], 9), Some(Pair::new(2, 7)));
        assert_eq!(pair_sum_sorted_values(&[-3, -1, 0, 2], -1), Some(Pair::new(-3, 2)));
        assert_eq!(pair_sum_sorted_values(&[1, 2], 5), None);
    }

    #[test]
    fn test_pair_sum_unsorted() {
        assert_eq!(pair_sum_unsorted(&[11, 2, 15, 7], 9), Some(Pair::new(2, 4)));
        assert_eq!(pair_sum_unsorted(&[3, 3], 6), Some(Pair::new(1, 2)));
        assert_eq!(pair_sum_unsorted(&[1, 2, 3], 100), None);
    }

    #[test]
    fn test_pair_sum_unsorted_extreme_target() {
        // complement falls outside i64 and must simply not match
        assert_eq!(pair_sum_unsorted(&[-5, 1], i64::MAX), None);
        assert_eq!(pair_sum_unsorted(&[i64::MAX, 0], i64::MAX), Some(Pair::new(1, 2)));
    }

    #[test]
    fn test_pair_sum_sorted_from_skips_repeated_left_values() {
        let nums = [-1, -1, 0, 0, 1, 1];
        let pairs = pair_sum_sorted_from(&nums, 0, 0);
        assert_eq!(pairs, vec![Pair::new(-1, 1), Pair::new(0, 0)]);
    }

    #[test]
    fn test_pair_sum_sorted_from_respects_start() {
        let nums = [-4, -1, -1, 0, 1, 2];
        assert_eq!(
            pair_sum_sorted_from(&nums, 2, 1),
            vec![Pair::new(-1, 2), Pair::new(0, 1)]
        );
        assert!(pair_sum_sorted_from(&nums, 5, 2).is_empty());
        assert!(pair_sum_sorted_from(&nums, 9, 0).is_empty());
    }
}
