use crate::core::pair_sum::pair_sum_sorted_from;
use crate::domain::model::Triplet;
use crate::domain::ports::TripletFinder;

/// Finds every distinct triplet in `nums` that sums to zero in O(n²).
///
/// Works on a sorted copy, so the caller's slice is left untouched and the
/// triplets come back by value with their elements in ascending order.
pub fn find_zero_sum_triplets(nums: &[i64]) -> Vec<Triplet> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut triplets = Vec::new();

    for (i, &a) in sorted.iter().enumerate() {
        // everything from here on is positive
        if a > 0 {
            break;
        }
        if i > 0 && a == sorted[i - 1] {
            continue;
        }

        for pair in pair_sum_sorted_from(&sorted, i + 1, -i128::from(a)) {
            triplets.push(Triplet::new(a, pair.first, pair.second));
        }
    }

    tracing::debug!(
        "two-pointer scan over {} values found {} triplets",
        nums.len(),
        triplets.len()
    );

    triplets
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointerFinder;

impl TripletFinder for TwoPointerFinder {
    fn name(&self) -> &'static str {
        "two-pointer"
    }

    fn find(&self, nums: &[i64]) -> Vec<Triplet> {
        find_zero_sum_triplets(nums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_example_in_emission_order() {
        let triplets = find_zero_sum_triplets(&[0, -1, 2, -3, 1]);
        assert_eq!(
            triplets,
            vec![Triplet::new(-3, 1, 2), Triplet::new(-1, 0, 1)]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(find_zero_sum_triplets(&[]).is_empty());
        assert!(find_zero_sum_triplets(&[0]).is_empty());
        assert!(find_zero_sum_triplets(&[1, -1]).is_empty());
    }

    #[test]
    fn test_all_zeros_yield_single_triplet() {
        assert_eq!(find_zero_sum_triplets(&[0; 7]), vec![Triplet::new(0, 0, 0)]);
    }

    #[test]
    fn test_stops_at_first_positive() {
        assert!(find_zero_sum_triplets(&[1, 2, 3, 4]).is_empty());
        assert!(find_zero_sum_triplets(&[1, 0, 1]).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let nums = vec![3, -1, -2, 0];
        let _ = find_zero_sum_triplets(&nums);
        assert_eq!(nums, vec![3, -1, -2, 0]);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let nums = [i64::MIN, i64::MAX, 1, 0, i64::MIN + 1];
        let triplets = find_zero_sum_triplets(&nums);
        assert_eq!(
            triplets,
            vec![
                Triplet::new(i64::MIN, 1, i64::MAX),
                Triplet::new(i64::MIN + 1, 0, i64::MAX),
            ]
        );
        assert!(triplets.iter().all(|t| t.sum() == 0));
    }

    #[test]
    fn test_finder_trait() {
        let finder = TwoPointerFinder;
        assert_eq!(finder.name(), "two-pointer");
        assert_eq!(finder.find(&[0, 0, 0]), vec![Triplet::new(0, 0, 0)]);
    }
}
