use crate::domain::model::Triplet;
use crate::domain::ports::TripletFinder;
use std::collections::BTreeSet;

/// Reference finder: tries every index triple `i < j < k`. O(n³).
///
/// Matches are canonicalized before insertion, so the set collapses equal
/// multisets and the output is in ascending lexicographic order.
pub fn find_zero_sum_triplets_brute_force(nums: &[i64]) -> Vec<Triplet> {
    let n = nums.len();
    let mut triplets = BTreeSet::new();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let candidate = Triplet::new(nums[i], nums[j], nums[k]);
                if candidate.sum() == 0 {
                    triplets.insert(candidate.canonical());
                }
            }
        }
    }

    tracing::trace!(
        "brute force over {} values found {} triplets",
        n,
        triplets.len()
    );

    triplets.into_iter().collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceFinder;

impl TripletFinder for BruteForceFinder {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn find(&self, nums: &[i64]) -> Vec<Triplet> {
        find_zero_sum_triplets_brute_force(nums)
    }
}
