use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triplet_sum::core::normalize::{canonicalize_set, normalize};
use triplet_sum::{find_zero_sum_triplets, find_zero_sum_triplets_brute_force};

fn assert_agrees(nums: &[i64]) {
    let optimized = find_zero_sum_triplets(nums);
    let oracle = find_zero_sum_triplets_brute_force(nums);

    assert_eq!(
        canonicalize_set(&optimized),
        canonicalize_set(&oracle),
        "input: {:?}",
        nums
    );
    // the optimized scan must not rely on dedup to match
    assert_eq!(normalize(&optimized), normalize(&oracle), "input: {:?}", nums);
}

/// Every sequence of length 0..=5 over the values -2..=2.
#[test]
fn test_exhaustive_small_domain() {
    let values = [-2, -1, 0, 1, 2];

    for len in 0..=5u32 {
        for code in 0..values.len().pow(len) {
            let mut rest = code;
            let nums: Vec<i64> = (0..len)
                .map(|_| {
                    let v = values[rest % values.len()];
                    rest /= values.len();
                    v
                })
                .collect();
            assert_agrees(&nums);
        }
    }
}

#[test]
fn test_random_inputs_up_to_eight_values() {
    let mut rng = StdRng::seed_from_u64(0x7472_6970);

    for _ in 0..2_000 {
        let len = rng.gen_range(0..=8);
        let nums: Vec<i64> = (0..len).map(|_| rng.gen_range(-6..=6)).collect();
        assert_agrees(&nums);
    }
}

#[test]
fn test_random_wide_values() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(3..=12);
        let nums: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..=50)).collect();
        assert_agrees(&nums);
    }
}
